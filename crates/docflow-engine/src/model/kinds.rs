use serde::{Deserialize, Serialize};

/// The closed set of element kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementKind {
    #[default]
    Text,
    Image,
    Table,
    Hyperlink,
    Superscript,
    Subscript,
    Separator,
    PageBreak,
    Control,
    Checkbox,
    Radio,
    Latex,
    Mathjax,
    Tab,
    Date,
    Block,
    Title,
    List,
    Area,
    Html,
}

impl ElementKind {
    pub fn is_text(&self) -> bool {
        matches!(self, ElementKind::Text)
    }

    /// Kinds whose `value` is displayable text, one character per flat record.
    pub fn is_text_like(&self) -> bool {
        matches!(
            self,
            ElementKind::Text
                | ElementKind::Hyperlink
                | ElementKind::Subscript
                | ElementKind::Superscript
                | ElementKind::Control
                | ElementKind::Date
        )
    }

    /// Kinds that fold back into one record when neighbours share all attributes.
    pub fn is_mergeable(&self) -> bool {
        matches!(
            self,
            ElementKind::Text | ElementKind::Subscript | ElementKind::Superscript
        )
    }

    pub fn is_block(&self) -> bool {
        matches!(
            self,
            ElementKind::Block | ElementKind::PageBreak | ElementKind::Separator | ElementKind::Table
        )
    }

    pub fn is_formula(&self) -> bool {
        matches!(self, ElementKind::Latex | ElementKind::Mathjax)
    }
}

/// Paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowFlex {
    Left,
    Center,
    Right,
    /// Justified, last line left aligned.
    Alignment,
    /// Justified including the last line.
    Justify,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    Ol,
    Ul,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    Disc,
    Circle,
    Square,
    Decimal,
    Checkbox,
}

impl ListStyle {
    /// Glyph used when a bulleted list is rendered as plain text.
    pub fn bullet(&self) -> Option<&'static str> {
        match self {
            ListStyle::Disc => Some("•"),
            ListStyle::Circle => Some("◦"),
            ListStyle::Square => Some("▫"),
            ListStyle::Checkbox => Some("☑"),
            ListStyle::Decimal => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleLevel {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
}

impl TitleLevel {
    /// 1-based heading number.
    pub fn number(&self) -> u8 {
        match self {
            TitleLevel::First => 1,
            TitleLevel::Second => 2,
            TitleLevel::Third => 3,
            TitleLevel::Fourth => 4,
            TitleLevel::Fifth => 5,
            TitleLevel::Sixth => 6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageDisplay {
    #[serde(rename = "block")]
    Block,
    #[serde(rename = "inline-block")]
    Inline,
    #[serde(rename = "surround")]
    Surround,
    #[serde(rename = "float-top")]
    FloatTop,
    #[serde(rename = "float-bottom")]
    FloatBottom,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    #[default]
    Iframe,
    Video,
}
