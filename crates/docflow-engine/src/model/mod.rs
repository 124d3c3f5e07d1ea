//! # Element Model
//!
//! The single record type shared by both document representations:
//!
//! - **Nested** (authoring/export shape): structural kinds carry their children
//!   directly in `value_list` (or `control.value`, or `tr_list[].td_list[].value`).
//! - **Flat** (render shape): one record per character or inline object, with
//!   structural membership expressed only through shared group ids
//!   (`list_id`, `title_id`, `area_id`, `hyperlink_id`, `date_id`, `control_id`,
//!   and `table_id`/`tr_id`/`td_id` inside table cells).
//!
//! Both shapes serialize to the same camelCase JSON that the editor persists.

pub mod control;
pub mod kinds;
pub mod table;

pub use control::{ChoiceState, Control, ControlComponent, ControlType, ValueSet};
pub use kinds::{
    BlockType, ElementKind, ImageDisplay, ListStyle, ListType, RowFlex, TitleLevel,
};
pub use table::{Col, TableBorder, Td, TdBorder, Tr, VerticalAlign};

use serde::{Deserialize, Serialize};

/// Character-level style attributes, orthogonal to the element kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strikeout: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
}

impl TextStyle {
    /// The subset a control uses as its default style (colour and underline
    /// are owned by the bracket/placeholder decoration, not the control).
    pub fn control_subset(&self) -> TextStyle {
        TextStyle {
            font: self.font.clone(),
            size: self.size,
            bold: self.bold,
            color: None,
            italic: self.italic,
            underline: None,
            strikeout: self.strikeout,
            highlight: self.highlight.clone(),
        }
    }

    /// Overwrites every attribute that `other` sets.
    pub fn overlay(&mut self, other: &TextStyle) {
        macro_rules! take {
            ($($field:ident),*) => {
                $(if other.$field.is_some() {
                    self.$field = other.$field.clone();
                })*
            };
        }
        take!(font, size, bold, color, italic, underline, strikeout, highlight);
    }

    /// Fills only the attributes still unset on `self`.
    pub fn fill_from(&mut self, other: &TextStyle) {
        macro_rules! fill {
            ($($field:ident),*) => {
                $(if self.$field.is_none() {
                    self.$field = other.$field.clone();
                })*
            };
        }
        fill!(font, size, bold, color, italic, underline, strikeout, highlight);
    }
}

/// Display options of a title container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TitleDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concept_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletable: Option<bool>,
}

/// Payload of an area: an independently editable region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AreaDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concept_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
}

/// Payload of a generic embedded block (video, iframe).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlockDescriptor {
    #[serde(rename = "type")]
    pub kind: BlockType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srcdoc: Option<String>,
}

/// One document element, either an atomic flat record or a nested container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Element {
    /// Identity id of images, blocks, formulas, HTML and tables.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "ElementKind::is_text")]
    pub kind: ElementKind,
    pub value: String,
    /// Children of a nested container.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub value_list: Vec<Element>,

    #[serde(flatten)]
    pub style: TextStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_flex: Option<RowFlex>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_margin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub group_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide: Option<bool>,

    // Title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<TitleLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<TitleDescriptor>,

    // List
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_type: Option<ListType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_style: Option<ListStyle>,
    /// Line break inside one list item rather than between items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_wrap: Option<bool>,

    // Area
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<AreaDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_index: Option<usize>,

    // Hyperlink
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyperlink_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    // Date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,

    // Control
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control: Option<Box<Control>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_component: Option<ControlComponent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkbox: Option<ChoiceState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radio: Option<ChoiceState>,

    // Table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tr_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub td_id: Option<String>,
    /// Shared by the fragments of a table split across pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paging_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tr_list: Vec<Tr>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub colgroup: Vec<Col>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_type: Option<TableBorder>,

    // Image / block / html / separator / formula
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img_display: Option<ImageDisplay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<BlockDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix_width: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dash_array: Vec<f64>,
    #[serde(rename = "laTexSVG", skip_serializing_if = "Option::is_none")]
    pub latex_svg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_block: Option<bool>,
}

impl Element {
    /// A plain text record.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Default::default()
        }
    }

    /// A nested container of `kind` holding `children`.
    pub fn container(kind: ElementKind, children: Vec<Element>) -> Self {
        Self {
            kind,
            value_list: children,
            ..Default::default()
        }
    }

    pub fn title(level: TitleLevel, children: Vec<Element>) -> Self {
        Self {
            level: Some(level),
            ..Self::container(ElementKind::Title, children)
        }
    }

    pub fn list(list_type: ListType, children: Vec<Element>) -> Self {
        Self {
            list_type: Some(list_type),
            ..Self::container(ElementKind::List, children)
        }
    }

    pub fn hyperlink(url: impl Into<String>, children: Vec<Element>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::container(ElementKind::Hyperlink, children)
        }
    }

    pub fn date(format: impl Into<String>, children: Vec<Element>) -> Self {
        Self {
            date_format: Some(format.into()),
            ..Self::container(ElementKind::Date, children)
        }
    }

    pub fn area(children: Vec<Element>) -> Self {
        Self::container(ElementKind::Area, children)
    }

    pub fn control(control: Control) -> Self {
        Self {
            kind: ElementKind::Control,
            control: Some(Box::new(control)),
            ..Default::default()
        }
    }

    pub fn table(tr_list: Vec<Tr>) -> Self {
        Self {
            kind: ElementKind::Table,
            tr_list,
            ..Default::default()
        }
    }

    pub fn is_text_like(&self) -> bool {
        self.kind.is_text_like()
    }

    /// Plain text (no explicit kind, or the text kind).
    pub fn is_text(&self) -> bool {
        self.kind.is_text()
    }

    /// Kinds that lay out in their own flex row.
    pub fn is_block(&self) -> bool {
        self.kind.is_block()
            || self.img_display == Some(ImageDisplay::Inline)
            || (self.kind == ElementKind::Html && self.fix_width != Some(true))
    }

    pub fn is_hidden(&self) -> bool {
        self.hide == Some(true)
            || self.control.as_ref().is_some_and(|c| c.hide == Some(true))
            || self.area.as_ref().is_some_and(|a| a.hide == Some(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn text_kind_is_omitted_from_json() {
        let json = serde_json::to_value(Element::text("a")).unwrap();
        assert_eq!(json, serde_json::json!({ "value": "a" }));
    }

    #[test]
    fn nested_json_round_trips() {
        let json = serde_json::json!({
            "type": "list",
            "value": "",
            "listType": "ol",
            "valueList": [{ "value": "a", "bold": true }]
        });
        let element: Element = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(element.kind, ElementKind::List);
        assert_eq!(element.value_list[0].style.bold, Some(true));
        assert_eq!(serde_json::to_value(&element).unwrap(), json);
    }

    #[test]
    fn missing_value_defaults_to_empty() {
        let element: Element = serde_json::from_str(r#"{"type":"separator"}"#).unwrap();
        assert_eq!(element.kind, ElementKind::Separator);
        assert_eq!(element.value, "");
    }

    #[test]
    fn overlay_and_fill_differ_on_conflicts() {
        let base = TextStyle {
            size: Some(12),
            color: Some("red".into()),
            ..Default::default()
        };
        let other = TextStyle {
            size: Some(20),
            bold: Some(true),
            ..Default::default()
        };

        let mut overlaid = base.clone();
        overlaid.overlay(&other);
        assert_eq!(overlaid.size, Some(20));
        assert_eq!(overlaid.color.as_deref(), Some("red"));

        let mut filled = base;
        filled.fill_from(&other);
        assert_eq!(filled.size, Some(12));
        assert_eq!(filled.bold, Some(true));
    }

    #[test]
    fn block_classification() {
        let image = Element {
            kind: ElementKind::Image,
            img_display: Some(ImageDisplay::Inline),
            ..Default::default()
        };
        let fixed_html = Element {
            kind: ElementKind::Html,
            fix_width: Some(true),
            ..Default::default()
        };
        assert!(image.is_block());
        assert!(Element::table(vec![]).is_block());
        assert!(Element::container(ElementKind::Html, vec![]).is_block());
        assert!(!fixed_html.is_block());
        assert!(!Element::text("a").is_block());
    }
}
