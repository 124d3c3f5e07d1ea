use serde::{Deserialize, Serialize};

use crate::model::TitleLevel;

/// Editor-wide defaults read (never written) by a compile pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorOptions {
    pub default_font: String,
    pub default_size: u32,
    pub title: TitleOptions,
    pub control: ControlOptions,
    pub checkbox: ChoiceOptions,
    pub radio: ChoiceOptions,
    pub table: TableOptions,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            default_font: "Microsoft YaHei".to_string(),
            default_size: 16,
            title: TitleOptions::default(),
            control: ControlOptions::default(),
            checkbox: ChoiceOptions::default(),
            radio: ChoiceOptions::default(),
            table: TableOptions::default(),
        }
    }
}

/// Font size applied to text in a title of each level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TitleOptions {
    pub default_first_size: u32,
    pub default_second_size: u32,
    pub default_third_size: u32,
    pub default_fourth_size: u32,
    pub default_fifth_size: u32,
    pub default_sixth_size: u32,
}

impl Default for TitleOptions {
    fn default() -> Self {
        Self {
            default_first_size: 26,
            default_second_size: 24,
            default_third_size: 22,
            default_fourth_size: 20,
            default_fifth_size: 18,
            default_sixth_size: 16,
        }
    }
}

impl TitleOptions {
    pub fn size_for(&self, level: TitleLevel) -> u32 {
        match level {
            TitleLevel::First => self.default_first_size,
            TitleLevel::Second => self.default_second_size,
            TitleLevel::Third => self.default_third_size,
            TitleLevel::Fourth => self.default_fourth_size,
            TitleLevel::Fifth => self.default_fifth_size,
            TitleLevel::Sixth => self.default_sixth_size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ControlOptions {
    pub prefix: String,
    pub postfix: String,
    pub bracket_color: String,
    pub placeholder_color: String,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            prefix: "{".to_string(),
            postfix: "}".to_string(),
            bracket_color: "#000000".to_string(),
            placeholder_color: "#9c9b9b".to_string(),
        }
    }
}

/// Checkbox/radio option layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChoiceOptions {
    /// Spacing after the last character of each option label.
    pub gap: f64,
}

impl Default for ChoiceOptions {
    fn default() -> Self {
        Self { gap: 5.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableOptions {
    pub default_tr_min_height: f64,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            default_tr_min_height: 42.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let options: EditorOptions =
            serde_json::from_str(r#"{"defaultSize":12,"control":{"prefix":"["}}"#).unwrap();
        assert_eq!(options.default_size, 12);
        assert_eq!(options.control.prefix, "[");
        assert_eq!(options.control.postfix, "}");
        assert_eq!(options.table.default_tr_min_height, 42.0);
    }

    #[test]
    fn title_sizes_by_level() {
        let title = TitleOptions::default();
        assert_eq!(title.size_for(TitleLevel::First), 26);
        assert_eq!(title.size_for(TitleLevel::Sixth), 16);
    }
}
