use serde::{Deserialize, Serialize};

use super::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableBorder {
    All,
    Empty,
    External,
    Internal,
    Dash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TdBorder {
    Top,
    Right,
    Bottom,
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Col {
    pub width: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Tr {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<f64>,
    pub td_list: Vec<Td>,
}

impl Tr {
    pub fn new(td_list: Vec<Td>) -> Self {
        Self {
            td_list,
            ..Default::default()
        }
    }
}

/// A table cell; its `value` is its own element sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Td {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub colspan: u32,
    pub rowspan: u32,
    pub value: Vec<Element>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_align: Option<VerticalAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub border_types: Vec<TdBorder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concept_id: Option<String>,
    /// Layout geometry, recomputed on every render.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl Default for Td {
    fn default() -> Self {
        Self {
            id: None,
            colspan: 1,
            rowspan: 1,
            value: vec![],
            vertical_align: None,
            background_color: None,
            border_types: vec![],
            concept_id: None,
            width: None,
            height: None,
        }
    }
}

impl Td {
    pub fn new(value: Vec<Element>) -> Self {
        Self {
            value,
            ..Default::default()
        }
    }
}
