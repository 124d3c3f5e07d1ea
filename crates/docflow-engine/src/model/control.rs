use serde::{Deserialize, Serialize};

use super::{Element, TextStyle};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlType {
    #[default]
    Text,
    Select,
    Checkbox,
    Radio,
}

impl ControlType {
    pub fn is_choice(&self) -> bool {
        matches!(self, ControlType::Checkbox | ControlType::Radio)
    }
}

/// Which part of a control a flat record renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ControlComponent {
    Prefix,
    PreText,
    Value,
    PostText,
    Postfix,
    Placeholder,
    Checkbox,
    Radio,
}

impl ControlComponent {
    /// Roles that survive when an incomplete control is flattened into text.
    pub fn is_textual(&self) -> bool {
        matches!(
            self,
            ControlComponent::Value | ControlComponent::PreText | ControlComponent::PostText
        )
    }
}

/// One option of a select/checkbox/radio control.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueSet {
    pub code: String,
    pub value: String,
}

impl ValueSet {
    pub fn new(code: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            value: value.into(),
        }
    }
}

/// Selection state of a checkbox/radio marker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChoiceState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub value: bool,
}

/// Control descriptor: a fillable field rendered between a prefix and postfix.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Control {
    #[serde(rename = "type")]
    pub kind: ControlType,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub value: Vec<Element>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postfix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_text: Option<String>,
    /// Selected option code; comma separated for checkbox controls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub value_sets: Vec<ValueSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concept_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide: Option<bool>,
    /// Default style of the control's content, anchored on the prefix.
    #[serde(flatten)]
    pub style: TextStyle,
}

impl Control {
    pub fn text(value: Vec<Element>) -> Self {
        Self {
            kind: ControlType::Text,
            value,
            ..Default::default()
        }
    }

    /// Codes selected on a checkbox control.
    pub fn checked_codes(&self) -> Vec<&str> {
        self.code
            .as_deref()
            .map(|code| code.split(',').filter(|c| !c.is_empty()).collect())
            .unwrap_or_default()
    }

    /// Display text of the selected option, if `code` names one.
    pub fn selected_value(&self) -> Option<&str> {
        let code = self.code.as_deref()?;
        self.value_sets
            .iter()
            .find(|set| set.code == code)
            .map(|set| set.value.as_str())
    }
}
