//! # Compiler
//!
//! Conversion between the nested document and the flat render sequence.
//!
//! ## Modules
//!
//! - [`expand`]: nested → flat
//! - [`compress`]: flat → nested
//! - [`group`]: row-flex grouping of a flat sequence
//! - [`lines`]: list item splitting
//! - [`context`]: structural context for inserted records
//! - [`export`]: plain-text rendering
//! - [`invariants`]: group id checks

pub mod compress;
pub mod context;
pub mod expand;
pub mod export;
pub mod group;
pub mod invariants;
pub mod lines;

pub use compress::{compress, compress_owned, CompressOptions};
pub use context::{anchor_element, inherit_context, ContextGroup, InheritOptions};
pub use expand::{expand, expand_list, ExpandOptions};
pub use export::{element_list_text, text_from_element_list};
pub use group::{group_by_row_flex, RowFlexGroup};
pub use lines::split_list_lines;

use uuid::Uuid;

use crate::model::Element;
use crate::text::split_text;

/// A fresh group or identity id.
pub fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn is_text_like(element: &Element) -> bool {
    element.is_text_like()
}

pub fn is_block_element(element: &Element) -> bool {
    element.is_block()
}

/// One record per display unit; every other attribute is copied.
pub fn unzip(elements: &[Element]) -> Vec<Element> {
    let mut out = Vec::with_capacity(elements.len());
    for element in elements {
        let units = split_text(&element.value);
        if units.len() <= 1 {
            out.push(element.clone());
            continue;
        }
        out.extend(units.into_iter().map(|value| Element {
            value,
            ..element.clone()
        }));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ids_differ() {
        assert_ne!(fresh_id(), fresh_id());
    }

    #[test]
    fn unzip_splits_values_and_keeps_attributes() {
        let elements = vec![
            Element {
                url: Some("u".into()),
                ..Element::text("ab")
            },
            Element::text(""),
        ];
        let out = unzip(&elements);
        assert_eq!(out.len(), 3);
        assert_eq!(out[1].value, "b");
        assert_eq!(out[1].url.as_deref(), Some("u"));
        assert_eq!(out[2].value, "");
    }
}
