use crate::model::{Element, RowFlex};

use super::compress::{compress_owned, CompressOptions};

/// A run of records laid out in one flex row container.
#[derive(Debug, Clone, PartialEq)]
pub struct RowFlexGroup {
    pub row_flex: Option<RowFlex>,
    /// The run's records, compressed.
    pub elements: Vec<Element>,
}

/// Partitions a flat sequence into maximal runs of equal alignment. Block
/// records always sit in a run of their own.
pub fn group_by_row_flex(elements: &[Element]) -> Vec<RowFlexGroup> {
    let mut groups: Vec<RowFlexGroup> = Vec::new();
    let mut previous: Option<&Element> = None;
    for element in elements {
        let joins_previous = match (groups.last(), previous) {
            (Some(group), Some(previous)) => {
                group.row_flex == element.row_flex && !element.is_block() && !previous.is_block()
            }
            _ => false,
        };
        match groups.last_mut() {
            Some(group) if joins_previous => group.elements.push(element.clone()),
            _ => groups.push(RowFlexGroup {
                row_flex: element.row_flex,
                elements: vec![element.clone()],
            }),
        }
        previous = Some(element);
    }
    for group in groups.iter_mut() {
        group.elements = compress_owned(std::mem::take(&mut group.elements), CompressOptions::default());
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementKind;
    use pretty_assertions::assert_eq;

    fn aligned(value: &str, row_flex: Option<RowFlex>) -> Element {
        Element {
            row_flex,
            ..Element::text(value)
        }
    }

    #[test]
    fn empty_input_has_no_groups() {
        assert!(group_by_row_flex(&[]).is_empty());
    }

    #[test]
    fn alignment_changes_split_runs() {
        let groups = group_by_row_flex(&[
            aligned("a", None),
            aligned("b", None),
            aligned("c", Some(RowFlex::Center)),
            aligned("d", Some(RowFlex::Center)),
        ]);
        assert_eq!(
            groups,
            vec![
                RowFlexGroup {
                    row_flex: None,
                    elements: vec![aligned("ab", None)],
                },
                RowFlexGroup {
                    row_flex: Some(RowFlex::Center),
                    elements: vec![aligned("cd", Some(RowFlex::Center))],
                },
            ]
        );
    }

    #[test]
    fn block_records_stand_alone() {
        let separator = Element {
            kind: ElementKind::Separator,
            ..Default::default()
        };
        let groups = group_by_row_flex(&[
            aligned("a", None),
            separator.clone(),
            aligned("b", None),
        ]);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[1].elements, vec![separator]);
        assert_eq!(groups[2].elements, vec![aligned("b", None)]);
    }
}
