use std::collections::BTreeMap;

use crate::model::Element;
use crate::text::{strip_line_break_prefix, LINE_BREAK, ZERO};

/// Splits a list's members into its items, keyed by item index.
///
/// Members may be flat (a `ZERO` record separates items) or compressed (`\n`
/// inside values). A `list_wrap` member continues the current item. The
/// separator opening the list is not an item boundary, except for checkbox
/// lists whose first member is the checkbox itself and is skipped.
pub fn split_list_lines(members: &[Element]) -> BTreeMap<usize, Vec<Element>> {
    let mut lines: BTreeMap<usize, Vec<Element>> = BTreeMap::new();
    let mut line = 0;
    for (index, member) in members.iter().enumerate() {
        let mut value = if member.value == ZERO {
            LINE_BREAK
        } else {
            member.value.as_str()
        };
        if index == 0 {
            if member.checkbox.is_some() {
                continue;
            }
            value = strip_line_break_prefix(value);
        }

        if member.list_wrap == Some(true) {
            lines.entry(line).or_default().push(member.clone());
            continue;
        }
        for (n, fragment) in value.split(LINE_BREAK).enumerate() {
            if n > 0 {
                line += 1;
            }
            let records = lines.entry(line).or_default();
            if !fragment.is_empty() {
                records.push(Element {
                    value: fragment.to_string(),
                    ..member.clone()
                });
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ChoiceState;
    use pretty_assertions::assert_eq;

    fn values(lines: &BTreeMap<usize, Vec<Element>>) -> Vec<Vec<&str>> {
        lines
            .values()
            .map(|line| line.iter().map(|e| e.value.as_str()).collect())
            .collect()
    }

    #[test]
    fn line_break_members_separate_items() {
        let members: Vec<_> = ["\n", "A", "\n", "B"].into_iter().map(Element::text).collect();
        assert_eq!(values(&split_list_lines(&members)), vec![vec!["A"], vec!["B"]]);
    }

    #[test]
    fn flat_caret_records_separate_items() {
        let members: Vec<_> = [ZERO, "A", "b", ZERO, "C"].into_iter().map(Element::text).collect();
        assert_eq!(
            values(&split_list_lines(&members)),
            vec![vec!["A", "b"], vec!["C"]]
        );
    }

    #[test]
    fn compressed_values_split_inside_records() {
        let members = vec![Element::text("\nOne\nTwo"), Element::text("!")];
        let lines = split_list_lines(&members);
        assert_eq!(values(&lines), vec![vec!["One"], vec!["Two", "!"]]);
    }

    #[test]
    fn wrapped_members_stay_in_their_item() {
        let members = vec![
            Element::text("\nA"),
            Element {
                list_wrap: Some(true),
                ..Element::text("\n")
            },
            Element::text("B"),
        ];
        let lines = split_list_lines(&members);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[&0].len(), 3);
    }

    #[test]
    fn empty_items_still_open_a_line() {
        let members = vec![Element::text("\nA\n\nB")];
        assert_eq!(
            values(&split_list_lines(&members)),
            vec![vec!["A"], vec![], vec!["B"]]
        );
    }

    #[test]
    fn checkbox_list_skips_its_first_member() {
        let members = vec![
            Element {
                checkbox: Some(ChoiceState::default()),
                ..Element::text("")
            },
            Element::text("A"),
        ];
        assert_eq!(values(&split_list_lines(&members)), vec![vec!["A"]]);
    }
}
