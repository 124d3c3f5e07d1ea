//! Plain-text rendering of a document.

use crate::model::{Element, ElementKind, ListType};
use crate::text::{LINE_BREAK, ZERO};

use super::compress::{compress, CompressOptions};
use super::lines::split_list_lines;

/// Visible text of the text-like records, caret records removed.
pub fn element_list_text(elements: &[Element]) -> String {
    elements
        .iter()
        .filter(|e| e.is_text_like())
        .map(|e| e.value.as_str())
        .collect::<String>()
        .replace(ZERO, "")
}

/// Renders a flat or nested sequence as plain text.
///
/// Tables become rows of cells separated by two spaces, lists one line per
/// item with a bullet glyph or `N.` number, and choice markers `☑`/`□` and
/// `☉`/`○`.
pub fn text_from_element_list(elements: &[Element]) -> String {
    build_text(&compress(elements, CompressOptions::default()))
}

fn build_text(elements: &[Element]) -> String {
    let mut text = String::new();
    for element in elements {
        match element.kind {
            ElementKind::Table => {
                text.push_str(LINE_BREAK);
                for tr in &element.tr_list {
                    for (index, td) in tr.td_list.iter().enumerate() {
                        if index > 0 {
                            text.push_str("  ");
                        }
                        text.push_str(&build_text(&td.value));
                        if index + 1 == tr.td_list.len() {
                            text.push_str(LINE_BREAK);
                        }
                    }
                }
            }
            ElementKind::Tab => text.push('\t'),
            ElementKind::Hyperlink => text.push_str(&child_text(element)),
            ElementKind::Title => text.push_str(&build_text(&element.value_list)),
            ElementKind::List => text.push_str(&list_text(element)),
            ElementKind::Checkbox => {
                let checked = element.checkbox.as_ref().is_some_and(|c| c.value);
                text.push(if checked { '☑' } else { '□' });
            }
            ElementKind::Radio => {
                let checked = element.radio.as_ref().is_some_and(|r| r.value);
                text.push(if checked { '☉' } else { '○' });
            }
            kind if kind.is_text_like() || kind == ElementKind::Latex => {
                let value = match kind {
                    ElementKind::Control => control_text(element),
                    ElementKind::Date => child_text(element),
                    _ => element.value.clone(),
                };
                text.push_str(&value.replace(ZERO, LINE_BREAK));
            }
            _ => {}
        }
    }
    text
}

fn child_text(element: &Element) -> String {
    element.value_list.iter().map(|e| e.value.as_str()).collect()
}

/// Pre-text, first value record and post-text; nothing for an empty control.
fn control_text(element: &Element) -> String {
    let Some(control) = element.control.as_deref() else {
        return element.value.clone();
    };
    match control.value.first().map(|e| e.value.as_str()) {
        Some(value) if !value.is_empty() => format!(
            "{}{}{}",
            control.pre_text.as_deref().unwrap_or_default(),
            value,
            control.post_text.as_deref().unwrap_or_default()
        ),
        _ => String::new(),
    }
}

fn list_text(list: &Element) -> String {
    let bullet = match list.list_type {
        Some(ListType::Ul) => list.list_style.and_then(|style| style.bullet()),
        _ => None,
    };
    let lines = split_list_lines(&list.value_list);
    let mut text = String::new();
    for (position, (index, line)) in lines.iter().enumerate() {
        text.push_str(LINE_BREAK);
        match bullet {
            Some(bullet) => text.push_str(bullet),
            None => text.push_str(&format!("{}.", index + 1)),
        }
        text.push_str(&build_text(line));
        if position + 1 == lines.len() {
            text.push_str(LINE_BREAK);
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChoiceState, Control, ListStyle, Td, Tr};

    #[test]
    fn list_text_drops_carets() {
        let elements = vec![
            Element::text(ZERO),
            Element::text("a"),
            Element {
                kind: ElementKind::Image,
                value: "img.png".into(),
                ..Default::default()
            },
            Element::text("b"),
        ];
        assert_eq!(element_list_text(&elements), "ab");
    }

    #[test]
    fn ordered_and_bulleted_lists() {
        let ol = Element::list(ListType::Ol, vec![Element::text("\nOne\nTwo")]);
        assert_eq!(text_from_element_list(&[ol]), "\n1.One\n2.Two\n");

        let ul = Element {
            list_style: Some(ListStyle::Disc),
            ..Element::list(ListType::Ul, vec![Element::text("\nA")])
        };
        assert_eq!(text_from_element_list(&[ul]), "\n•A\n");
    }

    #[test]
    fn table_cells_are_space_separated() {
        let table = Element::table(vec![
            Tr::new(vec![Td::new(vec![Element::text("a")]), Td::new(vec![Element::text("b")])]),
            Tr::new(vec![Td::new(vec![Element::text("c")]), Td::new(vec![])]),
        ]);
        assert_eq!(text_from_element_list(&[table]), "\na  b\nc  \n");
    }

    #[test]
    fn controls_render_pre_and_post_text_around_value() {
        let filled = Element::control(Control {
            pre_text: Some("Name: ".into()),
            post_text: Some(".".into()),
            ..Control::text(vec![Element::text("Ann")])
        });
        let empty = Element::control(Control {
            pre_text: Some("Name: ".into()),
            ..Control::default()
        });
        assert_eq!(text_from_element_list(&[filled, empty]), "Name: Ann.");
    }

    #[test]
    fn choices_tabs_and_links() {
        let elements = vec![
            Element {
                kind: ElementKind::Checkbox,
                checkbox: Some(ChoiceState {
                    code: None,
                    value: true,
                }),
                ..Default::default()
            },
            Element {
                kind: ElementKind::Radio,
                ..Default::default()
            },
            Element {
                kind: ElementKind::Tab,
                ..Default::default()
            },
            Element::hyperlink("https://example.com", vec![Element::text("site")]),
        ];
        assert_eq!(text_from_element_list(&elements), "☑○\tsite");
    }
}
