//! Expansion: nested containers → flat atomic records.
//!
//! Each container is replaced by the run of records it expands to. Runs are
//! built recursively and returned rather than spliced into a live list, so no
//! index is ever held across a mutation.
//!
//! Group ids are taken from the container when present, otherwise freshly
//! generated for this pass.

use crate::formula::FormulaRenderer;
use crate::model::{
    ChoiceState, Control, ControlComponent, ControlType, Element, ElementKind, RowFlex, TextStyle,
};
use crate::options::EditorOptions;
use crate::text::{normalize_line_break, split_text, starts_with_line_break, ZERO};

use super::context::{context_of, fill_context};
use super::fresh_id;

#[derive(Clone, Copy)]
pub struct ExpandOptions<'a> {
    /// Apply the leading compensation rule to this sequence.
    pub handle_first_element: bool,
    /// Always lead with a compensation record.
    pub force_compensation: bool,
    pub editor: &'a EditorOptions,
    pub formula: &'a dyn FormulaRenderer,
}

impl<'a> ExpandOptions<'a> {
    pub fn new(editor: &'a EditorOptions, formula: &'a dyn FormulaRenderer) -> Self {
        Self {
            handle_first_element: true,
            force_compensation: false,
            editor,
            formula,
        }
    }

    fn nested(&self, handle_first_element: bool, force_compensation: bool) -> Self {
        Self {
            handle_first_element,
            force_compensation,
            ..*self
        }
    }
}

/// Expands `elements` in place.
pub fn expand(elements: &mut Vec<Element>, options: &ExpandOptions<'_>) {
    let source = std::mem::take(elements);
    *elements = expand_list(source, options);
}

/// Expands `source` into a new flat sequence.
pub fn expand_list(source: Vec<Element>, options: &ExpandOptions<'_>) -> Vec<Element> {
    let mut out = Vec::with_capacity(source.len() + 1);
    if needs_compensation(source.first(), options) {
        out.push(Element::text(ZERO));
    }
    for element in source {
        expand_element(element, options, &mut out);
    }
    for record in out.iter_mut() {
        normalize(record, options);
    }
    out
}

/// Lists compensate per item, and a text record already opening a line can
/// serve as the caret position itself.
fn needs_compensation(first: Option<&Element>, options: &ExpandOptions<'_>) -> bool {
    if options.force_compensation {
        return true;
    }
    if !options.handle_first_element {
        return false;
    }
    match first {
        None => true,
        Some(first) if first.kind == ElementKind::List => false,
        Some(first) => !first.is_text() || !starts_with_line_break(&first.value),
    }
}

fn expand_element(element: Element, options: &ExpandOptions<'_>, out: &mut Vec<Element>) {
    match element.kind {
        ElementKind::Title => expand_title(element, options, out),
        ElementKind::List => expand_list_container(element, options, out),
        ElementKind::Area => expand_area(element, options, out),
        ElementKind::Table => out.push(expand_table(element, options)),
        ElementKind::Hyperlink | ElementKind::Date if !is_flat_member(&element) => {
            expand_inline_group(element, out)
        }
        ElementKind::Control if element.control_component.is_none() => {
            expand_control(element, options, out)
        }
        _ => split_atom(element, out),
    }
}

/// A hyperlink/date record that already belongs to an expanded group.
fn is_flat_member(element: &Element) -> bool {
    element.value_list.is_empty() && (element.hyperlink_id.is_some() || element.date_id.is_some())
}

fn split_atom(element: Element, out: &mut Vec<Element>) {
    if !element.is_text_like() || element.value.chars().nth(1).is_none() {
        out.push(element);
        return;
    }
    let units = split_text(&element.value);
    if units.len() == 1 {
        out.push(element);
        return;
    }
    out.extend(units.into_iter().map(|value| Element {
        value,
        ..element.clone()
    }));
}

fn expand_title(title: Element, options: &ExpandOptions<'_>, out: &mut Vec<Element>) {
    if title.value_list.is_empty() {
        log::trace!("dropping empty title");
        return;
    }
    let mut children = expand_list(title.value_list, &options.nested(false, false));
    let title_id = title.title_id.unwrap_or_else(fresh_id);
    for child in children.iter_mut() {
        child.title = title.title.clone();
        if let Some(level) = title.level {
            child.title_id = Some(title_id.clone());
            child.level = Some(level);
        }
        if child.is_text_like() {
            if child.style.size.is_none() {
                child.style.size = child.level.map(|level| options.editor.title.size_for(level));
            }
            if child.style.bold.is_none() {
                child.style.bold = Some(true);
            }
        }
    }
    out.extend(children);
}

fn expand_list_container(list: Element, options: &ExpandOptions<'_>, out: &mut Vec<Element>) {
    if list.value_list.is_empty() {
        log::trace!("dropping empty list");
        return;
    }
    let mut children = expand_list(list.value_list, &options.nested(true, false));
    let list_id = list.list_id.unwrap_or_else(fresh_id);
    for child in children.iter_mut() {
        child.list_id = Some(list_id.clone());
        child.list_type = list.list_type;
        child.list_style = list.list_style;
    }
    out.extend(children);
}

fn expand_area(area: Element, options: &ExpandOptions<'_>, out: &mut Vec<Element>) {
    if area.value_list.is_empty() {
        log::trace!("dropping empty area");
        return;
    }
    let mut children = expand_list(area.value_list, &options.nested(true, true));
    let area_id = area.area_id.unwrap_or_else(fresh_id);
    for (index, child) in children.iter_mut().enumerate() {
        child.area_id = Some(area_id.clone());
        child.area = area.area.clone();
        child.area_index = Some(index);
        if child.kind == ElementKind::Table {
            for td in child.tr_list.iter_mut().flat_map(|tr| tr.td_list.iter_mut()) {
                for cell_element in td.value.iter_mut() {
                    cell_element.area_id = Some(area_id.clone());
                    cell_element.area = area.area.clone();
                }
            }
        }
    }
    out.extend(children);
}

fn expand_table(mut table: Element, options: &ExpandOptions<'_>) -> Element {
    let table_id = table.id.get_or_insert_with(fresh_id).clone();
    let min_row_height = options.editor.table.default_tr_min_height;
    for tr in table.tr_list.iter_mut() {
        let tr_id = tr.id.get_or_insert_with(fresh_id).clone();
        let min_height = match tr.min_height {
            Some(height) if height >= min_row_height => height,
            _ => min_row_height,
        };
        tr.min_height = Some(min_height);
        if tr.height < min_height {
            tr.height = min_height;
        }
        for td in tr.td_list.iter_mut() {
            let td_id = td.id.get_or_insert_with(fresh_id).clone();
            let mut value = expand_list(std::mem::take(&mut td.value), &options.nested(true, true));
            // The leading caret record takes the size of the first real text.
            if let [first, second, ..] = value.as_mut_slice()
                && first.style.size.is_none()
                && second.style.size.is_some()
                && second.is_text_like()
            {
                first.style.size = second.style.size;
            }
            for cell_element in value.iter_mut() {
                cell_element.td_id = Some(td_id.clone());
                cell_element.tr_id = Some(tr_id.clone());
                cell_element.table_id = Some(table_id.clone());
            }
            td.value = value;
        }
    }
    table
}

/// Hyperlinks and dates: one record per character, all sharing the group id.
fn expand_inline_group(group: Element, out: &mut Vec<Element>) {
    let members = super::unzip(&group.value_list);
    if members.is_empty() {
        log::trace!("dropping empty {:?}", group.kind);
        return;
    }
    let group_id = match group.kind {
        ElementKind::Hyperlink => group.hyperlink_id.clone(),
        _ => group.date_id.clone(),
    }
    .unwrap_or_else(fresh_id);
    for mut member in members {
        member.kind = group.kind;
        if group.kind == ElementKind::Hyperlink {
            member.url = group.url.clone();
            member.hyperlink_id = Some(group_id.clone());
        } else {
            member.date_format = group.date_format.clone();
            member.date_id = Some(group_id.clone());
        }
        out.push(member);
    }
}

/// Shared stamping for every record a control expands to.
struct ControlStamp<'c> {
    context: Element,
    control_id: String,
    descriptor: &'c Control,
}

impl ControlStamp<'_> {
    /// A decoration record (prefix, placeholder, marker...) of the control kind.
    fn decoration(&self, value: String, role: ControlComponent, style: &TextStyle) -> Element {
        let mut record = self.context.clone();
        record.style = style.clone();
        record.kind = ElementKind::Control;
        record.value = value;
        self.tag(record, role)
    }

    /// A content record: keeps its own attributes, falls back to the control's.
    fn content(&self, mut record: Element, default_style: &TextStyle) -> Element {
        record.style.fill_from(default_style);
        fill_context(&mut record, &self.context);
        if let Some(zero) = normalize_line_break(&record.value) {
            record.value = zero.to_string();
        }
        self.tag(record, ControlComponent::Value)
    }

    fn tag(&self, mut record: Element, role: ControlComponent) -> Element {
        record.control_id = Some(self.control_id.clone());
        record.control = Some(Box::new(self.descriptor.clone()));
        record.control_component = Some(role);
        record
    }

    fn text_run(&self, text: &str, role: ControlComponent, style: &TextStyle) -> Vec<Element> {
        split_text(text)
            .into_iter()
            .map(|unit| {
                let value = normalize_line_break(&unit).map(str::to_string).unwrap_or(unit);
                self.decoration(value, role, style)
            })
            .collect()
    }
}

fn expand_control(element: Element, options: &ExpandOptions<'_>, out: &mut Vec<Element>) {
    let Some(control) = element.control.clone() else {
        log::debug!("control element without descriptor left unexpanded");
        out.push(element);
        return;
    };
    let control = control.as_ref();
    let editor = options.editor;
    let stamp = ControlStamp {
        context: context_of(&element),
        control_id: element.control_id.clone().unwrap_or_else(fresh_id),
        descriptor: control,
    };
    let default_style = control.style.control_subset();
    let bracket_style = TextStyle {
        color: Some(editor.control.bracket_color.clone()),
        ..default_style.clone()
    };

    let prefix = control.prefix.as_deref().unwrap_or(editor.control.prefix.as_str());
    out.extend(stamp.text_run(prefix, ControlComponent::Prefix, &bracket_style));

    if let Some(pre_text) = control.pre_text.as_deref().filter(|t| !t.is_empty()) {
        out.extend(stamp.text_run(pre_text, ControlComponent::PreText, &default_style));
    }

    let value_run = match control.kind {
        ControlType::Checkbox | ControlType::Radio => {
            choice_run(&stamp, control, &default_style, editor)
        }
        ControlType::Text | ControlType::Select => {
            let value = if !control.value.is_empty() {
                control.value.clone()
            } else {
                control
                    .selected_value()
                    .map(|text| vec![Element::text(text)])
                    .unwrap_or_default()
            };
            expand_list(value, &options.nested(false, false))
                .into_iter()
                .map(|record| stamp.content(record, &default_style))
                .collect()
        }
    };
    let has_value = !value_run.is_empty();
    out.extend(value_run);

    if !has_value
        && !control.kind.is_choice()
        && let Some(placeholder) = control.placeholder.as_deref().filter(|p| !p.is_empty())
    {
        let placeholder_style = TextStyle {
            color: Some(editor.control.placeholder_color.clone()),
            ..default_style.clone()
        };
        out.extend(stamp.text_run(placeholder, ControlComponent::Placeholder, &placeholder_style));
    }

    if let Some(post_text) = control.post_text.as_deref().filter(|t| !t.is_empty()) {
        out.extend(stamp.text_run(post_text, ControlComponent::PostText, &default_style));
    }

    let postfix = control.postfix.as_deref().unwrap_or(editor.control.postfix.as_str());
    out.extend(stamp.text_run(postfix, ControlComponent::Postfix, &bracket_style));
}

/// Checkbox/radio options: a marker per option followed by its label.
///
/// Label characters take their styling positionally from the control's
/// existing value records.
fn choice_run(
    stamp: &ControlStamp<'_>,
    control: &Control,
    default_style: &TextStyle,
    editor: &EditorOptions,
) -> Vec<Element> {
    let (role, gap) = match control.kind {
        ControlType::Radio => (ControlComponent::Radio, editor.radio.gap),
        _ => (ControlComponent::Checkbox, editor.checkbox.gap),
    };
    let checked = control.checked_codes();
    let mut value_styles = super::unzip(&control.value).into_iter();

    let mut run = Vec::new();
    for set in &control.value_sets {
        let selected = match control.kind {
            ControlType::Radio => control.code.as_deref() == Some(set.code.as_str()),
            _ => checked.contains(&set.code.as_str()),
        };
        let state = ChoiceState {
            code: Some(set.code.clone()),
            value: selected,
        };
        let mut marker = stamp.decoration(String::new(), role, default_style);
        if role == ControlComponent::Radio {
            marker.radio = Some(state);
        } else {
            marker.checkbox = Some(state);
        }
        run.push(marker);

        let units = split_text(&set.value);
        let last = units.len().saturating_sub(1);
        for (index, unit) in units.into_iter().enumerate() {
            let mut label = value_styles.next().unwrap_or_default();
            label.value = unit;
            label.letter_spacing = Some(if index == last { gap } else { 0.0 });
            run.push(stamp.content(label, default_style));
        }
    }
    run
}

/// Per-record fix-ups applied to everything a pass emits.
fn normalize(record: &mut Element, options: &ExpandOptions<'_>) {
    if let Some(zero) = normalize_line_break(&record.value) {
        record.value = zero.to_string();
    }
    match record.kind {
        ElementKind::Image | ElementKind::Block | ElementKind::Html => {
            record.id.get_or_insert_with(fresh_id);
        }
        ElementKind::Latex | ElementKind::Mathjax => {
            if record.latex_svg.is_none() {
                let geometry = options.formula.render(&record.value);
                record.width = record.width.filter(|w| *w > 0.0).or(Some(geometry.width));
                record.height = record.height.filter(|h| *h > 0.0).or(Some(geometry.height));
                record.latex_svg = Some(geometry.svg);
                if record.kind == ElementKind::Mathjax {
                    record.is_block = Some(geometry.is_block);
                    if geometry.is_block {
                        record.row_flex = Some(RowFlex::Center);
                    }
                }
            }
            record.id.get_or_insert_with(fresh_id);
        }
        _ => {}
    }
}
