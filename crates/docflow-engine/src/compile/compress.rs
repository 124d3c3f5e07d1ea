//! Compression: flat atomic records → nested containers.
//!
//! The inverse of [`expand`](super::expand). Runs of records sharing a group id
//! fold back into one container whose payload is read from the run's first
//! member; everything else is merged with equal-styled neighbours.

use std::collections::VecDeque;

use crate::model::{Control, ControlComponent, Element, ElementKind, Td, Tr};
use crate::text::{LINE_BREAK, ZERO};

use super::invariants;

#[derive(Debug, Clone, Copy, Default)]
pub struct CompressOptions {
    /// Fold area runs into area containers instead of leaving their members
    /// inline.
    pub classify_area: bool,
}

/// Compresses a copy of `elements`, leaving the caller's sequence untouched.
pub fn compress(elements: &[Element], options: CompressOptions) -> Vec<Element> {
    compress_owned(elements.to_vec(), options)
}

/// Compresses a detached sequence the caller owns.
pub fn compress_owned(elements: Vec<Element>, options: CompressOptions) -> Vec<Element> {
    debug_assert!(
        invariants::group_collision(&elements).is_none(),
        "group id shared by different structural kinds: {:?}",
        invariants::group_collision(&elements)
    );
    compress_run(elements, options, false)
}

/// `keep_leading` is set for runs whose expansion never added a caret record.
fn compress_run(elements: Vec<Element>, options: CompressOptions, keep_leading: bool) -> Vec<Element> {
    let mut queue: VecDeque<Element> = elements.into();
    if !keep_leading
        && queue
            .front()
            .is_some_and(|first| first.value == ZERO && first.list_id.is_none() && first.is_text_like())
    {
        queue.pop_front();
    }

    let mut out: Vec<Element> = Vec::with_capacity(queue.len());
    while let Some(element) = queue.pop_front() {
        if element.area_id.is_some() {
            fold_area(element, &mut queue, options, &mut out);
        } else if element.title_id.is_some() && element.level.is_some() {
            out.push(fold_title(element, &mut queue, options));
        } else if element.list_id.is_some() && element.list_type.is_some() {
            out.push(fold_list(element, &mut queue, options));
        } else if element.kind == ElementKind::Table {
            out.push(fold_table(element, &mut queue));
        } else if matches!(element.kind, ElementKind::Hyperlink | ElementKind::Date)
            && element.value_list.is_empty()
        {
            out.push(fold_inline_group(element, &mut queue, options));
        } else if element.control_id.is_some() && element.control_component.is_some() {
            fold_control(element, &mut queue, options, &mut out);
        } else {
            push_merged(&mut out, pick(element));
        }
    }
    out
}

/// Pops the records following `first` for which `belongs` holds.
fn drain_group(
    first: Element,
    queue: &mut VecDeque<Element>,
    belongs: impl Fn(&Element) -> bool,
) -> Vec<Element> {
    let mut run = vec![first];
    while queue.front().is_some_and(&belongs) {
        run.extend(queue.pop_front());
    }
    run
}

/// Area runs lose their padding caret either way; only a classifying pass
/// wraps them back into a container.
fn fold_area(
    first: Element,
    queue: &mut VecDeque<Element>,
    options: CompressOptions,
    out: &mut Vec<Element>,
) {
    let area_id = first.area_id.clone();
    let area = first.area.clone();
    let mut run = drain_group(first, queue, |e| e.area_id == area_id);
    for member in run.iter_mut() {
        member.area_id = None;
        member.area = None;
        member.area_index = None;
    }
    let children = compress_run(run, options, false);
    if options.classify_area {
        out.push(Element {
            area_id,
            area,
            ..Element::area(children)
        });
    } else {
        for child in children {
            push_merged(out, child);
        }
    }
}

fn fold_title(first: Element, queue: &mut VecDeque<Element>, options: CompressOptions) -> Element {
    let title_id = first.title_id.clone();
    let level = first.level;
    let title = first.title.clone();
    let mut run = drain_group(first, queue, |e| e.title_id == title_id);
    for member in run.iter_mut() {
        member.title_id = None;
        member.level = None;
        member.title = None;
    }
    Element {
        title_id,
        level,
        title,
        ..Element::container(ElementKind::Title, compress_run(run, options, true))
    }
}

fn fold_list(first: Element, queue: &mut VecDeque<Element>, options: CompressOptions) -> Element {
    let list_id = first.list_id.clone();
    let list_type = first.list_type;
    let list_style = first.list_style;
    let mut run = drain_group(first, queue, |e| e.list_id == list_id);
    for member in run.iter_mut() {
        member.list_id = None;
        member.list_type = None;
        member.list_style = None;
    }
    Element {
        list_id,
        list_type,
        list_style,
        ..Element::container(ElementKind::List, compress_run(run, options, true))
    }
}

/// Re-joins a table split across pages and compresses every cell.
fn fold_table(first: Element, queue: &mut VecDeque<Element>) -> Element {
    let mut table = pick(first);
    if let Some(paging_id) = table.paging_id.take() {
        while queue.front().is_some_and(|next| {
            next.kind == ElementKind::Table && next.paging_id.as_deref() == Some(paging_id.as_str())
        }) {
            let Some(next) = queue.pop_front() else { break };
            table.height = match (table.height, next.height) {
                (Some(a), Some(b)) => Some(a + b),
                (a, b) => a.or(b),
            };
            table.tr_list.extend(next.tr_list);
        }
    }
    let cell_options = CompressOptions {
        classify_area: false,
    };
    table.tr_list = std::mem::take(&mut table.tr_list)
        .into_iter()
        .map(|tr| Tr {
            td_list: tr
                .td_list
                .into_iter()
                .map(|td| compress_cell(td, cell_options))
                .collect(),
            ..tr
        })
        .collect();
    table
}

fn compress_cell(td: Td, options: CompressOptions) -> Td {
    let value = td
        .value
        .into_iter()
        .map(|mut member| {
            member.area_id = None;
            member.area = None;
            member
        })
        .collect();
    Td {
        id: td.id,
        colspan: td.colspan,
        rowspan: td.rowspan,
        value: compress_run(value, options, false),
        vertical_align: td.vertical_align,
        background_color: td.background_color,
        border_types: td.border_types,
        concept_id: td.concept_id,
        ..Default::default()
    }
}

/// Hyperlink and date runs: members become plain text under one container.
fn fold_inline_group(first: Element, queue: &mut VecDeque<Element>, options: CompressOptions) -> Element {
    let kind = first.kind;
    let url = first.url.clone();
    let date_format = first.date_format.clone();
    let group_id = match kind {
        ElementKind::Hyperlink => first.hyperlink_id.clone(),
        _ => first.date_id.clone(),
    };
    let mut run = drain_group(first, queue, |e| {
        e.kind == kind
            && e.value_list.is_empty()
            && match kind {
                ElementKind::Hyperlink => e.hyperlink_id == group_id,
                _ => e.date_id == group_id,
            }
    });
    for member in run.iter_mut() {
        member.kind = ElementKind::Text;
        member.url = None;
        member.date_format = None;
    }
    let children = compress_run(run, options, true);
    match kind {
        ElementKind::Hyperlink => Element {
            url,
            ..Element::container(ElementKind::Hyperlink, children)
        },
        _ => Element {
            date_format,
            ..Element::container(ElementKind::Date, children)
        },
    }
}

/// A run from prefix to postfix folds into a control container. Anything
/// less is an edit in progress: its text stays, its decorations go.
fn fold_control(
    first: Element,
    queue: &mut VecDeque<Element>,
    options: CompressOptions,
    out: &mut Vec<Element>,
) {
    let control_id = first.control_id.clone();
    let run = drain_group(first, queue, |e| e.control_id == control_id);
    let complete = run[0].control_component == Some(ControlComponent::Prefix)
        && run
            .iter()
            .any(|e| e.control_component == Some(ControlComponent::Postfix));

    if !complete {
        log::debug!(
            "incomplete control run {:?} ({} records) kept as text",
            control_id,
            run.len()
        );
        for mut member in run {
            if !member.control_component.is_some_and(|role| role.is_textual()) {
                continue;
            }
            member.control = None;
            member.control_id = None;
            member.control_component = None;
            if member.kind == ElementKind::Control {
                member.kind = ElementKind::Text;
            }
            push_merged(out, pick(member));
        }
        return;
    }

    let prefix = &run[0];
    let mut control: Control = prefix.control.as_deref().cloned().unwrap_or_default();
    control.style.overlay(&prefix.style.control_subset());
    let row_flex = prefix.row_flex;
    let row_margin = prefix.row_margin;

    let value: Vec<Element> = run
        .into_iter()
        .filter(|e| e.control_component == Some(ControlComponent::Value))
        .map(|mut member| {
            member.control = None;
            member.control_id = None;
            member.control_component = None;
            member
        })
        .collect();
    control.value = compress_run(value, options, true);

    out.push(Element {
        control_id,
        row_flex,
        row_margin,
        ..Element::control(control)
    });
}

/// The attributes a compressed record keeps. Layout caches and flat-only
/// group markers are dropped; caret records become real line breaks.
fn pick(element: Element) -> Element {
    Element {
        id: element.id,
        kind: element.kind,
        value: if element.value == ZERO {
            LINE_BREAK.to_string()
        } else {
            element.value
        },
        value_list: element.value_list,
        style: element.style,
        row_flex: element.row_flex,
        row_margin: element.row_margin,
        width: element.width,
        height: element.height,
        group_ids: element.group_ids,
        hide: element.hide,
        title_id: element.title_id,
        level: element.level,
        title: element.title,
        list_id: element.list_id,
        list_type: element.list_type,
        list_style: element.list_style,
        list_wrap: element.list_wrap,
        area_id: element.area_id,
        area: element.area,
        url: element.url,
        date_format: element.date_format,
        control_id: element.control_id,
        control: element.control,
        checkbox: element.checkbox,
        radio: element.radio,
        paging_id: element.paging_id,
        tr_list: element.tr_list,
        colgroup: element.colgroup,
        border_type: element.border_type,
        img_display: element.img_display,
        block: element.block,
        fix_width: element.fix_width,
        dash_array: element.dash_array,
        ..Default::default()
    }
}

/// Appends `next`, merging it into the previous record when both are plain
/// text runs equal in everything but `value`.
fn push_merged(out: &mut Vec<Element>, mut next: Element) {
    if let Some(last) = out.last_mut()
        && last.kind.is_mergeable()
        && next.kind.is_mergeable()
    {
        let value = std::mem::take(&mut next.value);
        let last_value = std::mem::take(&mut last.value);
        let same = *last == next;
        last.value = last_value;
        if same {
            last.value.push_str(&value);
            return;
        }
        next.value = value;
    }
    out.push(next);
}
