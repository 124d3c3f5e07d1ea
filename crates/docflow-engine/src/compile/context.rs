//! Structural context: the table/title/list/area/row attributes a record
//! inherits from where it sits in the document.

use crate::model::Element;
use crate::text::ZERO;

/// Groups of context attributes that travel together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextGroup {
    /// `td_id`, `tr_id`, `table_id`
    Table,
    /// `level`, `title_id`, `title`
    Title,
    /// `list_id`, `list_type`, `list_style`
    List,
    /// `area_id`, `area`
    Area,
    /// `row_flex`, `row_margin`
    Row,
}

/// Every context group carried by an element inside its container.
pub const ELEMENT_CONTEXT: [ContextGroup; 4] = [
    ContextGroup::Table,
    ContextGroup::Title,
    ContextGroup::List,
    ContextGroup::Area,
];

/// A blank record carrying only `source`'s structural and row context.
pub fn context_of(source: &Element) -> Element {
    let mut context = Element::default();
    assign(
        &mut context,
        source,
        &[
            ContextGroup::Table,
            ContextGroup::Title,
            ContextGroup::List,
            ContextGroup::Area,
            ContextGroup::Row,
        ],
    );
    context
}

/// Copies each context attribute of `context` onto `target` where `target`
/// has none of its own.
pub fn fill_context(target: &mut Element, context: &Element) {
    macro_rules! fill {
        ($($field:ident),*) => {
            $(if target.$field.is_none() {
                target.$field = context.$field.clone();
            })*
        };
    }
    fill!(
        td_id, tr_id, table_id, level, title_id, title, list_id, list_type, list_style, area_id,
        area, row_flex, row_margin
    );
}

/// Overwrites the attributes of `groups` on `target` with `source`'s, clearing
/// those `source` leaves unset.
pub fn assign(target: &mut Element, source: &Element, groups: &[ContextGroup]) {
    for group in groups {
        match group {
            ContextGroup::Table => {
                target.td_id = source.td_id.clone();
                target.tr_id = source.tr_id.clone();
                target.table_id = source.table_id.clone();
            }
            ContextGroup::Title => {
                target.level = source.level;
                target.title_id = source.title_id.clone();
                target.title = source.title.clone();
            }
            ContextGroup::List => {
                target.list_id = source.list_id.clone();
                target.list_type = source.list_type;
                target.list_style = source.list_style;
            }
            ContextGroup::Area => {
                target.area_id = source.area_id.clone();
                target.area = source.area.clone();
            }
            ContextGroup::Row => {
                target.row_flex = source.row_flex;
                target.row_margin = source.row_margin;
            }
        }
    }
}

/// The record whose context new content at `index` should take.
///
/// A non-list line start followed by real content in the same area defers to
/// that content.
pub fn anchor_element(elements: &[Element], index: usize) -> Option<&Element> {
    let anchor = elements.get(index)?;
    match elements.get(index + 1) {
        Some(next)
            if anchor.list_id.is_none()
                && anchor.value == ZERO
                && next.value != ZERO
                && anchor.area_id == next.area_id =>
        {
            Some(next)
        }
        _ => Some(anchor),
    }
}

#[derive(Debug, Clone, Default)]
pub struct InheritOptions {
    /// Stop inheriting list/title context once the inserted content breaks a line.
    pub break_when_wrap: bool,
    /// Groups never copied.
    pub ignore: Vec<ContextGroup>,
    /// Design mode copies title context even from disabled titles.
    pub design_mode: bool,
}

/// Gives records about to be inserted at `anchor_index` of `source` the
/// context of the record they are inserted next to.
pub fn inherit_context(
    source: &[Element],
    targets: &mut [Element],
    anchor_index: usize,
    options: &InheritOptions,
) {
    let Some(anchor) = anchor_element(source, anchor_index) else {
        return;
    };
    let mut anchor = anchor.clone();
    let disabled_title = anchor
        .title
        .as_ref()
        .is_some_and(|title| title.disabled == Some(true));
    if !options.design_mode && disabled_title {
        anchor.level = None;
        anchor.title_id = None;
        anchor.title = None;
    }
    inherit_from(&anchor, targets, options);
}

fn inherit_from(anchor: &Element, targets: &mut [Element], options: &InheritOptions) {
    let allowed = |groups: &[ContextGroup]| -> Vec<ContextGroup> {
        groups
            .iter()
            .copied()
            .filter(|group| !options.ignore.contains(group))
            .collect()
    };
    let mut wrapped = false;
    for target in targets.iter_mut() {
        if options.break_when_wrap
            && anchor.list_id.is_none()
            && crate::text::starts_with_line_break(&target.value)
        {
            wrapped = true;
        }
        if wrapped || (anchor.list_id.is_none() && target.kind == crate::model::ElementKind::List) {
            let groups = allowed(&[ContextGroup::Table, ContextGroup::Row, ContextGroup::Area]);
            assign(target, anchor, &groups);
            for child in target.value_list.iter_mut() {
                assign(child, anchor, &groups);
            }
            continue;
        }
        if !target.value_list.is_empty() {
            inherit_from(anchor, &mut target.value_list, options);
        }
        let mut groups = ELEMENT_CONTEXT.to_vec();
        if !target.is_block() {
            groups.push(ContextGroup::Row);
        }
        assign(target, anchor, &allowed(&groups));
    }
}
