use std::collections::{HashMap, HashSet};

use crate::model::Element;

/// The structural kinds that tie flat records together by a shared id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    Title,
    List,
    Area,
    Hyperlink,
    Date,
    Control,
    Table,
    Row,
    Cell,
}

const GROUP_KINDS: [GroupKind; 9] = [
    GroupKind::Title,
    GroupKind::List,
    GroupKind::Area,
    GroupKind::Hyperlink,
    GroupKind::Date,
    GroupKind::Control,
    GroupKind::Table,
    GroupKind::Row,
    GroupKind::Cell,
];

impl GroupKind {
    pub fn id_of(self, element: &Element) -> Option<&str> {
        match self {
            GroupKind::Title => element.title_id.as_deref(),
            GroupKind::List => element.list_id.as_deref(),
            GroupKind::Area => element.area_id.as_deref(),
            GroupKind::Hyperlink => element.hyperlink_id.as_deref(),
            GroupKind::Date => element.date_id.as_deref(),
            GroupKind::Control => element.control_id.as_deref(),
            GroupKind::Table => element.table_id.as_deref(),
            GroupKind::Row => element.tr_id.as_deref(),
            GroupKind::Cell => element.td_id.as_deref(),
        }
    }
}

/// One id used by two different structural kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCollision {
    pub id: String,
    pub first: GroupKind,
    pub second: GroupKind,
}

/// Finds an id shared by two kinds of group, including inside table cells.
pub fn group_collision(elements: &[Element]) -> Option<GroupCollision> {
    let mut seen: HashMap<&str, GroupKind> = HashMap::new();
    collision_in(elements, &mut seen)
}

fn collision_in<'a>(
    elements: &'a [Element],
    seen: &mut HashMap<&'a str, GroupKind>,
) -> Option<GroupCollision> {
    for element in elements {
        for kind in GROUP_KINDS {
            let Some(id) = kind.id_of(element) else {
                continue;
            };
            match seen.get(id) {
                Some(&first) if first != kind => {
                    return Some(GroupCollision {
                        id: id.to_string(),
                        first,
                        second: kind,
                    });
                }
                Some(_) => {}
                None => {
                    seen.insert(id, kind);
                }
            }
        }
        for td in element.tr_list.iter().flat_map(|tr| tr.td_list.iter()) {
            if let Some(collision) = collision_in(&td.value, seen) {
                return Some(collision);
            }
        }
    }
    None
}

/// Finds a group whose members are not contiguous in `elements`.
pub fn scattered_group(elements: &[Element]) -> Option<(GroupKind, String)> {
    for kind in GROUP_KINDS {
        let mut closed: HashSet<&str> = HashSet::new();
        let mut current: Option<&str> = None;
        for element in elements {
            let id = kind.id_of(element);
            if id == current {
                continue;
            }
            if let Some(previous) = current {
                closed.insert(previous);
            }
            if let Some(id) = id
                && closed.contains(id)
            {
                return Some((kind, id.to_string()));
            }
            current = id;
        }
    }
    elements
        .iter()
        .flat_map(|e| e.tr_list.iter().flat_map(|tr| tr.td_list.iter()))
        .find_map(|td| scattered_group(&td.value))
}

/// Panics if `elements` breaks a flat-sequence invariant.
pub fn check(elements: &[Element]) {
    if let Some(collision) = group_collision(elements) {
        panic!(
            "group id {:?} used as both {:?} and {:?}",
            collision.id, collision.first, collision.second
        );
    }
    if let Some((kind, id)) = scattered_group(elements) {
        panic!("{kind:?} group {id:?} is not contiguous");
    }
}
