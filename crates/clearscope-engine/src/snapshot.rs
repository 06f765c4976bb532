//! Immutable point-in-time view of one inspection session

use clearscope_domain::{DamageObservation, Room, ScopeItem};
use std::collections::HashMap;

/// Rendered in place of a room name when a reference does not resolve.
pub(crate) const UNKNOWN_ROOM: &str = "unknown room";

/// The read-only inputs every rule shares.
///
/// Borrowed, never cloned: rules are pure functions over this view and the
/// engine never re-fetches mid-run. Dangling `room_id` references resolve
/// to no room rather than failing.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScopeSnapshot<'a> {
    pub rooms: &'a [Room],
    pub damages: &'a [DamageObservation],
    pub items: &'a [ScopeItem],
}

impl<'a> ScopeSnapshot<'a> {
    pub(crate) fn new(
        rooms: &'a [Room],
        damages: &'a [DamageObservation],
        items: &'a [ScopeItem],
    ) -> Self {
        Self {
            rooms,
            damages,
            items,
        }
    }

    /// Scope items that participate in validation.
    pub(crate) fn active_items(&self) -> impl Iterator<Item = &'a ScopeItem> {
        self.items.iter().filter(|item| item.is_active())
    }

    pub(crate) fn room(&self, id: &str) -> Option<&'a Room> {
        self.rooms.iter().find(|room| room.id == id)
    }

    /// Display name for a possibly-dangling room reference.
    pub(crate) fn room_name(&self, room_id: Option<&str>) -> &'a str {
        room_id
            .and_then(|id| self.room(id))
            .map(|room| room.name.as_str())
            .unwrap_or(UNKNOWN_ROOM)
    }

    /// Active items grouped by room reference, groups in first-seen order.
    ///
    /// Items without a room share one group; rules that reason per room
    /// treat that group like any other.
    pub(crate) fn active_by_room(&self) -> Vec<(Option<&'a str>, Vec<&'a ScopeItem>)> {
        let mut order: Vec<Option<&'a str>> = Vec::new();
        let mut groups: HashMap<Option<&'a str>, Vec<&'a ScopeItem>> = HashMap::new();
        for item in self.active_items() {
            let key = item.room_id.as_deref();
            if !groups.contains_key(&key) {
                order.push(key);
            }
            groups.entry(key).or_default().push(item);
        }
        order
            .into_iter()
            .map(|key| {
                let items = groups.remove(&key).unwrap_or_default();
                (key, items)
            })
            .collect()
    }
}
