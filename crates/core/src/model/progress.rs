use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::model::ids::{ModuleId, RoomId};
use crate::model::room::{Module, Room};

//
// ─── RECORD ────────────────────────────────────────────────────────────────────
//

/// Completion flags per room and module.
///
/// Serializes as `{ "<room>": { "<module>": true } }`. Flags only ever move
/// from `false` to `true`; the only way back is dropping the whole room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressRecord {
    rooms: BTreeMap<RoomId, BTreeMap<ModuleId, bool>>,
}

impl ProgressRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the module's flag to `true`. Returns `false` if it already was.
    pub fn mark_complete(&mut self, room_id: &RoomId, module_id: ModuleId) -> bool {
        let flags = self.rooms.entry(room_id.clone()).or_default();
        let flag = flags.entry(module_id).or_insert(false);
        if *flag {
            return false;
        }
        *flag = true;
        true
    }

    #[must_use]
    pub fn is_complete(&self, room_id: &RoomId, module_id: ModuleId) -> bool {
        self.rooms
            .get(room_id)
            .and_then(|flags| flags.get(&module_id))
            .copied()
            .unwrap_or(false)
    }

    /// Number of modules flagged `true` for the room.
    #[must_use]
    pub fn completed_count(&self, room_id: &RoomId) -> usize {
        self.rooms
            .get(room_id)
            .map_or(0, |flags| flags.values().filter(|done| **done).count())
    }

    #[must_use]
    pub fn completed_modules(&self, room_id: &RoomId) -> BTreeSet<ModuleId> {
        self.rooms
            .get(room_id)
            .map(|flags| {
                flags
                    .iter()
                    .filter(|(_, done)| **done)
                    .map(|(id, _)| *id)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Drops every flag for the room. Returns `true` if anything was removed.
    pub fn reset_room(&mut self, room_id: &RoomId) -> bool {
        self.rooms.remove(room_id).is_some()
    }

    /// Completion percent for the room given its module count.
    #[must_use]
    pub fn room_percent(&self, room_id: &RoomId, total_modules: usize) -> u8 {
        completion_percent(self.completed_count(room_id), total_modules)
    }

    /// Rooms with at least one recorded flag.
    pub fn rooms(&self) -> impl Iterator<Item = &RoomId> {
        self.rooms.keys()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

//
// ─── PERCENT ───────────────────────────────────────────────────────────────────
//

/// `round(100 * completed / total)`, rounding halves up, clamped to 100.
///
/// Returns 0 when `total` is 0.
#[must_use]
pub fn completion_percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total) as u128;
    let total = total as u128;
    let rounded = (200 * completed + total) / (2 * total);
    u8::try_from(rounded.min(100)).unwrap_or(100)
}

//
// ─── UNLOCK RULE ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleStatus {
    Completed,
    Available,
    Locked,
}

impl ModuleStatus {
    #[must_use]
    pub fn is_locked(self) -> bool {
        matches!(self, ModuleStatus::Locked)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ModuleStatus::Completed => "completed",
            ModuleStatus::Available => "available",
            ModuleStatus::Locked => "locked",
        }
    }
}

/// Status of the module at `index` in `modules`.
///
/// Completed wins over everything. Index 0 is always open; any later index
/// opens only once the module right before it (by position) is complete.
/// An out-of-range index is reported as locked.
pub fn module_status(
    modules: &[Module],
    index: usize,
    is_complete: impl Fn(ModuleId) -> bool,
) -> ModuleStatus {
    let Some(module) = modules.get(index) else {
        return ModuleStatus::Locked;
    };
    if is_complete(module.id()) {
        return ModuleStatus::Completed;
    }
    if index == 0 {
        return ModuleStatus::Available;
    }
    if is_complete(modules[index - 1].id()) {
        ModuleStatus::Available
    } else {
        ModuleStatus::Locked
    }
}

/// Statuses for every module of the room, in module order.
#[must_use]
pub fn module_statuses(room: &Room, record: &ProgressRecord) -> Vec<ModuleStatus> {
    let modules = room.modules();
    (0..modules.len())
        .map(|index| module_status(modules, index, |id| record.is_complete(room.id(), id)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(module_ids: &[u32]) -> Room {
        let modules = module_ids
            .iter()
            .enumerate()
            .map(|(pos, id)| {
                let day = u32::try_from(pos).unwrap() + 1;
                Module::new(ModuleId::new(*id), day, format!("M{id}"), "", vec![]).unwrap()
            })
            .collect();
        Room::new(RoomId::new("anxiety"), "Anxiety", "", "", modules).unwrap()
    }

    #[test]
    fn percent_guards_zero_total() {
        assert_eq!(completion_percent(0, 0), 0);
        assert_eq!(completion_percent(5, 0), 0);
    }

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(completion_percent(2, 4), 50);
        assert_eq!(completion_percent(1, 3), 33);
        assert_eq!(completion_percent(2, 3), 67);
        assert_eq!(completion_percent(1, 8), 13);
        assert_eq!(completion_percent(1, 7), 14);
        assert_eq!(completion_percent(7, 7), 100);
    }

    #[test]
    fn percent_is_clamped() {
        assert_eq!(completion_percent(9, 4), 100);
    }

    #[test]
    fn mark_complete_reports_first_write_only() {
        let mut record = ProgressRecord::new();
        let room_id = RoomId::new("anxiety");
        assert!(record.mark_complete(&room_id, ModuleId::new(1)));
        assert!(!record.mark_complete(&room_id, ModuleId::new(1)));
        assert!(record.is_complete(&room_id, ModuleId::new(1)));
        assert!(!record.is_complete(&room_id, ModuleId::new(2)));
    }

    #[test]
    fn false_flags_do_not_count() {
        let record: ProgressRecord =
            serde_json::from_str(r#"{"anxiety":{"1":true,"2":false,"3":true}}"#).unwrap();
        let room_id = RoomId::new("anxiety");
        assert_eq!(record.completed_count(&room_id), 2);
        assert_eq!(record.room_percent(&room_id, 4), 50);
        assert!(!record.is_complete(&room_id, ModuleId::new(2)));
    }

    #[test]
    fn reset_room_only_touches_that_room() {
        let mut record = ProgressRecord::new();
        let anxiety = RoomId::new("anxiety");
        let stress = RoomId::new("stress");
        record.mark_complete(&anxiety, ModuleId::new(1));
        record.mark_complete(&stress, ModuleId::new(1));

        assert!(record.reset_room(&anxiety));
        assert!(!record.reset_room(&anxiety));
        assert_eq!(record.completed_count(&anxiety), 0);
        assert!(record.is_complete(&stress, ModuleId::new(1)));
    }

    #[test]
    fn serializes_as_nested_object() {
        let mut record = ProgressRecord::new();
        record.mark_complete(&RoomId::new("stress"), ModuleId::new(3));
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"stress":{"3":true}}"#);
    }

    #[test]
    fn first_module_available_second_locked_until_first_done() {
        let room = room(&[1, 2, 3]);
        let mut record = ProgressRecord::new();

        let statuses = module_statuses(&room, &record);
        assert_eq!(
            statuses,
            vec![ModuleStatus::Available, ModuleStatus::Locked, ModuleStatus::Locked]
        );

        record.mark_complete(room.id(), ModuleId::new(1));
        let statuses = module_statuses(&room, &record);
        assert_eq!(
            statuses,
            vec![ModuleStatus::Completed, ModuleStatus::Available, ModuleStatus::Locked]
        );
    }

    #[test]
    fn completed_module_shows_completed_even_when_predecessor_is_not() {
        let room = room(&[1, 2, 3]);
        let mut record = ProgressRecord::new();
        record.mark_complete(room.id(), ModuleId::new(3));

        let statuses = module_statuses(&room, &record);
        assert_eq!(statuses[2], ModuleStatus::Completed);
        assert_eq!(statuses[1], ModuleStatus::Locked);
    }

    #[test]
    fn unlock_follows_position_not_id() {
        let room = room(&[30, 10, 20]);
        let mut record = ProgressRecord::new();
        record.mark_complete(room.id(), ModuleId::new(30));

        let statuses = module_statuses(&room, &record);
        assert_eq!(statuses[1], ModuleStatus::Available);
        assert_eq!(statuses[2], ModuleStatus::Locked);
    }

    #[test]
    fn out_of_range_index_is_locked() {
        let room = room(&[1]);
        assert_eq!(module_status(room.modules(), 5, |_| true), ModuleStatus::Locked);
    }
}
