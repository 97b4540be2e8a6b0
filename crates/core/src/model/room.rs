use std::collections::HashSet;

use thiserror::Error;

use crate::model::ids::{ModuleId, RoomId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoomError {
    #[error("room title cannot be empty")]
    EmptyTitle,

    #[error("module title cannot be empty")]
    EmptyModuleTitle,

    #[error("module day must be >= 1")]
    InvalidDay,

    #[error("duplicate module id {0} in room")]
    DuplicateModule(ModuleId),
}

//
// ─── MODULE ────────────────────────────────────────────────────────────────────
//

/// One day's unit of content within a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    id: ModuleId,
    day: u32,
    title: String,
    content: String,
    activities: Vec<String>,
}

impl Module {
    /// Creates a validated module.
    ///
    /// # Errors
    ///
    /// Returns `RoomError::EmptyModuleTitle` for a blank title and
    /// `RoomError::InvalidDay` when `day` is zero.
    pub fn new(
        id: ModuleId,
        day: u32,
        title: impl Into<String>,
        content: impl Into<String>,
        activities: Vec<String>,
    ) -> Result<Self, RoomError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(RoomError::EmptyModuleTitle);
        }
        if day == 0 {
            return Err(RoomError::InvalidDay);
        }

        Ok(Self {
            id,
            day,
            title,
            content: content.into(),
            activities,
        })
    }

    #[must_use]
    pub fn id(&self) -> ModuleId {
        self.id
    }

    #[must_use]
    pub fn day(&self) -> u32 {
        self.day
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn activities(&self) -> &[String] {
        &self.activities
    }
}

//
// ─── ROOM ──────────────────────────────────────────────────────────────────────
//

/// A themed multi-day program made of ordered modules.
///
/// Module order is the unlock order; day numbers are display-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    id: RoomId,
    title: String,
    description: String,
    icon: String,
    modules: Vec<Module>,
}

impl Room {
    /// Creates a validated room.
    ///
    /// # Errors
    ///
    /// Returns `RoomError::EmptyTitle` for a blank title and
    /// `RoomError::DuplicateModule` if two modules share an id.
    pub fn new(
        id: RoomId,
        title: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
        modules: Vec<Module>,
    ) -> Result<Self, RoomError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(RoomError::EmptyTitle);
        }

        let mut seen = HashSet::with_capacity(modules.len());
        for module in &modules {
            if !seen.insert(module.id()) {
                return Err(RoomError::DuplicateModule(module.id()));
            }
        }

        Ok(Self {
            id,
            title,
            description: description.into(),
            icon: icon.into(),
            modules,
        })
    }

    #[must_use]
    pub fn id(&self) -> &RoomId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    #[must_use]
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    #[must_use]
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    #[must_use]
    pub fn module(&self, id: ModuleId) -> Option<&Module> {
        self.modules.iter().find(|m| m.id() == id)
    }

    /// Position of the module in unlock order.
    #[must_use]
    pub fn position_of(&self, id: ModuleId) -> Option<usize> {
        self.modules.iter().position(|m| m.id() == id)
    }

    /// Number of days the program spans (highest module day).
    #[must_use]
    pub fn duration_days(&self) -> u32 {
        self.modules.iter().map(Module::day).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(id: u32, day: u32) -> Module {
        Module::new(ModuleId::new(id), day, format!("Day {day}"), "", vec![]).unwrap()
    }

    #[test]
    fn module_rejects_blank_title_and_day_zero() {
        assert_eq!(
            Module::new(ModuleId::new(1), 1, "  ", "", vec![]),
            Err(RoomError::EmptyModuleTitle)
        );
        assert_eq!(
            Module::new(ModuleId::new(1), 0, "Intro", "", vec![]),
            Err(RoomError::InvalidDay)
        );
    }

    #[test]
    fn room_rejects_duplicate_module_ids() {
        let err = Room::new(
            RoomId::new("sleep"),
            "Sleep",
            "",
            "🌙",
            vec![module(1, 1), module(1, 2)],
        )
        .unwrap_err();
        assert_eq!(err, RoomError::DuplicateModule(ModuleId::new(1)));
    }

    #[test]
    fn room_lookups_follow_array_order() {
        let room = Room::new(
            RoomId::new("sleep"),
            "Sleep",
            "",
            "🌙",
            vec![module(10, 2), module(3, 1)],
        )
        .unwrap();

        assert_eq!(room.position_of(ModuleId::new(10)), Some(0));
        assert_eq!(room.position_of(ModuleId::new(3)), Some(1));
        assert_eq!(room.module(ModuleId::new(99)), None);
        assert_eq!(room.duration_days(), 2);
    }

    #[test]
    fn empty_room_is_allowed() {
        let room = Room::new(RoomId::new("empty"), "Empty", "", "", vec![]).unwrap();
        assert_eq!(room.module_count(), 0);
        assert_eq!(room.duration_days(), 0);
    }
}
