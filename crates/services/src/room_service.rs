use std::sync::Arc;

use mindcare_core::Catalog;
use mindcare_core::model::{
    Module, ModuleId, ModuleStatus, ProgressRecord, Room, RoomId, module_status, module_statuses,
};

use crate::error::RoomServiceError;
use crate::progress_store::ProgressStore;

/// A room with its progress, as listed on the rooms page and dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomOverview {
    pub room: Room,
    pub completed: usize,
    pub percent: u8,
}

/// A room with the status of every module, in unlock order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomDetail {
    pub room: Room,
    pub statuses: Vec<ModuleStatus>,
    pub completed: usize,
    pub percent: u8,
}

impl RoomDetail {
    fn build(room: &Room, record: &ProgressRecord) -> Self {
        let statuses = module_statuses(room, record);
        let completed = statuses
            .iter()
            .filter(|s| **s == ModuleStatus::Completed)
            .count();
        Self {
            room: room.clone(),
            percent: record.room_percent(room.id(), room.module_count()),
            statuses,
            completed,
        }
    }

    pub fn modules(&self) -> impl Iterator<Item = (&Module, ModuleStatus)> {
        self.room
            .modules()
            .iter()
            .zip(self.statuses.iter().copied())
    }

    #[must_use]
    pub fn status_of(&self, module_id: ModuleId) -> Option<ModuleStatus> {
        self.room
            .position_of(module_id)
            .and_then(|pos| self.statuses.get(pos).copied())
    }
}

/// Rooms from the catalog joined with stored progress.
#[derive(Clone)]
pub struct RoomService {
    catalog: Arc<Catalog>,
    progress: ProgressStore,
}

impl RoomService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, progress: ProgressStore) -> Self {
        Self { catalog, progress }
    }

    pub async fn list_rooms(&self) -> Vec<RoomOverview> {
        let record = self.progress.snapshot().await;
        self.catalog
            .rooms()
            .iter()
            .map(|room| {
                let detail = RoomDetail::build(room, &record);
                RoomOverview {
                    room: detail.room,
                    completed: detail.completed,
                    percent: detail.percent,
                }
            })
            .collect()
    }

    /// Returns `None` when the room does not exist.
    pub async fn room_detail(&self, room_id: &RoomId) -> Option<RoomDetail> {
        let room = self.catalog.room(room_id)?;
        let record = self.progress.snapshot().await;
        Some(RoomDetail::build(room, &record))
    }

    /// Marks an unlocked module complete and returns the refreshed room.
    ///
    /// Completing an already-completed module succeeds without writing.
    ///
    /// # Errors
    ///
    /// Returns `RoomServiceError::RoomNotFound` or `ModuleNotFound` for unknown
    /// ids, and `ModuleLocked` if the preceding module is not complete yet.
    pub async fn complete_module(
        &self,
        room_id: &RoomId,
        module_id: ModuleId,
    ) -> Result<RoomDetail, RoomServiceError> {
        let room = self
            .catalog
            .room(room_id)
            .ok_or_else(|| RoomServiceError::RoomNotFound(room_id.clone()))?;
        let index = room
            .position_of(module_id)
            .ok_or_else(|| RoomServiceError::ModuleNotFound {
                room: room_id.clone(),
                module: module_id,
            })?;

        let record = self.progress.snapshot().await;
        let status = module_status(room.modules(), index, |id| record.is_complete(room_id, id));
        match status {
            ModuleStatus::Locked => {
                return Err(RoomServiceError::ModuleLocked {
                    room: room_id.clone(),
                    module: module_id,
                });
            }
            ModuleStatus::Completed => return Ok(RoomDetail::build(room, &record)),
            ModuleStatus::Available => {}
        }

        self.progress.mark_complete(room_id, module_id).await;
        let record = self.progress.snapshot().await;
        Ok(RoomDetail::build(room, &record))
    }

    /// # Errors
    ///
    /// Returns `RoomServiceError::RoomNotFound` for an unknown room.
    pub async fn reset_room(&self, room_id: &RoomId) -> Result<(), RoomServiceError> {
        if self.catalog.room(room_id).is_none() {
            return Err(RoomServiceError::RoomNotFound(room_id.clone()));
        }
        self.progress.reset_room(room_id).await;
        Ok(())
    }
}
