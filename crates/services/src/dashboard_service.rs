use std::sync::Arc;

use mindcare_core::Catalog;
use mindcare_core::model::completion_percent;

use crate::progress_store::ProgressStore;
use crate::room_service::{RoomOverview, RoomService};

/// Progress across every room, for the dashboard pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardOverview {
    pub rooms: Vec<RoomOverview>,
    /// Rooms with at least one completed module.
    pub rooms_joined: usize,
    pub completed_modules: usize,
    pub total_modules: usize,
    pub overall_percent: u8,
}

#[derive(Clone)]
pub struct DashboardService {
    catalog: Arc<Catalog>,
    rooms: RoomService,
}

impl DashboardService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, progress: ProgressStore) -> Self {
        let rooms = RoomService::new(Arc::clone(&catalog), progress);
        Self { catalog, rooms }
    }

    pub async fn overview(&self) -> DashboardOverview {
        let rooms = self.rooms.list_rooms().await;
        let rooms_joined = rooms.iter().filter(|r| r.completed > 0).count();
        let completed_modules: usize = rooms.iter().map(|r| r.completed).sum();
        let total_modules = self.catalog.total_modules();

        DashboardOverview {
            rooms,
            rooms_joined,
            completed_modules,
            total_modules,
            overall_percent: completion_percent(completed_modules, total_modules),
        }
    }
}
