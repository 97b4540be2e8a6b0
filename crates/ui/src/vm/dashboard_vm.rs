use services::DashboardOverview;

use crate::vm::room_vm::{RoomCardVm, map_room_cards};
use crate::vm::time_fmt::plural;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardVm {
    pub rooms_joined_label: String,
    pub modules_label: String,
    pub overall_label: String,
    pub overall_percent: u8,
    pub rooms: Vec<RoomCardVm>,
    /// Rooms with at least one completed module, for "current programs".
    pub active_rooms: Vec<RoomCardVm>,
}

#[must_use]
pub fn map_dashboard(overview: &DashboardOverview) -> DashboardVm {
    let rooms = map_room_cards(&overview.rooms);
    let active_rooms = overview
        .rooms
        .iter()
        .zip(&rooms)
        .filter(|(room, _)| room.completed > 0)
        .map(|(_, card)| card.clone())
        .collect();

    DashboardVm {
        rooms_joined_label: plural(overview.rooms_joined, "room") + " joined",
        modules_label: format!(
            "{} / {} modules completed",
            overview.completed_modules, overview.total_modules
        ),
        overall_label: format!("{}%", overview.overall_percent),
        overall_percent: overview.overall_percent,
        rooms,
        active_rooms,
    }
}
