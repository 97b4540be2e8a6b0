use mindcare_core::model::{ModuleId, ModuleStatus, RoomId};
use services::{RoomDetail, RoomOverview};

use crate::vm::time_fmt::plural;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomCardVm {
    pub id: RoomId,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub duration_label: String,
    pub progress_label: String,
    pub percent: u8,
}

impl From<&RoomOverview> for RoomCardVm {
    fn from(overview: &RoomOverview) -> Self {
        let room = &overview.room;
        Self {
            id: room.id().clone(),
            title: room.title().to_string(),
            description: room.description().to_string(),
            icon: room.icon().to_string(),
            duration_label: plural(room.duration_days() as usize, "day"),
            progress_label: format!(
                "{} of {} complete",
                overview.completed,
                plural(room.module_count(), "module")
            ),
            percent: overview.percent,
        }
    }
}

#[must_use]
pub fn map_room_cards(rooms: &[RoomOverview]) -> Vec<RoomCardVm> {
    rooms.iter().map(RoomCardVm::from).collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleRowVm {
    pub id: ModuleId,
    pub day_label: String,
    pub title: String,
    pub content: String,
    pub activities: Vec<String>,
    pub status: ModuleStatus,
}

impl ModuleRowVm {
    /// Only an open, unfinished module offers the complete button.
    #[must_use]
    pub fn can_complete(&self) -> bool {
        self.status == ModuleStatus::Available
    }

    #[must_use]
    pub fn status_label(&self) -> &'static str {
        match self.status {
            ModuleStatus::Completed => "Completed",
            ModuleStatus::Available => "Available",
            ModuleStatus::Locked => "Locked",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomDetailVm {
    pub id: RoomId,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub program_label: String,
    pub progress_label: String,
    pub percent: u8,
    pub modules: Vec<ModuleRowVm>,
}

#[must_use]
pub fn map_room_detail(detail: &RoomDetail) -> RoomDetailVm {
    let room = &detail.room;
    let modules = detail
        .modules()
        .map(|(module, status)| ModuleRowVm {
            id: module.id(),
            day_label: format!("Day {}", module.day()),
            title: module.title().to_string(),
            content: module.content().to_string(),
            activities: module.activities().to_vec(),
            status,
        })
        .collect();

    RoomDetailVm {
        id: room.id().clone(),
        title: room.title().to_string(),
        description: room.description().to_string(),
        icon: room.icon().to_string(),
        program_label: format!("{}-day program", room.duration_days()),
        progress_label: format!("{}%", detail.percent),
        percent: detail.percent,
        modules,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindcare_core::time::fixed_clock;
    use services::AppServices;

    #[tokio::test]
    async fn detail_rows_follow_unlock_rule() {
        let services = AppServices::in_memory(fixed_clock()).unwrap();
        let room = RoomId::new("anxiety");
        services
            .rooms()
            .complete_module(&room, ModuleId::new(1))
            .await
            .unwrap();

        let detail = services.rooms().room_detail(&room).await.unwrap();
        let vm = map_room_detail(&detail);

        assert_eq!(vm.program_label, "7-day program");
        assert_eq!(vm.progress_label, "14%");
        assert_eq!(vm.modules[0].day_label, "Day 1");
        assert_eq!(vm.modules[0].status_label(), "Completed");
        assert!(!vm.modules[0].can_complete());
        assert!(vm.modules[1].can_complete());
        assert_eq!(vm.modules[2].status, ModuleStatus::Locked);
    }

    #[tokio::test]
    async fn cards_summarise_progress() {
        let services = AppServices::in_memory(fixed_clock()).unwrap();
        let cards = map_room_cards(&services.rooms().list_rooms().await);

        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].duration_label, "7 days");
        assert_eq!(cards[0].progress_label, "0 of 7 modules complete");
        assert_eq!(cards[0].percent, 0);
    }
}
