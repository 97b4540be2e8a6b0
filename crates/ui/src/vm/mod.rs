mod chat_vm;
mod dashboard_vm;
mod doctor_vm;
mod post_vm;
mod room_vm;
mod time_fmt;

pub use chat_vm::{ChatBubbleVm, map_chat_bubbles};
pub use dashboard_vm::{DashboardVm, map_dashboard};
pub use doctor_vm::{DoctorCardVm, map_doctor_cards, results_label};
pub use post_vm::{PostVm, map_posts};
pub use room_vm::{ModuleRowVm, RoomCardVm, RoomDetailVm, map_room_cards, map_room_detail};
pub use time_fmt::{format_clock_time, plural};
