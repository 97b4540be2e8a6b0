mod account;
mod chatbot;
mod community;
mod dashboard;
mod doctors;
mod rooms;
mod state;
mod user_dashboard;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use account::{LoginView, SignupView};
pub use chatbot::ChatbotView;
pub use community::CommunityView;
pub use dashboard::DashboardView;
pub use doctors::DoctorsView;
pub use rooms::{RoomDetailView, RoomsView};
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use user_dashboard::UserDashboardView;
