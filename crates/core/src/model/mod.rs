mod account;
mod chat;
mod community;
mod doctor;
mod ids;
mod progress;
mod room;

pub use ids::{DoctorId, MessageId, ModuleId, ParseIdError, PostId, RoomId};

pub use account::{AccountError, Notice, SignupForm};
pub use chat::{ChatMessage, ChatRole};
pub use community::{Comment, OWN_AVATAR, OWN_USERNAME, Post, PostError};
pub use doctor::{Doctor, DoctorError, DoctorQuery, ParseQueryError, SortKey, SpecialtyFilter};
pub use progress::{
    ModuleStatus, ProgressRecord, completion_percent, module_status, module_statuses,
};
pub use room::{Module, Room, RoomError};
