#![forbid(unsafe_code)]

pub mod account_service;
pub mod app_services;
pub mod chat_service;
pub mod community_service;
pub mod dashboard_service;
pub mod directory_service;
pub mod error;
pub mod progress_store;
pub mod room_service;

pub use mindcare_core::Clock;

pub use account_service::AccountService;
pub use app_services::AppServices;
pub use chat_service::{
    ChatExchange, ChatSimulator, Delay, PendingReply, RandomSource, ThreadRandom, TokioDelay,
};
pub use community_service::CommunityFeed;
pub use dashboard_service::{DashboardOverview, DashboardService};
pub use directory_service::DirectoryService;
pub use error::{AppServicesError, ChatError, DirectoryError, FeedError, RoomServiceError};
pub use progress_store::{PROGRESS_STORAGE_KEY, ProgressStore};
pub use room_service::{RoomDetail, RoomOverview, RoomService};
