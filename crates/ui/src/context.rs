use std::sync::Arc;

use mindcare_core::Clock;
use services::{
    AccountService, AppServices, ChatSimulator, CommunityFeed, DashboardService,
    DirectoryService, RoomService,
};

/// Services shared by every view, provided once by the composition root
/// (`crates/app`) through `LaunchBuilder::with_context`.
#[derive(Clone)]
pub struct AppContext {
    services: AppServices,
}

impl AppContext {
    #[must_use]
    pub fn new(services: AppServices) -> Self {
        Self { services }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.services.clock()
    }

    #[must_use]
    pub fn rooms(&self) -> Arc<RoomService> {
        self.services.rooms()
    }

    #[must_use]
    pub fn dashboard(&self) -> Arc<DashboardService> {
        self.services.dashboard()
    }

    #[must_use]
    pub fn directory(&self) -> Arc<DirectoryService> {
        self.services.directory()
    }

    #[must_use]
    pub fn accounts(&self) -> AccountService {
        self.services.accounts()
    }

    /// Each community view starts from the seed posts.
    #[must_use]
    pub fn community_feed(&self) -> CommunityFeed {
        self.services.community_feed()
    }

    /// Each chatbot view starts a new transcript.
    #[must_use]
    pub fn chat_simulator(&self) -> ChatSimulator {
        self.services.chat_simulator()
    }
}
