use std::sync::Arc;

use storage::Storage;

use mindcare_core::Catalog;

use crate::Clock;
use crate::account_service::AccountService;
use crate::chat_service::ChatSimulator;
use crate::community_service::CommunityFeed;
use crate::dashboard_service::DashboardService;
use crate::directory_service::DirectoryService;
use crate::error::AppServicesError;
use crate::progress_store::ProgressStore;
use crate::room_service::RoomService;

/// Assembles app-facing services over one storage backend and the catalog.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    catalog: Arc<Catalog>,
    progress: ProgressStore,
    rooms: Arc<RoomService>,
    dashboard: Arc<DashboardService>,
    directory: Arc<DirectoryService>,
    accounts: AccountService,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails or the
    /// built-in catalog is invalid.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::from_storage(&storage, clock)
    }

    /// Build services over in-memory storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Catalog` if the built-in catalog is invalid.
    pub fn in_memory(clock: Clock) -> Result<Self, AppServicesError> {
        Self::from_storage(&Storage::in_memory(), clock)
    }

    /// # Errors
    ///
    /// Returns `AppServicesError::Catalog` if the built-in catalog is invalid.
    pub fn from_storage(storage: &Storage, clock: Clock) -> Result<Self, AppServicesError> {
        let catalog = Arc::new(Catalog::builtin()?);
        Ok(Self::assemble(
            catalog,
            ProgressStore::new(Arc::clone(&storage.kv)),
            clock,
        ))
    }

    #[must_use]
    pub fn assemble(catalog: Arc<Catalog>, progress: ProgressStore, clock: Clock) -> Self {
        let rooms = Arc::new(RoomService::new(Arc::clone(&catalog), progress.clone()));
        let dashboard = Arc::new(DashboardService::new(
            Arc::clone(&catalog),
            progress.clone(),
        ));
        let directory = Arc::new(DirectoryService::new(Arc::clone(&catalog)));

        Self {
            clock,
            catalog,
            progress,
            rooms,
            dashboard,
            directory,
            accounts: AccountService::new(),
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn progress(&self) -> ProgressStore {
        self.progress.clone()
    }

    #[must_use]
    pub fn rooms(&self) -> Arc<RoomService> {
        Arc::clone(&self.rooms)
    }

    #[must_use]
    pub fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard)
    }

    #[must_use]
    pub fn directory(&self) -> Arc<DirectoryService> {
        Arc::clone(&self.directory)
    }

    #[must_use]
    pub fn accounts(&self) -> AccountService {
        self.accounts
    }

    /// A fresh feed seeded from the catalog.
    #[must_use]
    pub fn community_feed(&self) -> CommunityFeed {
        CommunityFeed::new(&self.catalog, self.clock)
    }

    /// A fresh chat transcript.
    #[must_use]
    pub fn chat_simulator(&self) -> ChatSimulator {
        ChatSimulator::new(self.catalog.chat(), self.clock)
    }
}
