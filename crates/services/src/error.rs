//! Shared error types for the services crate.

use thiserror::Error;

use mindcare_core::CatalogError;
use mindcare_core::model::{DoctorId, ModuleId, PostError, PostId, RoomId};
use storage::sqlite::SqliteInitError;

/// Errors emitted by `RoomService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoomServiceError {
    #[error("room {0} not found")]
    RoomNotFound(RoomId),
    #[error("module {module} not found in room {room}")]
    ModuleNotFound { room: RoomId, module: ModuleId },
    #[error("module {module} in room {room} is locked")]
    ModuleLocked { room: RoomId, module: ModuleId },
}

/// Errors emitted by `DirectoryService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DirectoryError {
    #[error("doctor {0} not found")]
    DoctorNotFound(DoctorId),
}

/// Errors emitted by `CommunityFeed`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FeedError {
    #[error("post {0} not found")]
    PostNotFound(PostId),
    #[error(transparent)]
    Post(#[from] PostError),
}

/// Errors emitted by `ChatSimulator`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChatError {
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("still waiting for the previous reply")]
    ReplyPending,
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
