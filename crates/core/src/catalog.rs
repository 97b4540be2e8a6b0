//! Static content shipped with the app: rooms, doctors, seed posts and the
//! chatbot's canned lines.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use crate::model::{
    Comment, Doctor, DoctorError, DoctorId, Module, ModuleId, Post, PostId, Room, RoomError,
    RoomId,
};

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("room {room}: {source}")]
    Room {
        room: RoomId,
        #[source]
        source: RoomError,
    },

    #[error(transparent)]
    Doctor(#[from] DoctorError),

    #[error("duplicate room id {0}")]
    DuplicateRoom(RoomId),

    #[error("duplicate doctor id {0}")]
    DuplicateDoctor(DoctorId),

    #[error("duplicate post id {0}")]
    DuplicatePost(PostId),

    #[error("chatbot needs at least one canned response")]
    NoResponses,
}

//
// ─── RAW (SERDE) SHAPES ────────────────────────────────────────────────────────
//

#[derive(Deserialize)]
struct RawCatalog {
    rooms: Vec<RawRoom>,
    doctors: Vec<RawDoctor>,
    posts: Vec<RawPost>,
    chatbot: ChatScript,
    specialties: Vec<String>,
}

#[derive(Deserialize)]
struct RawRoom {
    id: RoomId,
    title: String,
    description: String,
    icon: String,
    modules: Vec<RawModule>,
}

#[derive(Deserialize)]
struct RawModule {
    id: ModuleId,
    day: u32,
    title: String,
    content: String,
    #[serde(default)]
    activities: Vec<String>,
}

#[derive(Deserialize)]
struct RawDoctor {
    id: DoctorId,
    name: String,
    specialization: String,
    rating: f32,
    experience_years: u32,
    description: String,
}

#[derive(Deserialize)]
struct RawPost {
    id: PostId,
    username: String,
    avatar: String,
    message: String,
    likes: u32,
    posted_at: DateTime<Utc>,
    #[serde(default)]
    comments: Vec<RawComment>,
}

#[derive(Deserialize)]
struct RawComment {
    username: String,
    message: String,
}

/// Greeting, canned replies and quick-reply suggestions for the chatbot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatScript {
    pub greeting: String,
    pub responses: Vec<String>,
    #[serde(default)]
    pub quick_replies: Vec<String>,
}

impl RawRoom {
    fn into_room(self) -> Result<Room, CatalogError> {
        let room_id = self.id;
        let wrap = |source| CatalogError::Room {
            room: room_id.clone(),
            source,
        };
        let modules = self
            .modules
            .into_iter()
            .map(|m| Module::new(m.id, m.day, m.title, m.content, m.activities))
            .collect::<Result<Vec<_>, _>>()
            .map_err(wrap)?;
        Room::new(room_id.clone(), self.title, self.description, self.icon, modules).map_err(wrap)
    }
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// Validated, immutable app content.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    rooms: Vec<Room>,
    doctors: Vec<Doctor>,
    posts: Vec<Post>,
    chat: ChatScript,
    specialties: Vec<String>,
}

impl Catalog {
    /// Parse the catalog embedded in this crate.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the embedded JSON is malformed or invalid.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse and validate a catalog document.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` on malformed JSON, invalid rooms or doctors,
    /// duplicate ids, or an empty chatbot response list.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(raw)?;

        let mut room_ids = HashSet::new();
        let mut rooms = Vec::with_capacity(raw.rooms.len());
        for raw_room in raw.rooms {
            if !room_ids.insert(raw_room.id.clone()) {
                return Err(CatalogError::DuplicateRoom(raw_room.id));
            }
            rooms.push(raw_room.into_room()?);
        }

        let mut doctor_ids = HashSet::new();
        let mut doctors = Vec::with_capacity(raw.doctors.len());
        for d in raw.doctors {
            if !doctor_ids.insert(d.id) {
                return Err(CatalogError::DuplicateDoctor(d.id));
            }
            doctors.push(Doctor::new(
                d.id,
                d.name,
                d.specialization,
                d.rating,
                d.experience_years,
                d.description,
            )?);
        }

        let mut post_ids = HashSet::new();
        let mut posts = Vec::with_capacity(raw.posts.len());
        for p in raw.posts {
            if !post_ids.insert(p.id) {
                return Err(CatalogError::DuplicatePost(p.id));
            }
            let comments = p
                .comments
                .into_iter()
                .map(|c| Comment {
                    username: c.username,
                    message: c.message,
                })
                .collect();
            posts.push(Post::from_seed(
                p.id,
                p.username,
                p.avatar,
                p.message,
                p.likes,
                p.posted_at,
                comments,
            ));
        }

        if raw.chatbot.responses.is_empty() {
            return Err(CatalogError::NoResponses);
        }

        Ok(Self {
            rooms,
            doctors,
            posts,
            chat: raw.chatbot,
            specialties: raw.specialties,
        })
    }

    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    #[must_use]
    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id() == id)
    }

    /// Sum of module counts across every room.
    #[must_use]
    pub fn total_modules(&self) -> usize {
        self.rooms.iter().map(Room::module_count).sum()
    }

    #[must_use]
    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    #[must_use]
    pub fn doctor(&self, id: DoctorId) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id() == id)
    }

    /// Seed posts, newest first as listed.
    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    #[must_use]
    pub fn chat(&self) -> &ChatScript {
        &self.chat
    }

    /// Specialization selector options, without the "all" entry.
    #[must_use]
    pub fn specialties(&self) -> &[String] {
        &self.specialties
    }
}
