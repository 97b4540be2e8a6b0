use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::model::ids::DoctorId;

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum DoctorError {
    #[error("doctor name cannot be empty")]
    EmptyName,

    #[error("rating must be within 0..=5, got {0}")]
    InvalidRating(f32),
}

/// A listed mental-health professional.
#[derive(Debug, Clone, PartialEq)]
pub struct Doctor {
    id: DoctorId,
    name: String,
    specialization: String,
    rating: f32,
    experience_years: u32,
    description: String,
}

impl Doctor {
    /// # Errors
    ///
    /// Returns `DoctorError` for a blank name or a rating outside `0..=5`.
    pub fn new(
        id: DoctorId,
        name: impl Into<String>,
        specialization: impl Into<String>,
        rating: f32,
        experience_years: u32,
        description: impl Into<String>,
    ) -> Result<Self, DoctorError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DoctorError::EmptyName);
        }
        if !(0.0..=5.0).contains(&rating) {
            return Err(DoctorError::InvalidRating(rating));
        }

        Ok(Self {
            id,
            name,
            specialization: specialization.into(),
            rating,
            experience_years,
            description: description.into(),
        })
    }

    #[must_use]
    pub fn id(&self) -> DoctorId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn specialization(&self) -> &str {
        &self.specialization
    }

    #[must_use]
    pub fn rating(&self) -> f32 {
        self.rating
    }

    #[must_use]
    pub fn experience_years(&self) -> u32 {
        self.experience_years
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Initials of the name, e.g. `DSJ` for "Dr. Sarah Johnson".
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

//
// ─── QUERY ─────────────────────────────────────────────────────────────────────
//

/// Parse failure for selector strings coming from the UI.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown {kind}: {raw}")]
pub struct ParseQueryError {
    kind: &'static str,
    raw: String,
}

/// Exact specialization selector. `All` passes every doctor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SpecialtyFilter {
    #[default]
    All,
    Only(String),
}

impl SpecialtyFilter {
    #[must_use]
    pub fn matches(&self, doctor: &Doctor) -> bool {
        match self {
            SpecialtyFilter::All => true,
            SpecialtyFilter::Only(specialty) => doctor.specialization() == specialty,
        }
    }
}

impl FromStr for SpecialtyFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == "all" {
            SpecialtyFilter::All
        } else {
            SpecialtyFilter::Only(s.to_owned())
        })
    }
}

impl fmt::Display for SpecialtyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecialtyFilter::All => f.write_str("all"),
            SpecialtyFilter::Only(specialty) => f.write_str(specialty),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Highest rated first.
    #[default]
    Rating,
    /// Most years of experience first.
    Experience,
    /// Alphabetical.
    Name,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Rating, SortKey::Experience, SortKey::Name];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Rating => "rating",
            SortKey::Experience => "experience",
            SortKey::Name => "name",
        }
    }

    fn compare(self, a: &Doctor, b: &Doctor) -> Ordering {
        match self {
            SortKey::Rating => b.rating().total_cmp(&a.rating()),
            SortKey::Experience => b.experience_years().cmp(&a.experience_years()),
            SortKey::Name => a
                .name()
                .to_lowercase()
                .cmp(&b.name().to_lowercase())
                .then_with(|| a.name().cmp(b.name())),
        }
    }
}

impl FromStr for SortKey {
    type Err = ParseQueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rating" => Ok(SortKey::Rating),
            "experience" => Ok(SortKey::Experience),
            "name" => Ok(SortKey::Name),
            other => Err(ParseQueryError {
                kind: "sort key",
                raw: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Search, specialty and sort selection for the directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoctorQuery {
    pub search: String,
    pub specialty: SpecialtyFilter,
    pub sort: SortKey,
}

impl DoctorQuery {
    #[must_use]
    pub fn new(search: impl Into<String>, specialty: SpecialtyFilter, sort: SortKey) -> Self {
        Self {
            search: search.into(),
            specialty,
            sort,
        }
    }

    /// Case-insensitive substring match on name or specialization.
    #[must_use]
    pub fn matches_search(&self, doctor: &Doctor) -> bool {
        let needle = self.search.to_lowercase();
        doctor.name().to_lowercase().contains(&needle)
            || doctor.specialization().to_lowercase().contains(&needle)
    }

    /// Filters then sorts. The sort is stable, so ties keep catalog order.
    #[must_use]
    pub fn apply(&self, doctors: &[Doctor]) -> Vec<Doctor> {
        let mut matched: Vec<Doctor> = doctors
            .iter()
            .filter(|d| self.matches_search(d) && self.specialty.matches(d))
            .cloned()
            .collect();
        matched.sort_by(|a, b| self.sort.compare(a, b));
        matched
    }
}
