use std::sync::Arc;

use mindcare_core::Catalog;
use mindcare_core::model::{Doctor, DoctorId, DoctorQuery, Notice, SpecialtyFilter};

use crate::error::DirectoryError;

/// Search over the static list of professionals.
///
/// Booking and contacting are placeholders that only produce a [`Notice`].
#[derive(Clone)]
pub struct DirectoryService {
    catalog: Arc<Catalog>,
}

impl DirectoryService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn search(&self, query: &DoctorQuery) -> Vec<Doctor> {
        query.apply(self.catalog.doctors())
    }

    /// Selector options, starting with `All`.
    #[must_use]
    pub fn specialties(&self) -> Vec<SpecialtyFilter> {
        std::iter::once(SpecialtyFilter::All)
            .chain(
                self.catalog
                    .specialties()
                    .iter()
                    .cloned()
                    .map(SpecialtyFilter::Only),
            )
            .collect()
    }

    #[must_use]
    pub fn doctor(&self, id: DoctorId) -> Option<&Doctor> {
        self.catalog.doctor(id)
    }

    /// # Errors
    ///
    /// Returns `DirectoryError::DoctorNotFound` for an unknown id.
    pub fn book_appointment(&self, id: DoctorId) -> Result<Notice, DirectoryError> {
        let doctor = self.require(id)?;
        tracing::info!(doctor = %id, "appointment requested");
        Ok(Notice::new(format!(
            "Booking appointment with {}. A booking form will open here once scheduling is available.",
            doctor.name()
        )))
    }

    /// # Errors
    ///
    /// Returns `DirectoryError::DoctorNotFound` for an unknown id.
    pub fn contact(&self, id: DoctorId) -> Result<Notice, DirectoryError> {
        let doctor = self.require(id)?;
        tracing::info!(doctor = %id, "contact requested");
        Ok(Notice::new(format!(
            "Contacting {}. A message form will open here once messaging is available.",
            doctor.name()
        )))
    }

    fn require(&self, id: DoctorId) -> Result<&Doctor, DirectoryError> {
        self.catalog
            .doctor(id)
            .ok_or(DirectoryError::DoctorNotFound(id))
    }
}
