use mindcare_core::model::{Doctor, DoctorId};

#[derive(Clone, Debug, PartialEq)]
pub struct DoctorCardVm {
    pub id: DoctorId,
    pub name: String,
    pub initials: String,
    pub specialization: String,
    pub rating_label: String,
    pub experience_label: String,
    pub description: String,
}

impl From<&Doctor> for DoctorCardVm {
    fn from(doctor: &Doctor) -> Self {
        Self {
            id: doctor.id(),
            name: doctor.name().to_string(),
            initials: doctor.initials(),
            specialization: doctor.specialization().to_string(),
            rating_label: format!("{:.1}", doctor.rating()),
            experience_label: format!("{} years experience", doctor.experience_years()),
            description: doctor.description().to_string(),
        }
    }
}

#[must_use]
pub fn map_doctor_cards(doctors: &[Doctor]) -> Vec<DoctorCardVm> {
    doctors.iter().map(DoctorCardVm::from).collect()
}

#[must_use]
pub fn results_label(count: usize) -> String {
    match count {
        0 => "No professionals found".to_string(),
        1 => "Found 1 mental health professional".to_string(),
        n => format!("Found {n} mental health professionals"),
    }
}
