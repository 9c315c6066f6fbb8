//! Clinic management area.

pub mod dashboard;
pub mod medecins;
pub mod patients;
