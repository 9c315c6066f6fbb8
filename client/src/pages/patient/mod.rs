//! Patient area: dashboard, booking, dossier and prescriptions.

pub mod appointments;
pub mod dashboard;
pub mod dossier;
pub mod prescriptions;
