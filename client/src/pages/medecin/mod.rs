//! Médecin area: daily agenda, patient files, consultations, schedule and
//! the diagnosis assistant.

pub mod appointments;
pub mod assistant;
pub mod consultation;
pub mod dashboard;
pub mod patient_detail;
pub mod patients;
pub mod schedule;
