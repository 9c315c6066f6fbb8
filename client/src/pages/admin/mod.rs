//! Administration area, shared by administrators and gestionnaires.

pub mod audit;
pub mod dashboard;
pub mod reports;
pub mod users;
