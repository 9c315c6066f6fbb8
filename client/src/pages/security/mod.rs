//! Security officer area: audit supervision and monitoring consoles.

pub mod audit_logs;
pub mod dashboard;
