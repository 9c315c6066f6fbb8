//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Gated pages wrap an inner content component in
//! `DashboardLayout`, so REST calls start only after the guard allows the
//! route.

pub mod admin;
pub mod common;
pub mod forbidden;
pub mod gestionnaire;
pub mod home;
pub mod login;
pub mod medecin;
pub mod not_found;
pub mod patient;
pub mod profile;
pub mod register;
pub mod security;
