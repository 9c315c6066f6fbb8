//! Browser-facing helpers shared by pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Storage, native dialogs and task spawning compile to no-ops without the
//! `hydrate` feature, so server rendering and native tests never touch
//! `web_sys`.

pub mod auth;
pub mod config;
pub mod dialog;
pub mod format;
pub mod storage;
pub mod task;
