//! Reactive state provided at the app root.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain structs wrapped in `RwSignal` contexts so the logic stays testable
//! without a browser.

pub mod auth;
pub mod toast;
