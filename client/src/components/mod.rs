//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the portal chrome (layout, navigation, toasts) and the
//! widgets shared between role areas, reading shared state from Leptos
//! context providers.

pub mod audit_table;
pub mod dossier_view;
pub mod form_field;
pub mod layout;
pub mod prescription_document;
pub mod schedule_manager;
pub mod sidebar;
pub mod slot_picker;
pub mod stats_card;
pub mod status_badge;
pub mod toast_host;
pub mod top_navbar;
