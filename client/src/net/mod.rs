//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues REST calls to the gateway through the portal server's
//! `/api` proxy. Wire types live in `portal::types`.

pub mod api;
