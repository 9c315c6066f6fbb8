//! Shared portal model for the MedInsight front end.
//!
//! This crate owns everything the `client`, `server` and `cli` crates agree
//! on: the gateway wire schema, endpoint paths, identity-token decoding,
//! role routing, the booking wizard and form validation. It has no browser
//! or network dependencies so all of it is testable natively.

pub mod booking;
pub mod consultation;
pub mod endpoints;
pub mod error;
pub mod filters;
pub mod guard;
pub mod navigation;
pub mod roles;
pub mod session;
pub mod types;
pub mod validation;

pub use error::ApiError;
pub use roles::Role;
pub use session::{Session, SessionError, SessionUser};
