//! Redirector service implementation (the resolve side).
//!
//! This crate provides the [`Redirector`] trait and its
//! [`RedirectorService`] implementation: look up a short code in the
//! object store, check expiration, and report the redirect target.

pub mod error;
pub mod redirector;
pub mod resolution;
pub mod service;

pub use error::ResolveError;
pub use redirector::Redirector;
pub use resolution::Resolution;
pub use service::RedirectorService;
