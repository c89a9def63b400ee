//! Core types and traits for the hoplink URL shortener.
//!
//! This crate provides the persisted record model, the short code type,
//! and the object store trait shared by the shortener and redirector
//! services.

pub mod error;
pub mod record;
pub mod shortcode;
pub mod store;

pub use error::StoreError;
pub use record::UrlRecord;
pub use shortcode::ShortCode;
pub use store::ObjectStore;
