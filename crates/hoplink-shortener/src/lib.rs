//! URL shortener service implementation (the create side).
//!
//! This crate provides the [`Creator`] trait, its [`ShortenerService`]
//! implementation, and the code generator trait. Core types are
//! re-exported from `hoplink_core`.

pub mod creator;
pub mod error;
pub mod generator;
pub mod model;
pub mod service;

pub use creator::Creator;
pub use error::CreateError;
pub use generator::{CodeGenerator, SeqGenerator, UuidGenerator};
pub use model::{CreateRequest, CreateResponse};
pub use service::ShortenerService;
