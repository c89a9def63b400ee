pub mod random;
pub mod seq;

pub use random::UuidGenerator;
pub use seq::SeqGenerator;

use hoplink_core::ShortCode;

/// Trait for generating short codes.
///
/// Implementations are pure generators that don't interact with storage;
/// the generation scheme itself must make collisions negligible, because
/// no existence check or retry happens downstream.
pub trait CodeGenerator: Send + Sync + 'static {
    /// Generates a fresh short code.
    fn generate(&self) -> ShortCode;
}
