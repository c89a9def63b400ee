use crate::generator::CodeGenerator;
use hoplink_core::shortcode::CODE_LENGTH;
use hoplink_core::ShortCode;
use uuid::Uuid;

/// Generates short codes from random UUIDs.
///
/// Takes the first 8 characters of a freshly generated v4 UUID, which
/// are always hex digits. 32 random bits keep the collision probability
/// negligible at this system's scale; collisions are not checked for.
#[derive(Debug, Clone, Default)]
pub struct UuidGenerator {}

impl UuidGenerator {
    pub fn new() -> Self {
        Self {}
    }
}

impl CodeGenerator for UuidGenerator {
    fn generate(&self) -> ShortCode {
        let id = Uuid::new_v4().to_string();
        ShortCode::new(&id[..CODE_LENGTH])
    }
}
