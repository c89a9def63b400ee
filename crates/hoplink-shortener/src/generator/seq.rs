use crate::generator::CodeGenerator;
use hoplink_core::ShortCode;

/// A deterministic short code generator using a sequential counter.
///
/// Produces codes like "hp000000", "hp000001", etc. A two-character
/// prefix plus six counter digits keeps the code at the standard eight
/// characters. Intended for tests that need stable codes.
#[derive(Debug)]
pub struct SeqGenerator {
    counter: std::sync::atomic::AtomicU64,
    prefix: String,
}

impl Clone for SeqGenerator {
    fn clone(&self) -> Self {
        Self {
            counter: std::sync::atomic::AtomicU64::new(
                self.counter.load(std::sync::atomic::Ordering::SeqCst),
            ),
            prefix: self.prefix.clone(),
        }
    }
}

impl SeqGenerator {
    /// Creates a new sequential generator with a custom prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            counter: std::sync::atomic::AtomicU64::new(0),
            prefix: prefix.into(),
        }
    }

    /// Creates a new sequential generator starting from a specific
    /// counter value.
    pub fn with_offset(prefix: impl Into<String>, offset: u64) -> Self {
        Self {
            counter: std::sync::atomic::AtomicU64::new(offset),
            prefix: prefix.into(),
        }
    }
}

impl CodeGenerator for SeqGenerator {
    fn generate(&self) -> ShortCode {
        let count = self
            .counter
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        ShortCode::new(format!("{}{:06}", self.prefix, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_sequential_codes() {
        let generator = SeqGenerator::with_prefix("hp");

        assert_eq!(generator.generate().as_str(), "hp000000");
        assert_eq!(generator.generate().as_str(), "hp000001");
        assert_eq!(generator.generate().as_str(), "hp000002");
    }

    #[test]
    fn with_offset_starts_at_offset() {
        let generator = SeqGenerator::with_offset("hp", 1000);

        assert_eq!(generator.generate().as_str(), "hp001000");
        assert_eq!(generator.generate().as_str(), "hp001001");
    }

    #[test]
    fn generator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SeqGenerator>();
    }
}
