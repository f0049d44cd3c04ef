// Event identifier generation
// Injectable so stores can be driven deterministically in tests

use uuid::Uuid;

/// Source of fresh, unique event identifiers.
pub trait IdGenerator {
    fn new_id(&mut self) -> String;
}

/// Default generator producing random UUID v4 strings.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn new_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic generator producing `evt-1`, `evt-2`, ... in order.
#[derive(Debug, Default, Clone)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl IdGenerator for SequentialIdGenerator {
    fn new_id(&mut self) -> String {
        self.next += 1;
        format!("evt-{}", self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_generator_produces_unique_ids() {
        let mut generator = UuidGenerator;
        let a = generator.new_id();
        let b = generator.new_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
    }

    #[test]
    fn test_sequential_generator_counts_up() {
        let mut generator = SequentialIdGenerator::default();
        assert_eq!(generator.new_id(), "evt-1");
        assert_eq!(generator.new_id(), "evt-2");
        assert_eq!(generator.new_id(), "evt-3");
    }
}
