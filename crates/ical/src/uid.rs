//! Sources of event identifiers.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::{Builder, Uuid};

/// Produces one version-4 UUID per rendered event.
pub trait UidSource {
    /// Returns the next identifier.
    fn next_uuid(&mut self) -> Uuid;
}

impl<U: UidSource + ?Sized> UidSource for Box<U> {
    fn next_uuid(&mut self) -> Uuid {
        (**self).next_uuid()
    }
}

/// UUIDs drawn from operating-system entropy.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomUids;

impl UidSource for RandomUids {
    fn next_uuid(&mut self) -> Uuid {
        Uuid::new_v4()
    }
}

/// UUIDs drawn from a seeded [`StdRng`], reproducible across runs.
#[derive(Debug, Clone)]
pub struct SeededUids {
    rng: StdRng,
}

impl SeededUids {
    /// Creates a source seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl UidSource for SeededUids {
    fn next_uuid(&mut self) -> Uuid {
        let bytes: [u8; 16] = self.rng.random();
        Builder::from_random_bytes(bytes).into_uuid()
    }
}
