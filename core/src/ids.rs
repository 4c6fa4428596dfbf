//! Opaque identifier minting.
//!
//! Identifiers combine a run-scoped random salt with a monotonic
//! per-kind counter: unique within a run by construction, opaque to
//! readers, and fully reproducible from the master seed.

use crate::rng::GeneratorRng;
use crate::types::EntityId;

pub struct IdMinter {
    salt: u32,
    next_user: u64,
    next_session: u64,
}

impl IdMinter {
    /// Draw the run salt from the dedicated id-salt stream.
    pub fn new(rng: &mut GeneratorRng) -> Self {
        Self {
            salt: rng.next_u64() as u32,
            next_user: 0,
            next_session: 0,
        }
    }

    pub fn user_id(&mut self) -> EntityId {
        self.next_user += 1;
        format!("u-{:08x}-{:06}", self.salt, self.next_user)
    }

    pub fn session_id(&mut self) -> EntityId {
        self.next_session += 1;
        format!("s-{:08x}-{:08}", self.salt, self.next_session)
    }
}
