//! Run-scoped key allocation.
//!
//! Every node in one run is keyed from a single trunk seed supplied by the
//! calling indexing system. The project root node uses the seed verbatim;
//! every later key is `{trunk}_{n}` with a monotonically advancing counter.

use crate::LexigraphError;

/// Allocates unique, allocation-ordered string keys for one run.
///
/// The allocator is an explicit instance passed by `&mut` wherever keys are
/// needed; there is no process-wide counter. It is not reentrant: one run,
/// one allocator, one thread.
#[derive(Debug)]
pub struct KeyAllocator {
    seed: String,
    trunk: u64,
    num: u64,
}

impl KeyAllocator {
    /// Parse a trunk seed of the form `"{trunk}"` or `"{trunk}_{n}"`.
    ///
    /// A seed of the second form resumes counting after `n`, so a caller can
    /// continue a key sequence across invocations. Anything else (more than
    /// one separator, empty or non-numeric parts) is rejected with
    /// [`LexigraphError::InvalidSeed`].
    pub fn new(trunk_seed: &str) -> Result<Self, LexigraphError> {
        let invalid = || LexigraphError::InvalidSeed(trunk_seed.to_string());
        let parts: Vec<&str> = trunk_seed.split('_').collect();
        let (trunk, num) = match parts.as_slice() {
            [t] => (t.parse::<u64>().map_err(|_| invalid())?, 0),
            [t, n] => (
                t.parse::<u64>().map_err(|_| invalid())?,
                n.parse::<u64>().map_err(|_| invalid())?,
            ),
            _ => return Err(invalid()),
        };

        Ok(Self {
            seed: trunk_seed.to_string(),
            trunk,
            num,
        })
    }

    /// The key for the run's root node: the trunk seed exactly as supplied.
    pub fn root_key(&self) -> &str {
        &self.seed
    }

    /// Return a fresh key and advance the counter. Never repeats in a run.
    pub fn next(&mut self) -> String {
        self.num += 1;
        format!("{}_{}", self.trunk, self.num)
    }
}
