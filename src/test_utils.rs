/*!
Shared fixtures for unit tests.
*/

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{MAX_FIELD_VALUE, MAX_SEQUENCE_LENGTH, RNG_SEED};

const PUNCTUATION: [&str; 3] = ["!", "?", "."];

/// Install a logger for the test run.
pub(crate) fn setup() {
    let _ = env_logger::builder()
        // Include all events in tests
        .filter_level(log::LevelFilter::max())
        // Ensure events are captured by `cargo test`
        .is_test(true)
        // Ignore errors initializing the logger if tests race to configure it
        .try_init();
}

/// A record with a few orderable fields and a unique identifier.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Record {
    pub(crate) hello: u32,
    pub(crate) world: u32,
    pub(crate) bang: String,

    /// Unique within a generated sequence. Ordering by this field last removes all ties.
    pub(crate) id: usize,
}

impl Record {
    pub(crate) fn new(hello: u32, world: u32, bang: &str, id: usize) -> Self {
        Self {
            hello,
            world,
            bang: bang.to_string(),
            id,
        }
    }
}

/// Create a deterministic random number generator.
pub(crate) fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Generate a single record with random fields.
pub(crate) fn random_record(rng: &mut StdRng, id: usize) -> Record {
    let bang = PUNCTUATION[rng.gen_range(0..PUNCTUATION.len())];
    Record::new(
        rng.gen_range(0..MAX_FIELD_VALUE),
        rng.gen_range(0..MAX_FIELD_VALUE),
        bang,
        id,
    )
}

/// Generate a sequence of random records with unique ids.
pub(crate) fn random_records(rng: &mut StdRng) -> Vec<Record> {
    let length = rng.gen_range(0..=MAX_SEQUENCE_LENGTH);
    (0..length).map(|id| random_record(rng, id)).collect()
}
