/*!
This module contains configuration constants for the randomized property tests.

The `large_tests` feature trades run time for coverage by generating more and longer sequences.
*/

/// The number of randomized cases generated per property.
#[cfg(not(feature = "large_tests"))]
pub(crate) const PROPERTY_TEST_ITERATIONS: usize = 200;

/// The number of randomized cases generated per property.
#[cfg(feature = "large_tests")]
pub(crate) const PROPERTY_TEST_ITERATIONS: usize = 20_000;

/// The maximum length of a randomly generated sequence of records.
#[cfg(not(feature = "large_tests"))]
pub(crate) const MAX_SEQUENCE_LENGTH: usize = 64;

/// The maximum length of a randomly generated sequence of records.
#[cfg(feature = "large_tests")]
pub(crate) const MAX_SEQUENCE_LENGTH: usize = 1024;

/**
Upper bound (exclusive) for generated record fields.

Random records frequently collide on individual fields at this bound.
*/
pub(crate) const MAX_FIELD_VALUE: u32 = 4;

/// Seed for the random number generator so that failures can be reproduced.
pub(crate) const RNG_SEED: u64 = 0x5241_494e;
