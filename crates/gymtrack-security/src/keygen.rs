//! Random session key material

use rand::distr::Alphanumeric;
use rand::Rng;

/// Generates a random alphanumeric string of the given length from the
/// thread-local CSPRNG. Uniqueness against live keys is the caller's job.
pub fn random_key(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
