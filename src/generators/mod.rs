use rand::{SeedableRng, rngs::StdRng};

mod eller;

pub use eller::Eller;

/// Seed selected by the `r` option, which turns randomness off.
pub const FIXED_SEED: u64 = 1;

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}
