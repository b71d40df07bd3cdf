use rand::{prelude::*, rngs::StdRng, rngs::SysRng};

/// Build the session RNG: seeded for reproducibility when a seed is given,
/// seeded from the system RNG otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => {
            use rand::TryRng;
            let seed = SysRng::try_next_u64(&mut SysRng).unwrap();

            StdRng::seed_from_u64(seed)
        }
    }
}
