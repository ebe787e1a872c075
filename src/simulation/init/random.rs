//! Random source for the automaton
//!
//! One xorshift32 state per world, seeded once at construction and stepped
//! only by the candidate shuffles. This is the sole source of left/right
//! asymmetry, so a recorded seed replays a run exactly.

/// Fallback for seed 0 (a xorshift32 fixed point)
const DEFAULT_SEED: u32 = 0x2545F491;

/// Xorshift32 random number generator
#[inline]
pub(super) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

#[inline]
pub(super) fn sanitize_seed(seed: u32) -> u32 {
    if seed == 0 { DEFAULT_SEED } else { seed }
}

/// Fisher-Yates shuffle: draws one uniform permutation of a small
/// candidate list (never longer than 3 entries here)
pub(super) fn shuffle(dirs: &mut [(i32, i32)], state: &mut u32) {
    for i in (1..dirs.len()).rev() {
        let j = (xorshift32(state) as usize) % (i + 1);
        dirs.swap(i, j);
    }
}

/// Clock-derived seed for `World::new`
pub(super) fn seed_from_clock() -> u32 {
    #[cfg(target_arch = "wasm32")]
    {
        let now = js_sys::Date::now();
        sanitize_seed(now.to_bits() as u32 ^ (now.to_bits() >> 32) as u32)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or(0);
        sanitize_seed(nanos)
    }
}
