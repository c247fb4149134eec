//! Seeded pseudo-random number generator
//!
//! Deterministic PRNG used to draw the computer's choice.
//! Uses a simple but effective xorshift algorithm.

/// Seeded random number generator
///
/// Deterministic: same seed = same sequence
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a new RNG from a 64-bit seed
    pub fn new(seed: u64) -> Self {
        // xorshift has a fixed point at zero
        let mut state = seed ^ 0x517cc1b727220a95;
        if state == 0 {
            state = 0x9e3779b97f4a7c15;
        }

        // Warm up the generator
        let mut rng = Self { state };
        for _ in 0..8 {
            rng.next_u64();
        }

        rng
    }

    /// Create an RNG seeded from the host environment.
    #[cfg(all(feature = "wasm", target_arch = "wasm32"))]
    pub fn from_entropy() -> Self {
        let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
        let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
        Self::new((hi << 32) | lo)
    }

    /// Create an RNG seeded from the host environment.
    #[cfg(not(all(feature = "wasm", target_arch = "wasm32")))]
    pub fn from_entropy() -> Self {
        use std::collections::hash_map::RandomState;
        use std::hash::{BuildHasher, Hasher};
        use std::time::{SystemTime, UNIX_EPOCH};

        let mut hasher = RandomState::new().build_hasher();
        if let Ok(elapsed) = SystemTime::now().duration_since(UNIX_EPOCH) {
            hasher.write_u128(elapsed.as_nanos());
        }
        Self::new(hasher.finish())
    }

    /// Generate next u64
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64*
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545f4914f6cdd1d)
    }

    /// Generate next u32
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Generate a value in range [0, max), without modulo bias
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        // 2^32 mod max: draws below this would over-weight small results
        let threshold = max.wrapping_neg() % max;
        loop {
            let value = self.next_u32();
            if value >= threshold {
                return value % max;
            }
        }
    }

    /// Pick one element uniformly; `None` for an empty slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.next_range(items.len() as u32) as usize;
        items.get(index)
    }
}
