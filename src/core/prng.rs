// Minimal PRNG (no external crates).
//
// This is NOT cryptographically secure.
// It is used only for spike sampling and reproducible evaluation; tests
// inject a fixed seed to pin sampling outcomes.

#[derive(Debug, Clone)]
pub struct Prng {
    state: u64,
}

impl Prng {
    pub fn new(seed: u64) -> Self {
        // Avoid a zero state.
        let seed = if seed == 0 { 0x9E3779B97F4A7C15 } else { seed };
        Self { state: seed }
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        // xorshift64*
        // Marsaglia / Vigna family. Simple, fast, decent for simulation noise.
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Uniform draw in [0, 1).
    ///
    /// Built from 24 high bits so the conversion to f32 is exact; a full
    /// 32-bit numerator can round up to 2^32 and yield exactly 1.0.
    #[inline]
    pub fn next_f32_01(&mut self) -> f32 {
        let x = self.next_u32() >> 8;
        (x as f32) * (1.0 / (1 << 24) as f32)
    }

    /// One Bernoulli trial with success probability `p`.
    ///
    /// Exact at the endpoints: draws live in [0, 1), so p = 0.0 never
    /// succeeds and p = 1.0 always does.
    #[inline]
    pub fn bernoulli(&mut self, p: f32) -> bool {
        self.next_f32_01() < p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = Prng::new(42);
        let mut b = Prng::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn zero_seed_does_not_stall() {
        let mut rng = Prng::new(0);
        let first = rng.next_u32();
        let second = rng.next_u32();
        assert_ne!(first, second);
    }

    #[test]
    fn draws_stay_in_unit_interval() {
        let mut rng = Prng::new(7);
        for _ in 0..1000 {
            let v = rng.next_f32_01();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn draws_never_round_up_to_one() {
        // Seed 5 emits a raw u32 of 0xFFFFFFCC within the first million
        // draws; naive u32-to-f32 scaling rounds that to exactly 1.0.
        let mut rng = Prng::new(5);
        for i in 0..1_000_000 {
            let v = rng.next_f32_01();
            assert!(v < 1.0, "draw {i} reached {v}");
        }
    }

    #[test]
    fn bernoulli_endpoints_are_exact() {
        let mut rng = Prng::new(9);
        for _ in 0..1000 {
            assert!(!rng.bernoulli(0.0));
        }
        for _ in 0..1000 {
            assert!(rng.bernoulli(1.0));
        }
    }
}
