/// Small xorshift-style generator used to search for slider magics and to
/// produce random occupancies in tests.
///
/// The sequence depends only on the seed, so a given seed always yields the
/// same magics.
#[derive(Debug, Clone)]
pub struct PRNG {
    state: [u64; 4],
}

impl PRNG {
    pub const fn new(seed: u64) -> Self {
        PRNG {
            state: [
                seed,
                seed.wrapping_mul(2),
                seed.wrapping_div(5),
                seed.wrapping_add(seed.wrapping_div(2)),
            ],
        }
    }

    #[inline]
    pub const fn random_u64(&mut self) -> u64 {
        let [s0, s1, s2, s3] = &mut self.state;

        let t = *s1 << 17;
        *s2 ^= *s0;
        *s3 ^= *s1;
        *s1 ^= *s2;
        *s0 ^= *s3;
        *s2 ^= t;
        *s3 = s3.rotate_left(45);

        *s0
    }

    /// A value with roughly an eighth of its bits set
    #[inline]
    pub const fn random_sparse_u64(&mut self) -> u64 {
        self.random_u64() & self.random_u64() & self.random_u64()
    }
}

impl Default for PRNG {
    fn default() -> Self {
        PRNG::new(0x6B51FF299F6A3AEE)
    }
}
