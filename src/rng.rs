//! Uniform random draws for die rolls.

/// Source of raw 32-bit entropy words.
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    /// Uniform draw in `1..=upper`.
    ///
    /// Rejection sampling keeps the distribution flat; a bare modulo would
    /// bias low faces on dice whose side count does not divide 2^32.
    fn uniform(&mut self, upper: u32) -> u32 {
        debug_assert!(upper > 0);
        let zone = u32::MAX - u32::MAX % upper;
        loop {
            let v = self.next_u32();
            if v < zone {
                return v % upper + 1;
            }
        }
    }
}

/// Small xorshift PRNG - deterministic source for host tests.
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    pub const fn new(seed: u32) -> Self {
        // xorshift gets stuck at zero
        Self {
            state: if seed == 0 { 0xDEAD_BEEF } else { seed },
        }
    }
}

impl RandomSource for XorShift32 {
    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

/// Hardware RNG peripheral adapter.
#[cfg(feature = "embedded")]
pub struct HardwareRng<'d> {
    inner: embassy_nrf::rng::Rng<'d, embassy_nrf::peripherals::RNG>,
}

#[cfg(feature = "embedded")]
impl<'d> HardwareRng<'d> {
    pub fn new(inner: embassy_nrf::rng::Rng<'d, embassy_nrf::peripherals::RNG>) -> Self {
        Self { inner }
    }
}

#[cfg(feature = "embedded")]
impl RandomSource for HardwareRng<'_> {
    fn next_u32(&mut self) -> u32 {
        let mut bytes = [0u8; 4];
        self.inner.blocking_fill_bytes(&mut bytes);
        u32::from_le_bytes(bytes)
    }
}
