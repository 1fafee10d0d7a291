use std::num::Wrapping;

pub trait Rng<T> {
    fn next(&mut self) -> T;
}

pub struct Pcg32Rng {
    state: u64,
    inc: u64,
}

impl Pcg32Rng {
    // distinct (state, inc) pairs give independent streams
    pub fn seeded(state: u64, inc: u64) -> Self {
        Self { state, inc }
    }
}

impl Default for Pcg32Rng {
    fn default() -> Self {
        Self {
            state: 0x1801_3CAD_3A48_3F72,
            inc: 0x51DB_FCDA_0D6B_21D4,
        }
    }
}

impl Rng<u32> for Pcg32Rng {
    fn next(&mut self) -> u32 {
        let oldstate = Wrapping(self.state);
        self.state = (oldstate * Wrapping(6_364_136_223_846_793_005u64) + Wrapping(self.inc | 1)).0;

        let xorshifted: u32 = (((oldstate >> 18usize) ^ oldstate) >> 27usize).0 as u32;
        let rot: u32 = (oldstate >> 59usize).0 as u32;

        (xorshifted >> rot) | (xorshifted << ((-(rot as i32)) & 31))
    }
}

impl Rng<f32> for Pcg32Rng {
    fn next(&mut self) -> f32 {
        let next_u32: u32 = self.next();
        let u = (next_u32 >> 9) | 0x3f80_0000u32;
        f32::from_bits(u) - 1.0
    }
}
