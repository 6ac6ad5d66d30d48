use rand::Rng;

#[inline]
pub fn random_range(rng: &mut impl Rng, lo: f32, hi: f32) -> f32 {
    rng.gen_range(lo..=hi)
}

/// One of 0.0, 0.1, ..., 0.9.
#[inline]
pub fn random_tenth(rng: &mut impl Rng) -> f32 {
    rng.gen_range(0..10u8) as f32 / 10.0
}
