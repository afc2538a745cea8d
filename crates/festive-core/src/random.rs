//! Injectable randomness.
//!
//! Every randomized style value is drawn through `RandomSource`, so a test
//! can hand in a scripted closure and assert exact values, while the browser
//! build uses an entropy-seeded `StdRng`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait RandomSource {
    /// Uniform sample in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<F: FnMut() -> f64> RandomSource for F {
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// Adapter over any `rand` generator.
pub struct RngSource<R: Rng>(pub R);

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Uniform sample in `[lo, hi)`.
#[inline]
pub fn uniform(src: &mut dyn RandomSource, (lo, hi): (f64, f64)) -> f64 {
    lo + src.next_unit() * (hi - lo)
}

/// Uniformly chosen element. Panics on an empty slice.
#[inline]
pub fn pick<'a, T>(src: &mut dyn RandomSource, items: &'a [T]) -> &'a T {
    let i = (src.next_unit() * items.len() as f64).floor() as usize;
    // a misbehaving source returning 1.0 must not index past the end
    &items[i.min(items.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_sources() {
        let mut values = [0.25, 0.75].into_iter().cycle();
        let mut src = move || values.next().unwrap_or(0.0);
        assert_eq!(src.next_unit(), 0.25);
        assert_eq!(src.next_unit(), 0.75);
        assert_eq!(src.next_unit(), 0.25);
    }

    #[test]
    fn uniform_maps_unit_interval() {
        let mut zero = || 0.0;
        let mut half = || 0.5;
        assert_eq!(uniform(&mut zero, (5.0, 10.0)), 5.0);
        assert_eq!(uniform(&mut half, (5.0, 10.0)), 7.5);
        assert!((uniform(&mut half, (0.2, 1.0)) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn pick_covers_every_slot_and_clamps() {
        let items = ["a", "b", "c", "d", "e"];
        let mut lo = || 0.0;
        let mut hi = || 0.999;
        let mut over = || 1.0;
        let mut mid = || 0.45;
        assert_eq!(*pick(&mut lo, &items), "a");
        assert_eq!(*pick(&mut mid, &items), "c");
        assert_eq!(*pick(&mut hi, &items), "e");
        assert_eq!(*pick(&mut over, &items), "e");
    }

    #[test]
    fn seeded_rng_is_in_range_and_deterministic() {
        let mut a = RngSource::seeded(42);
        let mut b = RngSource::seeded(42);
        for _ in 0..256 {
            let x = a.next_unit();
            assert!((0.0..1.0).contains(&x));
            assert_eq!(x, b.next_unit());
        }
    }
}
