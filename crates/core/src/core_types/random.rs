//! Random source consumed by the direction helpers.
//!
//! Every `rand::Rng` is a [`RandomSource`], so a seeded `StdRng` gives
//! reproducible directions. Scripted sources can implement the trait directly.

use rand::Rng;

/// Uniform `f32` generator.
pub trait RandomSource {
    /// Uniform sample in `[0, 1)`.
    fn uniform(&mut self) -> f32;

    /// Uniform sample in `[low, high)`.
    fn uniform_range(&mut self, low: f32, high: f32) -> f32 {
        low + (high - low) * self.uniform()
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    #[inline]
    fn uniform(&mut self) -> f32 {
        self.random::<f32>()
    }

    #[inline]
    fn uniform_range(&mut self, low: f32, high: f32) -> f32 {
        // random_range panics on an empty range
        if low < high {
            self.random_range(low..high)
        } else {
            low
        }
    }
}
