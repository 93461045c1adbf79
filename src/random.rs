use rand::seq::SliceRandom;
use rand::Rng;

/// The uniform draws a [`RandomQueue`] needs from its generator.
///
/// Every `rand::Rng` is a `RandomSource`, so a seeded
/// `rand::rngs::StdRng` can stand in wherever reproducible draws are
/// wanted.
///
/// [`RandomQueue`]: struct.RandomQueue.html
pub trait RandomSource {
    /// An integer drawn uniformly from `[0, n)`. `n` must be non-zero.
    fn uniform(&mut self, n: usize) -> usize;

    /// A real drawn uniformly from `[0, 1)`.
    fn uniform_real(&mut self) -> f64;

    /// True with probability `p`, which must lie in `[0, 1]`.
    fn bernoulli(&mut self, p: f64) -> bool;

    /// Puts `items` into a uniformly random order.
    fn shuffle<T>(&mut self, items: &mut [T]);
}

impl<R> RandomSource for R
where
    R: Rng,
{
    fn uniform(&mut self, n: usize) -> usize {
        debug_assert!(n > 0);
        self.gen_range(0, n)
    }

    fn uniform_real(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn bernoulli(&mut self, p: f64) -> bool {
        self.gen_bool(p)
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(self);
    }
}
