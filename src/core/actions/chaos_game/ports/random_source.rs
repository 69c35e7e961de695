/// Source of uniform randomness for the chaos game.
///
/// Kept as a trait so the recurrence can be driven by a scripted sequence in
/// tests instead of a real generator.
pub trait RandomSource {
    /// A sample uniformly distributed on `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// An index uniformly distributed on `0..bound`. `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }

    #[inline]
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}
