/// Uniform random numbers for the generators.
///
/// Implementations should return values in `[0, 1)`. Scripted sources used in
/// tests may return exactly `1.0`; the generators accept it.
pub trait RandomSource {
    fn uniform01(&mut self) -> f32;
}

impl RandomSource for fastrand::Rng {
    #[inline]
    fn uniform01(&mut self) -> f32 {
        self.f32()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn uniform01(&mut self) -> f32 {
        (**self).uniform01()
    }
}

/// Always returns the same value.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Constant(pub f32);

impl RandomSource for Constant {
    #[inline]
    fn uniform01(&mut self) -> f32 {
        self.0
    }
}

/// Replays a fixed sequence, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct Scripted {
    values: Vec<f32>,
    cursor: usize,
}

impl Scripted {
    /// # Panics
    /// Panics if `values` is empty.
    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "Scripted needs at least one value");
        Self { values, cursor: 0 }
    }

    /// Number of values drawn so far.
    #[inline]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for Scripted {
    fn uniform01(&mut self) -> f32 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
