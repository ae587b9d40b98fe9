//! Band scale for categorical axes
//!
//! Maps each value of an ordered domain to an equal-width slot along one
//! axis. Cells and axis ticks both read positions from the same scale, so a
//! cell always sits under its label.

use indexmap::{Equivalent, IndexSet};
use serde::Serialize;
use std::hash::Hash;

/// Inner padding used when none is configured
pub const DEFAULT_PADDING_INNER: f64 = 0.1;

/// Categorical band scale
///
/// For `N` domain values over an extent of length `L` with inner padding `p`:
/// - `step = L / N`
/// - `bandwidth = step * (1 - p)`
/// - `position(v) = index(v) * step` (band starts at the slot start)
/// - `center(v) = position(v) + bandwidth / 2` (tick anchor)
///
/// Duplicate domain values collapse onto their first occurrence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandScale<T: Eq + Hash> {
    domain: IndexSet<T>,
    length: f64,
    padding_inner: f64,
}

impl<T: Eq + Hash> BandScale<T> {
    /// Create scale over `domain` spanning `length` units, default padding
    #[must_use]
    pub fn new(domain: impl IntoIterator<Item = T>, length: f64) -> Self {
        Self {
            domain: domain.into_iter().collect(),
            length: if length.is_finite() { length.max(0.0) } else { 0.0 },
            padding_inner: DEFAULT_PADDING_INNER,
        }
    }

    /// Set inner padding ratio, clamped to `[0, 1]`
    #[must_use]
    pub fn with_padding_inner(mut self, padding: f64) -> Self {
        self.padding_inner = if padding.is_nan() {
            DEFAULT_PADDING_INNER
        } else {
            padding.clamp(0.0, 1.0)
        };
        self
    }

    /// Domain values in order
    pub fn domain(&self) -> impl Iterator<Item = &T> + '_ {
        self.domain.iter()
    }

    /// Number of bands
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.domain.len()
    }

    /// True when the domain is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    /// Extent length
    #[inline]
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Inner padding ratio
    #[inline]
    #[must_use]
    pub fn padding_inner(&self) -> f64 {
        self.padding_inner
    }

    /// Slot width; zero for an empty domain
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn step(&self) -> f64 {
        if self.domain.is_empty() {
            0.0
        } else {
            self.length / self.domain.len() as f64
        }
    }

    /// Drawn width of each band
    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding_inner)
    }

    /// Slot index of `value`
    #[inline]
    #[must_use]
    pub fn index_of<Q>(&self, value: &Q) -> Option<usize>
    where
        Q: ?Sized + Hash + Equivalent<T>,
    {
        self.domain.get_index_of(value)
    }

    /// Band start for `value`; `None` when it is not in the domain
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn position<Q>(&self, value: &Q) -> Option<f64>
    where
        Q: ?Sized + Hash + Equivalent<T>,
    {
        self.index_of(value).map(|i| i as f64 * self.step())
    }

    /// Band center for `value`, where its tick is drawn
    #[must_use]
    pub fn center<Q>(&self, value: &Q) -> Option<f64>
    where
        Q: ?Sized + Hash + Equivalent<T>,
    {
        self.position(value).map(|start| start + self.bandwidth() / 2.0)
    }

    /// Every value with its band start, in domain order
    #[allow(clippy::cast_precision_loss)]
    pub fn bands(&self) -> impl Iterator<Item = (&T, f64)> + '_ {
        let step = self.step();
        self.domain
            .iter()
            .enumerate()
            .map(move |(i, value)| (value, i as f64 * step))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn bands_are_equal_slots() {
        let scale = BandScale::new(["High", "Low", "Medium"], 300.0);

        assert!(approx(scale.step(), 100.0));
        assert!(approx(scale.bandwidth(), 90.0));
        assert_eq!(scale.position(&"High"), Some(0.0));
        assert_eq!(scale.position(&"Low"), Some(100.0));
        assert_eq!(scale.position(&"Medium"), Some(200.0));
        assert!(approx(scale.center(&"Low").unwrap(), 145.0));
    }

    #[test]
    fn unknown_value_has_no_position() {
        let scale = BandScale::new(["A"], 10.0);
        assert_eq!(scale.position(&"B"), None);
        assert_eq!(scale.center(&"B"), None);
    }

    #[test]
    fn empty_domain_has_zero_bandwidth() {
        let scale: BandScale<&str> = BandScale::new([], 500.0);
        assert!(scale.is_empty());
        assert!(approx(scale.step(), 0.0));
        assert!(approx(scale.bandwidth(), 0.0));
    }

    #[test]
    fn padding_is_clamped() {
        let scale = BandScale::new(["A", "B"], 100.0).with_padding_inner(1.5);
        assert!(approx(scale.padding_inner(), 1.0));
        assert!(approx(scale.bandwidth(), 0.0));

        let scale = BandScale::new(["A", "B"], 100.0).with_padding_inner(-0.3);
        assert!(approx(scale.bandwidth(), 50.0));

        let scale = BandScale::new(["A"], 100.0).with_padding_inner(f64::NAN);
        assert!(approx(scale.padding_inner(), DEFAULT_PADDING_INNER));
    }

    #[test]
    fn duplicate_domain_values_collapse() {
        let scale = BandScale::new(["A", "B", "A"], 100.0);
        assert_eq!(scale.len(), 2);
        assert_eq!(scale.index_of(&"A"), Some(0));
    }

    #[test]
    fn bands_iterate_in_order() {
        let scale = BandScale::new(["G-01", "G-02"], 40.0);
        let bands: Vec<_> = scale.bands().collect();
        assert_eq!(bands, vec![(&"G-01", 0.0), (&"G-02", 20.0)]);
    }

    #[test]
    fn negative_length_is_zero() {
        let scale = BandScale::new(["A"], -10.0);
        assert!(approx(scale.length(), 0.0));
    }
}
