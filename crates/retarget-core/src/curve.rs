//! Frequency → gain maps and the ascending frequency axis they are walked along.

use std::collections::HashMap;
use std::collections::hash_map;

/// Lowest frequency accepted in a curve, in Hz.
pub const MIN_FREQUENCY_HZ: u32 = 1;

/// Highest frequency accepted in a curve, in Hz.
pub const MAX_FREQUENCY_HZ: u32 = 30_000;

/// A sparse frequency → gain map.
///
/// Keys are integer frequencies in Hz, values are gains in dB. The map has no
/// meaningful order of its own; every stage that needs one walks a
/// [`FrequencyAxis`] alongside it.
///
/// Lookups that treat a missing frequency as 0 dB go through
/// [`Curve::get_or_zero`] so the default stays visible at the call site.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Curve {
    points: HashMap<u32, f64>,
}

impl Curve {
    /// Create an empty curve.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gain at `freq`, if the curve has an entry there.
    pub fn get(&self, freq: u32) -> Option<f64> {
        self.points.get(&freq).copied()
    }

    /// Gain at `freq`, reading a missing entry as 0 dB.
    pub fn get_or_zero(&self, freq: u32) -> f64 {
        self.get(freq).unwrap_or(0.0)
    }

    /// Insert or overwrite the gain at `freq`, returning the previous value.
    pub fn insert(&mut self, freq: u32, gain: f64) -> Option<f64> {
        self.points.insert(freq, gain)
    }

    /// Whether the curve has an entry at `freq`.
    pub fn contains(&self, freq: u32) -> bool {
        self.points.contains_key(&freq)
    }

    /// Number of control points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the curve has no control points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over `(freq, gain)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.points.iter().map(|(&f, &g)| (f, g))
    }

    /// Iterate over the frequencies in unspecified order.
    pub fn frequencies(&self) -> impl Iterator<Item = u32> + '_ {
        self.points.keys().copied()
    }

    /// The ascending axis of this curve's own frequencies.
    pub fn axis(&self) -> FrequencyAxis {
        FrequencyAxis::from_curve(self)
    }

    /// Points present on `axis`, in axis order.
    pub fn points_along(&self, axis: &FrequencyAxis) -> Vec<(u32, f64)> {
        axis.iter()
            .filter_map(|freq| self.get(freq).map(|gain| (freq, gain)))
            .collect()
    }

    /// Largest gain on the curve, ignoring non-finite values.
    pub fn max_gain(&self) -> Option<f64> {
        self.points
            .values()
            .copied()
            .filter(|g| g.is_finite())
            .reduce(f64::max)
    }

    /// Smallest gain on the curve, ignoring non-finite values.
    pub fn min_gain(&self) -> Option<f64> {
        self.points
            .values()
            .copied()
            .filter(|g| g.is_finite())
            .reduce(f64::min)
    }
}

impl FromIterator<(u32, f64)> for Curve {
    fn from_iter<I: IntoIterator<Item = (u32, f64)>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl Extend<(u32, f64)> for Curve {
    fn extend<I: IntoIterator<Item = (u32, f64)>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl<const N: usize> From<[(u32, f64); N]> for Curve {
    fn from(points: [(u32, f64); N]) -> Self {
        points.into_iter().collect()
    }
}

impl IntoIterator for Curve {
    type Item = (u32, f64);
    type IntoIter = hash_map::IntoIter<u32, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

/// Strictly ascending, duplicate-free sequence of frequencies.
///
/// Built as the union of the key sets of the curves being combined. Merge,
/// smoothing, normalization and serialization all iterate in this order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyAxis {
    freqs: Vec<u32>,
}

impl FrequencyAxis {
    /// The sorted union of the frequencies of every curve in `curves`.
    pub fn union<'a>(curves: impl IntoIterator<Item = &'a Curve>) -> Self {
        let mut freqs: Vec<u32> = curves.into_iter().flat_map(Curve::frequencies).collect();
        freqs.sort_unstable();
        freqs.dedup();
        Self { freqs }
    }

    /// The sorted frequencies of a single curve.
    pub fn from_curve(curve: &Curve) -> Self {
        Self::union([curve])
    }

    /// Build an axis from arbitrary frequencies, sorting and deduplicating them.
    pub fn from_frequencies(freqs: impl IntoIterator<Item = u32>) -> Self {
        let mut freqs: Vec<u32> = freqs.into_iter().collect();
        freqs.sort_unstable();
        freqs.dedup();
        Self { freqs }
    }

    /// Number of frequencies on the axis.
    pub fn len(&self) -> usize {
        self.freqs.len()
    }

    /// Whether the axis is empty.
    pub fn is_empty(&self) -> bool {
        self.freqs.is_empty()
    }

    /// Frequency at position `index`.
    pub fn get(&self, index: usize) -> Option<u32> {
        self.freqs.get(index).copied()
    }

    /// Iterate in ascending order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = u32> + '_ {
        self.freqs.iter().copied()
    }

    /// The frequencies as a slice.
    pub fn as_slice(&self) -> &[u32] {
        &self.freqs
    }

    /// Position of the first frequency at or above `freq_hz`.
    pub fn first_at_or_above(&self, freq_hz: f64) -> Option<usize> {
        self.freqs.iter().position(|&f| f64::from(f) >= freq_hz)
    }
}

impl<'a> IntoIterator for &'a FrequencyAxis {
    type Item = u32;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, u32>>;

    fn into_iter(self) -> Self::IntoIter {
        self.freqs.iter().copied()
    }
}
