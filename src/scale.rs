//! Pixel-coordinate scales: categorical bands on X, linear values on Y.
//!
//! Scales are cheap value types rebuilt on every render from the current
//! sample and limits; they are never mutated in place.

/// Fraction of a band's step reserved as padding (inner and outer alike).
pub const DEFAULT_BAND_PADDING: f64 = 0.2;

/// Categorical scale mapping an ordered label domain onto equal, padded
/// pixel bands.
///
/// Geometry: `step = (p1 − p0) / (n + padding)` with the bands centered in
/// the interval, `bandwidth = step · (1 − padding)`. Labels are assumed to be
/// unique; a duplicate resolves to its first occurrence.
#[derive(Debug, Clone)]
pub struct BandScale {
    domain: Vec<String>,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    pub fn new(domain: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        let n = domain.len() as f64;
        let (r0, r1) = range;
        let step = (r1 - r0) / (n - padding + 2.0 * padding).max(1.0);
        let start = r0 + ((r1 - r0) - step * (n - padding)) * 0.5;
        let bandwidth = step * (1.0 - padding);
        Self {
            domain,
            start,
            step,
            bandwidth,
        }
    }

    /// Pixel offset of the start of `label`'s band, or `None` when the label
    /// is not in the domain.
    pub fn position(&self, label: &str) -> Option<f64> {
        let i = self.domain.iter().position(|l| l == label)?;
        Some(self.start + self.step * i as f64)
    }

    /// Pixel center of `label`'s band.
    pub fn center(&self, label: &str) -> Option<f64> {
        self.position(label).map(|p| p + self.bandwidth / 2.0)
    }

    /// Pixel width of one band, post-padding.
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }
}

/// Affine scale mapping a numeric domain onto a pixel range.
///
/// The chart uses it with an inverted range (`r0 > r1`) so the domain
/// minimum lands at the bottom of the plot area.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Pixel position of `v` by affine interpolation. A degenerate domain
    /// collapses every value to the midpoint of the range.
    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d0 == d1 {
            return (r0 + r1) / 2.0;
        }
        r0 + (v - d0) / (d1 - d0) * (r1 - r0)
    }
}
