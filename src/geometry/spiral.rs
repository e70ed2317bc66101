use std::f64::consts::PI;
use std::str::FromStr;

use glam::DVec3;

use crate::error::SpiralError;

pub const DEFAULT_POINT_COUNT: usize = 700;

// Numerator of the per-sample azimuth increment
const AZIMUTH_SCALE: f64 = 3.6;

/// Number of points on the spiral. Always at least 2 so both poles exist
/// and `N - 1` is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointCount(usize);

impl PointCount {
    pub fn new(count: i64) -> Result<Self, SpiralError> {
        if count < 2 {
            return Err(SpiralError::TooFewPoints(count));
        }
        usize::try_from(count)
            .map(PointCount)
            .map_err(|_| SpiralError::TooFewPoints(count))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for PointCount {
    fn default() -> Self {
        PointCount(DEFAULT_POINT_COUNT)
    }
}

impl FromStr for PointCount {
    type Err = SpiralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let count = s
            .trim()
            .parse::<i64>()
            .map_err(|source| SpiralError::InvalidCount {
                input: s.to_string(),
                source,
            })?;
        PointCount::new(count)
    }
}

/// Cosine of the inclination for sample `k` (1-based) out of `n`, spaced
/// linearly from -1 at the south pole to 1 at the north pole.
pub fn cos_inclination(k: usize, n: usize) -> f64 {
    -1.0 + 2.0 * (k as f64 - 1.0) / (n as f64 - 1.0)
}

/// Azimuth added for an interior sample. Evaluated strictly left to right,
/// so the remainder by pi is taken before the doubling.
pub fn azimuth_step(h: f64, n: usize) -> f64 {
    AZIMUTH_SCALE / (n as f64).sqrt() / (1.0 - h * h).sqrt() % PI * 2.0
}

pub fn spherical_to_cartesian(inclination: f64, azimuth: f64) -> DVec3 {
    let (sin_t, cos_t) = inclination.sin_cos();
    let (sin_p, cos_p) = azimuth.sin_cos();
    DVec3::new(sin_t * cos_p, sin_t * sin_p, cos_t)
}

/// Lazily walks the spiral from the south pole (k = 1) to the north pole
/// (k = N), yielding one unit vector per sample.
#[derive(Debug, Clone)]
pub struct SpiralPoints {
    count: usize,
    // next 1-based sample index
    k: usize,
    azimuth: f64,
}

impl SpiralPoints {
    pub fn new(count: PointCount) -> Self {
        SpiralPoints {
            count: count.get(),
            k: 1,
            azimuth: 0.0,
        }
    }
}

impl Iterator for SpiralPoints {
    type Item = DVec3;

    fn next(&mut self) -> Option<DVec3> {
        if self.k > self.count {
            return None;
        }
        let (k, n) = (self.k, self.count);
        let h = cos_inclination(k, n);

        if k == 1 || k == n {
            tracing::trace!(k, "pole sample, azimuth reset");
            self.azimuth = 0.0;
        } else {
            self.azimuth += azimuth_step(h, n);
        }

        self.k += 1;
        Some(spherical_to_cartesian(h.acos(), self.azimuth))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.count + 1).saturating_sub(self.k);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SpiralPoints {}
