//! # rs-spectral
//!
//! Discrete Fourier transform of real sequences and its inverse.
//!
//! The forward transform returns the full length-`n` complex spectrum
//! (unnormalized, `X_k = Σ x_j e^{-2πi jk/n}`), optionally converted to
//! magnitude/phase. The inverse scales by `1/n`, so
//! `inverse(&forward(x, false))` reproduces `x` up to rounding.

#![warn(missing_docs)]
#![warn(clippy::all)]

use rs_core::{Error, Result};
use rustfft::FftPlanner;
use rustfft::num_complex::Complex;
use serde::{Deserialize, Serialize};

/// A complex spectrum in one of two representations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "representation", rename_all = "lowercase")]
pub enum Spectrum {
    /// Real and imaginary parts.
    Cartesian {
        /// Real parts.
        re: Vec<f64>,
        /// Imaginary parts.
        im: Vec<f64>,
    },
    /// Magnitude and phase (radians, in `[-π, π]`).
    Polar {
        /// `sqrt(re² + im²)`.
        magnitude: Vec<f64>,
        /// `atan2(im, re)`.
        phase: Vec<f64>,
    },
}

impl Spectrum {
    /// Cartesian spectrum from its parts.
    pub fn cartesian(re: Vec<f64>, im: Vec<f64>) -> Self {
        Spectrum::Cartesian { re, im }
    }

    /// The two component vectors, in representation order.
    pub fn components(&self) -> (&[f64], &[f64]) {
        match self {
            Spectrum::Cartesian { re, im } => (re, im),
            Spectrum::Polar { magnitude, phase } => (magnitude, phase),
        }
    }

    /// Whether this is a magnitude/phase spectrum.
    pub fn is_polar(&self) -> bool {
        matches!(self, Spectrum::Polar { .. })
    }

    /// Number of frequency bins.
    pub fn len(&self) -> usize {
        self.components().0.len()
    }

    /// Whether the spectrum has no bins.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Forward transform of a real sequence.
///
/// With `polar`, each bin is converted to `(magnitude, phase)` from its
/// original `(re, im)` pair.
pub fn forward(samples: &[f64], polar: bool) -> Spectrum {
    let n = samples.len();
    let mut buffer: Vec<Complex<f64>> = samples.iter().map(|&v| Complex::new(v, 0.0)).collect();
    if n > 0 {
        FftPlanner::<f64>::new().plan_fft_forward(n).process(&mut buffer);
    }

    if polar {
        let (magnitude, phase) = buffer.iter().map(|c| (c.norm(), c.arg())).unzip();
        Spectrum::Polar { magnitude, phase }
    } else {
        let (re, im) = buffer.iter().map(|c| (c.re, c.im)).unzip();
        Spectrum::Cartesian { re, im }
    }
}

/// Inverse transform back to a real sequence, scaled by `1/n`.
///
/// Only Cartesian spectra are supported; a polar spectrum fails with
/// `NotImplemented`. Components of different lengths fail with
/// `InvalidArgument`. The imaginary part of the result is discarded.
pub fn inverse(spectrum: &Spectrum) -> Result<Vec<f64>> {
    let Spectrum::Cartesian { re, im } = spectrum else {
        return Err(Error::NotImplemented("inverse transform of a polar spectrum".into()));
    };
    if re.len() != im.len() {
        return Err(Error::InvalidArgument(format!(
            "spectrum components differ in length ({} vs {})",
            re.len(),
            im.len()
        )));
    }
    let n = re.len();
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut buffer: Vec<Complex<f64>> =
        re.iter().zip(im).map(|(&r, &i)| Complex::new(r, i)).collect();
    FftPlanner::<f64>::new().plan_fft_inverse(n).process(&mut buffer);

    let scale = 1.0 / n as f64;
    Ok(buffer.iter().map(|c| c.re * scale).collect())
}
