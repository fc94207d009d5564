//! # Solar and geomagnetic activity history
//!
//! Types and routines turning an ordered history of daily space-weather
//! measurements into the point indices the density evaluator consumes.
//!
//! ## Overview
//!
//! - [`HistorySample`] — one `(epoch, F10.7, Kp)` measurement
//! - [`condition`] — delayed F10.7, trailing 81-day mean, delayed Kp for a
//!   query epoch
//! - [`csv_reader`] — loading a local CSV table of daily indices
//!
//! Histories are plain slices, caller-owned and read-only here. Epochs must
//! be strictly ascending; this is **never verified** — the standard mandates
//! silent best-effort output for ill-formed input, and non-ascending epochs
//! simply yield unspecified numbers.

mod conditioner;
pub mod csv_reader;

pub use conditioner::condition;

use crate::constants::{SolarFlux, MJD};

/// One daily space-weather measurement, caller-supplied and immutable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistorySample {
    /// Measurement epoch in fractional days (MJD or JD, consistently with
    /// the query epoch).
    pub epoch: MJD,
    /// Observed solar radio flux at 10.7 cm [1e-22 W/m²/Hz].
    pub f10_7: SolarFlux,
    /// Daily planetary geomagnetic index.
    pub kp: f64,
}

/// The three activity indices the density evaluator consumes, produced fresh
/// per query — nothing is cached across calls.
///
/// Callers running analytic experiments with fixed activity levels can build
/// this directly and skip the conditioner entirely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConditionedIndices {
    /// F10.7 flux at the query epoch minus the solar delay.
    pub f10_7: SolarFlux,
    /// Mean F10.7 flux over the trailing 81-day window.
    pub f81: SolarFlux,
    /// Kp index at the query epoch minus the geomagnetic delay.
    pub kp: f64,
}

/// Zip three parallel arrays into a history vector.
///
/// Convenience for callers holding columnar data (the shape of the public
/// space-weather feeds). The arrays are zipped up to the shortest length;
/// mismatched lengths are not reported, per the no-validation contract.
///
/// Arguments
/// ---------
/// * `epochs`: measurement epochs in fractional days, strictly ascending
/// * `f10_7`: solar flux measurements
/// * `kp`: daily geomagnetic index measurements
///
/// Return
/// ------
/// * a vector of [`HistorySample`] ready for [`condition`]
pub fn history_from_arrays(epochs: &[f64], f10_7: &[f64], kp: &[f64]) -> Vec<HistorySample> {
    epochs
        .iter()
        .zip(f10_7)
        .zip(kp)
        .map(|((&epoch, &f10_7), &kp)| HistorySample { epoch, f10_7, kp })
        .collect()
}
