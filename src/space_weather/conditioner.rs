//! Conditioning of raw daily index histories into model inputs.

use crate::constants::{GEOMAGNETIC_DELAY, MEAN_FLUX_WINDOW, SOLAR_FLUX_DELAY, MJD};
use crate::space_weather::{ConditionedIndices, HistorySample};

/// Condition a daily space-weather history for one query epoch.
///
/// Produces the three indices the density evaluator consumes:
///
/// - the F10.7 flux at `query - 1.7` days,
/// - the arithmetic mean of the observed F10.7 over the 81 days trailing
///   that same delayed epoch (window half-open on the left, closed on the
///   right),
/// - the Kp index at `query - 0.6` days.
///
/// Point lookups interpolate linearly between the two bracketing samples and
/// clamp to the first/last sample outside the covered span; a lookup landing
/// exactly on a sample returns that sample's value bit-for-bit. The trailing
/// mean averages the *observed* samples inside the window without any
/// reweighting for gaps.
///
/// The history is read as-is: epochs are assumed strictly ascending and are
/// never checked. An empty history yields NaN in all three fields; an empty
/// mean window yields NaN in `f81` alone.
///
/// Arguments
/// ---------
/// * `history`: daily `(epoch, F10.7, Kp)` samples, epochs strictly ascending
/// * `query`: the epoch to condition for, on the same day scale as the history
///
/// Return
/// ------
/// * the [`ConditionedIndices`] for `query`
///
/// See also
/// --------
/// * [`crate::density::density`] – the consumer of the conditioned indices
pub fn condition(history: &[HistorySample], query: MJD) -> ConditionedIndices {
    let t_solar = query - SOLAR_FLUX_DELAY;
    let t_geomagnetic = query - GEOMAGNETIC_DELAY;

    ConditionedIndices {
        f10_7: sample_at(history, t_solar, |s| s.f10_7),
        f81: trailing_mean(history, t_solar),
        kp: sample_at(history, t_geomagnetic, |s| s.kp),
    }
}

/// Point lookup of one history field at epoch `t`.
///
/// Exact epoch hits return the stored value unchanged. Interior epochs are
/// linearly interpolated between the bracketing samples; epochs before the
/// first or after the last sample clamp to that sample. Empty histories
/// return NaN.
fn sample_at(history: &[HistorySample], t: MJD, field: impl Fn(&HistorySample) -> f64) -> f64 {
    if history.is_empty() {
        return f64::NAN;
    }

    // Index of the first sample with epoch >= t.
    let i = history.partition_point(|s| s.epoch < t);

    if i == history.len() {
        return field(&history[i - 1]);
    }
    if history[i].epoch == t || i == 0 {
        return field(&history[i]);
    }

    let s0 = &history[i - 1];
    let s1 = &history[i];
    let v0 = field(s0);
    let v1 = field(s1);
    v0 + (v1 - v0) * (t - s0.epoch) / (s1.epoch - s0.epoch)
}

/// Arithmetic mean of the observed F10.7 over the window `(t - 81, t]`.
///
/// Only samples actually present in the window contribute; short histories
/// average whatever they cover. An empty window divides zero by zero, so the
/// NaN the contract asks for falls out of the arithmetic itself.
fn trailing_mean(history: &[HistorySample], t: MJD) -> f64 {
    let (sum, count) = history
        .iter()
        .filter(|s| s.epoch > t - MEAN_FLUX_WINDOW && s.epoch <= t)
        .fold((0.0, 0.0), |(sum, count), s| (sum + s.f10_7, count + 1.0));
    sum / count
}
