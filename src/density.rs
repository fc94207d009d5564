//! # Density evaluator
//!
//! Single-shot, stateless evaluation of the GOST R 25645.166-2004 density
//! formula: a night-time altitude profile scaled by multiplicative
//! corrections for the activity-level residual, the diurnal bulge, the
//! semiannual variation, the daily flux deviation, and geomagnetic activity.
//!
//! Everything here is plain arithmetic on the caller's inputs and the static
//! coefficient tables — no allocation, no locking, no global state.

use nalgebra::Vector3;

use crate::constants::{EARTH_ROTATION_RATE, Kilometer, KgPerM3, NIGHT_DENSITY_120KM, Radian};
use crate::space_weather::ConditionedIndices;
use crate::tables::{activity_level, band_for, polyval, ACTIVITY_LEVELS, SEMIANNUAL};

/// Calendar descriptors of the query epoch, all on the UT1 day containing it.
///
/// The evaluator never consumes a raw date: sidereal time and the in-day
/// offset arrive pre-computed, so any time-scale convention the caller uses
/// upstream (or none at all, for inertial-frame calls) stays out of the
/// formula. [`crate::time::epoch_state`] assembles this from a single MJD.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochState {
    /// Fractional day of year, January 1st being day 1.
    pub day_of_year: f64,
    /// Seconds elapsed since the midnight opening the day.
    pub seconds_of_day: f64,
    /// Greenwich Mean Sidereal Time at that midnight [rad].
    pub gst_midnight: Radian,
}

/// Apparent geocentric direction of the Sun at the query epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunDirection {
    /// Right ascension [rad].
    pub right_ascension: Radian,
    /// Declination [rad].
    pub declination: Radian,
}

/// Upper-atmosphere mass density per GOST R 25645.166-2004.
///
/// The model is
///
/// ```text
/// ρ = ρ_night(h) · K0 · K1 · K2 · K3 · K4
/// ```
///
/// where `ρ_night` is the night-time profile at the nearest of the seven
/// fixed activity levels and
///
/// - `K0` corrects for the residual between the 81-day mean flux and that
///   fixed level,
/// - `K1` is the diurnal bulge, peaking `phi1` radians of Earth rotation
///   behind the sub-solar point,
/// - `K2` is the semiannual variation (maxima in April and October),
/// - `K3` follows the deviation of the daily flux from its 81-day mean,
/// - `K4` responds to geomagnetic activity through a cubic in Kp.
///
/// The position enters only through its direction: the formula divides by
/// `‖position‖`, so any positive uniform scaling of the coordinates leaves
/// the density unchanged and any consistent length unit works. The rotating
/// frame is encoded by `seconds_of_day` and `gst_midnight`; zeroing both
/// makes the evaluator read `position` as inertial (ECI) coordinates.
///
/// Per the standard there is no input validation: altitudes below the 120 km
/// floor pass through the same polynomials, non-finite indices propagate
/// into the output, and a zero position vector divides to NaN.
///
/// Arguments
/// ---------
/// * `indices`: conditioned activity indices, from
///   [`crate::space_weather::condition`] or built directly
/// * `epoch`: calendar descriptors of the query epoch
/// * `position`: Cartesian position of the point, any consistent length unit
/// * `altitude`: geodetic altitude of the point [km]
/// * `sun`: apparent geocentric direction of the Sun
///
/// Return
/// ------
/// * the mass density at the point [kg/m³]
pub fn density(
    indices: &ConditionedIndices,
    epoch: &EpochState,
    position: &Vector3<f64>,
    altitude: Kilometer,
    sun: &SunDirection,
) -> KgPerM3 {
    let level = activity_level(indices.f81);
    let coef = band_for(altitude, level);
    let f0 = ACTIVITY_LEVELS[level];
    let h = altitude;

    let rho_night = NIGHT_DENSITY_120KM * polyval(&coef.a, h).exp();

    // K0: residual between the 81-day mean flux and the fixed level F0.
    let k0 = 1.0 + polyval(&coef.l, h) * (indices.f81 - f0) / f0;

    // K1: diurnal bulge. The bulge axis lags the Sun by phi1 radians of
    // Earth rotation; cos φ is the cosine of the angle between the point
    // and that axis, from the spherical scalar product.
    let sidereal = epoch.gst_midnight + EARTH_ROTATION_RATE * epoch.seconds_of_day;
    let beta = sun.right_ascension + coef.phi1 - sidereal;
    let (sin_delta, cos_delta) = sun.declination.sin_cos();
    let (sin_beta, cos_beta) = beta.sin_cos();
    let cos_phi = (position.z * sin_delta
        + cos_delta * (position.x * cos_beta + position.y * sin_beta))
        / position.norm();
    // cos^n(φ/2) through the half-angle identity, valid for fractional n.
    // Rounding can leave cos_phi one ulp below -1 at the bulge antipode;
    // a negative base with a fractional exponent would give NaN.
    let half_angle = ((1.0 + cos_phi) / 2.0).max(0.0);
    let n = polyval(&coef.n, h);
    let k1 = 1.0 + polyval(&coef.c, h) * half_angle.powf(n / 2.0);

    // K2: semiannual variation, a fixed polynomial in day of year.
    let k2 = 1.0 + polyval(&coef.d, h) * polyval(&SEMIANNUAL, epoch.day_of_year);

    // K3: daily flux deviation, saturating through the |ΔF| denominator.
    let delta_f = indices.f10_7 - indices.f81;
    let k3 = 1.0 + polyval(&coef.b, h) * delta_f / (indices.f81 + delta_f.abs());

    // K4: geomagnetic activity, cubic in Kp.
    let k4 = 1.0 + polyval(&coef.e, h) * polyval(&coef.kp, indices.kp);

    rho_night * k0 * k1 * k2 * k3 * k4
}
