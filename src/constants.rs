//! # Constants and type definitions
//!
//! This module centralizes the **physical constants**, **model parameters**,
//! and **common type aliases** used throughout the crate.
//!
//! ## Overview
//!
//! - Earth rotation and time conversion constants
//! - The standard's reference density and index-delay parameters
//! - Core scalar type aliases shared by the conditioner and the evaluator
//!
//! All values are immutable, process-wide constant data; nothing here has a
//! mutable lifecycle.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of seconds in a day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// MJD epoch of J2000.0 (2000-01-01 12:00:00 TT)
pub const T2000: f64 = 51544.5;

/// Conversion factor between Julian Date and Modified Julian Date
pub const JDTOMJD: f64 = 2400000.5;

/// Earth rotation rate used by the standard [rad/s]
pub const EARTH_ROTATION_RATE: f64 = 7.292115e-5;

// -------------------------------------------------------------------------------------------------
// Model parameters (GOST R 25645.166-2004)
// -------------------------------------------------------------------------------------------------

/// Night-time density at the 120 km base altitude [kg/m³]
pub const NIGHT_DENSITY_120KM: f64 = 1.58868e-8;

/// Lag applied to the query epoch before looking up the F10.7 flux [days]
pub const SOLAR_FLUX_DELAY: f64 = 1.7;

/// Lag applied to the query epoch before looking up the Kp index [days]
pub const GEOMAGNETIC_DELAY: f64 = 0.6;

/// Length of the trailing mean-flux window [days]
pub const MEAN_FLUX_WINDOW: f64 = 81.0;

/// Altitude below which the standard declares its output unspecified [km].
/// The evaluator never checks against this floor; it is exported for callers
/// that want to gate their own inputs.
pub const MIN_SPECIFIED_ALTITUDE: f64 = 120.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in radians
pub type Radian = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Modified Julian Date (days). History epochs and query epochs only need a
/// *consistent* fractional-day scale, so plain JD works equally well as long
/// as both sides use it.
pub type MJD = f64;
/// Solar radio flux at 10.7 cm [1e-22 W/m²/Hz]
pub type SolarFlux = f64;
/// Mass density [kg/m³]
pub type KgPerM3 = f64;
