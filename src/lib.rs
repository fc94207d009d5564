//! # Earth upper-atmosphere density per GOST R 25645.166-2004
//!
//! Empirical thermosphere density model for ballistic support of artificial
//! earth satellite flights, as published in GOST R 25645.166-2004
//! (<http://docs.cntd.ru/document/gost-r-25645-166-2004>).
//!
//! Two pure, stateless components form the whole API:
//!
//! - [`space_weather::condition`] turns an ordered history of daily
//!   `(epoch, F10.7, Kp)` measurements into the three indices the model
//!   consumes: the F10.7 flux delayed by 1.7 days, its trailing 81-day mean,
//!   and the Kp index delayed by 0.6 days.
//! - [`density::density`] combines those indices with calendar descriptors,
//!   a Cartesian position, a geodetic altitude and the Sun's direction into
//!   one mass density in kg/m³.
//!
//! The two can be composed or used standalone; fixed activity levels can be
//! fed to the evaluator directly through [`space_weather::ConditionedIndices`].
//!
//! ## Contract
//!
//! Both components follow the standard's "never fail, never signal" rule:
//! no input validation, no errors, no panics. Degenerate inputs (empty
//! history, non-ascending epochs, inconsistent position/altitude pairs)
//! produce best-effort numeric output, possibly NaN, exactly as the standard
//! documents. Both are safe to call from any number of threads at once.
//!
//! ## Example
//!
//! ```
//! use nalgebra::Vector3;
//! use gost25645::density::{density, EpochState, SunDirection};
//! use gost25645::space_weather::ConditionedIndices;
//!
//! let indices = ConditionedIndices { f10_7: 150.0, f81: 150.0, kp: 3.0 };
//! let epoch = EpochState { day_of_year: 105.0, seconds_of_day: 43_200.0, gst_midnight: 1.75 };
//! let sun = SunDirection { right_ascension: 0.35, declination: 0.15 };
//! let pos = Vector3::new(4000.0, 3000.0, 4000.0);
//!
//! let rho = density(&indices, &epoch, &pos, 400.0, &sun);
//! assert!(rho > 0.0 && rho < 1e-10);
//! ```
//!
//! Historical index data is the caller's to supply (e.g. from the SWPC daily
//! bulletins, <ftp://ftp.swpc.noaa.gov/pub/indices/>); a CSV convenience
//! loader lives in [`space_weather::csv_reader`].

pub mod constants;
pub mod density;
pub mod errors;
pub mod space_weather;
pub mod tables;
pub mod time;

pub use density::{density, EpochState, SunDirection};
pub use errors::Gost25645Error;
pub use space_weather::{condition, ConditionedIndices, HistorySample};
