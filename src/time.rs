use hifitime::Epoch;

use crate::constants::{DPI, JDTOMJD, SECONDS_PER_DAY, T2000};
use crate::density::EpochState;

/// Transformation from modified julian date (MJD) to julian date (JD)
///
/// Argument
/// --------
/// * `mjd`: a date in MJD
///
/// Return
/// ------
/// * the same date in JD
pub fn mjd_to_jd(mjd: f64) -> f64 {
    mjd + JDTOMJD
}

/// Transformation from julian date (JD) to modified julian date (MJD)
///
/// Argument
/// --------
/// * `jd`: a date in JD
///
/// Return
/// ------
/// * the same date in MJD
pub fn jd_to_mjd(jd: f64) -> f64 {
    jd - JDTOMJD
}

/// Greenwich Mean Sidereal Time for a given MJD (UT1), in radians.
///
/// Evaluates the IAU 1982 cubic in Julian centuries for the sidereal time
/// at the 0h UT1 opening the date, then advances it through the fractional
/// day at the sidereal-to-solar day ratio.
///
/// Argument
/// --------
/// * `tjm`: a date in MJD (UT1)
///
/// Return
/// ------
/// * the GMST angle, normalized to [0, 2π)
pub fn gmst(tjm: f64) -> f64 {
    // IAU 1982 coefficients for GMST at 0h UT1, in seconds of time
    const C0: f64 = 24110.54841;
    const C1: f64 = 8640184.812866;
    const C2: f64 = 9.3104e-2;
    const C3: f64 = -6.2e-6;

    // Sidereal days per solar day
    const RAP: f64 = 1.00273790934;

    // Julian centuries since J2000.0 at the 0h UT1 opening the date
    let t = (tjm.floor() - T2000) / 36525.0;

    // GMST at 0h UT1, converted from seconds of time to radians
    let gmst0 = (((C3 * t + C2) * t + C1) * t + C0) * (DPI / 86400.0);

    // Earth rotation over the fraction of the day
    let mut gmst = gmst0 + tjm.fract() * DPI * RAP;

    // Normalize to [0, 2π)
    let mut i: i64 = (gmst / DPI).floor() as i64;
    if gmst < 0.0 {
        i -= 1;
    }
    gmst -= i as f64 * DPI;

    gmst
}

/// Greenwich Mean Sidereal Time at the midnight opening the given date,
/// in radians.
///
/// This is the `gst_midnight` descriptor the density evaluator consumes: the
/// sidereal angle at 0h UT1 of the day containing `mjd`, with the in-day
/// rotation left to the `seconds_of_day` term.
pub fn gst_midnight(mjd: f64) -> f64 {
    gmst(mjd.floor())
}

/// Fractional day of year for a given MJD (UTC), January 1st being day 1.
///
/// Argument
/// --------
/// * `mjd`: a date in MJD (UTC)
///
/// Return
/// ------
/// * fractional day of year in [1, 367)
pub fn day_of_year(mjd: f64) -> f64 {
    const CUMULATIVE_DAYS: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

    let (year, month, day, ..) = Epoch::from_mjd_utc(mjd).to_gregorian_utc();
    let leap = year % 4 == 0 && (year % 100 != 0 || year % 400 == 0);

    let mut doy = CUMULATIVE_DAYS[(month - 1) as usize] as f64 + day as f64;
    if leap && month > 2 {
        doy += 1.0;
    }
    doy + mjd.fract()
}

/// Assemble the epoch descriptors of the density evaluator from a single
/// MJD (UT1).
///
/// Argument
/// --------
/// * `mjd`: the query epoch in MJD (UT1)
///
/// Return
/// ------
/// * an [`EpochState`] carrying the fractional day of year, the seconds
///   elapsed since midnight, and the Greenwich sidereal time at midnight
pub fn epoch_state(mjd: f64) -> EpochState {
    EpochState {
        day_of_year: day_of_year(mjd),
        seconds_of_day: mjd.fract() * SECONDS_PER_DAY,
        gst_midnight: gst_midnight(mjd),
    }
}

#[cfg(test)]
mod time_test {
    use super::*;

    #[test]
    fn test_jd_mjd_roundtrip() {
        assert_eq!(mjd_to_jd(59215.0), 2459215.5);
        assert_eq!(jd_to_mjd(2459215.5), 59215.0);
    }

    #[test]
    fn test_gmst() {
        let tut = 57028.478514610404;
        let res_gmst = gmst(tut);
        assert_eq!(res_gmst, 4.851925725092499);

        let tut = T2000;
        let res_gmst = gmst(tut);
        assert_eq!(res_gmst, 4.894961212789145);
    }

    #[test]
    fn test_gst_midnight_drops_fraction() {
        assert_eq!(gst_midnight(57028.478514610404), gmst(57028.0));
        assert_eq!(gst_midnight(57028.0), gmst(57028.0));
    }

    #[test]
    fn test_day_of_year() {
        // 59215.0 = 2021-01-01T00:00:00 UTC
        assert_eq!(day_of_year(59215.0), 1.0);
        assert_eq!(day_of_year(59215.5), 1.5);
        // 59580.0 = 2021-12-31
        assert_eq!(day_of_year(59579.0), 365.0);
        // 2020 is a leap year: 58849.0 = 2020-01-01, 59214.0 = 2020-12-31
        assert_eq!(day_of_year(59214.0), 366.0);
        // March 1st shifts by one across the leap boundary
        assert_eq!(day_of_year(58909.0), 61.0); // 2020-03-01
        assert_eq!(day_of_year(59274.0), 60.0); // 2021-03-01
    }

    #[test]
    fn test_epoch_state() {
        let state = epoch_state(59215.25);
        assert_eq!(state.day_of_year, 1.25);
        assert_eq!(state.seconds_of_day, 21_600.0);
        assert_eq!(state.gst_midnight, gmst(59215.0));
    }
}
