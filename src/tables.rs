//! # GOST R 25645.166-2004 coefficient tables
//!
//! Data asset backing the density evaluator: polynomial coefficients
//! tabulated for seven fixed solar-activity levels (F0 = 75...250 sfu) and
//! two altitude bands (120-500 km and 500-1500 km).
//!
//! All entries are plain `static` data initialized at program start; nothing
//! here is computed at runtime except the selection helpers at the bottom.
//!
//! Standard: GOST R 25645.166-2004, "Earth upper atmosphere. Density model
//! for ballistic support of flights of artificial earth satellites",
//! <http://docs.cntd.ru/document/gost-r-25645-166-2004>.
//!
//! ## Data provenance — read before operational use
//!
//! Only part of this table is transcribed from the standard: the
//! night-density exponent polynomials `a`, the 1.58868e-8 kg/m³ reference
//! density, the seven F0 levels and their mid-point selection boundaries,
//! and the 1.7 d / 0.6 d index delays.
//!
//! The correction coefficients (`b`, `c`, `d`, `e`, `l`, `n`, `phi1`, the
//! Kp cubic and [`SEMIANNUAL`]) are **provisional**: the official table
//! values could not be verified here, so these entries are smooth
//! polynomial calibrations reproducing each correction's documented shape
//! and magnitude (diurnal ratio ≈ 2 at 400 km, April/October semiannual
//! maxima with the deepest minimum in July, storm response up to ≈ 2.4× at
//! Kp 9, activity sensitivity growing with altitude), with the high-band
//! intercepts normalized for continuity at the 500 km seam. Audit them
//! against the standard's printed tables before relying on absolute
//! densities; the crate's structure and tests do not depend on the exact
//! digits.

use crate::constants::Radian;

/// Coefficient set for one fixed solar-activity level within one altitude band.
///
/// Field naming follows the standard:
/// - `a`: degree-6 polynomial in altitude giving the exponent of the
///   night-time density profile,
/// - `b`: altitude weight of the daily solar-flux deviation correction (K3),
/// - `c`: altitude amplitude of the diurnal-bulge correction (K1),
/// - `d`: altitude weight of the semiannual correction (K2),
/// - `e`: altitude weight of the geomagnetic correction (K4),
/// - `kp`: cubic in the Kp index entering K4,
/// - `l`: altitude weight of the activity-level residual correction (K0),
/// - `n`: quadratic in altitude giving the diurnal cosine exponent,
/// - `phi1`: lag of the diurnal-bulge maximum behind the Sun, in radians.
#[derive(Debug, Clone, Copy)]
pub struct BandCoefficients {
    pub a: [f64; 7],
    pub b: [f64; 5],
    pub c: [f64; 5],
    pub d: [f64; 5],
    pub e: [f64; 5],
    pub kp: [f64; 4],
    pub l: [f64; 5],
    pub n: [f64; 3],
    pub phi1: Radian,
}

/// The seven fixed solar-activity levels F0 of the standard, in solar flux units.
pub const ACTIVITY_LEVELS: [f64; 7] = [75.0, 100.0, 125.0, 150.0, 175.0, 200.0, 250.0];

/// Mid-point boundaries between consecutive activity levels.
const LEVEL_BOUNDARIES: [f64; 6] = [87.5, 112.5, 137.5, 162.5, 187.5, 225.0];

/// Coefficients for the 120-500 km altitude band, one entry per activity level.
pub static LOW_BAND: [BandCoefficients; 7] = [
    // F0 = 75
    BandCoefficients {
        a: [26.8629, -0.451674, 0.00290397, -1.06953e-5, 2.21598e-8, -2.42941e-11, 1.09926e-14],
        b: [-0.12614, 0.00108713, 1.095029e-6, -5.116959e-9, 3.654971e-12],
        c: [0.358596, -0.00763532, 4.968363e-5, -8.150292e-8, 5.321637e-11],
        d: [-0.187782, 0.00240154, -9.068766e-6, 2.274123e-8, -1.981516e-11],
        e: [-0.331328, 0.00365205, -4.353592e-6, 3.654971e-9, -2.610693e-12],
        kp: [0.0, 0.05, 0.012, 8e-4],
        l: [-0.366416, 8.523392e-4, 3.523705e-5, -9.225146e-8, 7.779866e-11],
        n: [1.32982, 0.00604094, -3.80117e-6],
        phi1: 0.53,
    },
    // F0 = 100
    BandCoefficients {
        a: [27.4598, -0.463668, 0.002974, -1.0753e-5, 2.17059e-8, -2.30249e-11, 1.00123e-14],
        b: [-0.122356, 0.00105452, 1.062178e-6, -4.96345e-9, 3.545322e-12],
        c: [0.325298, -0.00692633, 4.507015e-5, -7.39348e-8, 4.827485e-11],
        d: [-0.174637, 0.00223343, -8.433952e-6, 2.114934e-8, -1.84281e-11],
        e: [-0.318075, 0.00350596, -4.179449e-6, 3.508772e-9, -2.506266e-12],
        kp: [0.0, 0.052, 0.0124, 8.2e-4],
        l: [-0.317326, 7.381474e-4, 3.051618e-5, -7.989211e-8, 6.737562e-11],
        n: [1.38702, 0.00597924, -3.78655e-6],
        phi1: 0.52,
    },
    // F0 = 125
    BandCoefficients {
        a: [28.6395, -0.490987, 0.00320649, -1.1681e-5, 2.36847e-8, -2.51809e-11, 1.09536e-14],
        b: [-0.118572, 0.00102191, 1.029327e-6, -4.809942e-9, 3.435673e-12],
        c: [0.289439, -0.0061628, 4.010178e-5, -6.57845e-8, 4.295322e-11],
        d: [-0.161492, 0.00206532, -7.799138e-6, 1.955746e-8, -1.704104e-11],
        e: [-0.304822, 0.00335988, -4.005305e-6, 3.362573e-9, -2.401838e-12],
        kp: [0.0, 0.054, 0.0128, 8.4e-4],
        l: [-0.283825, 6.602191e-4, 2.72945e-5, -7.145768e-8, 6.026259e-11],
        n: [1.44421, 0.00591754, -3.77193e-6],
        phi1: 0.5,
    },
    // F0 = 150
    BandCoefficients {
        a: [29.6418, -0.514957, 0.00341926, -1.25785e-5, 2.5727e-8, -2.75874e-11, 1.21091e-14],
        b: [-0.114788, 9.892924e-4, 9.964766e-7, -4.656433e-9, 3.326023e-12],
        c: [0.25614, -0.0054538, 3.54883e-5, -5.821637e-8, 3.80117e-11],
        d: [-0.148348, 0.00189721, -7.164325e-6, 1.796557e-8, -1.565398e-11],
        e: [-0.291569, 0.0032138, -3.831161e-6, 3.216374e-9, -2.29741e-12],
        kp: [0.0, 0.056, 0.0132, 8.6e-4],
        l: [-0.259095, 6.026948e-4, 2.491636e-5, -6.523163e-8, 5.501196e-11],
        n: [1.5014, 0.00585585, -3.75731e-6],
        phi1: 0.48,
    },
    // F0 = 175
    BandCoefficients {
        a: [30.1671, -0.527837, 0.00353211, -1.30227e-5, 2.66455e-8, -2.85432e-11, 1.25009e-14],
        b: [-0.111004, 9.566784e-4, 9.636257e-7, -4.502924e-9, 3.216374e-12],
        c: [0.230526, -0.00490842, 3.193947e-5, -5.239474e-8, 3.421053e-11],
        d: [-0.137081, 0.00175312, -6.620199e-6, 1.66011e-8, -1.446507e-11],
        e: [-0.278316, 0.00306772, -3.657018e-6, 3.070175e-9, -2.192982e-12],
        kp: [0.0, 0.058, 0.0136, 8.8e-4],
        l: [-0.239876, 5.57987e-4, 2.306806e-5, -6.039276e-8, 5.093118e-11],
        n: [1.5586, 0.00579415, -3.74269e-6],
        phi1: 0.46,
    },
    // F0 = 200
    BandCoefficients {
        a: [29.7578, -0.517915, 0.00342699, -1.24137e-5, 2.48209e-8, -2.58413e-11, 1.09383e-14],
        b: [-0.107219, 9.240643e-4, 9.307749e-7, -4.349415e-9, 3.106725e-12],
        c: [0.204912, -0.00436304, 2.839064e-5, -4.65731e-8, 3.040936e-11],
        d: [-0.127692, 0.00163304, -6.166761e-6, 1.546404e-8, -1.347431e-11],
        e: [-0.265063, 0.00292164, -3.482874e-6, 2.923977e-9, -2.088555e-12],
        kp: [0.0, 0.06, 0.014, 9e-4],
        l: [-0.224383, 5.21949e-4, 2.15782e-5, -5.649225e-8, 4.764176e-11],
        n: [1.61579, 0.00573246, -3.72807e-6],
        phi1: 0.45,
    },
    // F0 = 250
    BandCoefficients {
        a: [30.7854, -0.545695, 0.00370328, -1.37072e-5, 2.80614e-8, -2.98873e-11, 1.29048e-14],
        b: [-0.103435, 8.914503e-4, 8.97924e-7, -4.195906e-9, 2.997076e-12],
        c: [0.171614, -0.00365405, 2.377716e-5, -3.900497e-8, 2.546784e-11],
        d: [-0.108914, 0.00139289, -5.259884e-6, 1.318991e-8, -1.149279e-11],
        e: [-0.25181, 0.00277556, -3.30873e-6, 2.777778e-9, -1.984127e-12],
        kp: [0.0, 0.062, 0.0144, 9.2e-4],
        l: [-0.200694, 4.668454e-4, 1.930013e-5, -5.052821e-8, 4.261208e-11],
        n: [1.67298, 0.00567076, -3.71345e-6],
        phi1: 0.43,
    },
];

/// Coefficients for the 500-1500 km altitude band, one entry per activity level.
pub static HIGH_BAND: [BandCoefficients; 7] = [
    // F0 = 75
    BandCoefficients {
        a: [17.8784, -0.132025, 2.27717e-4, -2.2543e-7, 1.33574e-10, -4.50458e-14, 6.72086e-18],
        b: [0.26, -5.2e-4, 1.813333e-6, -1.6e-9, 4.266667e-13],
        c: [3.64, -0.0141633, 3.374e-5, -2.650667e-8, 6.72e-12],
        d: [0.5, -0.00186667, 4.893333e-6, -4.053333e-9, 1.066667e-12],
        e: [0.25, -6.666667e-5, 3.533333e-6, -3.733333e-9, 1.066667e-12],
        kp: [0.0, 0.05, 0.012, 8e-4],
        l: [-0.3, 0.0048, 3.066667e-6, -6.4e-9, 2.133333e-12],
        n: [2.7, 0.0016, -4e-7],
        phi1: 0.53,
    },
    // F0 = 100
    BandCoefficients {
        a: [12.1292, -0.100772, 1.65465e-4, -1.5079e-7, 7.92592e-11, -2.32748e-14, 2.9812e-18],
        b: [0.2522, -5.044e-4, 1.758933e-6, -1.552e-9, 4.138667e-13],
        c: [3.302, -0.0128482, 3.0607e-5, -2.404533e-8, 6.096e-12],
        d: [0.465, -0.001736, 4.5508e-6, -3.7696e-9, 9.92e-13],
        e: [0.24, -6.4e-5, 3.392e-6, -3.584e-9, 1.024e-12],
        kp: [0.0, 0.052, 0.0124, 8.2e-4],
        l: [-0.259808, 0.00415692, 2.655811e-6, -5.542563e-9, 1.847521e-12],
        n: [2.75, 0.00155, -3.8e-7],
        phi1: 0.52,
    },
    // F0 = 125
    BandCoefficients {
        a: [13.9078, -0.102215, 1.59664e-4, -1.38285e-7, 6.90614e-11, -1.91654e-14, 2.30507e-18],
        b: [0.2444, -4.888e-4, 1.704533e-6, -1.504e-9, 4.010667e-13],
        c: [2.938, -0.0114318, 2.7233e-5, -2.139467e-8, 5.424e-12],
        d: [0.43, -0.00160533, 4.208267e-6, -3.485867e-9, 9.173333e-13],
        e: [0.23, -6.133333e-5, 3.250667e-6, -3.434667e-9, 9.813333e-13],
        kp: [0.0, 0.054, 0.0128, 8.4e-4],
        l: [-0.232379, 0.00371806, 2.37543e-6, -4.957419e-9, 1.652473e-12],
        n: [2.8, 0.0015, -3.6e-7],
        phi1: 0.5,
    },
    // F0 = 150
    BandCoefficients {
        a: [15.4895, -0.105498, 1.60759e-4, -1.33651e-7, 6.34229e-11, -1.64754e-14, 1.84024e-18],
        b: [0.2366, -4.732e-4, 1.650133e-6, -1.456e-9, 3.882667e-13],
        c: [2.6, -0.0101167, 2.41e-5, -1.893333e-8, 4.8e-12],
        d: [0.395, -0.00147467, 3.865733e-6, -3.202133e-9, 8.426667e-13],
        e: [0.22, -5.866667e-5, 3.109333e-6, -3.285333e-9, 9.386667e-13],
        kp: [0.0, 0.056, 0.0132, 8.6e-4],
        l: [-0.212132, 0.00339411, 2.168461e-6, -4.525483e-9, 1.508494e-12],
        n: [2.85, 0.00145, -3.4e-7],
        phi1: 0.48,
    },
    // F0 = 175
    BandCoefficients {
        a: [20.0728, -0.123825, 1.92555e-4, -1.6387e-7, 7.85602e-11, -2.00043e-14, 2.1603e-18],
        b: [0.2288, -4.576e-4, 1.595733e-6, -1.408e-9, 3.754667e-13],
        c: [2.34, -0.009105, 2.169e-5, -1.704e-8, 4.32e-12],
        d: [0.365, -0.00136267, 3.572133e-6, -2.958933e-9, 7.786667e-13],
        e: [0.21, -5.6e-5, 2.968e-6, -3.136e-9, 8.96e-13],
        kp: [0.0, 0.058, 0.0136, 8.8e-4],
        l: [-0.196396, 0.00314234, 2.007605e-6, -4.189783e-9, 1.396594e-12],
        n: [2.9, 0.0014, -3.2e-7],
        phi1: 0.46,
    },
    // F0 = 200
    BandCoefficients {
        a: [20.6679, -0.119047, 1.73649e-4, -1.40809e-7, 6.43426e-11, -1.56949e-14, 1.62266e-18],
        b: [0.221, -4.42e-4, 1.541333e-6, -1.36e-9, 3.626667e-13],
        c: [2.08, -0.00809333, 1.928e-5, -1.514667e-8, 3.84e-12],
        d: [0.34, -0.00126933, 3.327467e-6, -2.756267e-9, 7.253333e-13],
        e: [0.2, -5.333333e-5, 2.826667e-6, -2.986667e-9, 8.533333e-13],
        kp: [0.0, 0.06, 0.014, 9e-4],
        l: [-0.183712, 0.00293939, 1.877942e-6, -3.919184e-9, 1.306395e-12],
        n: [2.95, 0.00135, -3e-7],
        phi1: 0.45,
    },
    // F0 = 250
    BandCoefficients {
        a: [19.013, -0.0974823, 1.22533e-4, -8.92772e-8, 3.78549e-11, -8.62602e-15, 8.32432e-19],
        b: [0.2132, -4.264e-4, 1.486933e-6, -1.312e-9, 3.498667e-13],
        c: [1.742, -0.00677817, 1.6147e-5, -1.268533e-8, 3.216e-12],
        d: [0.29, -0.00108267, 2.838133e-6, -2.350933e-9, 6.186667e-13],
        e: [0.19, -5.066667e-5, 2.685333e-6, -2.837333e-9, 8.106667e-13],
        kp: [0.0, 0.062, 0.0144, 9.2e-4],
        l: [-0.164317, 0.00262907, 1.679683e-6, -3.505424e-9, 1.168475e-12],
        n: [3.0, 0.0013, -2.8e-7],
        phi1: 0.43,
    },
];

/// Semiannual density variation versus day of year: degree-8 polynomial
/// with maxima in April and October and the deepest minimum in July.
pub static SEMIANNUAL: [f64; 9] = [
    -0.382056, 0.00196376, -5.561966e-4, 2.114217e-5, -2.79025e-7, 1.744752e-9, -5.637994e-12, 9.114774e-15, -5.842542e-18,
];

/// Index of the activity level whose F0 is nearest to the given 81-day mean
/// flux (mid-point boundaries). Out-of-range or non-finite `f81` silently
/// selects an end level; the contract performs no validation.
pub fn activity_level(f81: f64) -> usize {
    LEVEL_BOUNDARIES.iter().position(|&b| f81 < b).unwrap_or(6)
}

/// Coefficient set for the given altitude at the given activity level.
/// Altitudes at or below 500 km use the low band; everything above uses the
/// high band, including altitudes beyond the standard's 1500 km ceiling.
pub fn band_for(altitude: f64, level: usize) -> &'static BandCoefficients {
    if altitude <= 500.0 {
        &LOW_BAND[level]
    } else {
        &HIGH_BAND[level]
    }
}

/// Horner evaluation of a coefficient row (lowest order first).
pub(crate) fn polyval(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, &k| acc * x + k)
}

#[cfg(test)]
mod tables_test {
    use super::*;

    #[test]
    fn test_activity_level_boundaries() {
        assert_eq!(activity_level(70.0), 0);
        assert_eq!(activity_level(87.4), 0);
        assert_eq!(activity_level(87.5), 1);
        assert_eq!(activity_level(150.0), 3);
        assert_eq!(activity_level(224.9), 5);
        assert_eq!(activity_level(225.0), 6);
        assert_eq!(activity_level(400.0), 6);
        // NaN falls through every boundary comparison
        assert_eq!(activity_level(f64::NAN), 6);
    }

    #[test]
    fn test_band_selection() {
        assert!(std::ptr::eq(band_for(120.0, 3), &LOW_BAND[3]));
        assert!(std::ptr::eq(band_for(500.0, 3), &LOW_BAND[3]));
        assert!(std::ptr::eq(band_for(500.1, 3), &HIGH_BAND[3]));
        assert!(std::ptr::eq(band_for(1500.0, 3), &HIGH_BAND[3]));
    }

    #[test]
    fn test_night_exponent_near_zero_at_base_altitude() {
        // The a-polynomials are normalized so the exponent is ~0 at 120 km:
        // the night profile there equals the reference density within a few %.
        for level in &LOW_BAND {
            let e = polyval(&level.a, 120.0);
            assert!(e.abs() < 0.1, "exponent at 120 km too large: {e}");
        }
    }

    #[test]
    fn test_band_seam_continuity() {
        // Low and high bands agree at the 500 km seam to table precision.
        for i in 0..7 {
            let lo = polyval(&LOW_BAND[i].a, 500.0);
            let hi = polyval(&HIGH_BAND[i].a, 500.0);
            assert!((lo - hi).abs() < 1e-2, "level {i}: {lo} vs {hi}");
        }
    }

    #[test]
    fn test_semiannual_amplitude_bounded() {
        for d in 1..=366 {
            let v = polyval(&SEMIANNUAL, d as f64);
            assert!(v.abs() < 0.75, "day {d}: amplitude {v}");
        }
    }
}
