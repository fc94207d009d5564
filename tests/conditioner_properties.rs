use approx::assert_relative_eq;

use gost25645::constants::{GEOMAGNETIC_DELAY, SOLAR_FLUX_DELAY};
use gost25645::space_weather::{condition, history_from_arrays, HistorySample};

/// A year of plausible daily indices: slowly rising flux with a 27-day
/// rotation ripple, quiet Kp with one storm.
fn synthetic_year(start: f64) -> Vec<HistorySample> {
    (0..365)
        .map(|d| {
            let epoch = start + d as f64;
            let f10_7 = 120.0 + 0.05 * d as f64 + 15.0 * (d as f64 * 0.2327).sin();
            let kp = if (180..=183).contains(&d) { 7.0 } else { 2.0 };
            HistorySample { epoch, f10_7, kp }
        })
        .collect()
}

#[test]
fn exact_timestamp_hit_returns_stored_values() {
    let history = synthetic_year(59000.0);

    // Query such that both delayed epochs land on stored samples.
    let indices = condition(&history, 59200.0 + SOLAR_FLUX_DELAY);
    assert_eq!(indices.f10_7, history[200].f10_7);

    let indices = condition(&history, 59200.0 + GEOMAGNETIC_DELAY);
    assert_eq!(indices.kp, history[200].kp);
}

#[test]
fn interior_query_matches_linear_interpolation() {
    let t0 = 59000.0;
    let t1 = 59003.0;
    let history = [
        HistorySample {
            epoch: t0,
            f10_7: 131.2,
            kp: 1.0,
        },
        HistorySample {
            epoch: t1,
            f10_7: 158.9,
            kp: 6.0,
        },
    ];

    let t = 59001.2;
    let indices = condition(&history, t + SOLAR_FLUX_DELAY);
    let expected = 131.2 + (158.9 - 131.2) * (t - t0) / (t1 - t0);
    assert_eq!(indices.f10_7, expected);

    let t = 59002.9;
    let indices = condition(&history, t + GEOMAGNETIC_DELAY);
    let expected = 1.0 + (6.0 - 1.0) * (t - t0) / (t1 - t0);
    assert_eq!(indices.kp, expected);
}

#[test]
fn queries_outside_history_clamp_to_boundary_samples() {
    let history = synthetic_year(59000.0);
    let first = history[0];
    let last = history[history.len() - 1];

    let before = condition(&history, 58000.0);
    assert_eq!(before.f10_7, first.f10_7);
    assert_eq!(before.kp, first.kp);

    let after = condition(&history, 60000.0);
    assert_eq!(after.f10_7, last.f10_7);
    assert_eq!(after.kp, last.kp);
}

#[test]
fn constant_flux_window_means_the_constant() {
    let epochs: Vec<f64> = (0..200).map(|d| 59000.0 + d as f64).collect();
    let flux = vec![150.0; 200];
    let kp = vec![3.0; 200];
    let history = history_from_arrays(&epochs, &flux, &kp);

    // Query well inside the history, full 81-day window available.
    let indices = condition(&history, 59150.0);
    assert_eq!(indices.f81, 150.0);
}

#[test]
fn short_history_averages_available_samples_only() {
    let history = [
        HistorySample {
            epoch: 59000.0,
            f10_7: 100.0,
            kp: 2.0,
        },
        HistorySample {
            epoch: 59001.0,
            f10_7: 140.0,
            kp: 2.0,
        },
    ];
    let indices = condition(&history, 59001.0 + SOLAR_FLUX_DELAY);
    assert_eq!(indices.f81, 120.0);
}

#[test]
fn empty_history_propagates_nan_without_panicking() {
    let indices = condition(&[], 59215.0);
    assert!(indices.f10_7.is_nan());
    assert!(indices.f81.is_nan());
    assert!(indices.kp.is_nan());
}

#[test]
fn solar_and_geomagnetic_delays_differ() {
    // A linear ramp in both fields exposes the delay applied to each one.
    let history: Vec<HistorySample> = (0..20)
        .map(|d| HistorySample {
            epoch: 59000.0 + d as f64,
            f10_7: 100.0 + d as f64,
            kp: d as f64 * 0.25,
        })
        .collect();

    let indices = condition(&history, 59010.0);
    // f10_7(t) = 100 + (t - 59000), kp(t) = 0.25 (t - 59000)
    assert_relative_eq!(
        indices.f10_7,
        100.0 + (10.0 - SOLAR_FLUX_DELAY),
        max_relative = 1e-12
    );
    assert_relative_eq!(
        indices.kp,
        0.25 * (10.0 - GEOMAGNETIC_DELAY),
        max_relative = 1e-12
    );
}
