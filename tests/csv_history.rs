use gost25645::space_weather::csv_reader::load_history;
use gost25645::space_weather::{condition, HistorySample};

#[test]
fn test_load_history_from_csv() {
    let history = load_history("tests/data/daily_indices.csv").unwrap();
    assert_eq!(history.len(), 10);
    assert_eq!(
        history[0],
        HistorySample {
            epoch: 59000.0,
            f10_7: 131.2,
            kp: 2.0
        }
    );
    assert_eq!(
        history[9],
        HistorySample {
            epoch: 59009.0,
            f10_7: 133.0,
            kp: 5.3
        }
    );
}

#[test]
fn test_loaded_history_feeds_the_conditioner() {
    let history = load_history("tests/data/daily_indices.csv").unwrap();

    // Delayed solar epoch 59003.0 lands exactly on the fourth record.
    let indices = condition(&history, 59004.7);
    assert_eq!(indices.f10_7, 138.4);
    // Only ten days of history exist, so the 81-day window averages them all
    // up to the delayed epoch: (131.2 + 134.8 + 140.1 + 138.4) / 4.
    assert_eq!(indices.f81, (131.2 + 134.8 + 140.1 + 138.4) / 4.0);
}

#[test]
fn test_missing_file_reports_an_error() {
    assert!(load_history("tests/data/no_such_file.csv").is_err());
}
