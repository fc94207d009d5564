//! Loading daily space-weather histories from local CSV files.
//!
//! Expected layout: a header line then one record per day, columns
//! `mjd,f10_7,kp`. Extra columns are ignored.

use std::path::Path;

use serde::Deserialize;

use crate::errors::Gost25645Error;
use crate::space_weather::HistorySample;

#[derive(Debug, Deserialize)]
struct IndexRecord {
    mjd: f64,
    f10_7: f64,
    kp: f64,
}

impl From<IndexRecord> for HistorySample {
    fn from(record: IndexRecord) -> Self {
        HistorySample {
            epoch: record.mjd,
            f10_7: record.f10_7,
            kp: record.kp,
        }
    }
}

/// Read a daily index history from a CSV file.
///
/// Records are returned in file order; the conditioner expects ascending
/// epochs, which well-formed index tables already satisfy.
///
/// Arguments
/// ---------
/// * `path`: path to a CSV file with a `mjd,f10_7,kp` header
///
/// Return
/// ------
/// * the history samples, or a [`Gost25645Error`] if the file cannot be
///   read or parsed
pub fn load_history<P: AsRef<Path>>(path: P) -> Result<Vec<HistorySample>, Gost25645Error> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut history = Vec::new();
    for record in reader.deserialize() {
        let record: IndexRecord = record?;
        history.push(record.into());
    }
    Ok(history)
}
