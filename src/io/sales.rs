// src/io/sales.rs

use crate::error::{MdpError, Result};
use csv::StringRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// One raw sales line after header normalisation.
#[derive(Debug, Clone, Deserialize)]
struct SaleRecord {
    date: String,
    quantity: f64,
}

/// Total quantity sold on one date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySales {
    pub date: String,
    pub quantity: f64,
}

/// Reads a sales CSV and returns one total per date, ordered by date key.
///
/// Header names are matched case-insensitively and ignore surrounding
/// whitespace; `date` and `quantity` are required, other columns are ignored.
pub fn load_daily_totals<P: AsRef<Path>>(path: P) -> Result<Vec<DailySales>> {
    let file = std::fs::File::open(path.as_ref())?;
    let totals = read_daily_totals(file)?;
    info!(
        path = %path.as_ref().display(),
        days = totals.len(),
        "loaded daily sales"
    );
    Ok(totals)
}

pub fn read_daily_totals<R: Read>(reader: R) -> Result<Vec<DailySales>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let headers: StringRecord = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();
    for required in ["date", "quantity"] {
        if !headers.iter().any(|h| h == required) {
            return Err(MdpError::invalid_input(
                "CSV must contain 'date' and 'quantity' columns (case-insensitive)",
            ));
        }
    }
    rdr.set_headers(headers);

    let mut records = Vec::new();
    for (line, row) in rdr.deserialize::<SaleRecord>().enumerate() {
        // Header is line 1.
        let record = row.map_err(|e| {
            MdpError::invalid_input(format!("malformed sales row at line {}: {e}", line + 2))
        })?;
        records.push((record.date, record.quantity));
    }

    let totals = daily_totals(records);
    if totals.is_empty() {
        return Err(MdpError::invalid_input("sales file holds no rows"));
    }
    Ok(totals)
}

/// Sums quantities per date key. Output is sorted by key.
pub fn daily_totals<I>(records: I) -> Vec<DailySales>
where
    I: IntoIterator<Item = (String, f64)>,
{
    let mut by_date: BTreeMap<String, f64> = BTreeMap::new();
    for (date, quantity) in records {
        *by_date.entry(date).or_insert(0.0) += quantity;
    }
    by_date
        .into_iter()
        .map(|(date, quantity)| DailySales { date, quantity })
        .collect()
}
