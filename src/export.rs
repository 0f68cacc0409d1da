use crate::errors::UsageError;
use crate::models::{Category, UsageRecord, DATE_FORMAT};
use serde::Serialize;

pub const EXPORT_FILENAME: &str = "electricity_data.csv";
pub const CSV_HEADER: [&str; 3] = ["Date", "Usage (kWh)", "Category"];

#[derive(Serialize)]
struct CsvRow {
    date: String,
    usage: f64,
    category: Option<Category>,
}

impl From<&UsageRecord> for CsvRow {
    fn from(record: &UsageRecord) -> Self {
        Self {
            date: record.date.format(DATE_FORMAT).to_string(),
            usage: record.usage,
            category: record.category,
        }
    }
}

/// Serializes records in insertion order. The header row is written even when there are no records.
pub fn to_csv(records: &[UsageRecord]) -> Result<String, UsageError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER).map_err(csv_error)?;
    for record in records {
        writer.serialize(CsvRow::from(record)).map_err(csv_error)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| UsageError::data(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| UsageError::data(err.to_string()))
}

fn csv_error(err: csv::Error) -> UsageError {
    UsageError::data(format!("failed to write csv: {err}"))
}
