use crate::errors::UsageError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Heating,
    Cooling,
    Lighting,
    Appliances,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Heating,
        Category::Cooling,
        Category::Lighting,
        Category::Appliances,
        Category::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Heating => "Heating",
            Category::Cooling => "Cooling",
            Category::Lighting => "Lighting",
            Category::Appliances => "Appliances",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UsageError::validation(format!("unknown category '{s}'")))
    }
}

/// One electricity reading. Immutable once it reaches the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub date: NaiveDate,
    pub usage: f64,
    pub category: Option<Category>,
}

impl UsageRecord {
    pub fn new(date: NaiveDate, usage: f64, category: Option<Category>) -> Self {
        Self { date, usage, category }
    }

    pub fn from_submission(form: &SubmitForm) -> Result<Self, UsageError> {
        Ok(Self {
            date: parse_date(form.date.as_deref())?,
            usage: parse_usage(form.usage.as_deref())?,
            category: parse_category(form.category.as_deref())?,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SubmitForm {
    pub date: Option<String>,
    pub usage: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub status: String,
}

impl SubmitResponse {
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub total: f64,
    pub average: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertStatus {
    pub triggered: bool,
    pub date: Option<NaiveDate>,
    pub usage: Option<f64>,
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    #[serde(flatten)]
    pub summary: Summary,
    pub threshold: f64,
    pub alert: AlertStatus,
}

/// Only the zero-padded form is accepted, so a stored date always formats back to the submitted text.
pub fn parse_date(raw: Option<&str>) -> Result<NaiveDate, UsageError> {
    let value = required(raw, "date")?;
    let invalid = || UsageError::validation(format!("invalid date '{value}', expected YYYY-MM-DD"));
    let date = NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())?;
    if date.format(DATE_FORMAT).to_string() != value {
        return Err(invalid());
    }
    Ok(date)
}

pub fn parse_usage(raw: Option<&str>) -> Result<f64, UsageError> {
    let value = required(raw, "usage")?;
    let usage: f64 = value
        .parse()
        .map_err(|_| UsageError::validation(format!("invalid usage '{value}', expected a number")))?;
    if !usage.is_finite() || usage < 0.0 {
        return Err(UsageError::validation(format!(
            "invalid usage '{value}', expected a non-negative number"
        )));
    }
    Ok(usage)
}

pub fn parse_category(raw: Option<&str>) -> Result<Option<Category>, UsageError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some),
    }
}

fn required<'a>(raw: Option<&'a str>, field: &str) -> Result<&'a str, UsageError> {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(UsageError::validation(format!("{field} is required"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(date: Option<&str>, usage: Option<&str>, category: Option<&str>) -> SubmitForm {
        SubmitForm {
            date: date.map(String::from),
            usage: usage.map(String::from),
            category: category.map(String::from),
        }
    }

    #[test]
    fn submission_parses_typed_fields() {
        let record =
            UsageRecord::from_submission(&form(Some("2024-01-02"), Some(" 50.5 "), Some("Heating")))
                .unwrap();
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(record.usage, 50.5);
        assert_eq!(record.category, Some(Category::Heating));
    }

    #[test]
    fn category_is_optional() {
        let record = UsageRecord::from_submission(&form(Some("2024-01-02"), Some("3"), None)).unwrap();
        assert_eq!(record.category, None);

        let record =
            UsageRecord::from_submission(&form(Some("2024-01-02"), Some("3"), Some(""))).unwrap();
        assert_eq!(record.category, None);
    }

    #[test]
    fn missing_fields_are_rejected() {
        let err = UsageRecord::from_submission(&form(None, Some("3"), None)).unwrap_err();
        assert_eq!(err, UsageError::validation("date is required"));

        let err = UsageRecord::from_submission(&form(Some("2024-01-02"), Some("  "), None)).unwrap_err();
        assert_eq!(err, UsageError::validation("usage is required"));
    }

    #[test]
    fn malformed_date_is_rejected() {
        for raw in ["2024-13-01", "01/02/2024", "yesterday", "2024-1-2", "2024-01-2"] {
            let err = parse_date(Some(raw)).unwrap_err();
            assert!(matches!(err, UsageError::Validation(ref msg) if msg.contains(raw)));
        }
    }

    #[test]
    fn accepted_date_formats_back_unchanged() {
        let date = parse_date(Some(" 2024-01-02 ")).unwrap();
        assert_eq!(date.format(DATE_FORMAT).to_string(), "2024-01-02");
    }

    #[test]
    fn malformed_usage_is_rejected() {
        for raw in ["abc", "NaN", "inf", "-1"] {
            assert!(parse_usage(Some(raw)).is_err(), "{raw} should be rejected");
        }
        assert_eq!(parse_usage(Some("0")).unwrap(), 0.0);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = parse_category(Some("Pool")).unwrap_err();
        assert_eq!(err, UsageError::validation("unknown category 'Pool'"));
        assert_eq!(parse_category(Some("Other")).unwrap(), Some(Category::Other));
    }

    #[test]
    fn record_serializes_with_iso_date() {
        let record = UsageRecord::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 30.0, None);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "date": "2024-01-01", "usage": 30.0, "category": null })
        );
    }
}
