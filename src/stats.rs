use crate::models::{AlertStatus, Summary, SummaryResponse, UsageRecord};

pub fn build_summary(records: &[UsageRecord], threshold: f64) -> SummaryResponse {
    SummaryResponse {
        summary: summary(records),
        threshold,
        alert: check_alert(records, threshold),
    }
}

/// Ascending by date. `sort_by_key` is stable, so same-day readings keep insertion order.
pub fn sorted_by_date(records: &[UsageRecord]) -> Vec<UsageRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|record| record.date);
    sorted
}

/// Average is reported as 0.0 for an empty store.
pub fn summary(records: &[UsageRecord]) -> Summary {
    let count = records.len();
    let total: f64 = records.iter().map(|record| record.usage).sum();
    let average = if count == 0 { 0.0 } else { total / count as f64 };

    Summary {
        count,
        total,
        average,
    }
}

pub fn check_alert(records: &[UsageRecord], threshold: f64) -> AlertStatus {
    let Some(latest) = latest_by_date(records) else {
        return AlertStatus {
            triggered: false,
            date: None,
            usage: None,
            message: None,
        };
    };

    let triggered = latest.usage > threshold;
    AlertStatus {
        triggered,
        date: Some(latest.date),
        usage: Some(latest.usage),
        message: triggered.then(|| format!("Alert: High usage detected! ({} kWh)", latest.usage)),
    }
}

/// Same record the stable sort would put last: greatest date, latest insertion among ties.
fn latest_by_date(records: &[UsageRecord]) -> Option<&UsageRecord> {
    records
        .iter()
        .reduce(|latest, record| if record.date >= latest.date { record } else { latest })
}
