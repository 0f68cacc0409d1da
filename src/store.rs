use crate::models::UsageRecord;

/// Append-only, insertion-ordered collection of readings for the life of the process.
#[derive(Debug, Default)]
pub struct UsageStore {
    records: Vec<UsageRecord>,
}

impl UsageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: UsageRecord) {
        self.records.push(record);
    }

    pub fn all(&self) -> &[UsageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(day: u32, usage: f64) -> UsageRecord {
        UsageRecord::new(NaiveDate::from_ymd_opt(2024, 1, day).unwrap(), usage, None)
    }

    #[test]
    fn append_keeps_insertion_order() {
        let mut store = UsageStore::new();
        assert!(store.is_empty());

        store.append(record(2, 50.0));
        store.append(record(1, 30.0));
        store.append(record(2, 50.0));

        assert_eq!(store.len(), 3);
        let usages: Vec<f64> = store.all().iter().map(|r| r.usage).collect();
        assert_eq!(usages, vec![50.0, 30.0, 50.0]);
        assert_eq!(store.all()[0], store.all()[2]);
    }
}
