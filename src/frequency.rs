use std::collections::HashMap;

/// Occurrence counts for the values of a single column.
///
/// Distinct values are kept in the order they were first seen so that
/// decisions and log output follow the column's own order.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    distinct: Vec<String>,
    counts: HashMap<String, usize>,
    total: usize,
}

impl FrequencyTable {
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = FrequencyTable::default();
        for value in values {
            table.ingest(value.as_ref());
        }
        table
    }

    fn ingest(&mut self, value: &str) {
        self.total += 1;
        if let Some(count) = self.counts.get_mut(value) {
            *count += 1;
            return;
        }
        self.distinct.push(value.to_string());
        self.counts.insert(value.to_string(), 1);
    }

    /// Number of occurrences of `value`, 0 when it never occurs.
    pub fn count(&self, value: &str) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    pub fn distinct(&self) -> impl Iterator<Item = &str> {
        self.distinct.iter().map(String::as_str)
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.distinct.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distinct.is_empty()
    }

    /// Number of values ingested, duplicates included.
    pub fn total(&self) -> usize {
        self.total
    }
}
