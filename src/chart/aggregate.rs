use serde::Serialize;
use std::collections::HashMap;

/// Status value counted as a success. Compared exactly, case included.
pub const SUCCESS_STATUS: &str = "Success";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TypeAggregate {
    pub count: usize,
    pub successes: usize,
}

impl TypeAggregate {
    pub fn success_rate(&self) -> f64 {
        if self.count > 0 {
            self.successes as f64 / self.count as f64 * 100.0
        } else {
            0.0
        }
    }
}

/// Per content type success counts, kept in first-occurrence order.
#[derive(Debug, Clone, Default)]
pub struct SuccessReport {
    entries: Vec<(String, TypeAggregate)>,
    index: HashMap<String, usize>,
}

impl SuccessReport {
    /// Pairs `types[i]` with `statuses[i]`; the longer list is cut to the shorter.
    pub fn from_records<T, S>(types: &[T], statuses: &[S]) -> Self
    where
        T: AsRef<str>,
        S: AsRef<str>,
    {
        let mut report = Self::default();
        for (content_type, status) in types.iter().zip(statuses) {
            report.record(content_type.as_ref(), status.as_ref() == SUCCESS_STATUS);
        }
        report
    }

    pub fn record(&mut self, content_type: &str, success: bool) {
        let slot = match self.index.get(content_type) {
            Some(&i) => i,
            None => {
                self.entries
                    .push((content_type.to_string(), TypeAggregate::default()));
                self.index
                    .insert(content_type.to_string(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };

        let aggregate = &mut self.entries[slot].1;
        aggregate.count += 1;
        if success {
            aggregate.successes += 1;
        }
    }

    pub fn get(&self, content_type: &str) -> Option<&TypeAggregate> {
        self.index.get(content_type).map(|&i| &self.entries[i].1)
    }

    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// `(type, success rate in percent)` in bar order.
    pub fn rates(&self) -> Vec<(&str, f64)> {
        self.entries
            .iter()
            .map(|(name, aggregate)| (name.as_str(), aggregate.success_rate()))
            .collect()
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, aggregate)| aggregate.count).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
