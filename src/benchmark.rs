//! Benchmark aggregation: filter options and display values for a model's
//! benchmark records.
//!
//! Everything here is pure. Empty input, an unset selection or a selection
//! that matches nothing all produce empty output rather than an error.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::model::{BenchmarkRecord, LanguagePair};

/// Distinct metric and dataset names, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub metrics: Vec<String>,
    pub datasets: Vec<String>,
}

impl FilterOptions {
    pub fn default_metric(&self) -> Option<&str> {
        self.metrics.first().map(String::as_str)
    }

    pub fn default_dataset(&self) -> Option<&str> {
        self.datasets.first().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty() && self.datasets.is_empty()
    }
}

/// One cell of the benchmark grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayValue {
    pub value: String,
    pub language_label: String,
}

pub fn derive_filter_options(records: &[BenchmarkRecord]) -> FilterOptions {
    let mut opts = FilterOptions::default();
    let mut seen_metrics = HashSet::new();
    let mut seen_datasets = HashSet::new();

    for rec in records {
        if seen_datasets.insert(rec.name.as_str()) {
            opts.datasets.push(rec.name.clone());
        }
        for score in &rec.scores {
            if seen_metrics.insert(score.metric_name.as_str()) {
                opts.metrics.push(score.metric_name.clone());
            }
        }
    }
    opts
}

/// `"src-tgt"`, or just `"src"` when the target is absent or empty.
pub fn language_label(pair: &LanguagePair) -> String {
    match pair.target_language.as_deref() {
        Some(tgt) if !tgt.is_empty() => format!("{}-{}", pair.source_language, tgt),
        _ => pair.source_language.clone(),
    }
}

/// Scores for `metric` on `dataset`, one per matching (record, score) pair,
/// in record order.
pub fn filter_values(
    records: &[BenchmarkRecord],
    metric: Option<&str>,
    dataset: Option<&str>,
) -> Vec<DisplayValue> {
    let (metric, dataset) = match (metric, dataset) {
        (Some(m), Some(d)) if !m.is_empty() && !d.is_empty() => (m, d),
        _ => return Vec::new(),
    };

    records
        .iter()
        .filter(|rec| rec.name == dataset)
        .flat_map(|rec| {
            let label = language_label(&rec.languages);
            rec.scores
                .iter()
                .filter(move |s| s.metric_name == metric)
                .map(move |s| DisplayValue {
                    value: s.score.clone(),
                    language_label: label.clone(),
                })
        })
        .collect()
}
