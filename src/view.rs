use serde_json::json;
use sha2::{Digest, Sha256};

use crate::benchmark::{derive_filter_options, filter_values, DisplayValue, FilterOptions};
use crate::logging::{log_records_replaced, log_selection, ProfileScope};
use crate::model::{BenchmarkRecord, ModelRecord};

/// Benchmark state of one model page: the record list, the two filter
/// selections, and the views derived from them.
///
/// Every mutator recomputes what depends on it, so the accessors never
/// return stale data.
#[derive(Debug, Clone)]
pub struct ModelView {
    model_id: String,
    records: Vec<BenchmarkRecord>,
    digest: String,
    options: FilterOptions,
    selected_metric: Option<String>,
    selected_dataset: Option<String>,
    values: Vec<DisplayValue>,
}

impl ModelView {
    pub fn new() -> Self {
        Self {
            model_id: String::new(),
            records: Vec::new(),
            digest: records_digest(&[]),
            options: FilterOptions::default(),
            selected_metric: None,
            selected_dataset: None,
            values: Vec::new(),
        }
    }

    pub fn from_model(model: &ModelRecord) -> Self {
        let mut view = Self::new();
        view.load_model(model);
        view
    }

    pub fn load_model(&mut self, model: &ModelRecord) {
        self.model_id = model.model_id.clone();
        self.set_records(model.benchmarks.clone());
    }

    /// Replace the record list. Options are rederived and both selections
    /// reset to the first option, or to none when there are no options.
    pub fn set_records(&mut self, records: Vec<BenchmarkRecord>) {
        let _scope = ProfileScope::with_context("view.set_records", &[("records", json!(records.len()))]);
        self.records = records;
        self.digest = records_digest(&self.records);
        self.options = derive_filter_options(&self.records);
        self.selected_metric = self.options.default_metric().map(str::to_string);
        self.selected_dataset = self.options.default_dataset().map(str::to_string);
        log_records_replaced(
            &self.model_id,
            self.records.len(),
            self.options.metrics.len(),
            self.options.datasets.len(),
            &self.digest,
        );
        self.recompute();
    }

    pub fn select_metric(&mut self, metric: &str) {
        self.selected_metric = Some(metric.to_string());
        self.recompute();
    }

    pub fn select_dataset(&mut self, dataset: &str) {
        self.selected_dataset = Some(dataset.to_string());
        self.recompute();
    }

    pub fn clear_selection(&mut self) {
        self.selected_metric = None;
        self.selected_dataset = None;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.values = filter_values(
            &self.records,
            self.selected_metric.as_deref(),
            self.selected_dataset.as_deref(),
        );
        log_selection(
            self.selected_metric.as_deref(),
            self.selected_dataset.as_deref(),
            self.values.len(),
        );
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn selected_metric(&self) -> Option<&str> {
        self.selected_metric.as_deref()
    }

    pub fn selected_dataset(&self) -> Option<&str> {
        self.selected_dataset.as_deref()
    }

    pub fn values(&self) -> &[DisplayValue] {
        &self.values
    }

    /// Hex SHA-256 of the serialized record list.
    pub fn digest(&self) -> &str {
        &self.digest
    }
}

impl Default for ModelView {
    fn default() -> Self {
        Self::new()
    }
}

fn records_digest(records: &[BenchmarkRecord]) -> String {
    let mut hasher = Sha256::new();
    // Vec<BenchmarkRecord> always serializes; an empty buffer only changes the digest.
    hasher.update(serde_json::to_vec(records).unwrap_or_default());
    hex::encode(hasher.finalize())
}
