//! Output for the benchmark grid: aligned text for terminals, JSON for tools.

use serde_json::{json, Value};

use crate::view::ModelView;

pub fn render_grid(view: &ModelView) -> String {
    let mut out = String::new();
    out.push_str(&format!("model:   {}\n", view.model_id()));
    out.push_str(&format!("metric:  {}\n", view.selected_metric().unwrap_or("-")));
    out.push_str(&format!("dataset: {}\n", view.selected_dataset().unwrap_or("-")));

    let opts = view.options();
    if !opts.is_empty() {
        out.push_str(&format!("metrics available:  {}\n", opts.metrics.join(", ")));
        out.push_str(&format!("datasets available: {}\n", opts.datasets.join(", ")));
    }
    out.push('\n');

    if view.values().is_empty() {
        out.push_str("no benchmark values for this selection\n");
        return out;
    }
    let width = view
        .values()
        .iter()
        .map(|v| v.language_label.chars().count())
        .max()
        .unwrap_or(0);
    for v in view.values() {
        out.push_str(&format!("{:<width$}  {}\n", v.language_label, v.value, width = width));
    }
    out
}

pub fn render_json(view: &ModelView) -> Value {
    json!({
        "modelId": view.model_id(),
        "metrics": view.options().metrics,
        "datasets": view.options().datasets,
        "selectedMetric": view.selected_metric(),
        "selectedDataset": view.selected_dataset(),
        "values": view.values(),
    })
}
