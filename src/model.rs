//! Wire types for the model catalog.
//!
//! Field names follow the catalog API (camelCase). Only `modelId`, `name` and
//! `benchmarks` are relied on downstream; everything else is carried for
//! display and ignored when absent.

use serde::{Deserialize, Deserializer, Serialize};

/// Treats an explicit `null` like a missing key: the catalog emits unset
/// optional fields as `null`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguagePair {
    pub source_language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_language: Option<String>,
}

impl LanguagePair {
    pub fn new(source: &str, target: Option<&str>) -> Self {
        Self {
            source_language: source.to_string(),
            target_language: target.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub metric_name: String,
    /// Kept as text: not every score the catalog returns parses as a number.
    pub score: String,
}

/// One evaluation of a model on a dataset for a language pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Dataset name.
    pub name: String,
    pub languages: LanguagePair,
    pub scores: Vec<Score>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submitter {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, rename = "aboutMe", skip_serializing_if = "Option::is_none")]
    pub about_me: Option<String>,
}

/// Response body of the catalog's model-view endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelRecord {
    pub model_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub task: Task,
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: Vec<LanguagePair>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub license: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub domain: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitter: Option<Submitter>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub benchmarks: Vec<BenchmarkRecord>,
}
