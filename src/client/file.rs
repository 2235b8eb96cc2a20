use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use async_trait::async_trait;

use crate::client::CatalogSource;
use crate::logging::{log, obj, v_num, v_str, Domain, Level, ProfileScope};
use crate::model::ModelRecord;

/// Reads model records from `<dir>/<model_id>.json`.
///
/// Model ids of the form `org/name` map to `org_name.json`.
pub struct FileCatalog {
    dir: PathBuf,
}

impl FileCatalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, model_id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", model_id.replace('/', "_")))
    }
}

#[async_trait]
impl CatalogSource for FileCatalog {
    async fn view_model(&self, model_id: &str) -> Result<ModelRecord> {
        let scope = ProfileScope::new("catalog.file");
        let path = self.path_for(model_id);
        let raw = tokio::fs::read(&path)
            .await
            .with_context(|| format!("reading model fixture {}", path.display()))?;
        let model: ModelRecord = serde_json::from_slice(&raw)
            .with_context(|| format!("parsing model fixture {}", path.display()))?;
        if model.model_id != model_id {
            bail!("fixture {} holds model {:?}, expected {:?}", path.display(), model.model_id, model_id);
        }
        log(
            Level::Info,
            Domain::Catalog,
            "fixture_loaded",
            obj(&[
                ("model_id", v_str(model_id)),
                ("path", v_str(&path.to_string_lossy())),
                ("benchmarks", model.benchmarks.len().into()),
                ("elapsed_ms", v_num(scope.elapsed_ms())),
            ]),
        );
        Ok(model)
    }
}
