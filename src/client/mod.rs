//! Catalog access: where model records come from.

use anyhow::Result;
use async_trait::async_trait;

use crate::config::Config;
use crate::model::ModelRecord;

mod file;
mod http;
pub mod retry;

pub use self::file::FileCatalog;
pub use self::http::{HttpCatalog, HttpStatusError};

#[async_trait]
pub trait CatalogSource {
    async fn view_model(&self, model_id: &str) -> Result<ModelRecord>;
}

/// Fixture directory when configured, the HTTP API otherwise.
pub fn from_config(cfg: &Config) -> Result<Box<dyn CatalogSource + Send + Sync>> {
    match &cfg.fixture_dir {
        Some(dir) => Ok(Box::new(FileCatalog::new(dir.clone()))),
        None => Ok(Box::new(HttpCatalog::new(cfg)?)),
    }
}
