//! Argument parsing for the `benchview` binary.

use std::path::PathBuf;

use anyhow::{bail, Result};

pub const USAGE: &str = "\
Usage: benchview <model_id> [options]

Options:
  --metric=<name>    Select a metric (default: first metric in the model)
  --dataset=<name>   Select a dataset (default: first dataset in the model)
  --dir=<path>       Read <path>/<model_id>.json instead of calling the API
  --json             Print JSON instead of a text grid";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub model_id: String,
    pub metric: Option<String>,
    pub dataset: Option<String>,
    pub fixture_dir: Option<PathBuf>,
    pub as_json: bool,
    pub help: bool,
}

impl CliArgs {
    /// Parse arguments, excluding the program name.
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = CliArgs::default();
        let mut model_id = None;
        for arg in args {
            let arg = arg.as_ref();
            if let Some(v) = arg.strip_prefix("--metric=") {
                out.metric = Some(v.to_string());
            } else if let Some(v) = arg.strip_prefix("--dataset=") {
                out.dataset = Some(v.to_string());
            } else if let Some(v) = arg.strip_prefix("--dir=") {
                out.fixture_dir = Some(PathBuf::from(v));
            } else if arg == "--json" {
                out.as_json = true;
            } else if arg == "-h" || arg == "--help" {
                out.help = true;
            } else if arg.starts_with("--") {
                bail!("unknown option: {}", arg);
            } else if model_id.is_none() {
                model_id = Some(arg.to_string());
            } else {
                bail!("unexpected argument: {}", arg);
            }
        }
        match model_id {
            Some(id) => out.model_id = id,
            None if out.help => {}
            None => bail!("missing <model_id>"),
        }
        Ok(out)
    }
}
