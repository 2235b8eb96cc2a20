use anyhow::Result;
use benchview::cli::{CliArgs, USAGE};
use benchview::client;
use benchview::config::Config;
use benchview::logging::{log, obj, v_str, Domain, Level};
use benchview::render::{render_grid, render_json};
use benchview::view::ModelView;

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse(std::env::args().skip(1))?;
    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let mut cfg = Config::from_env();
    if args.fixture_dir.is_some() {
        cfg.fixture_dir = args.fixture_dir.clone();
    }
    log(
        Level::Debug,
        Domain::System,
        "startup",
        obj(&[
            ("model_id", v_str(&args.model_id)),
            ("api_base", v_str(&cfg.api_base)),
            (
                "fixture_dir",
                cfg.fixture_dir
                    .as_ref()
                    .map(|d| v_str(&d.to_string_lossy()))
                    .unwrap_or(serde_json::Value::Null),
            ),
        ]),
    );

    let source = client::from_config(&cfg)?;
    let model = source.view_model(&args.model_id).await?;

    let mut view = ModelView::from_model(&model);
    if let Some(metric) = &args.metric {
        view.select_metric(metric);
    }
    if let Some(dataset) = &args.dataset {
        view.select_dataset(dataset);
    }

    if args.as_json {
        println!("{}", serde_json::to_string_pretty(&render_json(&view))?);
    } else {
        print!("{}", render_grid(&view));
    }
    Ok(())
}
