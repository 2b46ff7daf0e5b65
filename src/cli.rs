use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use miniray::{Config, render};

#[derive(Parser)]
#[command(name = "miniray-cli")]
#[command(about = "Renders a scene of spheres, boxes and planes to a PNG", long_about = None)]
struct Cli {
    /// TOML scene description, the built-in showcase scene if not given
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output image
    #[arg(short, long, default_value = "image.png")]
    output: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value_t = log::LevelFilter::Info)]
    log_level: log::LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(cli.log_level)
        .init();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::default(),
    };
    let (scene, camera, settings) = config.into_parts()?;
    log::info!("{} surfaces in the scene", scene.surfaces().len());

    let bar = ProgressBar::no_length().with_style(ProgressStyle::with_template(
        "{bar:40} {pos}/{len} tiles [{elapsed_precise}]",
    )?);
    let mut render_progress = render(scene, camera, settings, {
        let bar = bar.clone();
        move |_, progress| {
            bar.update(|state| {
                state.set_len(progress.total as u64);
                state.set_pos(progress.finished as u64)
            })
        }
    })?;
    bar.set_length(render_progress.progress().total as u64);

    render_progress.wait()?;
    bar.finish();

    render_progress
        .into_image()
        .save(&cli.output)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;
    log::info!("image written to {}", cli.output.display());

    Ok(())
}
