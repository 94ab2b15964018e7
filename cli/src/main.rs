mod preview;
mod summary;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use contribcal_core::{
    summarize, time, ActivityMap, ActivitySource, AppConfig, FileActivitySource, FileImageSink,
    RenderCalendarUseCase, RenderRequest, RowLayout,
};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "contribcal")]
#[command(about = "Render a contribution calendar heatmap from a JSON activity file", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Render the calendar as SVG (and optionally PNG)
    Render {
        /// JSON file mapping YYYY-MM-DD dates to counts
        input: PathBuf,
        /// Year to render (defaults to the configured or current year)
        #[arg(short, long)]
        year: Option<i32>,
        /// Output directory
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Also export a PNG image
        #[arg(long)]
        png: bool,
        /// Skip the SVG file
        #[arg(long)]
        no_svg: bool,
        /// How days are placed within a week column
        #[arg(long, value_enum)]
        layout: Option<LayoutArg>,
    },
    /// Print monthly totals for a year
    Summary {
        input: PathBuf,
        #[arg(short, long)]
        year: Option<i32>,
    },
    /// Browse the calendar in the terminal
    Preview {
        input: PathBuf,
        #[arg(short, long)]
        year: Option<i32>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum LayoutArg {
    Weekday,
    Sequential,
}

impl From<LayoutArg> for RowLayout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Weekday => RowLayout::Weekday,
            LayoutArg::Sequential => RowLayout::Sequential,
        }
    }
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = AppConfig::load();
    debug!(config = ?config, "effective configuration");

    match cli.command {
        Some(Commands::Render { input, year, out, png, no_svg, layout }) => {
            if no_svg && !png {
                println!("Nothing to write: --no-svg needs --png.");
                return Ok(());
            }

            let source = FileActivitySource::new(&input)
                .with_context(|| format!("Please select a valid JSON file ({})", input.display()))?;
            let sink = FileImageSink::new(out.or_else(|| config.output_dir.clone()))
                .context("Output directory is not usable")?;

            let mut options = config.render_options();
            if let Some(layout) = layout {
                options.row_layout = layout.into();
            }

            let request = RenderRequest {
                year: year.unwrap_or_else(|| config.year_or_current()),
                options,
                write_svg: !no_svg,
                write_png: png,
            };

            let outcome = RenderCalendarUseCase::new(&source, &sink)
                .execute(&request)
                .with_context(|| format!("Could not render {}", input.display()))?;

            println!("Rendered {} days for {}", outcome.grid.cells.len(), outcome.grid.year);
            for path in outcome.written {
                println!("  Wrote: {}", path.display());
            }
        },
        Some(Commands::Summary { input, year }) => {
            let activity = load(&input)?;
            let year = time::validate_year(year.unwrap_or_else(|| config.year_or_current()))?;
            summary::show_summary(&summarize(&activity, year));
        },
        Some(Commands::Preview { input, year }) => {
            let activity = load(&input)?;
            let year = time::validate_year(year.unwrap_or_else(|| config.year_or_current()))?;
            preview::run(activity, year, config.render_options())?;
        },
        None => {
            Cli::command().print_help()?;
        }
    }
    Ok(())
}

fn load(input: &Path) -> Result<ActivityMap> {
    let source = FileActivitySource::new(input)
        .with_context(|| format!("Please select a valid JSON file ({})", input.display()))?;
    source
        .load()
        .with_context(|| format!("Error parsing JSON in {}", input.display()))
}
