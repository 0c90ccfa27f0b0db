//! cmplot - plot a center-of-mass history in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use cmplot::app::Theme;
use cmplot::config::{
    LayoutConfig, MarkerStyle, PlotConfig, RenderBackend, SeriesSelection, DEFAULT_DATA_FILE,
};
use cmplot::data::HistoryReader;
use cmplot::plot::Summary;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "cmplot")]
#[command(about = "Plot a center-of-mass history (t x_cm y_cm) in the terminal", long_about = None)]
struct Args {
    /// History file with three whitespace-separated columns: t, x_cm, y_cm
    #[arg(default_value = DEFAULT_DATA_FILE)]
    file: PathBuf,

    /// Rendering backend
    #[arg(long, value_enum, default_value_t = RenderBackend::Fullscreen)]
    backend: RenderBackend,

    /// Height of the inline viewport in rows
    #[arg(long, default_value_t = LayoutConfig::default().inline_height)]
    height: u16,

    /// Center-of-mass component(s) to plot against time
    #[arg(long, value_enum, default_value_t = SeriesSelection::Y)]
    series: SeriesSelection,

    /// Point marker
    #[arg(long, value_enum, default_value_t = MarkerStyle::Braille)]
    marker: MarkerStyle,

    /// Color theme
    #[arg(long, value_enum, default_value_t = Theme::GruvboxDark)]
    theme: Theme,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Print a summary of the loaded columns instead of opening the chart
    #[arg(long)]
    summary: bool,
}

impl Args {
    fn into_config(self) -> PlotConfig {
        PlotConfig {
            data_path: self.file,
            backend: self.backend,
            series: self.series,
            marker: self.marker,
            theme: self.theme,
            layout: LayoutConfig {
                inline_height: self.height.max(3),
                ..LayoutConfig::default()
            },
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(log_file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting cmplot");
    }

    let summary = args.summary;
    let config = args.into_config();

    if summary {
        let history = HistoryReader::read_file(&config.data_path)?;
        print!("{}", Summary::of(&history));
    } else {
        cmplot::viewer::run(&config)?;
    }

    tracing::info!("cmplot exited");
    Ok(())
}
