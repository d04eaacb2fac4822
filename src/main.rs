use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use femview::{logging, DisplayState, ElementKind, ParameterReloader, ReloadConfig};
use tracing::error;

/// Reload finite element view parameters and print the extrema report.
#[derive(Debug, Parser)]
#[command(name = "femview", version, about)]
struct Cli {
    /// Element family the results were computed with; selects qdview.dat or trview.dat.
    #[arg(long, value_enum, default_value_t = ElementKind::Quad)]
    element: ElementKind,

    /// Directory containing the view data file.
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// Factor the displacements were multiplied by when the file was written.
    #[arg(long, default_value_t = 1.0)]
    coord_rescale: f64,

    /// Also print the loaded display state as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    // Logs go to stderr so the report on stdout stays clean.
    logging::init();
    let cli = Cli::parse();

    // Map the flags onto the reload configuration; unset flags keep the defaults.
    let config = ReloadConfig::default()
        .with_element(cli.element)
        .with_data_dir(&cli.data_dir)
        .with_coord_rescale(cli.coord_rescale);
    let reloader = ParameterReloader::new(config);

    // The viewer would keep this between reloads; the CLI starts from defaults.
    let mut state = DisplayState::default();
    // Parse, rescale and print the summary. A failure leaves the state as it was.
    if let Err(err) = reloader.reload(&mut state) {
        error!("{err}");
        return ExitCode::FAILURE;
    }

    // Optional machine readable dump of what a viewer would now display.
    if cli.json {
        match state.to_json() {
            Ok(json) => println!("{json}"),
            Err(err) => {
                error!("failed to encode display state: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
