use std::path::Path;
use std::time::Duration;

use log::info;
use rayon::ThreadPoolBuilder;

use crate::controllers::export::export_controller::{ExportController, ExportError};
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::cancellation::{Deadline, NeverCancel};
use crate::core::fractals::julia::julia_config::JuliaConfig;
use crate::input::cli::args::{CliArgs, OutputFormat};
use crate::input::cli::errors::CliError;
use crate::presenters::file::png::PngFilePresenter;
use crate::presenters::file::ppm::PpmFilePresenter;

/// Headless entry point: renders the configured field once and saves it.
pub struct RunExportCommand {
    args: CliArgs,
}

impl RunExportCommand {
    pub fn new(args: CliArgs) -> Self {
        Self { args }
    }

    pub fn execute(&self) -> Result<(), CliError> {
        let config = self.args.julia_config()?;

        match self.args.threads {
            Some(threads) => {
                let pool = ThreadPoolBuilder::new()
                    .num_threads(threads.get())
                    .build()?;

                pool.install(|| self.export(&config))
            }
            None => self.export(&config),
        }
    }

    fn export(&self, config: &JuliaConfig) -> Result<(), CliError> {
        info!("Threads:    {}", rayon::current_num_threads());

        let output = self.args.output.as_path();
        let time_limit = self.args.time_limit;

        match self.args.output_format() {
            OutputFormat::Png => export_with(PngFilePresenter::new(), config, output, time_limit)?,
            OutputFormat::Ppm => export_with(PpmFilePresenter::new(), config, output, time_limit)?,
        }

        Ok(())
    }
}

fn export_with<P: FilePresenterPort>(
    presenter: P,
    config: &JuliaConfig,
    output: &Path,
    time_limit: Option<Duration>,
) -> Result<(), ExportError> {
    let mut controller = ExportController::new(presenter);

    match time_limit {
        Some(limit) => controller.generate(config, &Deadline::after(limit))?,
        None => controller.generate(config, &NeverCancel)?,
    }

    controller.write(output)
}
