use std::process::ExitCode;

use conv_rs::cli::{self, Reporter};
use conv_rs::image_pipeline::ImageRsCodec;
use conv_rs::logger::{self, debug, error};

fn main() -> ExitCode {
    logger::init();

    debug!("Starting conv {}", cli::VERSION);

    let mut reporter = Reporter::stdio();
    match cli::run(std::env::args_os(), &ImageRsCodec, &mut reporter) {
        Ok(status) => ExitCode::from(status),
        Err(e) => {
            error!("Failed to write output: {}", e);
            ExitCode::FAILURE
        }
    }
}
