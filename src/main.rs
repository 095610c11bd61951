use log::info;
use mandelbrot_explorer::{CliOptions, CliRenderController, PpmFilePresenter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    run(std::env::args().skip(1))
}

fn run(args: impl IntoIterator<Item = String>) -> Result<(), Box<dyn std::error::Error>> {
    let options = CliOptions::from_args(args)?;
    let presenter = PpmFilePresenter::new();
    let mut controller = CliRenderController::new(presenter, options.size);

    info!("Rendering Mandelbrot set...");
    info!(
        "Image size: {}x{}",
        options.size.width(),
        options.size.height()
    );

    let summary = controller.generate();

    info!(
        "Refined through {} frames in {:?}",
        summary.frames_completed, summary.duration
    );

    controller.write(&options.output)?;
    info!("Saved to {}", options.output.display());

    Ok(())
}
