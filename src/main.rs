use clap::Parser;
use std::io;
use std::path::Path;
use tracing::Level;

mod display;
mod loader;
mod model;

#[derive(Parser)]
#[command(version, about)]
struct Options {
    /// Increase log verbosity (on stderr)
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let options = Options::parse();
    let level = match options.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .without_time()
        .init();
    let projects = loader::load_projects(Path::new(loader::PROJECTS_FILE))?;
    display::display_projects(&mut io::stdout().lock(), &projects)?;
    Ok(())
}
