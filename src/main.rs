use clap::Parser;
use color_eyre::Result;

use relocate::cli::{self, Cli};
use relocate::logging::init_logging;
use relocate::terminal::setup_panic_hook;

fn main() -> Result<()> {
    color_eyre::install()?;
    // After color-eyre so its hook runs once the terminal is restored
    setup_panic_hook();

    let args = Cli::parse();
    if let Some(path) = init_logging() {
        tracing::debug!(log = %path.display(), "Logging to file");
    }

    let runtime = tokio::runtime::Runtime::new()?;
    let code = runtime.block_on(cli::run(args))?;
    drop(runtime);

    std::process::exit(code);
}
