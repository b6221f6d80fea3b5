use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::PathBuf;

/// Handle the `init` command
///
/// Creates the config directory, the configuration file and a sample weekly
/// schedule next to it. Existing files are kept unless `--force` is given.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let Commands::Init { force } = &cli.command else {
        return Ok(());
    };

    let path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);

    println!("⚙️  Initializing pickupwindow…");
    let written = Config::init_at(&path, *force)?;

    if written.is_empty() {
        info(format!(
            "Configuration already present at {} (use --force to overwrite)",
            path.display()
        ));
    }
    for file in written {
        success(format!("Written {}", file.display()));
    }
    Ok(())
}
