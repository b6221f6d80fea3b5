use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        match cfg.validate() {
            Ok(days) => success(format!(
                "Pickup on {} and {}, ordering closes {} days ahead",
                days[0], days[1], cfg.lead_days
            )),
            Err(e) => warning(e),
        }
    }
    Ok(())
}
