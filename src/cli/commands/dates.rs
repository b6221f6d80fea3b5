use super::resolve_now;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::window::generate_candidate_dates;
use crate::errors::AppResult;
use crate::ui::messages::{candidate_line, header};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dates { now, json } = cmd {
        let days = cfg.validate()?;
        let now = resolve_now(now)?;
        let candidates = generate_candidate_dates(now, days, cfg.lead_days)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&candidates)?);
            return Ok(());
        }

        header(format!("Pickup dates at {}", now.format("%Y-%m-%d %H:%M")));
        for c in &candidates {
            println!("{}", candidate_line(c, now));
        }
    }
    Ok(())
}
