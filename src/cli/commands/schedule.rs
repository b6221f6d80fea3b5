use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::slots::build_slots;
use crate::errors::AppResult;
use crate::models::DaySchedule;
use crate::providers::schedule_provider;
use crate::ui::messages::{header, success};
use crate::utils::colors::{GREY, RESET};

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Schedule { json } = cmd {
        let schedule = schedule_provider(cfg)?.fetch().await?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&schedule)?);
            return Ok(());
        }

        header(format!("Weekly schedule ({})", cfg.schedule));
        for (name, day) in schedule.iter() {
            let count = build_slots(name, &schedule).len();
            println!("{:<10} {:<40} {:>2} slots", name, describe(day), count);
        }
        success("Schedule covers all seven weekdays");
    }
    Ok(())
}

fn describe(day: &DaySchedule) -> String {
    if !day.open {
        return format!("{GREY}closed{RESET}");
    }
    let windows: Vec<String> = [day.morning(), day.evening()]
        .into_iter()
        .flatten()
        .map(|(start, end)| format!("{start}-{end}"))
        .collect();
    if windows.is_empty() {
        "open, no hours".to_string()
    } else {
        format!("open {}", windows.join(", "))
    }
}
