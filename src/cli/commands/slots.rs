use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::slots::build_slots;
use crate::errors::{AppError, AppResult};
use crate::providers::schedule_provider;
use crate::ui::messages::{header, slot_rows, warning};
use crate::utils::date::{parse_date, parse_weekday_name, weekday_name};
use chrono::Datelike;

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Slots { day, json } = cmd {
        let weekday = match parse_date(day) {
            Some(d) => d.weekday(),
            None => parse_weekday_name(day).ok_or_else(|| AppError::InvalidWeekday(day.clone()))?,
        };
        let name = weekday_name(weekday);

        let schedule = schedule_provider(cfg)?.fetch().await?;
        let slots = build_slots(name, &schedule);

        if *json {
            let out = serde_json::json!({ "weekday": name, "slots": slots });
            println!("{}", serde_json::to_string_pretty(&out)?);
            return Ok(());
        }

        header(format!("Pickup slots for {name}"));
        if slots.is_empty() {
            warning(format!("No times available on {name}"));
        }
        for row in slot_rows(&slots) {
            println!("{row}");
        }
    }
    Ok(())
}
