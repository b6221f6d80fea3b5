use super::resolve_now;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::coordinator::Coordinator;
use crate::core::session::{self, Booking};
use crate::core::window::generate_candidate_dates;
use crate::errors::{AppError, AppResult};
use crate::providers::{deadline_validator, schedule_provider};
use crate::ui::messages::{header, info, slot_rows, success, warning};
use crate::utils::date::parse_date;
use crate::utils::time::parse_required_time;

/// Handle the `book` command
///
/// Runs the eligibility flow for one date: the date must be one of the two
/// offered candidates, the validator must accept it, and the time (if given)
/// must be one of that day's slots. On success the selected pickup is printed
/// as JSON for the checkout flow.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Book { date, time, now } = cmd {
        let days = cfg.validate()?;
        let now = resolve_now(now)?;
        let date = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.clone()))?;
        let time = time
            .as_deref()
            .map(|t| parse_required_time(t).map(|_| t.trim()))
            .transpose()?;

        let candidates = generate_candidate_dates(now, days, cfg.lead_days)?;
        let mut coordinator = Coordinator::new(candidates);

        let schedule = schedule_provider(cfg)?;
        let validator = deadline_validator(cfg, now)?;

        let booking = session::book(
            &mut coordinator,
            date,
            time,
            &*schedule,
            &*validator,
        )
        .await?;

        match booking {
            Booking::Chosen(pickup) => {
                success(format!("Pickup confirmed: {} at {}", pickup.display_date, pickup.time));
                println!("{}", serde_json::to_string_pretty(&pickup)?);
            }
            Booking::SlotsAvailable(slots) if slots.is_empty() => {
                warning("No times available for this date, please pick a different date");
            }
            Booking::SlotsAvailable(slots) => {
                header(format!("Available times on {date}"));
                for row in slot_rows(&slots) {
                    println!("{row}");
                }
                info("Re-run with --time HH:MM to choose one");
            }
        }
    }
    Ok(())
}
