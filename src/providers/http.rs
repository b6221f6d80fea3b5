//! HTTP adapters. Both are one-shot: a failed request is reported, never retried.

use super::ScheduleProvider;
use crate::core::deadline::{DeadlineValidator, ORDERING_CLOSED, ValidationOutcome};
use crate::errors::{AppError, AppResult};
use crate::models::WeeklySchedule;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

fn client(timeout: Duration) -> AppResult<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("pickupwindow/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

/// Fetches the weekly schedule with `GET <url>`.
///
/// The body is either the weekday map itself or `{ "schedule": { ... } }`.
#[derive(Debug, Clone)]
pub struct HttpScheduleProvider {
    client: reqwest::Client,
    url: String,
}

impl HttpScheduleProvider {
    pub fn new(url: &str, timeout: Duration) -> AppResult<Self> {
        Ok(Self {
            client: client(timeout)?,
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl ScheduleProvider for HttpScheduleProvider {
    async fn fetch(&self) -> AppResult<WeeklySchedule> {
        let body: serde_json::Value = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let body = match body {
            serde_json::Value::Object(mut map) if map.contains_key("schedule") => {
                map.remove("schedule").unwrap_or_default()
            }
            other => other,
        };
        let schedule = serde_json::from_value(body)?;
        debug!(url = %self.url, "fetched weekly schedule");
        Ok(schedule)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidateDateResponse {
    success: bool,
    #[serde(default)]
    is_valid: Option<bool>,
    #[serde(default)]
    ordering_deadline: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    date: Option<NaiveDate>,
}

/// Remote deadline authority: `GET <base>/orders/validate-date/<YYYY-MM-DD>`.
#[derive(Debug, Clone)]
pub struct HttpDeadlineValidator {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDeadlineValidator {
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        Ok(Self {
            client: client(timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, date: NaiveDate) -> String {
        format!("{}/orders/validate-date/{}", self.base_url, date.format("%Y-%m-%d"))
    }
}

fn unreachable(e: impl std::fmt::Display) -> AppError {
    AppError::ValidationUnreachable(e.to_string())
}

#[async_trait]
impl DeadlineValidator for HttpDeadlineValidator {
    async fn validate(&self, date: NaiveDate) -> AppResult<ValidationOutcome> {
        let url = self.endpoint(date);
        debug!(%url, "validating pickup date");

        let response = self.client.get(&url).send().await.map_err(unreachable)?;
        let status = response.status();
        if !status.is_success() {
            return Err(unreachable(format!("validator answered {status}")));
        }

        let body: ValidateDateResponse = response
            .json()
            .await
            .map_err(|e| unreachable(format!("malformed validator response: {e}")))?;

        if !body.success {
            return Err(unreachable(
                body.message
                    .unwrap_or_else(|| "validator reported a failure".to_string()),
            ));
        }
        if let Some(answered) = body.date
            && answered != date
        {
            return Err(unreachable(format!(
                "validator answered for {answered} instead of {date}"
            )));
        }

        let is_valid = body
            .is_valid
            .ok_or_else(|| unreachable("validator response has no isValid verdict"))?;
        let message = body.message.unwrap_or_default();
        if !is_valid {
            let message = if message.trim().is_empty() {
                ORDERING_CLOSED.to_string()
            } else {
                message
            };
            return Ok(ValidationOutcome::rejected(message));
        }
        let deadline = body
            .ordering_deadline
            .ok_or_else(|| unreachable("validator accepted the date without a deadline"))?;
        Ok(ValidationOutcome::accepted(deadline, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn saturday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 24).unwrap()
    }

    fn timeout() -> Duration {
        Duration::from_secs(5)
    }

    #[tokio::test]
    async fn accepted_date() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/orders/validate-date/2026-10-24")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"success":true,"isValid":true,"orderingDeadline":"2026-10-16T23:59:59.999+02:00","message":"ok"}"#,
            )
            .create_async()
            .await;

        let v = HttpDeadlineValidator::new(&format!("{}/", server.url()), timeout()).unwrap();
        let out = v.validate(saturday()).await.unwrap();
        assert!(out.is_valid);
        assert_eq!(
            out.ordering_deadline.unwrap().to_rfc3339(),
            "2026-10-16T23:59:59.999+02:00"
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn rejected_date_keeps_message() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/orders/validate-date/2026-10-24")
            .with_status(200)
            .with_body(
                r#"{"success":true,"isValid":false,"orderingDeadline":"2026-10-16T23:59:59Z","message":"Ordering closed for this date"}"#,
            )
            .create_async()
            .await;

        let v = HttpDeadlineValidator::new(&server.url(), timeout()).unwrap();
        let out = v.validate(saturday()).await.unwrap();
        assert_eq!(out, ValidationOutcome::rejected("Ordering closed for this date"));
    }

    #[tokio::test]
    async fn missing_verdict_is_unreachable() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/orders/validate-date/2026-10-24")
            .with_status(200)
            .with_body(r#"{"success":true}"#)
            .create_async()
            .await;

        let v = HttpDeadlineValidator::new(&server.url(), timeout()).unwrap();
        let err = v.validate(saturday()).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationUnreachable(_)));
        assert!(err.to_string().contains("no isValid verdict"));
    }

    #[tokio::test]
    async fn rejection_without_message_still_explains() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/orders/validate-date/2026-10-24")
            .with_status(200)
            .with_body(r#"{"success":true,"isValid":false}"#)
            .create_async()
            .await;

        let v = HttpDeadlineValidator::new(&server.url(), timeout()).unwrap();
        let out = v.validate(saturday()).await.unwrap();
        assert_eq!(out, ValidationOutcome::rejected(ORDERING_CLOSED));
    }

    #[tokio::test]
    async fn server_error_is_unreachable() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/orders/validate-date/2026-10-24")
            .with_status(503)
            .create_async()
            .await;

        let v = HttpDeadlineValidator::new(&server.url(), timeout()).unwrap();
        let err = v.validate(saturday()).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationUnreachable(_)));
    }

    #[tokio::test]
    async fn garbage_body_is_unreachable() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/orders/validate-date/2026-10-24")
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let v = HttpDeadlineValidator::new(&server.url(), timeout()).unwrap();
        assert!(matches!(
            v.validate(saturday()).await,
            Err(AppError::ValidationUnreachable(_))
        ));
    }

    #[tokio::test]
    async fn unsuccessful_or_mismatched_answers_are_unreachable() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/orders/validate-date/2026-10-24")
            .with_status(200)
            .with_body(r#"{"success":true,"isValid":true,"date":"2026-10-26","orderingDeadline":"2026-10-18T23:59:59Z"}"#)
            .create_async()
            .await;
        server
            .mock("GET", "/orders/validate-date/2026-10-26")
            .with_status(200)
            .with_body(r#"{"success":false,"message":"database down"}"#)
            .create_async()
            .await;

        let v = HttpDeadlineValidator::new(&server.url(), timeout()).unwrap();
        let err = v.validate(saturday()).await.unwrap_err();
        assert!(err.to_string().contains("instead of 2026-10-24"));

        let monday = NaiveDate::from_ymd_opt(2026, 10, 26).unwrap();
        let err = v.validate(monday).await.unwrap_err();
        assert_eq!(err.to_string(), "Cannot confirm pickup date: database down");
    }

    #[tokio::test]
    async fn unreachable_host() {
        let v = HttpDeadlineValidator::new("http://127.0.0.1:9", Duration::from_millis(500)).unwrap();
        assert!(matches!(
            v.validate(saturday()).await,
            Err(AppError::ValidationUnreachable(_))
        ));
    }

    #[tokio::test]
    async fn schedule_bare_and_wrapped() {
        let week = r#"{"monday":{"open":true,"morningStart":"07:00","morningEnd":"09:00"},
            "tuesday":{"open":false},"wednesday":{"open":false},"thursday":{"open":false},
            "friday":{"open":false},"saturday":{"open":false},"sunday":{"open":false}}"#;

        let mut server = Server::new_async().await;
        server
            .mock("GET", "/schedule")
            .with_status(200)
            .with_body(week)
            .create_async()
            .await;
        server
            .mock("GET", "/wrapped")
            .with_status(200)
            .with_body(format!(r#"{{"success":true,"schedule":{week}}}"#))
            .create_async()
            .await;

        let bare = HttpScheduleProvider::new(&format!("{}/schedule", server.url()), timeout())
            .unwrap()
            .fetch()
            .await
            .unwrap();
        let wrapped = HttpScheduleProvider::new(&format!("{}/wrapped", server.url()), timeout())
            .unwrap()
            .fetch()
            .await
            .unwrap();
        assert_eq!(bare, wrapped);
        assert!(bare.by_name("monday").unwrap().open);
    }

    #[tokio::test]
    async fn schedule_with_missing_days_is_rejected() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/schedule")
            .with_status(200)
            .with_body(r#"{"monday":{"open":true}}"#)
            .create_async()
            .await;

        let err = HttpScheduleProvider::new(&format!("{}/schedule", server.url()), timeout())
            .unwrap()
            .fetch()
            .await
            .unwrap_err();
        assert!(err.to_string().contains("missing weekdays"));
    }
}
