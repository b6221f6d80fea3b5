use crate::core::slots::SLOT_MINUTES;
use crate::core::window::{LEAD_DAYS, check_lead_days};
use crate::errors::{AppError, AppResult};
use crate::models::PickupDay;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Exactly two distinct weekday names.
    #[serde(default = "default_pickup_days")]
    pub pickup_days: Vec<String>,
    #[serde(default = "default_lead_days")]
    pub lead_days: u32,
    #[serde(default = "default_slot_minutes")]
    pub slot_minutes: u32,
    /// Schedule file path or http(s) URL.
    #[serde(default = "default_schedule")]
    pub schedule: String,
    /// Base URL of the remote deadline validator; local rule when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validator_url: Option<String>,
    #[serde(default = "default_http_timeout")]
    pub http_timeout_secs: u64,
}

fn default_pickup_days() -> Vec<String> {
    vec!["saturday".to_string(), "monday".to_string()]
}
fn default_lead_days() -> u32 {
    LEAD_DAYS
}
fn default_slot_minutes() -> u32 {
    SLOT_MINUTES
}
fn default_schedule() -> String {
    Config::schedule_file().to_string_lossy().to_string()
}
fn default_http_timeout() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pickup_days: default_pickup_days(),
            lead_days: default_lead_days(),
            slot_minutes: default_slot_minutes(),
            schedule: default_schedule(),
            validator_url: None,
            http_timeout_secs: default_http_timeout(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("pickupwindow")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".pickupwindow")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("pickupwindow.conf")
    }

    /// Return the full path of the default weekly schedule
    pub fn schedule_file() -> PathBuf {
        Self::config_dir().join("schedule.yaml")
    }

    /// Load configuration from `path`, or from the standard location.
    /// A missing standard file yields defaults; a missing explicit `path` is an error.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = match path {
            Some(p) if !p.exists() => {
                return Err(AppError::Config(format!(
                    "configuration file not found: {}",
                    p.display()
                )));
            }
            Some(p) => p.to_path_buf(),
            None => Self::config_file(),
        };

        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        Ok(cfg)
    }

    /// Check the configuration invariants and return the two pickup days.
    pub fn validate(&self) -> AppResult<[PickupDay; 2]> {
        let days = match self.pickup_days.as_slice() {
            [a, b] => [PickupDay::parse(a)?, PickupDay::parse(b)?],
            other => {
                return Err(AppError::Config(format!(
                    "exactly two pickup days are required, got {}",
                    other.len()
                )));
            }
        };
        if days[0] == days[1] {
            return Err(AppError::Config(format!(
                "pickup days must differ, got {} twice",
                days[0]
            )));
        }

        check_lead_days(self.lead_days)?;

        if self.slot_minutes != SLOT_MINUTES {
            return Err(AppError::Config(format!(
                "slot_minutes is fixed at {SLOT_MINUTES}, got {}",
                self.slot_minutes
            )));
        }
        if self.http_timeout_secs == 0 {
            return Err(AppError::Config("http_timeout_secs must be positive".into()));
        }
        Ok(days)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// Write a default config at `config_path` and a sample schedule next to it.
    /// Existing files are kept unless `force` is set. Returns the paths written.
    pub fn init_at(config_path: &Path, force: bool) -> AppResult<Vec<PathBuf>> {
        let dir = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        fs::create_dir_all(&dir)?;

        let schedule_path = dir.join("schedule.yaml");
        let config = Config {
            schedule: schedule_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        let mut written = Vec::new();
        if force || !config_path.exists() {
            fs::write(config_path, serde_yaml::to_string(&config)?)?;
            written.push(config_path.to_path_buf());
        }
        if force || !schedule_path.exists() {
            fs::write(&schedule_path, SAMPLE_SCHEDULE)?;
            written.push(schedule_path);
        }
        Ok(written)
    }
}

/// Weekly schedule written by `init`.
pub const SAMPLE_SCHEDULE: &str = "\
monday:
  open: true
  morningStart: \"07:00\"
  morningEnd: \"09:00\"
  eveningStart: \"17:00\"
  eveningEnd: \"19:00\"
tuesday:
  open: false
wednesday:
  open: false
thursday:
  open: false
friday:
  open: false
saturday:
  open: true
  morningStart: \"09:00\"
  morningEnd: \"12:00\"
sunday:
  open: false
";
