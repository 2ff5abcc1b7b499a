//! Session files: a lap plan plus the options that drive it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::laps::increment::AutoIncrement;
use crate::laps::types::{sanitize, Goal, LapPlan};
use crate::storage::config::{AppConfig, ConfigError};

/// Options that shape calculations without being part of the lap plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionOptions {
    /// Target pace as `M:SS`
    pub target_pace: String,
    /// Auto-increment settings
    pub auto_increment: AutoIncrement,
    /// Distance goal
    pub goal: Goal,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            target_pace: "5:30".to_string(),
            auto_increment: AutoIncrement::default(),
            goal: Goal::default(),
        }
    }
}

/// A saved calculator session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Last save timestamp
    pub updated_at: DateTime<Utc>,
    /// Calculation options
    #[serde(default)]
    pub options: SessionOptions,
    /// Intervals and lap settings
    pub plan: LapPlan,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            updated_at: Utc::now(),
            options: SessionOptions::default(),
            plan: LapPlan::default(),
        }
    }
}

impl Session {
    /// Build a fresh session from configured defaults.
    pub fn from_config(config: &AppConfig) -> Self {
        let defaults = &config.defaults;
        let mut plan = LapPlan::new(config.base_lap.clone());
        plan.set_replicate(defaults.replicate);
        plan.set_lap_count(defaults.lap_count);

        Self {
            updated_at: Utc::now(),
            options: SessionOptions {
                target_pace: defaults.target_pace.clone(),
                auto_increment: AutoIncrement {
                    enabled: defaults.auto_increment,
                    step: defaults.increment_step,
                    propagate_to_overrides: defaults.propagate_to_overrides,
                },
                goal: Goal {
                    enabled: defaults.goal_enabled,
                    target_distance_km: defaults.goal_distance_km,
                },
            },
            plan,
        }
    }

    /// Reset the plan to the configured base lap and a single replicated lap.
    pub fn reset(&mut self, config: &AppConfig) {
        self.plan.reset();
        self.plan.base = config.base_lap.clone();
    }

    /// Coerce every number in the session into range.
    pub fn sanitize(&mut self) {
        self.plan.sanitize();
        self.options.goal.target_distance_km = sanitize(self.options.goal.target_distance_km);
    }
}

/// Load a session file, sanitizing its numbers.
pub fn load_session(path: &Path) -> Result<Session, ConfigError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let mut session: Session =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    session.sanitize();

    tracing::debug!(
        "Loaded session from {} ({} laps)",
        path.display(),
        session.plan.lap_count
    );
    Ok(session)
}

/// Save a session file, stamping the save time.
pub fn save_session(session: &mut Session, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    session.updated_at = Utc::now();
    let content = toml::to_string_pretty(&*session)
        .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    tracing::info!("Saved session to {}", path.display());
    Ok(())
}
