//! Configuration types for daygrid layouts.
//!
//! This module provides configuration structures that control how schedules
//! are read and how days are laid out. All types implement
//! [`serde::Deserialize`] so they can be loaded from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and input settings.
//! - [`LayoutConfig`] - Controls the layout engine, e.g. the default event duration.
//! - [`InputConfig`] - Controls how schedule input is validated.
//!
//! # Example
//!
//! ```
//! # use daygrid::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().default_duration_minutes(), 60);
//! ```

use chrono::TimeDelta;
use serde::{Deserialize, Deserializer, de::Error as _};

use daygrid_core::event::DEFAULT_DURATION_MINUTES;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Input configuration section.
    #[serde(default)]
    input: InputConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(layout: LayoutConfig, input: InputConfig) -> Self {
        Self { layout, input }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the input configuration.
    pub fn input(&self) -> &InputConfig {
        &self.input
    }
}

/// Layout engine configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Duration given to events without a usable end, in minutes.
    #[serde(deserialize_with = "positive_minutes")]
    default_duration_minutes: u32,
}

fn positive_minutes<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let minutes = u32::deserialize(deserializer)?;
    if minutes == 0 {
        return Err(D::Error::custom(
            "default_duration_minutes must be greater than zero",
        ));
    }
    Ok(minutes)
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`].
    ///
    /// # Arguments
    ///
    /// * `default_duration_minutes` - Duration assumed for events that have
    ///   no end, or an end not after their start. Zero falls back to the
    ///   one-hour default.
    pub fn new(default_duration_minutes: u32) -> Self {
        if default_duration_minutes == 0 {
            return Self::default();
        }
        Self {
            default_duration_minutes,
        }
    }

    pub fn default_duration_minutes(&self) -> u32 {
        self.default_duration_minutes
    }

    /// Returns the default duration as a [`TimeDelta`].
    pub fn default_duration(&self) -> TimeDelta {
        TimeDelta::minutes(i64::from(self.default_duration_minutes))
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            default_duration_minutes: DEFAULT_DURATION_MINUTES as u32,
        }
    }
}

/// What to do when two schedule entries share an identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateIds {
    /// Fail with an input error naming the duplicate.
    #[default]
    Reject,
    /// Keep the entry that appears last.
    LastWins,
}

/// Schedule input configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputConfig {
    /// Policy for repeated entry identifiers.
    #[serde(default)]
    duplicate_ids: DuplicateIds,
}

impl InputConfig {
    /// Creates a new [`InputConfig`].
    pub fn new(duplicate_ids: DuplicateIds) -> Self {
        Self { duplicate_ids }
    }

    pub fn duplicate_ids(&self) -> DuplicateIds {
        self.duplicate_ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.layout().default_duration(), TimeDelta::minutes(60));
        assert_eq!(config.input().duplicate_ids(), DuplicateIds::Reject);
    }

    #[test]
    fn test_deserialize_partial_sections() {
        let config: AppConfig = toml::from_str(
            r#"
            [layout]
            default_duration_minutes = 45
            "#,
        )
        .unwrap();

        assert_eq!(config.layout().default_duration_minutes(), 45);
        assert_eq!(config.input().duplicate_ids(), DuplicateIds::Reject);
    }

    #[test]
    fn test_deserialize_duplicate_policy() {
        let config: AppConfig = toml::from_str(
            r#"
            [input]
            duplicate_ids = "last_wins"
            "#,
        )
        .unwrap();

        assert_eq!(config.input().duplicate_ids(), DuplicateIds::LastWins);
        assert_eq!(config.layout().default_duration_minutes(), 60);
    }

    #[test]
    fn test_zero_duration_is_rejected_on_deserialize() {
        let err = toml::from_str::<AppConfig>("[layout]\ndefault_duration_minutes = 0\n")
            .unwrap_err();
        assert!(err.message().contains("greater than zero"));
    }

    #[test]
    fn test_zero_duration_in_constructor_uses_default() {
        let layout = LayoutConfig::new(0);
        assert_eq!(layout.default_duration_minutes(), 60);
        assert_eq!(LayoutConfig::new(25).default_duration(), TimeDelta::minutes(25));
    }

    #[test]
    fn test_deserialize_unknown_policy_fails() {
        let result = toml::from_str::<AppConfig>(
            r#"
            [input]
            duplicate_ids = "sometimes"
            "#,
        );
        assert!(result.is_err());
    }
}
