//! Entrance animation settings for the terminal front end.
//!
//! Purely presentational: nothing here reads or writes game state. The
//! renderer asks how far each element has travelled at a given moment and
//! shifts or dims it accordingly.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Slide-in parameters for one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Entrance {
    /// Wait before the element starts moving.
    delay_ms: u64,
    /// Time from first appearance to resting place.
    duration_ms: u64,
    /// Starting displacement in terminal cells. Positive is down/right.
    offset: i16,
}

impl Entrance {
    /// Creates an entrance.
    pub const fn new(delay_ms: u64, duration_ms: u64, offset: i16) -> Self {
        Self {
            delay_ms,
            duration_ms,
            offset,
        }
    }
}

/// Part of the screen that animates independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    /// "Tic-Tac-Toe" heading; slides vertically.
    Title,
    /// Status line; slides vertically.
    Status,
    /// Board row 0-2; slides horizontally.
    Row(usize),
    /// Play-again button; slides horizontally after the rows.
    PlayAgain,
}

/// Animation configuration, loadable from TOML.
///
/// Every top-level key has a default, so a file only needs the keys it
/// changes. An entrance table, when present, must give all three fields.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Turns every entrance into an instant appearance when false.
    enabled: bool,
    /// Heading entrance.
    title: Entrance,
    /// Status line entrance.
    status: Entrance,
    /// Entrance shared by the board rows and the play-again button.
    grid: Entrance,
    /// Extra delay per grid child (row 0, row 1, row 2, button).
    stagger_ms: u64,
    /// How long the last placed mark stays highlighted.
    highlight_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            title: Entrance::new(0, 500, 3),
            status: Entrance::new(1000, 700, 6),
            grid: Entrance::new(0, 600, -8),
            stagger_ms: 200,
            highlight_ms: 600,
        }
    }
}

impl AnimationConfig {
    /// Configuration with every element already at rest.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading animation config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(enabled = config.enabled, "Animation config loaded");
        Ok(config)
    }

    fn entrance(&self, element: Element) -> (Entrance, u64) {
        match element {
            Element::Title => (self.title, 0),
            Element::Status => (self.status, 0),
            Element::Row(row) => (self.grid, self.stagger_ms.saturating_mul(row as u64)),
            Element::PlayAgain => (self.grid, self.stagger_ms.saturating_mul(3)),
        }
    }

    /// Eased progress of `element` in `[0, 1]` after `elapsed`.
    ///
    /// Zero means the element has not appeared yet.
    pub fn progress(&self, element: Element, elapsed: Duration) -> f32 {
        if !self.enabled {
            return 1.0;
        }
        let (entrance, stagger) = self.entrance(element);
        let start = entrance.delay_ms.saturating_add(stagger);
        let elapsed = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        if elapsed < start {
            return 0.0;
        }
        if entrance.duration_ms == 0 {
            return 1.0;
        }
        let t = ((elapsed - start) as f32 / entrance.duration_ms as f32).min(1.0);
        ease_out_cubic(t)
    }

    /// Remaining displacement of `element` after `elapsed`.
    pub fn offset(&self, element: Element, elapsed: Duration) -> i16 {
        let (entrance, _) = self.entrance(element);
        let remaining = 1.0 - self.progress(element, elapsed);
        (f32::from(entrance.offset) * remaining).round() as i16
    }

    /// Time until every element has come to rest.
    pub fn total_duration(&self) -> Duration {
        if !self.enabled {
            return Duration::ZERO;
        }
        [
            Element::Title,
            Element::Status,
            Element::Row(0),
            Element::Row(1),
            Element::Row(2),
            Element::PlayAgain,
        ]
        .into_iter()
        .map(|element| {
            let (entrance, stagger) = self.entrance(element);
            entrance
                .delay_ms
                .saturating_add(stagger)
                .saturating_add(entrance.duration_ms)
        })
        .max()
        .map_or(Duration::ZERO, Duration::from_millis)
    }

    /// Whether a mark placed `since` ago is still highlighted.
    pub fn is_highlighted(&self, since: Duration) -> bool {
        self.enabled && since < Duration::from_millis(self.highlight_ms)
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_hidden_before_delay() {
        let config = AnimationConfig::default();
        assert_eq!(config.progress(Element::Status, ms(999)), 0.0);
        assert!(config.progress(Element::Status, ms(1200)) > 0.0);
    }

    #[test]
    fn test_rows_are_staggered() {
        let config = AnimationConfig::default();
        let at = ms(300);
        let row0 = config.progress(Element::Row(0), at);
        let row1 = config.progress(Element::Row(1), at);
        let row2 = config.progress(Element::Row(2), at);
        assert!(row0 > row1);
        assert!(row1 > row2);
        assert_eq!(config.progress(Element::PlayAgain, at), 0.0);
    }

    #[test]
    fn test_offset_reaches_zero() {
        let config = AnimationConfig::default();
        assert_eq!(config.offset(Element::Row(0), Duration::ZERO), -8);
        assert_eq!(config.offset(Element::Title, Duration::ZERO), 3);
        let done = config.total_duration();
        for element in [Element::Title, Element::Status, Element::Row(2), Element::PlayAgain] {
            assert_eq!(config.progress(element, done), 1.0);
            assert_eq!(config.offset(element, done), 0);
        }
    }

    #[test]
    fn test_total_duration_covers_latest_element() {
        // Status: 1000 + 700; button: 3 * 200 + 600.
        assert_eq!(AnimationConfig::default().total_duration(), ms(1700));
    }

    #[test]
    fn test_disabled_is_at_rest() {
        let config = AnimationConfig::disabled();
        assert_eq!(config.progress(Element::Status, Duration::ZERO), 1.0);
        assert_eq!(config.offset(Element::Row(1), Duration::ZERO), 0);
        assert_eq!(config.total_duration(), Duration::ZERO);
        assert!(!config.is_highlighted(Duration::ZERO));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AnimationConfig = toml::from_str("stagger_ms = 50\n").expect("valid toml");
        assert_eq!(*config.stagger_ms(), 50);
        assert_eq!(config.grid(), AnimationConfig::default().grid());
    }
}
