use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub const AUTO_MODE: &str = "auto";

/// Content-generation task applied to a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Memorize,
    Quiz,
    Revise,
    Visualize,
    Game,
}

impl Mode {
    pub const ALL: [Mode; 5] = [
        Mode::Memorize,
        Mode::Quiz,
        Mode::Revise,
        Mode::Visualize,
        Mode::Game,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Memorize => "memorize",
            Mode::Quiz => "quiz",
            Mode::Revise => "revise",
            Mode::Visualize => "visualize",
            Mode::Game => "game",
        }
    }

    /// Modes whose generation counts as a scored interaction in session analytics.
    pub fn is_scored(&self) -> bool {
        matches!(self, Mode::Quiz | Mode::Game)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| AppError::UnsupportedMode(s.to_string()))
    }
}

/// Mode as asked for by the caller, before `auto` has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestedMode {
    Auto,
    Explicit(Mode),
}

impl FromStr for RequestedMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == AUTO_MODE {
            return Ok(RequestedMode::Auto);
        }
        s.parse().map(RequestedMode::Explicit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mode_parses_from_its_name() {
        for mode in Mode::ALL {
            assert_eq!(mode.as_str().parse::<Mode>().ok(), Some(mode));
            assert_eq!(mode.to_string(), mode.as_str());
        }
    }

    #[test]
    fn auto_is_a_requested_mode_but_not_a_mode() {
        assert_eq!("auto".parse::<RequestedMode>().ok(), Some(RequestedMode::Auto));
        assert!(matches!(
            "auto".parse::<Mode>(),
            Err(AppError::UnsupportedMode(ref m)) if m == "auto"
        ));
    }

    #[test]
    fn unknown_mode_is_rejected_with_offending_value() {
        let err = "summarize".parse::<RequestedMode>().unwrap_err();
        assert!(matches!(err, AppError::UnsupportedMode(ref m) if m == "summarize"));
    }

    #[test]
    fn mode_names_are_case_sensitive() {
        assert!("Quiz".parse::<Mode>().is_err());
    }

    #[test]
    fn only_quiz_and_game_are_scored() {
        let scored: Vec<Mode> = Mode::ALL.into_iter().filter(Mode::is_scored).collect();
        assert_eq!(scored, vec![Mode::Quiz, Mode::Game]);
    }

    #[test]
    fn mode_serializes_lowercase() {
        let json = serde_json::to_string(&Mode::Visualize).expect("mode should serialize");
        assert_eq!(json, "\"visualize\"");
    }
}
