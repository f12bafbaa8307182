//! Reads the `ANSWERS:` block the game template asks the backend to emit and
//! scores a learner's answers against it.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

const ANSWERS_HEADER: &str = "ANSWERS:";
const FILL_COUNT: usize = 3;
const TF_COUNT: usize = 2;
pub const GAME_TOTAL: u32 = (FILL_COUNT + TF_COUNT + 1) as u32;

static FILL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"FILL:\s*1=(.*?)\s*2=(.*?)\s*3=(.*)").expect("FILL_REGEX is a valid regex pattern")
});

static TF_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"TF:\s*1=(.*?)\s*2=(.*)").expect("TF_REGEX is a valid regex pattern")
});

static RAPID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"RAPID\s*=\s*(.*)").expect("RAPID_REGEX is a valid regex pattern")
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameAnswers {
    pub fill: Vec<String>,
    pub tf: Vec<String>,
    pub rapid: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameScore {
    pub correct: u32,
    pub total: u32,
}

fn captures_to_vec(caps: regex::Captures<'_>) -> Vec<String> {
    caps.iter()
        .skip(1)
        .flatten()
        .map(|m| m.as_str().trim().to_string())
        .collect()
}

pub fn parse_game_answers(output: &str) -> GameAnswers {
    let Some((_, section)) = output.rsplit_once(ANSWERS_HEADER) else {
        return GameAnswers::default();
    };

    GameAnswers {
        fill: FILL_REGEX
            .captures(section)
            .map(captures_to_vec)
            .unwrap_or_default(),
        tf: TF_REGEX
            .captures(section)
            .map(captures_to_vec)
            .unwrap_or_default(),
        rapid: RAPID_REGEX
            .captures(section)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string()),
    }
}

/// Compares trimmed, case-insensitive. Missing answers on either side count as wrong.
pub fn score_game(expected: &GameAnswers, submitted: &GameAnswers) -> GameScore {
    fn matches(expected: Option<&String>, submitted: Option<&String>) -> bool {
        match (expected, submitted) {
            (Some(e), Some(s)) => e.trim().to_lowercase() == s.trim().to_lowercase(),
            _ => false,
        }
    }

    let fill = (0..FILL_COUNT)
        .filter(|&i| matches(expected.fill.get(i), submitted.fill.get(i)))
        .count();
    let tf = (0..TF_COUNT)
        .filter(|&i| matches(expected.tf.get(i), submitted.tf.get(i)))
        .count();
    let rapid = usize::from(matches(expected.rapid.as_ref(), submitted.rapid.as_ref()));

    GameScore {
        correct: (fill + tf + rapid) as u32,
        total: GAME_TOTAL,
    }
}
