use std::str::FromStr;

use crate::foundation::error::{QuizdashError, QuizdashResult};

/// Maximum number of players in a race.
pub const MAX_PLAYERS: usize = 4;
/// Maximum outcome-sequence length per player.
pub const MAX_QUESTIONS: usize = 20;

/// Default player display names, by player index.
pub const DEFAULT_PLAYER_NAMES: [&str; MAX_PLAYERS] =
    ["Team Yellow", "Team Blue", "Team Green", "Team Red"];

/// Default player colors (straight RGB8), by player index.
pub const DEFAULT_PLAYER_COLORS: [[u8; 3]; MAX_PLAYERS] = [
    [0xFF, 0xCC, 0x00],
    [0x00, 0xCC, 0xFF],
    [0xFF, 0x00, 0xCC],
    [0x00, 0xFF, 0x66],
];

/// Result of answering one question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Outcome {
    /// The answer was correct; the avatar advances.
    Correct,
    /// The answer was wrong; the avatar is caught by its ghost.
    Wrong,
}

impl Outcome {
    /// Parse a short or long outcome token (`C`/`Correct`, `W`/`Wrong`, any case).
    ///
    /// Returns `None` for anything else; callers attach their own error context.
    pub fn parse_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_uppercase().as_str() {
            "C" | "CORRECT" => Some(Self::Correct),
            "W" | "WRONG" => Some(Self::Wrong),
            _ => None,
        }
    }

    /// True for [`Outcome::Correct`].
    pub fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

impl FromStr for Outcome {
    type Err = QuizdashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_token(s)
            .ok_or_else(|| QuizdashError::config(format!("unrecognized outcome token '{s}'")))
    }
}

/// One player's ordered outcome sequence plus optional display identity.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PlayerSheet {
    /// Display name; falls back to [`DEFAULT_PLAYER_NAMES`] when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Ordered outcomes, consumed one per round.
    pub outcomes: Vec<Outcome>,
}

impl PlayerSheet {
    /// Build a sheet from outcome tokens.
    pub fn from_tokens<'a>(tokens: impl IntoIterator<Item = &'a str>) -> QuizdashResult<Self> {
        let outcomes = tokens
            .into_iter()
            .map(|t| t.parse::<Outcome>())
            .collect::<QuizdashResult<Vec<_>>>()?;
        Ok(Self {
            name: None,
            outcomes,
        })
    }
}

/// Race configuration with independently sized per-player sequences.
///
/// This is a pure data model: it can be built programmatically, deserialized
/// from JSON, or produced by [`crate::parse_query`]. A session is only
/// constructed from a configuration that passed [`RaceConfig::validate`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct RaceConfig {
    /// Per-player sheets, in player order.
    pub players: Vec<PlayerSheet>,
}

impl RaceConfig {
    /// Validate player count and per-player sequence bounds.
    ///
    /// Rejection is atomic: a configuration either validates as a whole or
    /// produces no game state at all.
    pub fn validate(&self) -> QuizdashResult<()> {
        if self.players.is_empty() || self.players.len() > MAX_PLAYERS {
            return Err(QuizdashError::config(format!(
                "player count must be 1..={MAX_PLAYERS}, got {}",
                self.players.len()
            )));
        }
        for (i, sheet) in self.players.iter().enumerate() {
            if sheet.outcomes.is_empty() || sheet.outcomes.len() > MAX_QUESTIONS {
                return Err(QuizdashError::config(format!(
                    "player {i} outcome sequence length must be 1..={MAX_QUESTIONS}, got {}",
                    sheet.outcomes.len()
                )));
            }
            if let Some(name) = &sheet.name
                && name.trim().is_empty()
            {
                return Err(QuizdashError::config(format!(
                    "player {i} name must be non-empty when set"
                )));
            }
        }
        Ok(())
    }

    /// Longest outcome sequence across players; determines the round count.
    pub fn max_sequence_len(&self) -> usize {
        self.players
            .iter()
            .map(|p| p.outcomes.len())
            .max()
            .unwrap_or(0)
    }

    /// Display name for player `index` (configured or default).
    pub fn player_name(&self, index: usize) -> &str {
        self.players
            .get(index)
            .and_then(|p| p.name.as_deref())
            .unwrap_or(DEFAULT_PLAYER_NAMES[index % MAX_PLAYERS])
    }

    /// Display color for player `index`.
    pub fn player_color(&self, index: usize) -> [u8; 3] {
        DEFAULT_PLAYER_COLORS[index % MAX_PLAYERS]
    }
}

/// Race configuration with a single question count shared by all players.
///
/// Kept as an independent shape rather than unified with [`RaceConfig`]; it
/// converts into the per-player shape once its stricter uniformity invariant
/// has been checked.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SharedRaceConfig {
    /// Question count applied to every player.
    pub questions: u32,
    /// Per-player sheets; every sheet must contain exactly `questions` outcomes.
    pub players: Vec<PlayerSheet>,
}

impl SharedRaceConfig {
    /// Validate the shared question count and per-player uniformity.
    pub fn validate(&self) -> QuizdashResult<()> {
        if self.questions == 0 || self.questions as usize > MAX_QUESTIONS {
            return Err(QuizdashError::config(format!(
                "shared question count must be 1..={MAX_QUESTIONS}, got {}",
                self.questions
            )));
        }
        if self.players.is_empty() || self.players.len() > MAX_PLAYERS {
            return Err(QuizdashError::config(format!(
                "player count must be 1..={MAX_PLAYERS}, got {}",
                self.players.len()
            )));
        }
        for (i, sheet) in self.players.iter().enumerate() {
            if sheet.outcomes.len() != self.questions as usize {
                return Err(QuizdashError::config(format!(
                    "player {i} has {} outcomes but the shared question count is {}",
                    sheet.outcomes.len(),
                    self.questions
                )));
            }
        }
        Ok(())
    }

    /// Validate and convert into the per-player configuration shape.
    pub fn into_race_config(self) -> QuizdashResult<RaceConfig> {
        self.validate()?;
        let config = RaceConfig {
            players: self.players,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
