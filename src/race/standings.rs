use crate::foundation::core::PlayerId;

/// Final comparative ranking of a completed race.
///
/// Resolved exactly once per session, after every actor has consumed its whole
/// outcome sequence; the cached value is attached to all subsequent frames.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Standings {
    /// Correct count shared by every winner.
    pub top_correct: u32,
    /// All players achieving the maximum correct count; never empty.
    pub winners: Vec<PlayerId>,
    /// Player with the minimum correct count, or `None` when that player is
    /// also a winner (e.g. a full tie).
    pub loser: Option<PlayerId>,
}

impl Standings {
    /// Resolve standings from `(player, correct count)` pairs.
    pub fn resolve(counts: &[(PlayerId, u32)]) -> Self {
        let mut top_correct = 0u32;
        let mut winners = Vec::new();
        let mut min_correct = u32::MAX;
        let mut loser = None;

        for &(player, correct) in counts {
            if winners.is_empty() || correct > top_correct {
                top_correct = correct;
                winners = vec![player];
            } else if correct == top_correct {
                winners.push(player);
            }
            if correct < min_correct {
                min_correct = correct;
                loser = Some(player);
            }
        }

        if let Some(l) = loser
            && winners.contains(&l)
        {
            loser = None;
        }

        Self {
            top_correct,
            winners,
            loser,
        }
    }

    /// True when `player` is in the winner set.
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winners.contains(&player)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/race/standings.rs"]
mod tests;
