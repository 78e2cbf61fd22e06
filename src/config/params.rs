//! Query-style external configuration parameters.
//!
//! Wire shape: `players=N`, then for each player `i` in `1..=N` a pair of
//! segments `p{i}=<len>` immediately followed by a bare comma-separated token
//! list, e.g. `players=2&p1=5&C,C,W,C,C&p2=3&W,C,C`. The token list carries no
//! key of its own; it is whatever non-`key=value` segment follows the length.
//!
//! Parsing is strict: any missing or malformed field rejects the whole
//! configuration, so a caller can fall back to interactive entry instead of
//! starting a half-configured game.

use crate::config::model::{MAX_PLAYERS, MAX_QUESTIONS, Outcome, PlayerSheet, RaceConfig};
use crate::foundation::error::{QuizdashError, QuizdashResult};

/// Parse a query string into a validated [`RaceConfig`].
pub fn parse_query(query: &str) -> QuizdashResult<RaceConfig> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let segments: Vec<&str> = query.split('&').filter(|s| !s.is_empty()).collect();

    let players = lookup_value(&segments, "players")
        .ok_or_else(|| QuizdashError::params("missing 'players' parameter"))?;
    let players: usize = players
        .parse()
        .map_err(|_| QuizdashError::params(format!("'players' is not an integer: '{players}'")))?;
    if players == 0 || players > MAX_PLAYERS {
        return Err(QuizdashError::params(format!(
            "'players' must be 1..={MAX_PLAYERS}, got {players}"
        )));
    }

    let mut sheets = Vec::with_capacity(players);
    for i in 1..=players {
        let key = format!("p{i}");
        let pos = segments
            .iter()
            .position(|s| s.strip_prefix(key.as_str()).is_some_and(|r| r.starts_with('=')))
            .ok_or_else(|| QuizdashError::params(format!("missing '{key}' parameter")))?;

        let len_str = &segments[pos][key.len() + 1..];
        let len: usize = len_str
            .parse()
            .map_err(|_| QuizdashError::params(format!("'{key}' is not an integer: '{len_str}'")))?;
        if len == 0 || len > MAX_QUESTIONS {
            return Err(QuizdashError::params(format!(
                "'{key}' must be 1..={MAX_QUESTIONS}, got {len}"
            )));
        }

        // The answer list is the next segment and must be key-less.
        let list = segments
            .get(pos + 1)
            .filter(|s| !s.contains('='))
            .ok_or_else(|| {
                QuizdashError::params(format!("missing answer list after '{key}={len}'"))
            })?;

        let outcomes = list
            .split(',')
            .map(|tok| {
                Outcome::parse_token(tok).ok_or_else(|| {
                    QuizdashError::params(format!(
                        "'{key}' answer list has an unrecognized token '{tok}'"
                    ))
                })
            })
            .collect::<QuizdashResult<Vec<_>>>()?;

        if outcomes.len() != len {
            return Err(QuizdashError::params(format!(
                "'{key}' declares {len} answers but the list has {}",
                outcomes.len()
            )));
        }

        sheets.push(PlayerSheet {
            name: None,
            outcomes,
        });
    }

    let config = RaceConfig { players: sheets };
    config.validate()?;
    Ok(config)
}

/// Like [`parse_query`], but collapse every rejection to `None` so the caller
/// can fall back to interactive configuration.
pub fn parse_query_or_fallback(query: &str) -> Option<RaceConfig> {
    parse_query(query).ok()
}

fn lookup_value<'a>(segments: &[&'a str], key: &str) -> Option<&'a str> {
    segments.iter().find_map(|s| {
        s.strip_prefix(key)
            .and_then(|rest| rest.strip_prefix('='))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/config/params.rs"]
mod tests;
