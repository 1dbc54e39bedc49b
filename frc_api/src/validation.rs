//! Domain checks for season and tournament-level values.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// First season covered by the v2.0 API.
pub const FIRST_SEASON: i32 = 2014;

/// Competition phase of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TournamentLevel {
    /// Qualification matches.
    Qual,
    /// Elimination matches.
    Playoff,
}

impl TournamentLevel {
    /// The literal the API expects in paths and query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            TournamentLevel::Qual => "qual",
            TournamentLevel::Playoff => "playoff",
        }
    }
}

impl fmt::Display for TournamentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TournamentLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        verify_tournament_level(s)
    }
}

/// Checks that `season` is a four-digit year no earlier than 2014.
pub fn verify_season(season: i32) -> Result<(), Error> {
    if !(1000..=9999).contains(&season) {
        return Err(Error::Validation(format!(
            "season must be four digits, got {}",
            season
        )));
    }
    if season < FIRST_SEASON {
        return Err(Error::Validation(format!(
            "season must be {} or later, got {}",
            FIRST_SEASON, season
        )));
    }
    Ok(())
}

/// Checks that `level` is exactly `qual` or `playoff`.
pub fn verify_tournament_level(level: &str) -> Result<TournamentLevel, Error> {
    match level {
        "qual" => Ok(TournamentLevel::Qual),
        "playoff" => Ok(TournamentLevel::Playoff),
        _ => Err(Error::Validation(format!(
            "tournamentLevel must be either \"qual\" or \"playoff\", got {:?}",
            level
        ))),
    }
}
