//! Declarative mutual-exclusion and companion rules for optional parameters.
//!
//! Each endpoint lists its rules as a static table. [`check`] walks the table in
//! order against the names of the parameters the caller actually supplied and
//! reports the first violation. Values never matter, only presence.

use crate::Error;

/// A constraint on which optional parameters may be supplied together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// The two parameters may not both be supplied.
    Exclusive(&'static str, &'static str),
    /// Supplying any of `triggers` requires `companion` to be supplied as well.
    Requires {
        triggers: &'static [&'static str],
        companion: &'static str,
    },
    /// At least one of the parameters must be supplied.
    AnyOf(&'static [&'static str]),
}

impl Rule {
    fn violation(&self, supplied: &[&str]) -> Option<String> {
        let has = |name: &str| supplied.iter().any(|s| *s == name);
        match *self {
            Rule::Exclusive(a, b) if has(a) && has(b) => {
                Some(format!("{} is mutually exclusive with {}", a, b))
            }
            Rule::Requires {
                triggers,
                companion,
            } if !has(companion) => {
                let present: Vec<&str> = triggers.iter().copied().filter(|t| has(*t)).collect();
                if present.is_empty() {
                    None
                } else {
                    Some(format!(
                        "supplying {} requires {}",
                        present.join(", "),
                        companion
                    ))
                }
            }
            Rule::AnyOf(names) if !names.iter().any(|n| has(*n)) => {
                Some(format!("specify at least one of {}", names.join(", ")))
            }
            _ => None,
        }
    }
}

/// Checks `supplied` against `rules` in order, failing on the first violated rule.
pub fn check(rules: &[Rule], supplied: &[&str]) -> Result<(), Error> {
    match rules.iter().find_map(|rule| rule.violation(supplied)) {
        Some(message) => Err(Error::ParameterConflict(message)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &[Rule] = &[
        Rule::Requires {
            triggers: &["matchNumber", "start", "end"],
            companion: "tournamentLevel",
        },
        Rule::Exclusive("teamNumber", "matchNumber"),
        Rule::Exclusive("matchNumber", "start"),
    ];

    fn conflict(result: Result<(), Error>) -> String {
        match result {
            Err(Error::ParameterConflict(msg)) => msg,
            other => panic!("expected a parameter conflict, got {:?}", other),
        }
    }

    #[test]
    fn empty_table_accepts_anything() {
        assert!(check(&[], &["teamNumber", "matchNumber"]).is_ok());
    }

    #[test]
    fn nothing_supplied_passes_exclusions() {
        assert!(check(TABLE, &[]).is_ok());
    }

    #[test]
    fn exclusive_pair_rejected() {
        let msg = conflict(check(TABLE, &["tournamentLevel", "teamNumber", "matchNumber"]));
        assert_eq!(msg, "teamNumber is mutually exclusive with matchNumber");
    }

    #[test]
    fn exclusive_single_side_allowed() {
        assert!(check(TABLE, &["tournamentLevel", "matchNumber"]).is_ok());
        assert!(check(TABLE, &["teamNumber"]).is_ok());
    }

    #[test]
    fn companion_missing_lists_triggers() {
        let msg = conflict(check(TABLE, &["start", "end"]));
        assert_eq!(msg, "supplying start, end requires tournamentLevel");
    }

    #[test]
    fn first_violation_wins() {
        // Breaks all three rules; the companion rule comes first in the table.
        let msg = conflict(check(TABLE, &["teamNumber", "matchNumber", "start"]));
        assert!(msg.contains("requires tournamentLevel"));
    }

    #[test]
    fn any_of_requires_one() {
        let rules = [Rule::AnyOf(&["eventCode", "teamNumber"])];
        let msg = conflict(check(&rules, &[]));
        assert_eq!(msg, "specify at least one of eventCode, teamNumber");
        assert!(check(&rules, &["teamNumber"]).is_ok());
        assert!(check(&rules, &["eventCode", "teamNumber"]).is_ok());
    }
}
