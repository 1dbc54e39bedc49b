use super::{param, Endpoint, PathSegments, QueryPairs, Rule};

/// Match results for an event, optionally narrowed by team, level, or match range.
#[derive(Clone, Debug)]
pub struct MatchResultsQuery {
    pub season: i32,
    pub event_code: String,
    pub team_number: Option<u32>,
    pub tournament_level: Option<String>,
    pub match_number: Option<u32>,
    pub start: Option<u32>,
    pub end: Option<u32>,
}

impl MatchResultsQuery {
    pub fn new(season: i32, event_code: &str) -> Self {
        Self {
            season,
            event_code: event_code.to_string(),
            team_number: None,
            tournament_level: None,
            match_number: None,
            start: None,
            end: None,
        }
    }
    pub fn with_team_number(mut self, team_number: u32) -> Self {
        self.team_number = Some(team_number);
        self
    }
    pub fn with_tournament_level(mut self, tournament_level: &str) -> Self {
        self.tournament_level = Some(tournament_level.to_string());
        self
    }
    pub fn with_match_number(mut self, match_number: u32) -> Self {
        self.match_number = Some(match_number);
        self
    }
    pub fn with_start(mut self, start: u32) -> Self {
        self.start = Some(start);
        self
    }
    pub fn with_end(mut self, end: u32) -> Self {
        self.end = Some(end);
        self
    }
}

const MATCH_RESULTS_RULES: &[Rule] = &[
    Rule::Requires {
        triggers: &[param::MATCH_NUMBER, param::START, param::END],
        companion: param::TOURNAMENT_LEVEL,
    },
    Rule::Exclusive(param::TEAM_NUMBER, param::MATCH_NUMBER),
    Rule::Exclusive(param::MATCH_NUMBER, param::START),
    Rule::Exclusive(param::MATCH_NUMBER, param::END),
];

impl Endpoint for MatchResultsQuery {
    fn season(&self) -> Option<i32> {
        Some(self.season)
    }

    fn tournament_level(&self) -> Option<&str> {
        self.tournament_level.as_deref()
    }

    fn rules(&self) -> &'static [Rule] {
        MATCH_RESULTS_RULES
    }

    fn segments(&self) -> PathSegments {
        PathSegments::new().push("matches").push(&self.event_code)
    }

    fn query(&self) -> QueryPairs {
        QueryPairs::new()
            .push_opt(param::TEAM_NUMBER, self.team_number)
            .push_opt(param::TOURNAMENT_LEVEL, self.tournament_level.as_ref())
            .push_opt(param::MATCH_NUMBER, self.match_number)
            .push_opt(param::START, self.start)
            .push_opt(param::END, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::test_support::{conflict, render};
    use crate::Error;

    #[test]
    fn test_match_results_query() {
        insta::assert_snapshot!(render(&MatchResultsQuery::new(2024, "ilil")), @"https://frc-api.firstinspires.org/v2.0/2024/matches/ilil");

        insta::assert_snapshot!(render(&MatchResultsQuery::new(2024, "ilil").with_team_number(118)), @"https://frc-api.firstinspires.org/v2.0/2024/matches/ilil?teamNumber=118");

        insta::assert_snapshot!(render(&MatchResultsQuery::new(2024, "ilil")
            .with_tournament_level("qual")
            .with_start(1)
            .with_end(20)), @"https://frc-api.firstinspires.org/v2.0/2024/matches/ilil?tournamentLevel=qual&start=1&end=20");

        insta::assert_snapshot!(render(&MatchResultsQuery::new(2024, "ilil")
            .with_tournament_level("playoff")
            .with_match_number(3)), @"https://frc-api.firstinspires.org/v2.0/2024/matches/ilil?tournamentLevel=playoff&matchNumber=3");
    }

    #[test]
    fn test_match_results_bad_level() {
        let result = MatchResultsQuery::new(2024, "ilil")
            .with_tournament_level("elim")
            .request();
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_match_results_range_requires_level() {
        for query in [
            MatchResultsQuery::new(2024, "ilil").with_match_number(5),
            MatchResultsQuery::new(2024, "ilil").with_start(1),
            MatchResultsQuery::new(2024, "ilil").with_end(0),
        ] {
            assert!(conflict(&query).contains("requires tournamentLevel"));
        }
    }

    #[test]
    fn test_match_results_team_and_match() {
        let query = MatchResultsQuery::new(2024, "ilil")
            .with_tournament_level("qual")
            .with_team_number(118)
            .with_match_number(5);
        assert_eq!(
            conflict(&query),
            "teamNumber is mutually exclusive with matchNumber"
        );
    }

    #[test]
    fn test_match_results_match_and_range() {
        let query = MatchResultsQuery::new(2024, "ilil")
            .with_tournament_level("qual")
            .with_match_number(5)
            .with_start(1);
        assert_eq!(conflict(&query), "matchNumber is mutually exclusive with start");

        let query = MatchResultsQuery::new(2024, "ilil")
            .with_tournament_level("qual")
            .with_match_number(5)
            .with_end(9);
        assert_eq!(conflict(&query), "matchNumber is mutually exclusive with end");
    }

    #[test]
    fn test_match_results_without_level_reports_companion_first() {
        let query = MatchResultsQuery::new(2024, "ilil")
            .with_match_number(5)
            .with_start(1);
        assert!(conflict(&query).contains("requires tournamentLevel"));
    }

    #[test]
    fn test_match_results_zero_counts_as_supplied() {
        let query = MatchResultsQuery::new(2024, "ilil")
            .with_tournament_level("qual")
            .with_team_number(0)
            .with_match_number(0);
        assert!(conflict(&query).contains("teamNumber"));
    }
}
