//! HTTP client for the FRC Events API.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::{
    config::{ClientConfig, Credentials},
    query::{
        AllianceSelection, Ancillary, AwardListings, DistrictListings, Endpoint, EventAwards,
        EventListingsQuery, HybridScheduleQuery, MatchResultsQuery, RankingsQuery,
        ScheduleQuery, ScoreDetailsQuery, SeasonSummary, TeamListingsQuery,
    },
    Error,
};

/// Request timeout for API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("frc_api/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the FRC Events API.
///
/// Immutable once built. Each endpoint method validates its parameters, builds the
/// resource path and query string, and performs exactly one GET. Nothing is cached
/// or retried.
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    credentials: Option<Credentials>,
}

impl Client {
    /// Creates a client from an environment name and an optional username/token pair.
    ///
    /// Fails with [`Error::Configuration`] for an unknown environment or when only one
    /// of `username` and `token` is given.
    pub fn new(
        environment: &str,
        username: Option<&str>,
        token: Option<&str>,
    ) -> Result<Self, Error> {
        Self::from_config(ClientConfig::new(environment, username, token)?)
    }

    /// Creates a client from an already validated configuration.
    pub fn from_config(config: ClientConfig) -> Result<Self, Error> {
        Self::with_base_url(config.environment.base_url(), config.credentials)
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, credentials: Option<Credentials>) -> Result<Self, Error> {
        let base_url = Url::parse(base_url).map_err(|e| {
            Error::Configuration(format!("invalid base URL '{}': {}", base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Configuration(format!(
                "base URL '{}' cannot carry a path",
                base_url
            )));
        }
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(default_headers(credentials.as_ref())?)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url,
            credentials,
        })
    }

    /// The versioned endpoint every resource path is appended to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Whether requests carry credentials.
    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    /// Issues a GET to `url` with `query` as the query string and decodes the JSON body.
    ///
    /// A non-success status becomes [`Error::Http`] with the body attached; the body is
    /// not decoded in that case.
    pub async fn perform_get<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<T, Error> {
        tracing::debug!(url = %url, ?query, "GET");
        let mut request = self.http.get(url).query(query);
        if let Some(credentials) = &self.credentials {
            request = request.basic_auth(&credentials.username, Some(&credentials.token));
        }

        let resp = request.send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "response");

        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str::<T>(&body).map_err(Error::Decode)
    }

    /// Performs any endpoint and returns the decoded JSON unchanged.
    pub async fn fetch<E: Endpoint>(&self, endpoint: &E) -> Result<Value, Error> {
        self.fetch_as(endpoint).await
    }

    /// Performs any endpoint and decodes the body into `T`.
    pub async fn fetch_as<T, E>(&self, endpoint: &E) -> Result<T, Error>
    where
        T: DeserializeOwned,
        E: Endpoint,
    {
        let request = endpoint.request()?;
        let url = request.url(&self.base_url)?;
        self.perform_get(url, request.query.as_slice()).await
    }

    /// Fetches the alliance selection results of an event.
    pub async fn get_alliance_selection(&self, season: i32, event_code: &str) -> Result<Value, Error> {
        self.fetch(&AllianceSelection::new(season, event_code)).await
    }

    /// Fetches awards by event, by team, or by team at an event. At least one is required.
    pub async fn get_event_awards(
        &self,
        season: i32,
        event_code: Option<&str>,
        team_number: Option<u32>,
    ) -> Result<Value, Error> {
        let mut awards = EventAwards::new(season);
        if let Some(event_code) = event_code {
            awards = awards.with_event_code(event_code);
        }
        if let Some(team_number) = team_number {
            awards = awards.with_team_number(team_number);
        }
        self.fetch(&awards).await
    }

    /// Fetches the list of award types for a season.
    pub async fn get_award_listings(&self, season: i32) -> Result<Value, Error> {
        self.fetch(&AwardListings::new(season)).await
    }

    /// Fetches general information about the API.
    pub async fn get_ancillary(&self) -> Result<Value, Error> {
        self.fetch(&Ancillary).await
    }

    /// Fetches match results for an event.
    pub async fn get_event_match_results(&self, query: &MatchResultsQuery) -> Result<Value, Error> {
        self.fetch(query).await
    }

    /// Fetches detailed score breakdowns for a tournament level of an event.
    pub async fn get_score_details(&self, query: &ScoreDetailsQuery) -> Result<Value, Error> {
        self.fetch(query).await
    }

    /// Fetches the rankings of an event.
    pub async fn get_event_rankings(&self, query: &RankingsQuery) -> Result<Value, Error> {
        self.fetch(query).await
    }

    /// Fetches the match schedule for a tournament level of an event.
    pub async fn get_event_schedule(&self, query: &ScheduleQuery) -> Result<Value, Error> {
        self.fetch(query).await
    }

    /// Fetches the hybrid (schedule plus results) view for a tournament level of an event.
    pub async fn get_hybrid_schedule(&self, query: &HybridScheduleQuery) -> Result<Value, Error> {
        self.fetch(query).await
    }

    /// Fetches the summary of a season.
    pub async fn get_season_summary(&self, season: i32) -> Result<Value, Error> {
        self.fetch(&SeasonSummary::new(season)).await
    }

    /// Fetches the events of a season.
    pub async fn get_event_listings(&self, query: &EventListingsQuery) -> Result<Value, Error> {
        self.fetch(query).await
    }

    /// Fetches the districts of a season.
    pub async fn get_district_listings(&self, season: i32) -> Result<Value, Error> {
        self.fetch(&DistrictListings::new(season)).await
    }

    /// Fetches one page of teams for a season.
    pub async fn get_team_listings(&self, query: &TeamListingsQuery) -> Result<Value, Error> {
        self.fetch(query).await
    }
}

/// `Accept` always; the raw token as `Authorization` when credentials are set.
///
/// Per-request Basic credentials replace the default `Authorization` on the wire.
fn default_headers(credentials: Option<&Credentials>) -> Result<HeaderMap, Error> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Some(credentials) = credentials {
        let mut token = HeaderValue::from_str(&credentials.token).map_err(|_| {
            Error::Configuration("token contains characters not allowed in a header".to_string())
        })?;
        token.set_sensitive(true);
        headers.insert(AUTHORIZATION, token);
    }
    Ok(headers)
}
