//! Client configuration: target environment and optional credentials.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Deployment of the API a client talks to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Production,
    Staging,
}

impl Environment {
    /// Versioned base endpoint for this environment.
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Production => "https://frc-api.firstinspires.org/v2.0",
            Environment::Staging => "https://frc-staging-api.firstinspires.org/v2.0",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Environment::Production => "production",
            Environment::Staging => "staging",
        })
    }
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "staging" | "stage" => Ok(Environment::Staging),
            _ => Err(Error::Configuration(format!(
                "unknown environment '{}'. Valid values: production (prod), staging (stage)",
                s
            ))),
        }
    }
}

/// Username and authorization token issued for the API.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub token: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            token: token.into(),
        }
    }

    /// Pairs an optional username with an optional token.
    ///
    /// Both present yields credentials, both absent yields `None` (unauthenticated,
    /// only useful against a mock deployment). Anything else is a configuration error.
    pub fn pair(username: Option<&str>, token: Option<&str>) -> Result<Option<Self>, Error> {
        match (username, token) {
            (Some(username), Some(token)) => Ok(Some(Self::new(username, token))),
            (None, None) => Ok(None),
            (Some(_), None) => Err(Error::Configuration(
                "a username was given without a token; supply both or neither".to_string(),
            )),
            (None, Some(_)) => Err(Error::Configuration(
                "a token was given without a username; supply both or neither".to_string(),
            )),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Immutable settings a [`Client`](crate::Client) is built from.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    pub environment: Environment,
    pub credentials: Option<Credentials>,
}

impl ClientConfig {
    /// Validates an environment name and credential pairing.
    pub fn new(
        environment: &str,
        username: Option<&str>,
        token: Option<&str>,
    ) -> Result<Self, Error> {
        let environment = environment.parse::<Environment>()?;
        let credentials = Credentials::pair(username, token)?;
        Ok(Self {
            environment,
            credentials,
        })
    }
}
