use std::path::PathBuf;

use crate::config::{config_path, load_config_from, save_config_to};
use crate::error::{IdeatexError, IdeatexResult};

/// The client-held session: bearer token and team/user identifiers.
///
/// Every network-calling component receives this explicitly instead of
/// reaching into storage on its own. Writes go straight back to the config
/// file, which is the storage the web client kept in localStorage.
#[derive(Debug)]
pub struct Session {
    token: Option<String>,
    team_id: Option<String>,
    user_id: Option<String>,
    path: PathBuf,
}

impl Session {
    pub fn load() -> Self {
        Self::load_from(config_path())
    }

    pub fn load_from(path: PathBuf) -> Self {
        let config = load_config_from(&path);
        let token = std::env::var(crate::constants::TOKEN_ENV)
            .ok()
            .or(config.token);
        Self {
            token,
            team_id: config.team_id,
            user_id: config.user_id,
            path,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn team_id(&self) -> Option<&str> {
        self.team_id.as_deref()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn require_token(&self) -> IdeatexResult<&str> {
        self.token.as_deref().ok_or(IdeatexError::TokenNotFound)
    }

    /// The team id a payment attempt requires. Absence is terminal for that
    /// attempt, not a retryable error.
    pub fn require_team(&self) -> IdeatexResult<&str> {
        self.team_id.as_deref().ok_or(IdeatexError::MissingTeamContext)
    }

    pub fn set_token(&mut self, token: String) -> IdeatexResult<()> {
        self.token = Some(token);
        self.persist()
    }

    /// Store the identifiers handed back by join/create/payment confirmation.
    /// `None` leaves the existing value untouched, matching how the web client
    /// only wrote keys it actually received.
    pub fn set_team(&mut self, team_id: Option<String>, user_id: Option<String>) -> IdeatexResult<()> {
        if let Some(team_id) = team_id {
            self.team_id = Some(team_id);
        }
        if let Some(user_id) = user_id {
            self.user_id = Some(user_id);
        }
        self.persist()
    }

    fn persist(&self) -> IdeatexResult<()> {
        let mut config = load_config_from(&self.path);
        config.token = self.token.clone();
        config.team_id = self.team_id.clone();
        config.user_id = self.user_id.clone();
        save_config_to(&config, &self.path)
            .map_err(|e| IdeatexError::ConfigError(e.to_string()))
    }
}
