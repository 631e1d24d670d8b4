use serde::Deserialize;

use crate::error::{IdeatexError, IdeatexResult};

/// Envelope every backend endpoint wraps its payload in.
#[derive(Debug, Deserialize, Clone)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Unwrap the payload, passing the server message through verbatim on
    /// failure. `fallback` covers responses that fail without a message.
    pub fn into_data(self, fallback: &str) -> IdeatexResult<T> {
        if !self.success {
            return Err(IdeatexError::RequestFailed(
                self.message.unwrap_or_else(|| fallback.to_string()),
            ));
        }
        self.data
            .ok_or_else(|| IdeatexError::RequestFailed(format!("{} but no data returned", fallback)))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct MembersData {
    pub members: Vec<super::MemberRecord>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UserData {
    pub user: super::UserProfile,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TeamRef {
    #[serde(rename = "_id")]
    pub id: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct JoinTeamData {
    pub team: TeamRef,
    pub user_id: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreatedTeam {
    #[serde(rename = "_id")]
    pub id: String,
    pub leader_id: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AddTeamData {
    pub team: CreatedTeam,
}
