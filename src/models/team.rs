use serde::{Deserialize, Serialize};

use crate::constants::PLACEHOLDER;
use crate::models::UserProfile;

/// A membership row as the backend returns it. Team fields ride along on
/// every row; the team itself is assembled from the leader's row.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MemberRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub role: String,
    pub team_id: Option<String>,
    pub team_name: Option<String>,
    pub team_code: Option<String>,
    #[serde(default)]
    pub is_pending_payment: bool,
}

impl MemberRecord {
    pub fn is_leader(&self) -> bool {
        self.role == "LEADER"
    }
}

/// A member with the enriched profile fields merged in. Fields the profile
/// fetch could not supply hold the placeholder sentinel instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub year: String,
    pub role: String,
    pub contact: String,
    pub library_id: String,
    pub gender: String,
    pub email: String,
    pub roll_no: String,
    pub college: String,
}

impl Member {
    pub fn from_profile(record: &MemberRecord, profile: &UserProfile) -> Self {
        let field = |v: &Option<String>| v.clone().unwrap_or_else(|| PLACEHOLDER.to_string());
        Self {
            id: record.id.clone(),
            name: profile
                .name
                .clone()
                .unwrap_or_else(|| "Unknown".to_string()),
            year: PLACEHOLDER.to_string(),
            role: record.role.clone(),
            contact: profile
                .phone
                .as_ref()
                .map(|p| format!("+91-{}", p))
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            library_id: field(&profile.lib_id),
            gender: field(&profile.gender),
            email: field(&profile.email),
            roll_no: field(&profile.roll_no),
            college: field(&profile.college),
        }
    }

    /// Fallback when the profile fetch for this member failed.
    pub fn placeholder(record: &MemberRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: "Unknown Member".to_string(),
            year: PLACEHOLDER.to_string(),
            role: record.role.clone(),
            contact: PLACEHOLDER.to_string(),
            library_id: PLACEHOLDER.to_string(),
            gender: PLACEHOLDER.to_string(),
            email: PLACEHOLDER.to_string(),
            roll_no: PLACEHOLDER.to_string(),
            college: PLACEHOLDER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leader {
    pub name: String,
    pub year: String,
    pub library_id: String,
    pub gender: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub code: String,
    pub leader: Leader,
    pub members: Vec<Member>,
    pub is_pending_payment: bool,
}
