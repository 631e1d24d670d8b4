use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub lib_id: Option<String>,
    pub gender: Option<String>,
    pub email: Option<String>,
    pub roll_no: Option<String>,
    pub college: Option<String>,
}
