use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct BroadcastRequest {
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarPeer {
    pub user_id: i32,
    pub username: String,
    pub avatar_ref: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BroadcastResponse {
    pub matched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer: Option<RadarPeer>,
    /// Unix seconds at which the caller's pending broadcast lapses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
}

impl BroadcastResponse {
    pub fn matched(peer: RadarPeer) -> Self {
        Self {
            matched: true,
            peer: Some(peer),
            expires_at: None,
        }
    }

    pub fn waiting(expires_at: i64) -> Self {
        Self {
            matched: false,
            peer: None,
            expires_at: Some(expires_at),
        }
    }
}
