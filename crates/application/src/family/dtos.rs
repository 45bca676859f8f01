use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddFamilyMemberRequest {
    pub member_id: i32,

    #[validate(length(min = 1, max = 20, message = "relation must be 1-20 characters"))]
    pub relation: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RemoveFamilyMemberResponse {
    /// Edges deleted, 0 when the two users were not related
    pub removed: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamilyMemberDto {
    pub user_id: i32,
    pub username: String,
    pub avatar_ref: Option<String>,
    pub relation: String,
    pub created_at: i64,
}
