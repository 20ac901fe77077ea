use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Identity extracted from a validated access token.
///
/// The id is the identity provider's subject and doubles as the primary key of
/// the profiles table; whether the account is a customer or a cleaner lives in
/// that table, not in the token.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub email: Option<String>,
    pub role: String,
}
