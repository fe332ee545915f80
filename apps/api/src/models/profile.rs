use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A row written to the `profiles` table after sign-up, keyed by the
/// auth provider's user id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProfile {
    pub id: Uuid,
    pub full_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub role: Option<String>,
}
