/**
 * User Wire Types
 *
 * The public view of a user account. The password hash lives only in the
 * backend storage model and has no counterpart here, so it cannot leak
 * through serialisation.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User information that is safe to return to clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// User's unique ID
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Normalised (lower-case) email address
    pub email: String,
    /// Normalised phone number
    pub phone: String,
    /// Account creation time
    pub created_at: DateTime<Utc>,
}
