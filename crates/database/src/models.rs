//! Database models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A captured lead: the persisted outcome of one extraction pass over a
/// conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Lead {
    /// Auto-incrementing ID.
    pub id: i64,
    /// Identifier of the source conversation. Not unique: re-processing a
    /// conversation inserts a new row.
    pub conv_id: String,
    /// Extracted name, if a name pattern matched.
    pub name: Option<String>,
    /// Extracted email, if the email pattern matched.
    pub email: Option<String>,
    /// UTC ISO-8601 capture timestamp. Null for rows written before the
    /// ts column existed.
    pub ts: Option<String>,
}
