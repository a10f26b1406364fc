//! Shared response bodies for admin write handlers.

use serde::Serialize;

/// `{ "success": bool, "changes": n }` reply to update, delete and
/// maintenance calls. `changes` is the number of rows affected.
#[derive(Debug, Serialize)]
pub struct MutationResponse {
    pub success: bool,
    pub changes: u64,
}

impl MutationResponse {
    /// Reply for an update: it only succeeds when the target row existed.
    pub fn updated(changes: u64) -> Self {
        Self {
            success: changes > 0,
            changes,
        }
    }

    /// Reply for a delete or maintenance call. Deleting a missing row is a
    /// successful no-op with zero changes.
    pub fn applied(changes: u64) -> Self {
        Self {
            success: true,
            changes,
        }
    }
}
