//! Steering API: private app operations
//!
//! Private apps live under `/steering/apps/private/{private_app_id}`. The
//! update operation is declared as a partial update (`PATCH`) by the API
//! description, but the service only accepts a full replace (`PUT`) with the
//! app id repeated in the body, and it answers with a single object where
//! consumers expect a list. The hooks in [`crate::hooks::private_app`]
//! bridge both gaps.

mod model;

pub use model::{PrivateAppUpdate, PrivateAppUpdateResponse};

/// Operation id of the private app update call
pub const UPDATE_PRIVATE_APP_OPERATION: &str = "updateNPAPrivateApp";

/// Collection path for private apps, relative to the tenant base URL
pub const PRIVATE_APPS_PATH: &str = "/steering/apps/private";

/// Path of a single private app
pub fn private_app_path(private_app_id: i64) -> String {
    format!("{}/{}", PRIVATE_APPS_PATH, private_app_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_private_app_path() {
        assert_eq!(private_app_path(42), "/steering/apps/private/42");
    }
}
