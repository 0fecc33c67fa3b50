//! Data access for the `resources` table.
//!
//! All Supabase traffic goes through these server functions so the
//! project credentials stay on the server. Each operation is a single
//! round trip; ordering is done by the store.

use dioxus::prelude::*;

use crate::types::{NewResource, Resource};

/// The one remote table this app reads and writes.
pub const RESOURCES_TABLE: &str = "resources";

/// Cache key the resource collection lives under.
pub const RESOURCES_QUERY_KEY: &str = "resources";

/// App-boundary error taxonomy. Validation failures never reach this
/// layer; they are caught in the form before any call is issued.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, serde::Serialize, serde::Deserialize)]
pub enum DataError {
    #[error("{0}")]
    Configuration(String),
    #[error("{0}")]
    Transport(String),
}

impl From<supabase_rest::SupabaseError> for DataError {
    fn from(err: supabase_rest::SupabaseError) -> Self {
        match err {
            supabase_rest::SupabaseError::Unconfigured => {
                DataError::Configuration(err.to_string())
            }
            other => DataError::Transport(other.to_string()),
        }
    }
}

/// Whether the store credentials are present. Drives the degraded
/// read-only notice on the home page.
#[server]
pub async fn is_store_configured() -> Result<bool, ServerFnError> {
    Ok(supabase_rest::SupabaseClient::from_env().is_ok())
}

/// Fetch the full collection, newest first.
///
/// An unconfigured store yields an empty collection rather than an error,
/// so the app degrades to an empty read-only view.
#[server]
pub async fn list_resources() -> Result<Vec<Resource>, ServerFnError> {
    use supabase_rest::{Order, SupabaseClient};

    let Ok(client) = SupabaseClient::from_env() else {
        return Ok(Vec::new());
    };

    client
        .select_ordered(RESOURCES_TABLE, "created_at", Order::Descending)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "failed to list resources");
            ServerFnError::new(DataError::from(e).to_string())
        })
}

/// Persist a new resource. The store assigns `id` and `created_at`.
#[server]
pub async fn insert_resource(new_resource: NewResource) -> Result<(), ServerFnError> {
    use supabase_rest::SupabaseClient;

    let client = SupabaseClient::from_env()
        .map_err(|e| ServerFnError::new(DataError::from(e).to_string()))?;

    client
        .insert(RESOURCES_TABLE, &new_resource)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "failed to insert resource");
            ServerFnError::new(DataError::from(e).to_string())
        })
}

/// Hard-delete a resource by id. Deleting an id that no longer exists is
/// treated as success, matching the store's semantics.
#[server]
pub async fn delete_resource(id: i64) -> Result<(), ServerFnError> {
    use supabase_rest::SupabaseClient;

    let client = SupabaseClient::from_env()
        .map_err(|e| ServerFnError::new(DataError::from(e).to_string()))?;

    client
        .delete_by_id(RESOURCES_TABLE, id)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, id, "failed to delete resource");
            ServerFnError::new(DataError::from(e).to_string())
        })
}
