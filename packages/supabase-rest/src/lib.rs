//! Minimal Supabase PostgREST client.
//!
//! Speaks just enough of the REST surface for row CRUD against a single
//! table: ordered select, insert, delete-by-id. One round trip per call,
//! no retries, no pagination.

use serde::{de::DeserializeOwned, Serialize};

/// Connection settings for a Supabase project.
#[derive(Debug, Clone)]
pub struct SupabaseOptions {
    /// Project base URL, e.g. `https://xyzcompany.supabase.co`.
    pub base_url: String,
    /// The anon (publishable) API key.
    pub api_key: String,
}

/// Error type for store operations.
#[derive(Debug, thiserror::Error)]
pub enum SupabaseError {
    #[error("Supabase is not configured. Set SUPABASE_URL and SUPABASE_ANON_KEY.")]
    Unconfigured,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Store rejected the request ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode store response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Sort direction for ordered selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

impl Order {
    fn suffix(self) -> &'static str {
        match self {
            Order::Ascending => "asc",
            Order::Descending => "desc",
        }
    }
}

/// Client for a single Supabase project's REST endpoint.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    options: SupabaseOptions,
}

impl SupabaseClient {
    /// Create a new client from explicit options.
    pub fn new(options: SupabaseOptions) -> Self {
        Self {
            http: reqwest::Client::new(),
            options,
        }
    }

    /// Build a client from `SUPABASE_URL` / `SUPABASE_ANON_KEY`.
    ///
    /// Returns [`SupabaseError::Unconfigured`] when either variable is
    /// missing or empty, so callers can degrade instead of sending
    /// requests that can never succeed.
    pub fn from_env() -> Result<Self, SupabaseError> {
        let base_url = std::env::var("SUPABASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty());
        let api_key = std::env::var("SUPABASE_ANON_KEY")
            .ok()
            .filter(|v| !v.trim().is_empty());

        match (base_url, api_key) {
            (Some(base_url), Some(api_key)) => {
                Ok(Self::new(SupabaseOptions { base_url, api_key }))
            }
            _ => Err(SupabaseError::Unconfigured),
        }
    }

    /// Fetch every row of `table`, ordered by `order_column`.
    pub async fn select_ordered<T>(
        &self,
        table: &str,
        order_column: &str,
        order: Order,
    ) -> Result<Vec<T>, SupabaseError>
    where
        T: DeserializeOwned,
    {
        let url = format!(
            "{}?select=*&order={}.{}",
            self.table_url(table),
            order_column,
            order.suffix()
        );

        let response = self.authorized(self.http.get(url)).send().await?;
        let body = check_status(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Insert a single row. The store assigns `id` and `created_at`.
    pub async fn insert<T>(&self, table: &str, row: &T) -> Result<(), SupabaseError>
    where
        T: Serialize,
    {
        let response = self
            .authorized(self.http.post(self.table_url(table)))
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await?;

        check_status(response).await?;
        Ok(())
    }

    /// Delete the row with the given id.
    ///
    /// PostgREST answers 204 whether or not a row matched, so deleting a
    /// missing id is not an error.
    pub async fn delete_by_id(&self, table: &str, id: i64) -> Result<(), SupabaseError> {
        let url = format!("{}?id=eq.{}", self.table_url(table), id);

        let response = self.authorized(self.http.delete(url)).send().await?;
        check_status(response).await?;
        Ok(())
    }

    fn table_url(&self, table: &str) -> String {
        format!(
            "{}/rest/v1/{}",
            self.options.base_url.trim_end_matches('/'),
            table
        )
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.options.api_key)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {}", self.options.api_key),
            )
    }
}

async fn check_status(response: reqwest::Response) -> Result<String, SupabaseError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(SupabaseError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> SupabaseClient {
        SupabaseClient::new(SupabaseOptions {
            base_url: base_url.to_string(),
            api_key: "test-key".to_string(),
        })
    }

    #[test]
    fn test_table_url_joins_rest_path() {
        let client = client("https://proj.supabase.co");
        assert_eq!(
            client.table_url("resources"),
            "https://proj.supabase.co/rest/v1/resources"
        );
    }

    #[test]
    fn test_table_url_trims_trailing_slash() {
        let client = client("https://proj.supabase.co/");
        assert_eq!(
            client.table_url("resources"),
            "https://proj.supabase.co/rest/v1/resources"
        );
    }

    #[test]
    fn test_order_suffix() {
        assert_eq!(Order::Ascending.suffix(), "asc");
        assert_eq!(Order::Descending.suffix(), "desc");
    }

    #[test]
    fn test_from_env_requires_both_variables() {
        // Single test so the env mutations stay sequential.
        std::env::remove_var("SUPABASE_URL");
        std::env::remove_var("SUPABASE_ANON_KEY");
        assert!(matches!(
            SupabaseClient::from_env(),
            Err(SupabaseError::Unconfigured)
        ));

        std::env::set_var("SUPABASE_URL", "https://proj.supabase.co");
        assert!(matches!(
            SupabaseClient::from_env(),
            Err(SupabaseError::Unconfigured)
        ));

        std::env::set_var("SUPABASE_ANON_KEY", "anon");
        assert!(SupabaseClient::from_env().is_ok());

        std::env::set_var("SUPABASE_ANON_KEY", "  ");
        assert!(matches!(
            SupabaseClient::from_env(),
            Err(SupabaseError::Unconfigured)
        ));

        std::env::remove_var("SUPABASE_URL");
        std::env::remove_var("SUPABASE_ANON_KEY");
    }

    #[test]
    fn test_status_error_display_includes_body() {
        let err = SupabaseError::Status {
            status: 409,
            body: "duplicate key value".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("409"));
        assert!(message.contains("duplicate key value"));
    }
}
