//! Transport seam for the destination service.
//!
//! [`SheetsTransport`] exposes exactly the three wire calls the client
//! needs, so the client and the transfer layer can be exercised against an
//! in-memory double while production runs over [`HttpTransport`].

use std::future::Future;
use std::time::Duration;

use reqwest::StatusCode;

use super::api::{
    BatchUpdateBody, BatchUpdateResponse, BatchValuesBody, SheetProperties, SpreadsheetInfo,
    StructuralReply, StructuralRequest, ValueInputOption, ValueRange,
};
use crate::common::{Error, Result};

/// The three logical calls of the destination's wire contract.
///
/// Structural updates are not idempotent — issuing one twice creates two
/// sheets or double-grows a grid — so implementations must not retry on
/// their own.
pub trait SheetsTransport: Send + Sync {
    /// Fetch the destination document's existing sheet inventory.
    fn list_sheets(&self) -> impl Future<Output = Result<Vec<SheetProperties>>> + Send;

    /// Apply structural changes (add sheet, append dimension) in one batch.
    fn batch_update(
        &self,
        requests: Vec<StructuralRequest>,
    ) -> impl Future<Output = Result<Vec<StructuralReply>>> + Send;

    /// Write value ranges in one batch, without formula evaluation.
    fn update_values(&self, data: Vec<ValueRange>) -> impl Future<Output = Result<()>> + Send;
}

/// REST endpoint of the destination service.
pub const SHEETS_ENDPOINT: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// HTTP implementation of [`SheetsTransport`] for one spreadsheet.
pub struct HttpTransport {
    http: reqwest::Client,
    spreadsheet_id: String,
    access_token: String,
}

impl HttpTransport {
    /// Build a transport for `spreadsheet_id`, authenticated with a bearer
    /// token and bounded by `timeout` per call.
    pub fn new(
        spreadsheet_id: impl Into<String>,
        access_token: String,
        timeout: Duration,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| Error::RemoteService(format!("failed to build HTTP client: {error}")))?;
        Ok(Self {
            http,
            spreadsheet_id: spreadsheet_id.into(),
            access_token,
        })
    }

    fn url(&self, suffix: &str) -> String {
        format!("{SHEETS_ENDPOINT}/{}{suffix}", self.spreadsheet_id)
    }

    /// Map non-success statuses onto the error taxonomy.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = service_error_message(status, &body);
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(Error::Authentication(message)),
            StatusCode::NOT_FOUND => Err(Error::NotFound(message)),
            _ => Err(Error::RemoteService(message)),
        }
    }
}

/// Prefer the service's own error message over a bare status line.
fn service_error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")?
                .get("message")?
                .as_str()
                .map(|message| format!("{status}: {message}"))
        })
        .unwrap_or_else(|| format!("HTTP {status}"))
}

impl SheetsTransport for HttpTransport {
    async fn list_sheets(&self) -> Result<Vec<SheetProperties>> {
        let response = self
            .http
            .get(self.url(""))
            .query(&[("fields", "sheets.properties")])
            .bearer_auth(&self.access_token)
            .send()
            .await?;
        let info: SpreadsheetInfo = Self::check(response).await?.json().await?;
        Ok(info.sheets.into_iter().map(|entry| entry.properties).collect())
    }

    async fn batch_update(
        &self,
        requests: Vec<StructuralRequest>,
    ) -> Result<Vec<StructuralReply>> {
        let response = self
            .http
            .post(self.url(":batchUpdate"))
            .bearer_auth(&self.access_token)
            .json(&BatchUpdateBody { requests })
            .send()
            .await?;
        let reply: BatchUpdateResponse = Self::check(response).await?.json().await?;
        Ok(reply.replies)
    }

    async fn update_values(&self, data: Vec<ValueRange>) -> Result<()> {
        let response = self
            .http
            .post(self.url("/values:batchUpdate"))
            .bearer_auth(&self.access_token)
            .json(&BatchValuesBody {
                value_input_option: ValueInputOption::Raw,
                data,
            })
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_message_prefers_the_service_payload() {
        let body = r#"{"error": {"code": 429, "message": "Quota exceeded"}}"#;
        assert_eq!(
            service_error_message(StatusCode::TOO_MANY_REQUESTS, body),
            "429 Too Many Requests: Quota exceeded"
        );
    }

    #[test]
    fn test_service_error_message_falls_back_to_the_status_line() {
        assert_eq!(
            service_error_message(StatusCode::BAD_GATEWAY, "<html>oops</html>"),
            "HTTP 502 Bad Gateway"
        );
    }
}
