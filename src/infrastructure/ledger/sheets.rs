//! Submission ledger backed by a Google Sheets spreadsheet (values API v4).

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Url};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::auth::AccessTokenProvider;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ledger::{CellUpdate, LedgerSheet};

pub const DEFAULT_SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4";
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

const VALUE_INPUT_OPTION: &str = "RAW";
const UNPARSEABLE_RANGE: &str = "Unable to parse range";

#[derive(Debug, Clone)]
pub struct GoogleSheetsConfig {
    pub spreadsheet_id: String,
    pub sheet_name: String,
    pub api_base: String,
}

impl GoogleSheetsConfig {
    pub fn new(spreadsheet_id: impl Into<String>) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.into(),
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            api_base: DEFAULT_SHEETS_API_BASE.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchUpdateBody {
    value_input_option: &'static str,
    data: Vec<RangeValues>,
}

#[derive(Debug, Serialize)]
struct RangeValues {
    range: String,
    values: Vec<Vec<String>>,
}

pub struct GoogleSheetsLedger {
    client: reqwest::Client,
    tokens: Arc<dyn AccessTokenProvider>,
    config: GoogleSheetsConfig,
}

impl GoogleSheetsLedger {
    pub fn new(
        client: reqwest::Client,
        tokens: Arc<dyn AccessTokenProvider>,
        config: GoogleSheetsConfig,
    ) -> Self {
        Self {
            client,
            tokens,
            config,
        }
    }

    fn range(&self, cells: &str) -> String {
        format!("{}!{cells}", self.config.sheet_name)
    }

    /// `{base}/spreadsheets/{id}/values/{tail}`, with every segment escaped.
    fn values_url(&self, tail: &str) -> DomainResult<Url> {
        let mut url = Url::parse(&self.config.api_base)
            .map_err(|err| DomainError::persistence(format!("invalid sheets api base: {err}")))?;
        url.path_segments_mut()
            .map_err(|()| DomainError::persistence("sheets api base cannot carry a path"))?
            .pop_if_empty()
            .extend(["spreadsheets", self.config.spreadsheet_id.as_str(), "values", tail]);
        Ok(url)
    }

    fn batch_update_url(&self) -> DomainResult<Url> {
        let mut url = Url::parse(&self.config.api_base)
            .map_err(|err| DomainError::persistence(format!("invalid sheets api base: {err}")))?;
        url.path_segments_mut()
            .map_err(|()| DomainError::persistence("sheets api base cannot carry a path"))?
            .pop_if_empty()
            .extend(["spreadsheets", self.config.spreadsheet_id.as_str()])
            .push("values:batchUpdate");
        Ok(url)
    }

    async fn request(&self, method: Method, url: Url) -> DomainResult<RequestBuilder> {
        let token = self.tokens.access_token().await?;
        Ok(self.client.request(method, url).bearer_auth(token))
    }

    async fn send(&self, request: RequestBuilder) -> DomainResult<reqwest::Response> {
        let response = request
            .send()
            .await
            .map_err(|err| DomainError::persistence(format!("sheets request failed: {err}")))?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(DomainError::Persistence(format!(
            "sheets api returned {status}: {body}"
        )))
    }

    async fn get_values(&self, cells: &str) -> DomainResult<Vec<Vec<String>>> {
        let url = self.values_url(&self.range(cells))?;
        let request = self.request(Method::GET, url).await?;
        let response = match self.send(request).await {
            Ok(response) => response,
            // A missing or freshly created sheet cannot be parsed as a range yet.
            Err(DomainError::Persistence(msg)) if msg.contains(UNPARSEABLE_RANGE) => {
                return Ok(Vec::new());
            }
            Err(err) => return Err(err),
        };
        let range: ValueRange = response
            .json()
            .await
            .map_err(|err| DomainError::persistence(format!("invalid sheets response: {err}")))?;
        Ok(range
            .values
            .into_iter()
            .map(|row| row.into_iter().map(cell_text).collect())
            .collect())
    }
}

/// The API returns formatted strings, but hand-edited sheets may hold numbers
/// or booleans.
fn cell_text(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[async_trait]
impl LedgerSheet for GoogleSheetsLedger {
    async fn read_header(&self) -> DomainResult<Option<Vec<String>>> {
        Ok(self.get_values("A1:H1").await?.into_iter().next())
    }

    async fn write_header(&self, header: &[&str]) -> DomainResult<()> {
        let mut url = self.values_url(&self.range("A1:H1"))?;
        url.query_pairs_mut()
            .append_pair("valueInputOption", VALUE_INPUT_OPTION);
        let request = self
            .request(Method::PUT, url)
            .await?
            .json(&json!({ "values": [header] }));
        self.send(request).await?;
        tracing::info!(sheet = %self.config.sheet_name, "ledger header written");
        Ok(())
    }

    async fn read_rows(&self) -> DomainResult<Vec<Vec<String>>> {
        self.get_values("A:H").await
    }

    async fn update_cells(&self, updates: Vec<CellUpdate>) -> DomainResult<()> {
        let body = BatchUpdateBody {
            value_input_option: VALUE_INPUT_OPTION,
            data: updates
                .into_iter()
                .map(|update| RangeValues {
                    range: self.range(&update.a1()),
                    values: vec![vec![update.value]],
                })
                .collect(),
        };
        let request = self
            .request(Method::POST, self.batch_update_url()?)
            .await?
            .json(&body);
        self.send(request).await?;
        Ok(())
    }

    async fn append_row(&self, row: Vec<String>) -> DomainResult<()> {
        let mut url = self.values_url(&format!("{}:append", self.range("A:H")))?;
        url.query_pairs_mut()
            .append_pair("valueInputOption", VALUE_INPUT_OPTION)
            .append_pair("insertDataOption", "INSERT_ROWS");
        let request = self
            .request(Method::POST, url)
            .await?
            .json(&json!({ "values": [row] }));
        self.send(request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ledger::LedgerColumn;
    use crate::infrastructure::ledger::auth::StaticTokenProvider;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn ledger(server: &MockServer) -> GoogleSheetsLedger {
        let mut config = GoogleSheetsConfig::new("sheet-123");
        config.api_base = server.uri();
        GoogleSheetsLedger::new(
            reqwest::Client::new(),
            Arc::new(StaticTokenProvider("tok".into())),
            config,
        )
    }

    #[tokio::test]
    async fn reads_rows_with_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/spreadsheets/sheet-123/values/Sheet1!A:H"))
            .and(header("authorization", "Bearer tok"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "range": "Sheet1!A1:H2",
                "majorDimension": "ROWS",
                "values": [["Timestamp", "Name"], ["2025-01-01T00:00:00.000Z", "Asha", "a@x.com", 42]]
            })))
            .mount(&server)
            .await;

        let rows = ledger(&server).read_rows().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][3], "42");
    }

    #[tokio::test]
    async fn empty_sheet_has_no_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/spreadsheets/sheet-123/values/Sheet1!A1:H1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "range": "Sheet1!A1:H1",
                "majorDimension": "ROWS"
            })))
            .mount(&server)
            .await;

        assert!(ledger(&server).read_header().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn batch_update_addresses_cells_in_a1_notation() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/spreadsheets/sheet-123/values:batchUpdate"))
            .and(body_json(json!({
                "valueInputOption": "RAW",
                "data": [
                    { "range": "Sheet1!D3", "values": [["merged"]] },
                    { "range": "Sheet1!H3", "values": [["ts"]] }
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        ledger(&server)
            .update_cells(vec![
                CellUpdate::new(3, LedgerColumn::Message, "merged"),
                CellUpdate::new(3, LedgerColumn::UpdatedAt, "ts"),
            ])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn append_inserts_rows() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/spreadsheets/sheet-123/values/Sheet1!A:H:append"))
            .and(query_param("valueInputOption", "RAW"))
            .and(query_param("insertDataOption", "INSERT_ROWS"))
            .and(body_json(json!({ "values": [["a", "b"]] })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        ledger(&server)
            .append_row(vec!["a".into(), "b".into()])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn api_errors_surface_as_persistence_failures() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403).set_body_string("caller lacks permission"))
            .mount(&server)
            .await;

        let err = ledger(&server).read_rows().await.unwrap_err();
        assert!(matches!(err, DomainError::Persistence(msg) if msg.contains("403")));
    }
}
