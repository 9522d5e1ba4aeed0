//! Best-effort notification delivery to the downstream notification service.
//!
//! Delivery is advisory: the create workflow logs a failure and carries on,
//! so nothing in this module ever surfaces to an HTTP client. The caller
//! discards the [`Result`] after logging it.

use reqwest::StatusCode;
use serde::Serialize;
use url::Url;

use crate::models::transaction::Transaction;

/// Header carrying the shared key on every notification call.
const API_KEY_HEADER: &str = "x-api-key";

/// Errors that can occur while delivering a notification.
///
/// These are logged by the create handler and never propagated, never
/// retried.
#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    /// The request never completed (connection refused, DNS failure, ...).
    #[error("notification request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The notification service answered with a non-success status.
    #[error("notification service responded with status {0}")]
    UnexpectedStatus(StatusCode),
}

/// Request body POSTed to the notification service's `/notify` endpoint.
#[derive(Debug, Serialize)]
struct NotificationRequest {
    account_id: i64,
    message: String,
    channel: &'static str,
    status: &'static str,
}

/// Client for the external notification service.
///
/// Resolves the `/notify` URL once at construction and reuses a single
/// `reqwest::Client` for all deliveries. Cloning is cheap; the underlying
/// connection pool is shared.
#[derive(Debug, Clone)]
pub struct NotificationClient {
    client: reqwest::Client,
    notify_url: Url,
    api_key: String,
}

impl NotificationClient {
    /// Build a client that delivers to `<base_url>/notify`, authenticating
    /// with `api_key`.
    ///
    /// The client has no request timeout: a hung notification call holds its
    /// request open. This matches the upstream service's behavior.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid URL.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, url::ParseError> {
        let notify_url = Url::parse(base_url)?.join("/notify")?;

        Ok(Self {
            client: reqwest::Client::new(),
            notify_url,
            api_key: api_key.to_string(),
        })
    }

    /// Deliver the advisory message for a persisted transaction.
    ///
    /// Builds a message of the form
    /// `DEPOSIT of ₹500 processed successfully for Account ID 1` and POSTs
    /// `{account_id, message, channel: "email", status: "sent"}` with the
    /// shared key in the `x-api-key` header.
    pub async fn notify(&self, transaction: &Transaction) -> Result<(), NotificationError> {
        let message = format!(
            "{} of ₹{} processed successfully for Account ID {}",
            transaction.txn_type.to_uppercase(),
            transaction.amount,
            transaction.account_id
        );

        let response = self
            .client
            .post(self.notify_url.clone())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&NotificationRequest {
                account_id: transaction.account_id,
                message,
                channel: "email",
                status: "sent",
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(NotificationError::UnexpectedStatus(response.status()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use axum::{Json, Router, http::HeaderMap, routing::post};
    use reqwest::StatusCode;
    use serde_json::{Value, json};
    use tokio::sync::mpsc;

    use super::{NotificationClient, NotificationError};
    use crate::models::transaction::Transaction;

    fn deposit_transaction() -> Transaction {
        Transaction {
            txn_id: 1,
            account_id: 1,
            amount: 500.0,
            txn_type: "deposit".to_string(),
            counterparty: None,
            reference: Some("salary".to_string()),
        }
    }

    /// Bind a throwaway server that records the request it receives on
    /// `/notify` and answers with `status`.
    async fn spawn_receiver(
        status: StatusCode,
    ) -> (String, mpsc::Receiver<(HeaderMap, Value)>) {
        let (tx, rx) = mpsc::channel(1);

        let app = Router::new().route(
            "/notify",
            post(move |headers: HeaderMap, Json(body): Json<Value>| {
                let tx = tx.clone();
                async move {
                    tx.send((headers, body)).await.unwrap();
                    status
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{addr}"), rx)
    }

    #[tokio::test]
    async fn notify_delivers_expected_body_and_header() {
        let (base_url, mut rx) = spawn_receiver(StatusCode::OK).await;
        let client = NotificationClient::new(&base_url, "banking-shared-key").unwrap();

        client.notify(&deposit_transaction()).await.unwrap();

        let (headers, body) = rx.recv().await.unwrap();
        assert_eq!(headers.get("x-api-key").unwrap(), "banking-shared-key");
        assert_eq!(
            body,
            json!({
                "account_id": 1,
                "message": "DEPOSIT of ₹500 processed successfully for Account ID 1",
                "channel": "email",
                "status": "sent"
            })
        );
    }

    #[tokio::test]
    async fn notify_reports_non_success_status() {
        let (base_url, _rx) = spawn_receiver(StatusCode::INTERNAL_SERVER_ERROR).await;
        let client = NotificationClient::new(&base_url, "banking-shared-key").unwrap();

        let error = client.notify(&deposit_transaction()).await.unwrap_err();

        assert!(matches!(
            error,
            NotificationError::UnexpectedStatus(StatusCode::INTERNAL_SERVER_ERROR)
        ));
    }

    #[tokio::test]
    async fn notify_reports_unreachable_target() {
        // Nothing listens on port 9 of the loopback interface.
        let client = NotificationClient::new("http://127.0.0.1:9", "banking-shared-key").unwrap();

        let error = client.notify(&deposit_transaction()).await.unwrap_err();

        assert!(matches!(error, NotificationError::Transport(_)));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(NotificationClient::new("not a url", "key").is_err());
    }

    #[test]
    fn notify_path_is_appended_to_base_url() {
        let client = NotificationClient::new("http://notification-service:8084", "key").unwrap();

        assert_eq!(
            client.notify_url.as_str(),
            "http://notification-service:8084/notify"
        );
    }
}
