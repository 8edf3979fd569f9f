use crate::domain::model::{NotifyOutcome, Report};
use crate::domain::ports::{ConfigProvider, Notifier};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://sctapi.ftqq.com";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Server酱 推送：`POST {base_url}/{token}.send`，表單欄位 `title` 與 `desp`
pub struct ServerChanNotifier {
    client: Client,
    base_url: String,
}

impl ServerChanNotifier {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(
            config.notify_base_url(),
            Duration::from_secs(config.timeout_seconds()),
        )
    }

    pub fn endpoint(&self, token: &str) -> String {
        format!("{}/{}.send", self.base_url.trim_end_matches('/'), token)
    }
}

#[async_trait]
impl Notifier for ServerChanNotifier {
    async fn notify(&self, report: &Report, token: &str) -> NotifyOutcome {
        if token.is_empty() || report.is_empty() {
            tracing::info!("⏭️ Notification skipped: token or content is empty");
            return NotifyOutcome::Skipped {
                reason: "token or content is empty".to_string(),
            };
        }

        // token 是憑證，日誌只記錄 base_url
        tracing::info!("📤 Sending notification via {}", self.base_url);
        let form = [("title", report.title.as_str()), ("desp", report.body.as_str())];

        match self.client.post(self.endpoint(token)).form(&form).send().await {
            Ok(response) => {
                let status = response.status();
                tracing::info!(
                    "HTTP response status: {} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("")
                );
                if status.is_success() {
                    NotifyOutcome::Delivered {
                        status: status.as_u16(),
                    }
                } else {
                    tracing::warn!("⚠️ Notification endpoint returned {}", status);
                    NotifyOutcome::Failed {
                        reason: format!("HTTP {}", status.as_u16()),
                    }
                }
            }
            Err(e) => {
                let e = e.without_url();
                tracing::error!("❌ Failed to send notification: {}", e);
                NotifyOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn report() -> Report {
        Report {
            title: "开心每一天".to_string(),
            body: "# 今天是 2026-10-19\n\n## A\n".to_string(),
        }
    }

    fn notifier(base_url: String) -> ServerChanNotifier {
        ServerChanNotifier::new(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECONDS)).unwrap()
    }

    #[test]
    fn test_endpoint_template() {
        let n = notifier("https://sctapi.ftqq.com/".to_string());
        assert_eq!(n.endpoint("tok123"), "https://sctapi.ftqq.com/tok123.send");
    }

    #[tokio::test]
    async fn test_posts_form_fields() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/tok123.send")
                .header("content-type", "application/x-www-form-urlencoded")
                .x_www_form_urlencoded_tuple("title", "开心每一天")
                .x_www_form_urlencoded_key_exists("desp");
            then.status(200).json_body(serde_json::json!({"code": 0}));
        });

        let outcome = notifier(server.base_url()).notify(&report(), "tok123").await;

        api_mock.assert();
        assert_eq!(outcome, NotifyOutcome::Delivered { status: 200 });
    }

    #[tokio::test]
    async fn test_empty_token_makes_no_request() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST);
            then.status(200);
        });

        let outcome = notifier(server.base_url()).notify(&report(), "").await;

        api_mock.assert_hits(0);
        assert!(matches!(outcome, NotifyOutcome::Skipped { .. }));
    }

    #[tokio::test]
    async fn test_empty_report_makes_no_request() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST);
            then.status(200);
        });

        let outcome = notifier(server.base_url())
            .notify(&Report::default(), "tok123")
            .await;

        api_mock.assert_hits(0);
        assert!(matches!(outcome, NotifyOutcome::Skipped { .. }));
    }

    #[tokio::test]
    async fn test_server_error_is_absorbed() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/tok123.send");
            then.status(500);
        });

        let outcome = notifier(server.base_url()).notify(&report(), "tok123").await;

        api_mock.assert_hits(1);
        assert_eq!(
            outcome,
            NotifyOutcome::Failed {
                reason: "HTTP 500".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_timeout_is_absorbed() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/tok123.send");
            then.status(200).delay(Duration::from_secs(2));
        });

        let slow = ServerChanNotifier::new(server.base_url(), Duration::from_millis(200)).unwrap();
        let outcome = slow.notify(&report(), "tok123").await;

        assert!(matches!(outcome, NotifyOutcome::Failed { .. }));
    }

    #[tokio::test]
    async fn test_connection_error_is_absorbed() {
        // 沒有服務監聽的埠
        let n = ServerChanNotifier::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let outcome = n.notify(&report(), "tok123").await;
        assert!(matches!(outcome, NotifyOutcome::Failed { .. }));
    }
}
