use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde_json::json;

use super::{Email, Mailer};

/// Sends mail through an HTTP transactional-mail API that accepts
/// `POST {base_url}/emails` and answers with `{"id": "..."}`.
pub struct MailApiMailer {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

impl MailApiMailer {
    pub fn new(base_url: String, api_key: String) -> anyhow::Result<Self> {
        Self::with_timeout(base_url, api_key, REQUEST_TIMEOUT)
    }

    /// `timeout` bounds the whole request; bookings wait on it.
    pub fn with_timeout(
        base_url: String,
        api_key: String,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT.min(timeout))
            .timeout(timeout)
            .build()
            .context("failed to build mail API client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client,
        })
    }
}

#[async_trait]
impl Mailer for MailApiMailer {
    async fn send(&self, email: &Email) -> anyhow::Result<String> {
        let body = json!({
            "from": email.from,
            "to": [email.to],
            "subject": email.subject,
            "html": email.html,
        });

        let resp = self
            .client
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .context("failed to reach mail API")?;

        let status = resp.status();
        let data: serde_json::Value = resp
            .json()
            .await
            .context("failed to parse mail API response")?;

        if !status.is_success() {
            anyhow::bail!("mail API error ({}): {}", status, data);
        }

        data["id"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| anyhow::anyhow!("missing id in mail API response"))
    }

    async fn verify(&self) -> anyhow::Result<()> {
        anyhow::ensure!(!self.base_url.is_empty(), "MAIL_API_URL is not set");
        anyhow::ensure!(!self.api_key.is_empty(), "MAIL_API_KEY is not set");
        reqwest::Url::parse(&self.base_url)
            .with_context(|| format!("MAIL_API_URL is not a valid URL: {}", self.base_url))?;
        Ok(())
    }
}
