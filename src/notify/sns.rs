//! Amazon SNS SMS publisher

use super::sigv4::{sign_form_post, Credentials, SigningScope, FORM_CONTENT_TYPE};
use super::{Notifier, NotifyError};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use std::time::Duration;

const SNS_API_VERSION: &str = "2010-03-31";
const SERVICE: &str = "sns";

/// Connection settings for SNS
#[derive(Debug, Clone)]
pub struct SnsConfig {
    pub region: String,
    /// Full endpoint URL; defaults to the regional public endpoint
    pub endpoint: Option<String>,
    pub credentials: Credentials,
}

impl SnsConfig {
    pub fn endpoint_url(&self) -> String {
        self.endpoint
            .clone()
            .unwrap_or_else(|| format!("https://sns.{}.amazonaws.com/", self.region))
    }
}

/// Sends SMS through the SNS `Publish` action
pub struct SnsNotifier {
    client: Client,
    endpoint: String,
    host: String,
    region: String,
    credentials: Credentials,
}

impl SnsNotifier {
    pub fn new(config: SnsConfig) -> Result<Self, NotifyError> {
        let endpoint = config.endpoint_url();
        let host = reqwest::Url::parse(&endpoint)
            .ok()
            .and_then(|url| {
                url.host_str().map(|host| match url.port() {
                    Some(port) => format!("{host}:{port}"),
                    None => host.to_string(),
                })
            })
            .ok_or_else(|| NotifyError::signing(format!("Invalid SNS endpoint: {endpoint}")))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| NotifyError::network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint,
            host,
            region: config.region,
            credentials: config.credentials,
        })
    }
}

/// Form body for a `Publish` call
fn publish_body(phone_number: &str, message: &str) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair("Action", "Publish")
        .append_pair("Message", message)
        .append_pair("PhoneNumber", phone_number)
        .append_pair("Version", SNS_API_VERSION)
        .finish()
}

#[async_trait]
impl Notifier for SnsNotifier {
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<(), NotifyError> {
        let body = publish_body(phone_number, message);
        let scope = SigningScope {
            region: &self.region,
            service: SERVICE,
            host: &self.host,
            time: Utc::now(),
        };
        let signed = sign_form_post(&self.credentials, &scope, &body)?;

        let mut request = self
            .client
            .post(&self.endpoint)
            .header("content-type", FORM_CONTENT_TYPE)
            .header("x-amz-date", &signed.amz_date)
            .header("authorization", &signed.authorization);
        if let Some(token) = &signed.security_token {
            request = request.header("x-amz-security-token", token);
        }

        let response = request
            .body(body)
            .send()
            .await
            .map_err(|e| NotifyError::network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let text = response.text().await.unwrap_or_default();
        Err(NotifyError::from_status(status.as_u16(), &text))
    }

    fn channel(&self) -> &str {
        "sns"
    }
}
