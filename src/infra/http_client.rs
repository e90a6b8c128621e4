use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use std::time::Duration;

use crate::app::ports::{HttpClientPort, HttpGetResult};
use crate::common::error::Result;

pub struct ReqwestHttp {
    client: Client,
    user_agent: String,
}

impl ReqwestHttp {
    pub fn new(timeout: Duration, user_agent: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            user_agent: user_agent.into(),
        })
    }
}

impl HttpClientPort for ReqwestHttp {
    fn get(&self, url: &str) -> Result<HttpGetResult> {
        tracing::info!("HTTP GET request to: {}", url);
        let resp = self
            .client
            .get(url)
            .header(USER_AGENT, self.user_agent.as_str())
            .send()?;
        let status = resp.status().as_u16();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();
        let body = resp.text()?;
        tracing::info!("HTTP response: status={}, size={} bytes", status, body.len());
        Ok(HttpGetResult {
            status,
            body,
            content_type,
        })
    }
}
