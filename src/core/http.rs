use std::time::Duration;

use reqwest::{
    header::USER_AGENT,
    Client,
};
use serde_json::Value;

use crate::core::ArcanaError;

const MAX_ATTEMPTS: usize = 3;

pub fn http_client() -> Result<Client, ArcanaError> {
    Client::builder()
        .timeout(Duration::from_secs(20))
        .build()
        .map_err(|e| ArcanaError::Custom(format!("HTTP client build failed: {e}")))
}

/// GET a JSON body. Transport failures are retried a few times with a short
/// backoff; a non-success status is reported immediately.
pub async fn get_json(client: &Client, url: &str) -> Result<Value, ArcanaError> {
    let mut attempts: usize = 0;
    loop {
        attempts += 1;

        let resp = client.get(url).header(USER_AGENT, "arcana/0.1 (+reqwest)").send().await;

        let resp = match resp {
            Ok(r) => r,
            Err(e) => {
                if attempts < MAX_ATTEMPTS {
                    tokio::time::sleep(Duration::from_secs(attempts as u64)).await;
                    continue;
                }
                return Err(ArcanaError::network(None, format!("GET {} failed: {}", url, e)));
            }
        };

        let status = resp.status();
        if !status.is_success() {
            return Err(ArcanaError::network(
                Some(status.as_u16()),
                format!("HTTP error {} from {}", status, url),
            ));
        }

        return Ok(resp.json::<Value>().await?);
    }
}
