use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::api::ApiError;

/// 发送 POST JSON 请求，返回解析后的响应体
pub async fn send_api_request(client: &Client, url: &str, payload: &Value) -> Result<Value, ApiError> {
    debug!("POST {}", url);

    let resp = client.post(url).json(payload).send().await?;

    let status = resp.status();
    debug!("响应状态码: {}", status);

    if !status.is_success() {
        let text = resp.text().await.unwrap_or_default();
        return Err(ApiError::Backend(format!(
            "请求失败，状态码 {}：{}",
            status, text
        )));
    }

    let body: Value = resp.json().await?;
    Ok(body)
}
