use serde_json::Value;

use crate::api::{ApiError, endpoint, ensure_success, send_api_get_request};
use crate::app::models::University;
use crate::app::state::AppState;

/// 获取院校详情，中文院校名走 URL 编码
pub async fn university_details(state: &AppState, name: &str) -> Result<University, ApiError> {
    let url = endpoint(&format!("/university_details/{}", urlencoding::encode(name)));

    let body = send_api_get_request(&state.client, &url).await?;
    ensure_success(&body)?;

    let entry = body.get("university").cloned().unwrap_or(Value::Null);
    University::from_entry(&entry)
        .ok_or_else(|| ApiError::Backend("后端未返回院校数据".to_string()))
}
