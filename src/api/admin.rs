use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::api::{ApiError, endpoint, ensure_success, send_api_get_request, send_api_request};
use crate::app::models::RefreshStats;
use crate::app::state::AppState;

/// 触发后端数据同步
pub async fn refresh_data(state: &AppState) -> Result<RefreshStats, ApiError> {
    let payload = Value::Object(Map::new());
    let body = send_api_request(&state.client, &endpoint("/admin/refresh_data"), &payload).await?;
    ensure_success(&body)?;

    let results = body.get("results").cloned().unwrap_or(Value::Null);
    Ok(serde_json::from_value(results).unwrap_or_default())
}

/// 查询各数据源的可用状态
pub async fn data_sources(state: &AppState) -> Result<BTreeMap<String, bool>, ApiError> {
    let body = send_api_get_request(&state.client, &endpoint("/admin/data_sources")).await?;
    ensure_success(&body)?;

    let data = body.get("data").cloned().unwrap_or(Value::Null);
    Ok(serde_json::from_value(data).unwrap_or_default())
}
