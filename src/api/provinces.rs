use serde_json::Value;
use tracing::warn;

use crate::api::{ApiError, endpoint, ensure_success, send_api_get_request};
use crate::app::metadata::fallback_provinces;
use crate::app::models::ProvinceInfo;
use crate::app::state::AppState;

/// 获取省份目录，接口不可用时退回内置目录
pub async fn fetch_provinces(state: &AppState) -> Vec<ProvinceInfo> {
    match try_fetch(state).await {
        Ok(list) if !list.is_empty() => list,
        Ok(_) => {
            warn!("省份接口返回空列表，使用内置目录");
            fallback_provinces()
        }
        Err(e) => {
            warn!("加载省份数据失败：{}，使用内置目录", e);
            fallback_provinces()
        }
    }
}

async fn try_fetch(state: &AppState) -> Result<Vec<ProvinceInfo>, ApiError> {
    let body = send_api_get_request(&state.client, &endpoint("/api/provinces")).await?;
    ensure_success(&body)?;

    let provinces = body.get("provinces").cloned().unwrap_or(Value::Null);
    Ok(serde_json::from_value(provinces).unwrap_or_default())
}
