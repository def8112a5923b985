use serde_json::{Value, json};

use crate::api::{ApiError, endpoint, ensure_success, send_api_request};
use crate::app::models::ScoreLookup;
use crate::app::state::AppState;

/// 查询院校在指定省份/科目/年份的录取分数线
pub async fn scores_by_province(
    state: &AppState,
    university: &str,
    province: &str,
    subject: &str,
    year: i32,
) -> Result<ScoreLookup, ApiError> {
    let url = endpoint(&format!(
        "/api/university_scores_by_province/{}",
        urlencoding::encode(university)
    ));
    let payload = json!({
        "province": province,
        "subject": subject,
        "year": year,
    });

    let body = send_api_request(&state.client, &url, &payload).await?;
    ensure_success(&body)?;

    let data = body.get("data").cloned().unwrap_or(Value::Null);
    Ok(serde_json::from_value(data).unwrap_or_default())
}
