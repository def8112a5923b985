use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::api::{ApiError, endpoint, ensure_success, send_api_request};
use crate::app::models::ScoreAnalysis;
use crate::app::state::AppState;
use crate::app::types::Track;

/// POST /calculate_score 的请求体
#[derive(Debug, Serialize)]
struct CalculateRequest<'a> {
    score: f64,
    province: &'a str,
    subject: &'a str,
    preferences: &'a [String],
}

/// 推荐接口的有效载荷
///
/// recommendations/categorized 保持原始 JSON，由归类器统一处理。
#[derive(Debug, Default)]
pub struct CalculateResult {
    pub recommendations: Option<Value>,
    pub categorized: Option<Value>,
    pub score_analysis: Option<ScoreAnalysis>,
}

/// 提交总分与偏好，获取院校推荐和分数分析
pub async fn calculate_score(
    state: &AppState,
    score: f64,
    province: &str,
    track: Track,
    preferences: &[String],
) -> Result<CalculateResult, ApiError> {
    let request = CalculateRequest {
        score,
        province,
        subject: track.subject_label(),
        preferences,
    };
    let payload = serde_json::to_value(&request)?;

    let body = send_api_request(&state.client, &endpoint("/calculate_score"), &payload).await?;
    ensure_success(&body)?;

    info!("推荐接口返回成功");

    let score_analysis = body
        .get("score_analysis")
        .filter(|v| !v.is_null())
        .map(ScoreAnalysis::from_value);

    Ok(CalculateResult {
        recommendations: body.get("recommendations").cloned(),
        categorized: body.get("categorized").cloned(),
        score_analysis,
    })
}
