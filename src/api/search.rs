use serde_json::Value;

use crate::api::{ApiError, endpoint, ensure_success, send_api_get_request};
use crate::app::models::UniversityBrief;
use crate::app::state::AppState;

/// 按条件搜索院校
///
/// # 参数
/// * `query` - 关键词，可空
/// * `province` - 省份过滤，可空
/// * `kind` - 院校类型过滤，可空
pub async fn search_universities(
    state: &AppState,
    query: Option<&str>,
    province: Option<&str>,
    kind: Option<&str>,
) -> Result<Vec<UniversityBrief>, ApiError> {
    let query_string = build_query(query, province, kind);
    let url = if query_string.is_empty() {
        endpoint("/search_universities")
    } else {
        format!("{}?{}", endpoint("/search_universities"), query_string)
    };

    let body = send_api_get_request(&state.client, &url).await?;
    ensure_success(&body)?;

    let results = body.get("results").cloned().unwrap_or(Value::Null);
    Ok(serde_json::from_value(results).unwrap_or_default())
}

/// 只带非空参数，值做 URL 编码
fn build_query(query: Option<&str>, province: Option<&str>, kind: Option<&str>) -> String {
    let mut params = Vec::new();
    for (key, value) in [("q", query), ("province", province), ("type", kind)] {
        if let Some(v) = value.filter(|s| !s.is_empty()) {
            params.push(format!("{}={}", key, urlencoding::encode(v)));
        }
    }
    params.join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_query_skips_empty_params() {
        assert_eq!(build_query(None, None, None), "");
        assert_eq!(build_query(Some(""), None, None), "");
        assert_eq!(
            build_query(Some("大学"), Some("山东"), None),
            format!(
                "q={}&province={}",
                urlencoding::encode("大学"),
                urlencoding::encode("山东")
            )
        );
        assert_eq!(build_query(None, None, Some("综合")), format!("type={}", urlencoding::encode("综合")));
    }
}
