mod get_request;
mod send_request;

pub mod admin;
pub mod details;
pub mod provinces;
pub mod recommend;
pub mod scores;
pub mod search;

use serde_json::Value;
use thiserror::Error;

pub use get_request::send_api_get_request;
pub use send_request::send_api_request;

/// 与后端交互的错误分类
#[derive(Debug, Error)]
pub enum ApiError {
    /// 后端明确返回失败，错误文本原样透出给用户
    #[error("{0}")]
    Backend(String),
    /// 网络层失败（连接、超时、HTTP 状态异常）
    #[error("网络错误，请稍后重试：{0}")]
    Transport(#[from] reqwest::Error),
    /// 响应不是预期的 JSON 结构
    #[error("响应解析失败：{0}")]
    Decode(#[from] serde_json::Error),
}

/// 校验响应信封：success 不为 true 时取出后端错误文本
pub(crate) fn ensure_success(body: &Value) -> Result<(), ApiError> {
    let success = body.get("success").and_then(Value::as_bool).unwrap_or(false);
    if success {
        Ok(())
    } else {
        let message = body
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("未知错误")
            .to_string();
        Err(ApiError::Backend(message))
    }
}

/// 拼接后端接口地址
pub(crate) fn endpoint(path: &str) -> String {
    let base = crate::config::get().api_base_url.trim_end_matches('/');
    format!("{}{}", base, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ensure_success() {
        assert!(ensure_success(&json!({"success": true})).is_ok());

        let err = ensure_success(&json!({"success": false, "error": "分数超出范围"})).unwrap_err();
        assert_eq!(err.to_string(), "分数超出范围");

        // success 缺失或 error 缺失都有兜底文本
        let err = ensure_success(&json!({})).unwrap_err();
        assert_eq!(err.to_string(), "未知错误");
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let url = endpoint("/calculate_score");
        assert!(url.ends_with("/calculate_score"));
        assert!(!url.contains("//calculate_score"));
    }
}
