use anyhow::Result;
use tracing::info;

use crate::api;
use crate::app::prefs::{KEY_PROVINCE, KEY_SUBJECT};
use crate::app::presenter;
use crate::app::score::ValidationError;
use crate::app::state::AppState;

/// 查看院校详情，历史分数线优先展示上次选择的省份和科目
pub async fn run(state: &AppState, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingUniversity.into());
    }

    info!("获取院校详情: {}", name);
    let university = api::details::university_details(state, name).await?;

    let (province, subject) = {
        let prefs = state.prefs.read().await;
        (
            prefs.get(KEY_PROVINCE).map(str::to_string),
            prefs.get(KEY_SUBJECT).map(str::to_string),
        )
    };

    presenter::render_university_details(&university, province.as_deref(), subject.as_deref());
    Ok(())
}
