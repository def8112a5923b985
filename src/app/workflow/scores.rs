use anyhow::Result;
use chrono::{Datelike, Local};
use tracing::{info, warn};

use crate::api;
use crate::app::prefs::{KEY_PROVINCE, KEY_SUBJECT, KEY_YEAR};
use crate::app::presenter;
use crate::app::score::ValidationError;
use crate::app::state::AppState;
use crate::app::types::Track;

/// 默认查询年份：当年分数线通常尚未公布，取前一年
pub fn default_year() -> i32 {
    Local::now().year() - 1
}

/// 可选年份窗口：默认年份起往前五年
pub fn year_options() -> Vec<i32> {
    let latest = default_year();
    (0..5).map(|offset| latest - offset).collect()
}

/// 查询录取分数线
///
/// 省份/科目/年份缺省时依次回退：命令行参数 -> 上次选择 -> 内置默认
/// （科目默认理科，年份默认前一年）。省份连上次选择都没有时本地报错。
pub async fn run(
    state: &AppState,
    university: &str,
    province: Option<&str>,
    subject: Option<&str>,
    year: Option<i32>,
) -> Result<()> {
    if university.trim().is_empty() {
        return Err(ValidationError::MissingUniversity.into());
    }

    let (saved_province, saved_subject, saved_year) = {
        let prefs = state.prefs.read().await;
        (
            prefs.get(KEY_PROVINCE).map(str::to_string),
            prefs.get(KEY_SUBJECT).map(str::to_string),
            prefs.get(KEY_YEAR).and_then(|y| y.parse::<i32>().ok()),
        )
    };

    let province = province
        .map(str::to_string)
        .filter(|p| !p.trim().is_empty())
        .or(saved_province)
        .ok_or(ValidationError::MissingProvince)?;
    let subject = subject
        .map(str::to_string)
        .filter(|s| !s.trim().is_empty())
        .or(saved_subject)
        .unwrap_or_else(|| "理科".to_string());
    let year = year.or(saved_year).unwrap_or_else(default_year);

    if Track::from_subject_label(&subject).is_none() {
        warn!("科目类型 '{}' 不是 理科/文科，按原样发给后端", subject);
    }

    info!("查询 {} 在 {} {} 年 {} 的录取分数线", university, province, year, subject);

    let token = state.begin_request();
    let lookup = api::scores::scores_by_province(state, university, &province, &subject, year).await?;

    if !state.is_current(token) {
        warn!("已有更新的查询动作，丢弃本次过期的分数线结果");
        return Ok(());
    }

    {
        let mut prefs = state.prefs.write().await;
        prefs.set(KEY_PROVINCE, &province);
        prefs.set(KEY_SUBJECT, &subject);
        prefs.set(KEY_YEAR, &year.to_string());
    }

    presenter::render_score_lookup(university, &province, &subject, year, &lookup);
    Ok(())
}
