use anyhow::Result;
use futures::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use crate::api;
use crate::app::classify::{self, RecommendationSet};
use crate::app::prefs::{KEY_PROVINCE, KEY_SUBJECT};
use crate::app::presenter;
use crate::app::score::{self, ScoreInput};
use crate::app::state::AppState;
use crate::app::workflow::scores::default_year;

/// 运行一次完整的推荐流程：本地校验 -> 请求推荐 -> 归类 -> 渲染
pub async fn run(
    state: &AppState,
    input: &ScoreInput,
    province: &str,
    preferences: &[String],
) -> Result<()> {
    // 本地同步校验，不通过就不会发出任何请求
    let total = score::validate_submission(input, province)?;

    info!(
        "🧮 总分 {} 分，省份 {}，科目 {}",
        total,
        province,
        input.track.subject_label()
    );

    let token = state.begin_request();
    let result =
        api::recommend::calculate_score(state, total, province, input.track, preferences).await?;

    if !state.is_current(token) {
        warn!("已有更新的查询动作，丢弃本次过期的推荐结果");
        return Ok(());
    }

    let set = classify::classify(result.recommendations.as_ref(), result.categorized.as_ref());
    info!(
        "✅ 推荐归类完成：冲刺 {} 所，稳妥 {} 所，保底 {} 所",
        set.stretch.len(),
        set.stable.len(),
        set.safety.len()
    );

    presenter::render_score_analysis(total, input.track, result.score_analysis.as_ref());
    presenter::render_recommendations(&set);

    {
        let mut prefs = state.prefs.write().await;
        prefs.set(KEY_PROVINCE, province);
        prefs.set(KEY_SUBJECT, input.track.subject_label());
    }

    prefetch_admission_scores(state, &set, province, input.track.subject_label()).await;

    Ok(())
}

/// 为排在前面的推荐院校并发预取录取分数线
///
/// 预取失败只记日志，不影响已经展示的推荐结果。
async fn prefetch_admission_scores(
    state: &AppState,
    set: &RecommendationSet,
    province: &str,
    subject: &str,
) {
    let year = default_year();
    let names: Vec<String> = set
        .all()
        .into_iter()
        .take(state.config.prefetch_count)
        .map(|u| u.name.clone())
        .collect();
    if names.is_empty() {
        return;
    }

    debug!("预取 {} 所院校在 {} 的录取分数线", names.len(), province);

    let lookups = stream::iter(names.into_iter().map(move |name| async move {
        let result = api::scores::scores_by_province(state, &name, province, subject, year).await;
        (name, result)
    }))
    .buffer_unordered(state.config.concurrency.max(1))
    .collect::<Vec<_>>()
    .await;

    for (name, result) in lookups {
        match result {
            Ok(lookup) => presenter::render_score_lookup(&name, province, subject, year, &lookup),
            Err(e) => warn!("预取 {} 的分数线失败: {}", name, e),
        }
    }
}
