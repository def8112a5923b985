use anyhow::Result;
use tracing::info;

use crate::api;
use crate::app::presenter;
use crate::app::state::AppState;

/// 搜索院校并渲染结果列表
pub async fn run(
    state: &AppState,
    query: Option<&str>,
    province: Option<&str>,
    kind: Option<&str>,
) -> Result<()> {
    let results = api::search::search_universities(state, query, province, kind).await?;
    info!("搜索到 {} 所院校", results.len());
    presenter::render_search_results(&results);
    Ok(())
}
