use anyhow::Result;

use crate::api;
use crate::app::presenter;
use crate::app::state::AppState;

/// 列出可选省份目录（接口不可用时自动退回内置目录）
pub async fn run(state: &AppState) -> Result<()> {
    let provinces = api::provinces::fetch_provinces(state).await;
    presenter::render_provinces(&provinces);
    Ok(())
}
