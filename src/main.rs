mod api;
mod app;
mod config;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use app::score::{ScoreInput, parse_score};
use app::state::AppState;
use app::types::Track;

#[derive(Parser, Debug)]
#[command(
    name = "zhiyuan",
    about = "高考志愿填报助手：分数分析、院校推荐与录取分数线查询",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 输入各科成绩，获取分数分析与院校推荐
    Recommend(RecommendArgs),
    /// 按关键词/省份/类型搜索院校
    Search(SearchArgs),
    /// 查看院校详情
    Detail(DetailArgs),
    /// 查询院校在指定省份的录取分数线
    Scores(ScoresArgs),
    /// 列出可选省份
    Provinces,
    /// 触发后端数据同步
    Sync,
    /// 查看数据源状态
    Sources,
}

#[derive(Args, Debug)]
struct RecommendArgs {
    /// 语文成绩
    #[arg(long, default_value = "")]
    chinese: String,
    /// 数学成绩
    #[arg(long, default_value = "")]
    math: String,
    /// 英语成绩
    #[arg(long, default_value = "")]
    english: String,
    /// 科目类型
    #[arg(long, value_enum, default_value = "science")]
    track: Track,
    /// 物理成绩（理科）
    #[arg(long, default_value = "")]
    physics: String,
    /// 化学成绩（理科）
    #[arg(long, default_value = "")]
    chemistry: String,
    /// 生物成绩（理科）
    #[arg(long, default_value = "")]
    biology: String,
    /// 政治成绩（文科）
    #[arg(long, default_value = "")]
    politics: String,
    /// 历史成绩（文科）
    #[arg(long, default_value = "")]
    history: String,
    /// 地理成绩（文科）
    #[arg(long, default_value = "")]
    geography: String,
    /// 所在省份
    #[arg(long, default_value = "")]
    province: String,
    /// 志愿偏好，可多次指定
    #[arg(long = "prefer")]
    preferences: Vec<String>,
}

impl RecommendArgs {
    /// 按所选科目类型收集六门成绩，空白或非法输入按 0 处理
    fn score_input(&self) -> ScoreInput {
        let electives = match self.track {
            Track::Science => [
                parse_score(&self.physics),
                parse_score(&self.chemistry),
                parse_score(&self.biology),
            ],
            Track::LiberalArts => [
                parse_score(&self.politics),
                parse_score(&self.history),
                parse_score(&self.geography),
            ],
        };
        ScoreInput {
            chinese: parse_score(&self.chinese),
            math: parse_score(&self.math),
            english: parse_score(&self.english),
            track: self.track,
            electives,
        }
    }
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// 搜索关键词
    #[arg(short, long)]
    query: Option<String>,
    /// 省份过滤
    #[arg(long)]
    province: Option<String>,
    /// 院校类型过滤
    #[arg(long = "type")]
    kind: Option<String>,
}

#[derive(Args, Debug)]
struct DetailArgs {
    /// 院校名称
    university: String,
}

#[derive(Args, Debug)]
struct ScoresArgs {
    /// 院校名称
    university: String,
    /// 查询省份，缺省用上次选择
    #[arg(long)]
    province: Option<String>,
    /// 科目类型（理科/文科），缺省用上次选择
    #[arg(long)]
    subject: Option<String>,
    /// 查询年份，缺省用上次选择或前一年
    #[arg(long)]
    year: Option<i32>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    app::logger::init();

    let state = AppState::new()?;

    match cli.command {
        Command::Recommend(args) => {
            let input = args.score_input();
            app::workflow::recommend::run(&state, &input, &args.province, &args.preferences).await?;
        }
        Command::Search(args) => {
            app::workflow::search::run(
                &state,
                args.query.as_deref(),
                args.province.as_deref(),
                args.kind.as_deref(),
            )
            .await?;
        }
        Command::Detail(args) => {
            app::workflow::details::run(&state, &args.university).await?;
        }
        Command::Scores(args) => {
            app::workflow::scores::run(
                &state,
                &args.university,
                args.province.as_deref(),
                args.subject.as_deref(),
                args.year,
            )
            .await?;
        }
        Command::Provinces => {
            app::workflow::provinces::run(&state).await?;
        }
        Command::Sync => {
            app::workflow::sync::run_refresh(&state).await?;
        }
        Command::Sources => {
            app::workflow::sync::run_sources(&state).await?;
        }
    }

    Ok(())
}
