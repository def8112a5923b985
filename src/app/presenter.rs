use std::collections::BTreeMap;

use serde_json::Value;

use crate::app::classify::RecommendationSet;
use crate::app::models::{
    self, AdmissionScoreRecord, ProvinceInfo, RefreshStats, ScoreAnalysis, ScoreLookup,
    University, UniversityBrief,
};
use crate::app::types::{Bucket, Track};

// 纯展示层：只把归一化后的数据排版成终端文本，不做任何业务判断。

pub fn render_score_analysis(total: f64, track: Track, analysis: Option<&ScoreAnalysis>) {
    println!();
    println!("========== 分数分析 ==========");
    println!("您的高考总分：{} 分（{}）", total, track.subject_label());

    let Some(analysis) = analysis else {
        println!("分数水平：计算中...");
        return;
    };

    if let Some(description) = &analysis.position_description {
        println!("分数水平：{}", description);
    }
    println!("排名百分位：超越{}%考生", analysis.beat_percentage.unwrap_or(0.0));

    let tier_diff = analysis.tier_difference.unwrap_or(0.0);
    if tier_diff > 0.0 {
        println!("一本线差距：高出{}分", tier_diff);
    } else if tier_diff < 0.0 {
        println!("一本线差距：低于{}分", tier_diff.abs());
    } else {
        println!("一本线差距：刚好达线");
    }

    if let Some(rank) = &analysis.estimated_rank {
        println!("省内排名：省内约第{}名", rank);
    }
}

pub fn render_recommendations(set: &RecommendationSet) {
    println!();
    println!("========== 院校推荐（共 {} 所）==========", set.len());
    for bucket in Bucket::ALL {
        let universities = set.bucket(bucket);
        println!();
        println!("---- {}院校（{} 所）----", bucket.label(), universities.len());
        if universities.is_empty() {
            println!("  暂无符合条件的院校推荐");
            continue;
        }
        for university in universities {
            render_card(university);
        }
    }
}

fn render_card(u: &University) {
    let category = u.category.as_deref().unwrap_or("推荐");
    let probability = u.probability.as_deref().unwrap_or("未知");
    println!("  ◆ {} [{}] 录取概率: {}", u.name, category, probability);

    let mut info = vec![format!("{} {}", u.province, u.city).trim().to_string()];
    if let Some(kind) = &u.kind {
        info.push(kind.clone());
    }
    if let Some(tier) = &u.tier {
        info.push(tier.clone());
    }
    info.push(format!("排名: {}", u.ranking));
    if let Some(year) = &u.establishment_year {
        info.push(format!("建校: {}年", year));
    }
    if u.is_double_first_class {
        info.push("双一流".to_string());
    }
    println!("    {}", info.join(" | "));

    println!(
        "    最低分: {}分  平均分: {}分",
        u.min_score.as_deref().unwrap_or("未知"),
        u.avg_score.as_deref().unwrap_or("未知")
    );

    if !u.advantages.is_empty() {
        println!("    优势学科: {}", u.advantages.join("、"));
    }

    if u.is_reference_data {
        if let Some(reference) = &u.reference_province {
            println!("    （基于{}省数据推算，本省数据暂缺）", reference);
        }
    }
}

pub fn render_search_results(results: &[UniversityBrief]) {
    println!();
    if results.is_empty() {
        println!("未找到符合条件的院校");
        return;
    }
    println!("========== 搜索结果（{} 所）==========", results.len());
    for item in results {
        let mut badges = Vec::new();
        if item.is_double_first_class {
            badges.push("双一流");
        }
        if item.has_graduate_program {
            badges.push("研究生");
        }
        let badge_text = if badges.is_empty() {
            String::new()
        } else {
            format!(" [{}]", badges.join("/"))
        };
        println!("  ◆ {}{}", item.name, badge_text);
        println!(
            "    {} {} | {} | {} | 排名:{}",
            item.province,
            item.city,
            item.kind,
            item.level,
            models::text_of(&item.ranking).unwrap_or_else(|| "未知".to_string())
        );
        if !item.description.is_empty() {
            println!("    {}", item.description);
        }
    }
}

pub fn render_university_details(u: &University, user_province: Option<&str>, user_subject: Option<&str>) {
    println!();
    println!("========== {} ==========", u.name);

    println!("所在地区：{} {}", u.province, u.city);
    println!("院校类型：{}", u.kind.as_deref().unwrap_or("未知"));
    println!("办学层次：{}", u.tier.as_deref().unwrap_or("未知"));
    println!(
        "建校时间：{}",
        u.establishment_year
            .as_deref()
            .map(|y| format!("{}年", y))
            .unwrap_or_else(|| "未知".to_string())
    );
    println!("全国排名：{}", u.ranking);
    println!("是否双一流：{}", if u.is_double_first_class { "是" } else { "否" });
    if let Some(motto) = &u.motto {
        println!("校训：{}", motto);
    }
    if let Some(website) = &u.website {
        println!("官方网站：{}", website);
    }

    render_admission_history(&u.admission_scores, user_province, user_subject);

    if let Some(employment) = &u.employment {
        println!();
        println!("---- 就业信息 ----");
        if let Some(rate) = &employment.employment_rate {
            println!("就业率：{}%", text_or(rate, "未知"));
        }
        if let Some(salary) = &employment.average_salary {
            println!("平均薪资：{}元/月", text_or(salary, "未知"));
        }
        if !employment.top_employers.is_empty() {
            println!("主要雇主：{}", employment.top_employers.join("、"));
        }
        if let Some(prospects) = &employment.career_prospects {
            println!("就业前景：{}", prospects);
        }
    }

    println!();
    println!("---- 招生专业信息 ----");
    if u.majors.is_empty() {
        println!("暂无专业信息");
    } else {
        for major in &u.majors {
            let mut details = Vec::new();
            if let Some(enrollment) = &major.enrollment {
                details.push(format!("招生: {}人", text_or(enrollment, "未知")));
            }
            if let Some(diff) = &major.score_difference {
                details.push(format!("分差: +{}分", text_or(diff, "0")));
            }
            if let Some(rate) = &major.employment_rate {
                details.push(format!("就业率: {}%", text_or(rate, "未知")));
            }
            if details.is_empty() {
                println!("  {}", major.name);
            } else {
                println!("  {}  {}", major.name, details.join(" | "));
            }
            if let Some(description) = &major.description {
                println!("    {}", description);
            }
        }
    }

    if !u.advantages.is_empty() {
        println!();
        println!("优势学科：{}", u.advantages.join("、"));
    }

    if let Some(description) = &u.description {
        println!();
        println!("{}", description);
    }

    let source = if u.data_sources.is_empty() {
        "模拟数据".to_string()
    } else {
        u.data_sources.join(", ")
    };
    println!();
    println!("数据来源: {}", source);
}

/// 历史分数线：优先展示用户省份，本省缺数据时展示第一个省份作参考
fn render_admission_history(
    records: &[AdmissionScoreRecord],
    user_province: Option<&str>,
    user_subject: Option<&str>,
) {
    println!();
    println!("---- 录取分数线 ----");
    if records.is_empty() {
        println!("暂无录取分数线数据");
        return;
    }

    let mut provinces: Vec<&str> = Vec::new();
    for record in records {
        if !provinces.contains(&record.province.as_str()) {
            provinces.push(&record.province);
        }
    }

    let (shown, is_user_province) = match user_province.filter(|p| provinces.contains(p)) {
        Some(province) => (province, true),
        None => (provinces[0], false),
    };
    if !is_user_province {
        println!("注意：本省数据暂缺，显示{}数据作为参考", shown);
    }

    let mut shown_records: Vec<&AdmissionScoreRecord> =
        records.iter().filter(|r| r.province == shown).collect();
    // 年份倒序，用户科目排前
    shown_records.sort_by(|a, b| {
        b.year.cmp(&a.year).then_with(|| {
            let rank = |subject: &str| u8::from(user_subject != Some(subject));
            rank(&a.subject).cmp(&rank(&b.subject)).then_with(|| a.subject.cmp(&b.subject))
        })
    });

    for record in shown_records {
        let mut extras = Vec::new();
        if let Some(rank) = &record.rank {
            extras.push(format!("位次: {}", rank));
        }
        if let Some(enrollment) = &record.enrollment {
            extras.push(format!("招生: {}人", enrollment));
        }
        if let Some(batch) = &record.batch {
            extras.push(format!("批次: {}", batch));
        }
        println!(
            "  {}年{}：{}分{}",
            record.year,
            record.subject,
            record.min_score.as_deref().unwrap_or("暂无"),
            if extras.is_empty() {
                String::new()
            } else {
                format!("（{}）", extras.join("，"))
            }
        );
    }
}

pub fn render_score_lookup(
    university: &str,
    province: &str,
    subject: &str,
    year: i32,
    lookup: &ScoreLookup,
) {
    println!();
    let Some(scores) = lookup.scores.as_ref().filter(|s| s.has_data()) else {
        println!(
            "暂无{}在{}{}年{}的录取分数线数据",
            university, province, year, subject
        );
        return;
    };

    println!("---- {} · {} · {} · {}年 ----", university, province, subject, year);
    println!(
        "最低分: {}分  平均分: {}分  最高分: {}分  位次: {}",
        opt_text(&scores.min_score),
        opt_text(&scores.avg_score),
        opt_text(&scores.max_score),
        opt_text(&scores.rank)
    );
    if let Some(batch) = &scores.batch {
        println!("录取批次：{}", text_or(batch, "未知"));
    }
    if let Some(enrollment) = &scores.enrollment {
        println!("招生人数：{}人", text_or(enrollment, "未知"));
    }

    if !scores.major_scores.is_empty() {
        println!("专业分数线：");
        for major in &scores.major_scores {
            let mut parts = vec![format!("最低分：{}分", opt_text(&major.min_score))];
            if let Some(avg) = &major.avg_score {
                parts.push(format!("平均分：{}分", text_or(avg, "暂无")));
            }
            if let Some(enrollment) = &major.enrollment {
                parts.push(format!("招生：{}人", text_or(enrollment, "暂无")));
            }
            println!("  {}  {}", major.major_name, parts.join("  "));
        }
    }

    let confidence = (scores.confidence.unwrap_or(0.8) * 100.0).round();
    println!(
        "数据来源：{} | 可信度：{}% | 更新时间：{}",
        scores
            .data_source
            .as_ref()
            .and_then(models::text_of)
            .unwrap_or_else(|| "AI实时获取".to_string()),
        confidence,
        lookup.last_updated.as_deref().unwrap_or("刚刚")
    );
}

pub fn render_provinces(provinces: &[ProvinceInfo]) {
    println!();
    println!("========== 可选省份（{} 个）==========", provinces.len());
    for province in provinces {
        println!("  {}（{}）", province.name, province.full_name);
    }
}

pub fn render_refresh_stats(stats: &RefreshStats) {
    println!();
    println!("数据同步完成：");
    if let Some(count) = stats.universities_updated {
        println!("  • 院校数据: {}所", count);
    }
    if let Some(count) = stats.scores_updated {
        println!("  • 分数线数据: {}条", count);
    }
    if let Some(count) = stats.rankings_updated {
        println!("  • 排名数据: {}所", count);
    }
}

pub fn render_data_sources(sources: &BTreeMap<String, bool>) {
    println!();
    if sources.is_empty() {
        println!("未获取到数据源状态");
        return;
    }
    println!("========== 数据源状态 ==========");
    for (name, active) in sources {
        println!("  {}: {}", name, if *active { "可用" } else { "不可用" });
    }
}

fn opt_text(value: &Option<Value>) -> String {
    value
        .as_ref()
        .and_then(models::text_of)
        .unwrap_or_else(|| "暂无".to_string())
}

fn text_or(value: &Value, fallback: &str) -> String {
    models::text_of(value).unwrap_or_else(|| fallback.to_string())
}
