use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::app::metadata;

/// 省份条目，后端两种形态（对象或纯字符串）统一成 name + full_name
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProvinceInfo {
    pub name: String,
    pub full_name: String,
}

impl<'de> Deserialize<'de> for ProvinceInfo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Object {
                name: String,
                full_name: Option<String>,
            },
            Name(String),
        }

        let (name, full_name) = match Raw::deserialize(deserializer)? {
            Raw::Object { name, full_name } => (name, full_name),
            Raw::Name(name) => (name, None),
        };
        let full_name = full_name
            .filter(|f| !f.is_empty())
            .or_else(|| metadata::province_full_name(&name).map(str::to_string))
            .unwrap_or_else(|| name.clone());
        Ok(ProvinceInfo { name, full_name })
    }
}

/// 后端返回的分数分析，全部字段可缺省
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreAnalysis {
    pub position_description: Option<String>,
    /// 超越考生百分比
    pub beat_percentage: Option<f64>,
    /// 与一本线的分差，正数表示高出
    pub tier_difference: Option<f64>,
    /// 估算的省内排名
    pub estimated_rank: Option<String>,
}

impl ScoreAnalysis {
    /// 宽松解析：字段缺失或类型不符都按缺失处理
    pub fn from_value(value: &Value) -> ScoreAnalysis {
        let Some(obj) = value.as_object() else {
            return ScoreAnalysis::default();
        };
        ScoreAnalysis {
            position_description: first_text(obj, &["position_description"]),
            beat_percentage: number_of(obj.get("beat_percentage")),
            tier_difference: number_of(obj.get("tier_difference")),
            estimated_rank: first_text(obj, &["estimated_rank"]),
        }
    }
}

/// 历年录取分数线记录（院校详情里的历史数据）
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct AdmissionScoreRecord {
    pub year: String,
    pub province: String,
    pub subject: String,
    pub min_score: Option<String>,
    pub rank: Option<String>,
    pub enrollment: Option<String>,
    pub batch: Option<String>,
}

/// 招生专业信息
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Major {
    pub name: String,
    pub enrollment: Option<Value>,
    pub score_difference: Option<Value>,
    pub employment_rate: Option<Value>,
    pub description: Option<String>,
}

/// 就业信息
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Employment {
    pub employment_rate: Option<Value>,
    pub average_salary: Option<Value>,
    pub top_employers: Vec<String>,
    pub career_prospects: Option<String>,
}

/// 归一化后的院校记录
///
/// 后端的推荐条目和详情响应字段名并不统一，这里按旧前端的取值
/// 优先级统一成一个规范结构，展示层不再做任何字段适配。
#[derive(Debug, Clone, Default, Serialize)]
pub struct University {
    pub name: String,
    pub province: String,
    pub city: String,
    /// 办学层次（985/211/双一流等）
    pub tier: Option<String>,
    /// 院校类型（综合/理工/师范等）
    pub kind: Option<String>,
    pub establishment_year: Option<String>,
    pub is_double_first_class: bool,
    /// 排名展示文本
    pub ranking: String,
    /// 优势学科
    pub advantages: Vec<String>,
    pub min_score: Option<String>,
    pub avg_score: Option<String>,
    /// 录取概率描述
    pub probability: Option<String>,
    /// 后端标注的推荐类别（冲刺/稳妥/保底）
    pub category: Option<String>,
    /// 分数线为外省数据推算时的标记
    pub is_reference_data: bool,
    pub reference_province: Option<String>,
    pub motto: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub majors: Vec<Major>,
    pub employment: Option<Employment>,
    pub data_sources: Vec<String>,
    /// 历年录取分数线，按年份倒序
    pub admission_scores: Vec<AdmissionScoreRecord>,
}

impl University {
    /// 把后端条目归一化成统一记录，非对象条目返回 None
    ///
    /// 字段取值优先级与旧前端保持一致：
    /// - 名称：university_name，其次 name；
    /// - 详情字段：university_data 对象优先，否则取条目本身；
    /// - 排名：domestic(_rank) 优先于 qs_world(_rank) 优先于
    ///   times_world(_rank)，也接受纯字符串或纯数字；
    /// - 建校年份：establishment_year，其次 founded_year；
    /// - 优势学科：advantages，其次 key_disciplines。
    pub fn from_entry(entry: &Value) -> Option<University> {
        let obj = entry.as_object()?;
        let data = obj
            .get("university_data")
            .and_then(Value::as_object)
            .unwrap_or(obj);

        let name =
            first_text(obj, &["university_name", "name"]).unwrap_or_else(|| "未知院校".to_string());

        let location = data.get("location").and_then(Value::as_object);
        let province = location
            .and_then(|l| first_text(l, &["province"]))
            .or_else(|| first_text(data, &["province"]))
            .unwrap_or_else(|| "未知".to_string());
        let city = location
            .and_then(|l| first_text(l, &["city"]))
            .or_else(|| first_text(data, &["city"]))
            .unwrap_or_default();

        let mut data_sources = data
            .get("data_sources")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(text_of).collect::<Vec<_>>())
            .unwrap_or_default();
        if data_sources.is_empty() {
            if let Some(single) = first_text(data, &["data_source"]) {
                data_sources.push(single);
            }
        }

        Some(University {
            name,
            province,
            city,
            tier: first_text(data, &["category"]),
            kind: first_text(data, &["type"]),
            establishment_year: first_text(data, &["establishment_year", "founded_year"]),
            is_double_first_class: data
                .get("is_double_first_class")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            ranking: ranking_label(obj.get("ranking").or_else(|| data.get("ranking"))),
            advantages: first_list(data, &["advantages", "key_disciplines"]),
            min_score: text_opt(obj.get("min_score")),
            avg_score: text_opt(obj.get("avg_score")),
            probability: text_opt(obj.get("probability")),
            category: first_text(obj, &["category"]),
            is_reference_data: obj
                .get("is_reference_data")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            reference_province: first_text(obj, &["reference_province"]),
            motto: first_text(data, &["motto"]),
            website: first_text(data, &["website"]),
            description: first_text(data, &["description"]),
            majors: data
                .get("majors")
                .and_then(|v| serde_json::from_value(v.clone()).ok())
                .unwrap_or_default(),
            employment: data
                .get("employment")
                .and_then(|v| serde_json::from_value(v.clone()).ok()),
            data_sources,
            admission_scores: admission_history(
                obj.get("admission_scores")
                    .or_else(|| data.get("admission_scores")),
            ),
        })
    }
}

/// 搜索结果里的院校简要信息
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UniversityBrief {
    pub name: String,
    pub province: String,
    pub city: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub level: String,
    pub ranking: Value,
    pub description: String,
    pub is_double_first_class: bool,
    pub has_graduate_program: bool,
}

/// 分数线查询接口返回的单科成绩数据
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdmissionScores {
    pub min_score: Option<Value>,
    pub avg_score: Option<Value>,
    pub max_score: Option<Value>,
    pub rank: Option<Value>,
    pub batch: Option<Value>,
    pub enrollment: Option<Value>,
    pub major_scores: Vec<MajorScore>,
    pub data_source: Option<Value>,
    pub confidence: Option<f64>,
}

impl AdmissionScores {
    /// 与旧展示一致：有最低分才算有数据
    pub fn has_data(&self) -> bool {
        self.min_score.is_some()
    }
}

/// 专业分数线条目
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MajorScore {
    pub major_name: String,
    pub min_score: Option<Value>,
    pub avg_score: Option<Value>,
    pub enrollment: Option<Value>,
}

/// 分数线查询结果
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreLookup {
    pub scores: Option<AdmissionScores>,
    pub last_updated: Option<String>,
}

/// 数据同步接口返回的更新统计
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshStats {
    pub universities_updated: Option<i64>,
    pub scores_updated: Option<i64>,
    pub rankings_updated: Option<i64>,
}

/// 排名信息的展示文本
///
/// 对象形态按国内、QS、泰晤士的顺序取第一个可用排名，
/// 纯字符串原样展示，纯数字展示为"第 N 名"。
pub fn ranking_label(ranking: Option<&Value>) -> String {
    match ranking {
        Some(Value::Object(map)) => {
            if let Some(rank) = first_text(map, &["domestic_rank", "domestic"]) {
                format!("国内第{rank}名")
            } else if let Some(rank) = first_text(map, &["qs_world_rank", "qs_world"]) {
                format!("QS世界第{rank}名")
            } else if let Some(rank) = first_text(map, &["times_world_rank", "times_world"]) {
                format!("泰晤士第{rank}名")
            } else {
                "未排名".to_string()
            }
        }
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => format!("第{n}名"),
        _ => "未排名".to_string(),
    }
}

/// 历史分数线：对象取 values，数组直接用，缺少年份或省份的条目跳过
fn admission_history(value: Option<&Value>) -> Vec<AdmissionScoreRecord> {
    let items: Vec<&Value> = match value {
        Some(Value::Object(map)) => map.values().collect(),
        Some(Value::Array(list)) => list.iter().collect(),
        _ => Vec::new(),
    };

    let mut records = Vec::new();
    for item in items {
        let Some(obj) = item.as_object() else { continue };
        let (Some(year), Some(province)) = (
            first_text(obj, &["year"]),
            first_text(obj, &["province"]),
        ) else {
            continue;
        };
        records.push(AdmissionScoreRecord {
            year,
            province,
            subject: first_text(obj, &["subject"]).unwrap_or_default(),
            min_score: first_text(obj, &["min_score", "最低分"]),
            rank: first_text(obj, &["rank", "位次"]),
            enrollment: first_text(obj, &["enrollment", "招生人数"]),
            batch: first_text(obj, &["batch", "录取批次"]),
        });
    }
    records.sort_by(|a, b| b.year.cmp(&a.year));
    records
}

/// 字符串或数字统一转为文本，空字符串按缺失处理
pub fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub fn text_opt(value: Option<&Value>) -> Option<String> {
    value.and_then(text_of)
}

/// 按优先级取第一个能转成文本的字段
fn first_text(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| obj.get(*key).and_then(text_of))
}

/// 按优先级取第一个列表字段，单个字符串也接受
fn first_list(obj: &Map<String, Value>, keys: &[&str]) -> Vec<String> {
    for key in keys {
        match obj.get(*key) {
            Some(Value::Array(items)) => return items.iter().filter_map(text_of).collect(),
            Some(Value::String(s)) if !s.is_empty() => return vec![s.clone()],
            _ => {}
        }
    }
    Vec::new()
}

fn number_of(value: Option<&Value>) -> Option<f64> {
    value.and_then(|v| {
        v.as_f64()
            .or_else(|| v.as_str().and_then(|s| s.parse().ok()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_name_precedence() {
        let entry = json!({"university_name": "清华大学", "name": "清华"});
        let u = University::from_entry(&entry).unwrap();
        assert_eq!(u.name, "清华大学");

        let entry = json!({"name": "北京大学"});
        assert_eq!(University::from_entry(&entry).unwrap().name, "北京大学");

        let entry = json!({});
        assert_eq!(University::from_entry(&entry).unwrap().name, "未知院校");
    }

    #[test]
    fn test_university_data_supplies_detail_fields() {
        let entry = json!({
            "name": "山东大学",
            "min_score": 612,
            "category": "稳妥",
            "university_data": {
                "location": {"province": "山东", "city": "济南"},
                "category": "985",
                "type": "综合",
                "founded_year": 1901,
                "is_double_first_class": true,
                "key_disciplines": ["数学", "临床医学"]
            }
        });
        let u = University::from_entry(&entry).unwrap();
        assert_eq!(u.province, "山东");
        assert_eq!(u.city, "济南");
        assert_eq!(u.tier.as_deref(), Some("985"));
        assert_eq!(u.kind.as_deref(), Some("综合"));
        assert_eq!(u.establishment_year.as_deref(), Some("1901"));
        assert!(u.is_double_first_class);
        assert_eq!(u.advantages, vec!["数学", "临床医学"]);
        assert_eq!(u.min_score.as_deref(), Some("612"));
        assert_eq!(u.category.as_deref(), Some("稳妥"));
    }

    #[test]
    fn test_establishment_year_prefers_explicit_field() {
        let entry = json!({"name": "某大学", "establishment_year": 1952, "founded_year": 1960});
        let u = University::from_entry(&entry).unwrap();
        assert_eq!(u.establishment_year.as_deref(), Some("1952"));
    }

    #[test]
    fn test_ranking_label_preference_order() {
        assert_eq!(
            ranking_label(Some(&json!({"domestic_rank": 5, "qs_world": 30}))),
            "国内第5名"
        );
        assert_eq!(
            ranking_label(Some(&json!({"qs_world_rank": "30"}))),
            "QS世界第30名"
        );
        assert_eq!(
            ranking_label(Some(&json!({"times_world": 80}))),
            "泰晤士第80名"
        );
        assert_eq!(ranking_label(Some(&json!("区域一流"))), "区域一流");
        assert_eq!(ranking_label(Some(&json!(12))), "第12名");
        assert_eq!(ranking_label(Some(&json!({}))), "未排名");
        assert_eq!(ranking_label(None), "未排名");
    }

    #[test]
    fn test_advantages_accepts_single_string() {
        let entry = json!({"name": "某学院", "advantages": "会计学"});
        let u = University::from_entry(&entry).unwrap();
        assert_eq!(u.advantages, vec!["会计学"]);
    }

    #[test]
    fn test_admission_history_filters_and_sorts() {
        let entry = json!({
            "name": "某大学",
            "admission_scores": {
                "a": {"year": 2023, "province": "山东", "subject": "理科", "min_score": 598},
                "b": {"year": 2024, "province": "山东", "subject": "理科", "最低分": 605, "位次": 12000},
                "c": {"province": "山东"},
                "d": "乱数据"
            }
        });
        let u = University::from_entry(&entry).unwrap();
        assert_eq!(u.admission_scores.len(), 2);
        assert_eq!(u.admission_scores[0].year, "2024");
        assert_eq!(u.admission_scores[0].min_score.as_deref(), Some("605"));
        assert_eq!(u.admission_scores[0].rank.as_deref(), Some("12000"));
        assert_eq!(u.admission_scores[1].year, "2023");
    }

    #[test]
    fn test_from_entry_rejects_non_objects() {
        assert!(University::from_entry(&json!("清华大学")).is_none());
        assert!(University::from_entry(&json!(null)).is_none());
        assert!(University::from_entry(&json!([1, 2])).is_none());
    }

    #[test]
    fn test_province_info_two_shapes() {
        let list: Vec<ProvinceInfo> =
            serde_json::from_value(json!([{"name": "山东", "full_name": "山东省"}, "北京"])).unwrap();
        assert_eq!(list[0].name, "山东");
        assert_eq!(list[0].full_name, "山东省");
        assert_eq!(list[1].name, "北京");
        assert_eq!(list[1].full_name, "北京市");
    }

    #[test]
    fn test_score_analysis_lenient() {
        let analysis = ScoreAnalysis::from_value(&json!({
            "position_description": "中上水平",
            "beat_percentage": "78.5",
            "tier_difference": -12,
            "estimated_rank": 35000
        }));
        assert_eq!(analysis.position_description.as_deref(), Some("中上水平"));
        assert_eq!(analysis.beat_percentage, Some(78.5));
        assert_eq!(analysis.tier_difference, Some(-12.0));
        assert_eq!(analysis.estimated_rank.as_deref(), Some("35000"));

        assert_eq!(ScoreAnalysis::from_value(&json!("乱")), ScoreAnalysis::default());
    }
}
