use serde_json::Value;
use tracing::{debug, warn};

use crate::app::models::University;
use crate::app::types::Bucket;

/// 一次推荐请求归类后的三个类别列表
///
/// 每次成功响应整体替换，不做增量更新。
#[derive(Debug, Default, Clone)]
pub struct RecommendationSet {
    pub stretch: Vec<University>,
    pub stable: Vec<University>,
    pub safety: Vec<University>,
}

impl RecommendationSet {
    /// "全部推荐"视图：按 冲刺、稳妥、保底 的固定顺序拼接
    pub fn all(&self) -> Vec<&University> {
        self.stretch
            .iter()
            .chain(self.stable.iter())
            .chain(self.safety.iter())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.stretch.len() + self.stable.len() + self.safety.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn bucket(&self, bucket: Bucket) -> &[University] {
        match bucket {
            Bucket::Stretch => &self.stretch,
            Bucket::Stable => &self.stable,
            Bucket::Safety => &self.safety,
        }
    }

    fn bucket_mut(&mut self, bucket: Bucket) -> &mut Vec<University> {
        match bucket {
            Bucket::Stretch => &mut self.stretch,
            Bucket::Stable => &mut self.stable,
            Bucket::Safety => &mut self.safety,
        }
    }
}

/// 把后端返回的推荐数据归类到三个固定类别
///
/// 支持三种响应形态：
/// 1. recommendations 恰好有三个键：按类别键名直接取值，键名缺失的
///    类别为空（按键名匹配，不依赖键的出现顺序）；
/// 2. 键数不是三个：对键名做包含匹配，命中同一类别的键依次累加，
///    未命中任何类别的键忽略；
/// 3. 没有 recommendations 但有旧版 categorized 对象：取其
///    冲刺院校/稳妥院校/保底院校 子键。
///
/// 任何形态异常都不报错，最多得到三个空列表。
pub fn classify(recommendations: Option<&Value>, categorized: Option<&Value>) -> RecommendationSet {
    let mut set = RecommendationSet::default();
    let mut saw_input = false;

    if let Some(Value::Object(map)) = recommendations {
        saw_input = !map.is_empty();
        if map.len() == 3 {
            for bucket in Bucket::ALL {
                if let Some(value) = map.get(bucket.label()) {
                    set.bucket_mut(bucket).extend(parse_entries(value));
                }
            }
        } else {
            debug!("推荐数据有 {} 个键，退回包含匹配", map.len());
            for (key, value) in map {
                match Bucket::ALL.iter().find(|b| key.contains(b.label())) {
                    Some(bucket) => set.bucket_mut(*bucket).extend(parse_entries(value)),
                    None => debug!("键 '{}' 未命中任何类别，忽略", key),
                }
            }
        }
    } else if let Some(Value::Object(map)) = categorized {
        saw_input = !map.is_empty();
        for bucket in Bucket::ALL {
            if let Some(value) = map.get(bucket.legacy_label()) {
                set.bucket_mut(bucket).extend(parse_entries(value));
            }
        }
    }

    if saw_input && set.is_empty() {
        warn!("推荐数据一所院校都没有归入任何类别，后端响应结构可能变了");
    } else if saw_input && set.stable.is_empty() {
        warn!("稳妥类别为空但其他类别有数据，分类结果可能有误");
    }

    set
}

/// 宽松解析类别值：非数组按空处理，解析失败的条目丢弃
fn parse_entries(value: &Value) -> Vec<University> {
    let Some(items) = value.as_array() else {
        debug!("类别值不是数组，按空列表处理");
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| {
            let parsed = University::from_entry(item);
            if parsed.is_none() {
                debug!("跳过无法解析的推荐条目");
            }
            parsed
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn uni(name: &str) -> Value {
        json!({"name": name})
    }

    #[test]
    fn test_three_labeled_keys_map_directly() {
        let recommendations = json!({
            "冲刺": [uni("A"), uni("B")],
            "稳妥": [uni("C")],
            "保底": [uni("D"), uni("E"), uni("F")],
        });
        let set = classify(Some(&recommendations), None);
        assert_eq!(
            set.stretch.iter().map(|u| &u.name).collect::<Vec<_>>(),
            ["A", "B"]
        );
        assert_eq!(set.stable.len(), 1);
        assert_eq!(set.stable[0].name, "C");
        assert_eq!(
            set.safety.iter().map(|u| &u.name).collect::<Vec<_>>(),
            ["D", "E", "F"]
        );
    }

    #[test]
    fn test_all_view_is_fixed_order_concatenation() {
        let recommendations = json!({
            "保底": [uni("D")],
            "冲刺": [uni("A")],
            "稳妥": [uni("B"), uni("C")],
        });
        let set = classify(Some(&recommendations), None);
        let all: Vec<&str> = set.all().iter().map(|u| u.name.as_str()).collect();
        assert_eq!(all, ["A", "B", "C", "D"]);
        assert_eq!(set.all().len(), set.len());
    }

    #[test]
    fn test_substring_fallback_accumulates() {
        // 四个键触发包含匹配；命中同一类别的键依次累加
        let recommendations = json!({
            "冲刺院校推荐": [uni("A")],
            "重点冲刺": [uni("B")],
            "稳妥选择": [uni("C")],
            "其他": [uni("X")],
        });
        let set = classify(Some(&recommendations), None);
        assert_eq!(set.stretch.len(), 2);
        assert_eq!(set.stable.len(), 1);
        assert!(set.safety.is_empty());
    }

    #[test]
    fn test_legacy_categorized_shape() {
        let categorized = json!({
            "冲刺院校": [uni("A")],
            "稳妥院校": [uni("B")],
            "保底院校": [uni("C")],
        });
        let set = classify(None, Some(&categorized));
        assert_eq!(set.stretch[0].name, "A");
        assert_eq!(set.stable[0].name, "B");
        assert_eq!(set.safety[0].name, "C");
    }

    #[test]
    fn test_malformed_input_yields_empty_buckets() {
        // 全部形态异常都不 panic，只得到空类别
        let set = classify(Some(&json!({})), None);
        assert!(set.is_empty());

        let set = classify(Some(&json!({"冲刺": "不是数组", "稳妥": 3, "保底": null})), None);
        assert!(set.is_empty());

        let set = classify(Some(&json!([1, 2, 3])), None);
        assert!(set.is_empty());

        let set = classify(None, None);
        assert!(set.is_empty());

        let set = classify(Some(&json!(null)), Some(&json!(null)));
        assert!(set.is_empty());
    }

    #[test]
    fn test_three_keys_without_labels_yield_empty() {
        // 恰好三个键但键名对不上：按键名匹配原则不猜位置
        let recommendations = json!({
            "a": [uni("A")],
            "b": [uni("B")],
            "c": [uni("C")],
        });
        let set = classify(Some(&recommendations), None);
        assert!(set.is_empty());
    }

    #[test]
    fn test_unparsable_entries_are_dropped() {
        let recommendations = json!({
            "冲刺": [uni("A"), "坏条目", 42],
            "稳妥": [uni("B")],
            "保底": [],
        });
        let set = classify(Some(&recommendations), None);
        assert_eq!(set.stretch.len(), 1);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_recommendations_take_precedence_over_categorized() {
        let recommendations = json!({"冲刺": [uni("新")], "稳妥": [], "保底": []});
        let categorized = json!({"冲刺院校": [uni("旧")]});
        let set = classify(Some(&recommendations), Some(&categorized));
        assert_eq!(set.stretch[0].name, "新");
        assert_eq!(set.len(), 1);
    }
}
