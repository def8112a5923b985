use phf::phf_map;

use crate::app::models::ProvinceInfo;

// 省份映射（简称 -> 全称），省份接口不可用时作为兜底目录
static PROVINCE_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "北京" => "北京市",
    "天津" => "天津市",
    "河北" => "河北省",
    "山西" => "山西省",
    "内蒙古" => "内蒙古自治区",
    "辽宁" => "辽宁省",
    "吉林" => "吉林省",
    "黑龙江" => "黑龙江省",
    "上海" => "上海市",
    "江苏" => "江苏省",
    "浙江" => "浙江省",
    "安徽" => "安徽省",
    "福建" => "福建省",
    "江西" => "江西省",
    "山东" => "山东省",
    "河南" => "河南省",
    "湖北" => "湖北省",
    "湖南" => "湖南省",
    "广东" => "广东省",
    "广西" => "广西壮族自治区",
    "海南" => "海南省",
    "重庆" => "重庆市",
    "四川" => "四川省",
    "贵州" => "贵州省",
    "云南" => "云南省",
    "西藏" => "西藏自治区",
    "陕西" => "陕西省",
    "甘肃" => "甘肃省",
    "青海" => "青海省",
    "宁夏" => "宁夏回族自治区",
    "新疆" => "新疆维吾尔自治区",
};

// 兜底目录的展示顺序
static PROVINCE_ORDER: [&str; 31] = [
    "北京", "天津", "河北", "山西", "内蒙古", "辽宁", "吉林", "黑龙江", "上海", "江苏", "浙江",
    "安徽", "福建", "江西", "山东", "河南", "湖北", "湖南", "广东", "广西", "海南", "重庆",
    "四川", "贵州", "云南", "西藏", "陕西", "甘肃", "青海", "宁夏", "新疆",
];

/// 获取省份全称
pub fn province_full_name(name: &str) -> Option<&'static str> {
    PROVINCE_MAP.get(name).copied()
}

/// 内置省份目录（31 个省级行政区）
pub fn fallback_provinces() -> Vec<ProvinceInfo> {
    PROVINCE_ORDER
        .iter()
        .map(|name| ProvinceInfo {
            name: (*name).to_string(),
            full_name: province_full_name(name).unwrap_or(name).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_lookup() {
        assert_eq!(province_full_name("北京"), Some("北京市"));
        assert_eq!(province_full_name("广西"), Some("广西壮族自治区"));
        assert_eq!(province_full_name("火星"), None);
    }

    #[test]
    fn test_fallback_directory_complete() {
        let provinces = fallback_provinces();
        assert_eq!(provinces.len(), 31);
        assert_eq!(provinces[0].name, "北京");
        assert_eq!(provinces[0].full_name, "北京市");
        // 每个简称都能查到全称
        assert!(provinces.iter().all(|p| p.full_name != p.name));
    }
}
