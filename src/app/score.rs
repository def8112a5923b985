use thiserror::Error;

use crate::app::types::Track;

/// 一次提交收集到的各科成绩
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreInput {
    pub chinese: f64,
    pub math: f64,
    pub english: f64,
    pub track: Track,
    /// 所选科目类型对应的三门选考成绩
    /// （理科：物理/化学/生物，文科：政治/历史/地理）
    pub electives: [f64; 3],
}

/// 提交前的本地校验错误，命中任何一项都不会发出请求
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("请选择所在省份")]
    MissingProvince,
    #[error("请输入有效的考试成绩")]
    InvalidScore,
    #[error("请输入院校名称")]
    MissingUniversity,
}

/// 宽松解析成绩输入：空白或非法输入按 0 处理，负数归 0
pub fn parse_score(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v.max(0.0),
        _ => 0.0,
    }
}

/// 计算高考总分：三门主科加三门选考科目之和
///
/// 纯函数，不读取任何外部状态，相同输入必得相同总分。
pub fn composite_score(input: &ScoreInput) -> f64 {
    input.chinese + input.math + input.english + input.electives.iter().sum::<f64>()
}

/// 提交前的同步校验：省份必选，总分必须大于 0
///
/// 校验通过时返回总分。
pub fn validate_submission(input: &ScoreInput, province: &str) -> Result<f64, ValidationError> {
    if province.trim().is_empty() {
        return Err(ValidationError::MissingProvince);
    }
    let total = composite_score(input);
    if total <= 0.0 {
        return Err(ValidationError::InvalidScore);
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn science_input() -> ScoreInput {
        ScoreInput {
            chinese: 120.0,
            math: 130.0,
            english: 110.0,
            track: Track::Science,
            electives: [90.0, 85.0, 88.0],
        }
    }

    #[test]
    fn test_composite_score_is_exact_sum() {
        // 语文 120 + 数学 130 + 英语 110 + 理综 90/85/88 = 623
        assert_eq!(composite_score(&science_input()), 623.0);
    }

    #[test]
    fn test_composite_score_is_pure() {
        let input = science_input();
        let first = composite_score(&input);
        let second = composite_score(&input);
        assert_eq!(first, second);
        assert_eq!(input, science_input());
    }

    #[test]
    fn test_parse_score_lenient() {
        assert_eq!(parse_score("120"), 120.0);
        assert_eq!(parse_score(" 98.5 "), 98.5);
        assert_eq!(parse_score(""), 0.0);
        assert_eq!(parse_score("abc"), 0.0);
        assert_eq!(parse_score("-30"), 0.0);
        assert_eq!(parse_score("NaN"), 0.0);
    }

    #[test]
    fn test_missing_subjects_count_as_zero() {
        let input = ScoreInput {
            chinese: parse_score("100"),
            math: parse_score(""),
            english: parse_score("无"),
            track: Track::LiberalArts,
            electives: [parse_score("80"), parse_score(""), parse_score("")],
        };
        assert_eq!(composite_score(&input), 180.0);
    }

    #[test]
    fn test_validation_requires_province_first() {
        let zero = ScoreInput {
            chinese: 0.0,
            math: 0.0,
            english: 0.0,
            track: Track::Science,
            electives: [0.0; 3],
        };
        // 省份缺失优先于分数校验
        assert_eq!(
            validate_submission(&zero, ""),
            Err(ValidationError::MissingProvince)
        );
        assert_eq!(
            validate_submission(&zero, "山东"),
            Err(ValidationError::InvalidScore)
        );
        assert_eq!(validate_submission(&science_input(), "山东"), Ok(623.0));
    }
}
