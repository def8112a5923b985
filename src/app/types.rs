use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// 科目类型（文理分科）
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum Track {
    /// 理科（物理、化学、生物）
    Science,
    /// 文科（政治、历史、地理）
    LiberalArts,
}

impl Track {
    /// 请求体里使用的科目标签
    pub fn subject_label(&self) -> &'static str {
        match self {
            Track::Science => "理科",
            Track::LiberalArts => "文科",
        }
    }

    /// 从科目标签解析
    pub fn from_subject_label(label: &str) -> Option<Track> {
        match label {
            "理科" => Some(Track::Science),
            "文科" => Some(Track::LiberalArts),
            _ => None,
        }
    }
}

/// 推荐类别，按录取可能性从低到高排列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    /// 冲刺
    Stretch,
    /// 稳妥
    Stable,
    /// 保底
    Safety,
}

impl Bucket {
    /// 固定的类别顺序，"全部推荐"视图按此顺序拼接
    pub const ALL: [Bucket; 3] = [Bucket::Stretch, Bucket::Stable, Bucket::Safety];

    /// 推荐响应里的类别键名
    pub fn label(&self) -> &'static str {
        match self {
            Bucket::Stretch => "冲刺",
            Bucket::Stable => "稳妥",
            Bucket::Safety => "保底",
        }
    }

    /// 旧版 categorized 对象里的键名
    pub fn legacy_label(&self) -> &'static str {
        match self {
            Bucket::Stretch => "冲刺院校",
            Bucket::Stable => "稳妥院校",
            Bucket::Safety => "保底院校",
        }
    }
}
