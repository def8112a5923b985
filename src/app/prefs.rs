use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, warn};

/// 上次选择的省份
pub const KEY_PROVINCE: &str = "selected_province";
/// 上次选择的科目
pub const KEY_SUBJECT: &str = "selected_subject";
/// 上次选择的年份
pub const KEY_YEAR: &str = "selected_year";

/// 本地偏好存储，一个 JSON 文件里的字符串键值对
///
/// 读写约定：
/// - 文件缺失或损坏按空存储处理，不报错；
/// - set 即时写盘，写失败只记日志，不影响主流程；
/// - 未识别的键原样保留；不设过期，不做版本迁移。
#[derive(Debug)]
pub struct PrefsStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl PrefsStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(map) => map,
                Err(e) => {
                    warn!("偏好文件解析失败，按空处理: {}", e);
                    BTreeMap::new()
                }
            },
            Err(_) => {
                debug!("偏好文件不存在: {}", path.display());
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// 写入并立即落盘
    pub fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.save() {
            warn!("偏好写入失败: {}", e);
        }
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("创建偏好目录失败: {}", parent.display()))?;
            }
        }
        let text = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, text)
            .with_context(|| format!("写入偏好文件失败: {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = PrefsStore::open(dir.path().join("prefs.json"));
        assert_eq!(store.get(KEY_PROVINCE), None);
    }

    #[test]
    fn test_write_through_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let mut store = PrefsStore::open(&path);
        store.set(KEY_PROVINCE, "山东");
        store.set(KEY_SUBJECT, "理科");
        store.set(KEY_PROVINCE, "浙江");

        // 重新打开读到的是最后一次写入
        let reopened = PrefsStore::open(&path);
        assert_eq!(reopened.get(KEY_PROVINCE), Some("浙江"));
        assert_eq!(reopened.get(KEY_SUBJECT), Some("理科"));
        assert_eq!(reopened.get(KEY_YEAR), None);
    }

    #[test]
    fn test_unknown_keys_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{"custom_key": "自定义"}"#).unwrap();

        let mut store = PrefsStore::open(&path);
        store.set(KEY_YEAR, "2024");

        let reopened = PrefsStore::open(&path);
        assert_eq!(reopened.get("custom_key"), Some("自定义"));
        assert_eq!(reopened.get(KEY_YEAR), Some("2024"));
    }

    #[test]
    fn test_corrupt_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "不是 JSON").unwrap();

        let store = PrefsStore::open(&path);
        assert_eq!(store.get(KEY_PROVINCE), None);
    }
}
