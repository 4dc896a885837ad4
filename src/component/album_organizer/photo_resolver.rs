//! 照片來源檔案解析
//!
//! 匯出的檔名以照片名稱轉小寫、移除 `.` 後接上 `_<id>` 開頭，後面再接任意字元與副檔名

use super::album_index::PhotoRecord;
use super::error::OrganizeError;
use crate::tools::find_files_with_prefix;
use std::path::{Path, PathBuf};

/// 計算照片在來源資料夾中的檔名前綴
///
/// 名稱結尾的副檔名（例如 `.JPG`）不會出現在匯出的檔名中，先去除
#[must_use]
pub fn match_prefix(name: &str, photo_id: &str) -> String {
    format!("{}_{photo_id}", normalize(strip_extension(name)))
}

/// 依序嘗試的前綴：先去除副檔名，再保留完整名稱（只移除 `.`）
#[must_use]
pub fn candidate_prefixes(name: &str, photo_id: &str) -> Vec<String> {
    let primary = match_prefix(name, photo_id);
    let literal = format!("{}_{photo_id}", normalize(name));

    if literal == primary {
        vec![primary]
    } else {
        vec![primary, literal]
    }
}

fn normalize(name: &str) -> String {
    name.to_lowercase().chars().filter(|c| *c != '.').collect()
}

fn strip_extension(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, ext))
            if !stem.is_empty()
                && (1..=5).contains(&ext.len())
                && ext.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            stem
        }
        _ => name,
    }
}

/// 在來源資料夾中找出照片對應的檔案
///
/// 找不到時回傳 `None`（可能在先前中斷的執行中已被移走），多於一個則為錯誤
pub fn resolve_source_file(
    source_dir: &Path,
    record: &PhotoRecord,
) -> Result<Option<PathBuf>, OrganizeError> {
    for prefix in candidate_prefixes(&record.name, &record.id) {
        let mut matches = find_id_matches(source_dir, &prefix);

        match matches.len() {
            0 => continue,
            1 => return Ok(matches.pop()),
            _ => {
                return Err(OrganizeError::Ambiguous {
                    photo_id: record.id.clone(),
                    prefix,
                    matches,
                });
            }
        }
    }

    Ok(None)
}

// 前綴後面緊接數字代表是另一個 id（例如 `_42` 與 `_420`）
fn find_id_matches(source_dir: &Path, prefix: &str) -> Vec<PathBuf> {
    find_files_with_prefix(source_dir, prefix)
        .into_iter()
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .and_then(|name| name[prefix.len()..].chars().next())
                .is_none_or(|c| !c.is_ascii_digit())
        })
        .collect()
}
