//! 相簿標題檢查
//!
//! 標題直接作為資料夾名稱，必須在任何檔案操作之前完整檢查過所有相簿

use super::album_index::Album;
use super::error::OrganizeError;
use std::collections::HashSet;

/// 檢查所有相簿標題：不可為空、不可重複、必須能作為單一資料夾名稱
pub fn check_titles(albums: &[Album]) -> Result<(), OrganizeError> {
    if let Some(album) = albums.iter().find(|a| a.title.is_empty()) {
        return Err(OrganizeError::MissingTitle(format!("{album:?}")));
    }

    let duplicates = find_duplicate_titles(albums);
    if !duplicates.is_empty() {
        return Err(OrganizeError::DuplicateTitle(duplicates));
    }

    if let Some(album) = albums.iter().find(|a| !is_safe_folder_name(&a.title)) {
        return Err(OrganizeError::UnsafeTitle(album.title.clone()));
    }

    Ok(())
}

/// 找出重複的標題，每個標題只列一次，依第一次重複出現的順序
#[must_use]
pub fn find_duplicate_titles(albums: &[Album]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for album in albums {
        let title = album.title.as_str();
        if !seen.insert(title) && reported.insert(title) {
            duplicates.push(title.to_string());
        }
    }

    duplicates
}

fn is_safe_folder_name(title: &str) -> bool {
    !matches!(title, "." | "..") && !title.contains(['/', '\\', '\0'])
}
