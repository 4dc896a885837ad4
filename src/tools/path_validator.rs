use std::io;
use std::path::{Path, PathBuf};

/// 建立資料夾（若不存在），回傳是否有新建
pub fn ensure_directory_exists(path: &Path) -> io::Result<bool> {
    if path.is_dir() {
        return Ok(false);
    }
    std::fs::create_dir_all(path)?;
    Ok(true)
}

/// 取得路徑的實際位置
///
/// 路徑尚未存在時，以最近一層存在的上層目錄做 canonicalize 再接回剩餘部分
#[must_use]
pub fn resolve_path(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }

    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let mut existing = absolute.as_path();
    let mut rest = Vec::new();

    while let Some(parent) = existing.parent() {
        if let Some(name) = existing.file_name() {
            rest.push(name.to_os_string());
        }
        existing = parent;
        if let Ok(canonical) = existing.canonicalize() {
            return rest.iter().rev().fold(canonical, |acc, name| acc.join(name));
        }
    }

    absolute
}

#[must_use]
pub fn is_same_location(a: &Path, b: &Path) -> bool {
    resolve_path(a) == resolve_path(b)
}
