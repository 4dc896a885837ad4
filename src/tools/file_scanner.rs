use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 列出資料夾第一層的所有檔案（不含子資料夾），依檔名排序
#[must_use]
pub fn scan_top_level_files(directory: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .collect();

    files.sort();
    files
}

/// 找出檔名以 `prefix` 開頭的檔案
#[must_use]
pub fn find_files_with_prefix(directory: &Path, prefix: &str) -> Vec<PathBuf> {
    scan_top_level_files(directory)
        .into_iter()
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(prefix))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_scan_skips_subdirectories() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.jpg"), "b").unwrap();
        fs::write(temp_dir.path().join("a.jpg"), "a").unwrap();
        fs::create_dir(temp_dir.path().join("nested")).unwrap();
        fs::write(temp_dir.path().join("nested/c.jpg"), "c").unwrap();

        let files = scan_top_level_files(temp_dir.path());

        assert_eq!(
            files,
            vec![temp_dir.path().join("a.jpg"), temp_dir.path().join("b.jpg")]
        );
    }

    #[test]
    fn test_scan_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(scan_top_level_files(temp_dir.path()).is_empty());
    }

    #[test]
    fn test_find_files_with_prefix() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("beach_42_abc.png"), "1").unwrap();
        fs::write(temp_dir.path().join("beach_42.jpg"), "2").unwrap();
        fs::write(temp_dir.path().join("beach_420_x.png"), "3").unwrap();
        fs::write(temp_dir.path().join("Beach_42_upper.png"), "4").unwrap();

        let files = find_files_with_prefix(temp_dir.path(), "beach_42_");
        assert_eq!(files, vec![temp_dir.path().join("beach_42_abc.png")]);

        // 前綴比對不限制後面接的字元
        let files = find_files_with_prefix(temp_dir.path(), "beach_42");
        assert_eq!(files.len(), 3);
    }

    #[test]
    fn test_prefix_is_literal() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a[1]_5_x.jpg"), "1").unwrap();
        fs::write(temp_dir.path().join("a1_5_x.jpg"), "2").unwrap();

        let files = find_files_with_prefix(temp_dir.path(), "a[1]_5");
        assert_eq!(files, vec![temp_dir.path().join("a[1]_5_x.jpg")]);
    }
}
