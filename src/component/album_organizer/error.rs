use std::path::PathBuf;
use thiserror::Error;

/// 相簿整理過程中的致命錯誤
///
/// 缺少個別照片 metadata 或找不到來源檔案不屬於錯誤，會被計數後略過
#[derive(Debug, Error)]
pub enum OrganizeError {
    #[error("來源與目的地必須是不同的位置: {0}")]
    SamePath(PathBuf),

    #[error("找不到相簿索引檔: {0}")]
    MissingAlbumIndex(PathBuf),

    #[error("來源資料夾不存在或不是資料夾: {0}")]
    SourceNotFound(PathBuf),

    #[error("無法解析 JSON 檔案 {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("無法讀取 {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("相簿缺少標題: {0}")]
    MissingTitle(String),

    #[error("相簿標題重複: {}", .0.join(", "))]
    DuplicateTitle(Vec<String>),

    #[error("相簿標題無法作為資料夾名稱: {0:?}")]
    UnsafeTitle(String),

    #[error("照片 {photo_id} 對應到多個檔案 ({prefix}*): {}", display_paths(.matches))]
    Ambiguous {
        photo_id: String,
        prefix: String,
        matches: Vec<PathBuf>,
    },

    #[error("照片 {photo_id} 已放入相簿 {first_album:?}，又被相簿 {second_album:?} 引用")]
    DuplicateClaim {
        photo_id: String,
        first_album: String,
        second_album: String,
    },

    #[error("無法建立資料夾 {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("目標檔案已存在: {0}")]
    DestinationExists(PathBuf),

    #[error("移動檔案失敗 {} -> {}: {source}", .from.display(), .to.display())]
    Move {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_title_lists_all_titles() {
        let e = OrganizeError::DuplicateTitle(vec!["Trip".into(), "Home".into()]);
        assert_eq!(e.to_string(), "相簿標題重複: Trip, Home");
    }

    #[test]
    fn test_ambiguous_lists_matches() {
        let e = OrganizeError::Ambiguous {
            photo_id: "7".into(),
            prefix: "a_7".into(),
            matches: vec![PathBuf::from("/src/a_7_x.jpg"), PathBuf::from("/src/a_7_y.jpg")],
        };
        let message = e.to_string();
        assert!(message.contains("a_7*"));
        assert!(message.contains("/src/a_7_x.jpg, /src/a_7_y.jpg"));
    }
}
