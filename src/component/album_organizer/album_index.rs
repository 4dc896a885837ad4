//! 相簿索引與照片 metadata
//!
//! 讀取匯出資料中的 `albums.json` 以及每張照片各自的 `photo_<id>.json`

use super::error::OrganizeError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// 相簿索引檔名
pub const ALBUM_INDEX_FILE: &str = "albums.json";

/// 相簿索引，列出所有相簿及其照片
#[derive(Debug, Clone, Deserialize)]
pub struct AlbumIndex {
    pub albums: Vec<Album>,
}

impl AlbumIndex {
    /// 所有相簿引用的照片總數（重複引用會重複計算）
    #[must_use]
    pub fn referenced_photo_count(&self) -> usize {
        self.albums.iter().map(|album| album.photos.len()).sum()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Album {
    pub id: String,
    /// 缺少或為 null 時視為空字串，交給標題檢查處理
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(deserialize_with = "number_or_string")]
    pub photo_count: u64,
    pub photos: Vec<String>,
}

/// 單張照片的 metadata
#[derive(Debug, Clone, Deserialize)]
pub struct PhotoRecord {
    pub id: String,
    pub name: String,
    /// 僅供參考，歸屬以相簿索引為準
    #[serde(default)]
    pub albums: Vec<serde_json::Value>,
}

#[must_use]
pub fn album_index_path(metadata_dir: &Path) -> PathBuf {
    metadata_dir.join(ALBUM_INDEX_FILE)
}

#[must_use]
pub fn photo_record_path(metadata_dir: &Path, photo_id: &str) -> PathBuf {
    metadata_dir.join(format!("photo_{photo_id}.json"))
}

/// 載入相簿索引
pub fn load_album_index(path: &Path) -> Result<AlbumIndex, OrganizeError> {
    if !path.is_file() {
        return Err(OrganizeError::MissingAlbumIndex(path.to_path_buf()));
    }
    read_json(path)
}

/// 載入照片 metadata，檔案不存在時回傳 `None`
pub fn load_photo_record(
    metadata_dir: &Path,
    photo_id: &str,
) -> Result<Option<PhotoRecord>, OrganizeError> {
    let path = photo_record_path(metadata_dir, photo_id);
    if !path.is_file() {
        return Ok(None);
    }
    read_json(&path).map(Some)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, OrganizeError> {
    let content = fs::read_to_string(path).map_err(|source| OrganizeError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| OrganizeError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// 匯出資料中 photo_count 是字串，也接受數字
fn number_or_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Number(u64),
        Text(String),
    }

    match Count::deserialize(deserializer)? {
        Count::Number(n) => Ok(n),
        Count::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

impl fmt::Display for Album {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (id {}, {} 張照片)",
            self.title, self.id, self.photo_count
        )
    }
}
