//! 相簿處理器
//!
//! 依相簿索引建立相簿資料夾，並將每張照片的來源檔案移動到對應的相簿資料夾

use super::album_index::{
    Album, AlbumIndex, PhotoRecord, album_index_path, load_album_index, load_photo_record,
};
use super::error::OrganizeError;
use super::photo_resolver::resolve_source_file;
use super::title_checker::check_titles;
use crate::config::ClaimPolicy;
use crate::tools::{ensure_directory_exists, is_same_location, move_file};
use indicatif::ProgressBar;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 整理作業的輸入參數
#[derive(Debug, Clone)]
pub struct OrganizeOptions {
    /// JSON metadata 資料夾（含 albums.json 與 photo_<id>.json）
    pub metadata_dir: PathBuf,
    /// 照片與影片的來源資料夾
    pub source_dir: PathBuf,
    /// 相簿資料夾的建立位置
    pub dest_dir: PathBuf,
    pub claim_policy: ClaimPolicy,
    /// 只規劃不實際建立資料夾或移動檔案
    pub dry_run: bool,
}

/// 單一檔案的移動紀錄
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoMove {
    pub photo_id: String,
    pub from: PathBuf,
    pub to: PathBuf,
}

/// 整理結果
#[derive(Debug, Default)]
pub struct OrganizeResult {
    pub albums_processed: usize,
    /// 新建立的相簿資料夾數
    pub albums_created: usize,
    pub photos_moved: usize,
    /// 找不到 photo_<id>.json 的照片數
    pub missing_metadata: usize,
    /// 來源資料夾中找不到對應檔案的照片數
    pub missing_source: usize,
    /// 已放入其他相簿而略過的照片數（僅寬鬆模式）
    pub shared_skipped: usize,
    pub interrupted: bool,
    pub moves: Vec<PhotoMove>,
}

/// 單次執行的狀態：已放置的照片 id 對應到第一個放入的相簿標題
#[derive(Debug, Default)]
struct RunContext {
    processed: HashMap<String, String>,
    result: OrganizeResult,
}

pub struct AlbumProcessor {
    options: OrganizeOptions,
    shutdown_signal: Arc<AtomicBool>,
}

impl AlbumProcessor {
    #[must_use]
    pub const fn new(options: OrganizeOptions, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            options,
            shutdown_signal,
        }
    }

    #[must_use]
    pub const fn options(&self) -> &OrganizeOptions {
        &self.options
    }

    /// 檢查路徑、載入相簿索引並檢查所有標題
    ///
    /// 不會對檔案系統做任何修改
    pub fn prepare(&self) -> Result<AlbumIndex, OrganizeError> {
        let options = &self.options;

        if is_same_location(&options.source_dir, &options.dest_dir) {
            return Err(OrganizeError::SamePath(options.dest_dir.clone()));
        }

        if !options.source_dir.is_dir() {
            return Err(OrganizeError::SourceNotFound(options.source_dir.clone()));
        }

        let index = load_album_index(&album_index_path(&options.metadata_dir))?;
        info!("載入 {} 個相簿", index.albums.len());

        check_titles(&index.albums)?;

        Ok(index)
    }

    /// 完整執行：準備後處理所有相簿
    pub fn organize(&self) -> Result<OrganizeResult, OrganizeError> {
        let index = self.prepare()?;
        self.process(&index, &ProgressBar::hidden())
    }

    /// 依索引順序處理所有相簿，任何致命錯誤會立即中止
    pub fn process(
        &self,
        index: &AlbumIndex,
        progress_bar: &ProgressBar,
    ) -> Result<OrganizeResult, OrganizeError> {
        if !self.options.dry_run {
            ensure_directory_exists(&self.options.dest_dir).map_err(|source| {
                OrganizeError::CreateDir {
                    path: self.options.dest_dir.clone(),
                    source,
                }
            })?;
        }

        let mut ctx = RunContext::default();

        for album in &index.albums {
            if ctx.result.interrupted {
                break;
            }
            progress_bar.set_message(album.title.clone());
            self.process_album(album, &mut ctx)?;
            progress_bar.inc(1);
        }

        Ok(ctx.result)
    }

    fn process_album(&self, album: &Album, ctx: &mut RunContext) -> Result<(), OrganizeError> {
        info!("相簿: {album}");

        let album_dir = self.options.dest_dir.join(&album.title);
        if self.create_album_dir(&album_dir)? {
            ctx.result.albums_created += 1;
        }

        for photo_id in &album.photos {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                warn!("收到中斷訊號，停止處理");
                ctx.result.interrupted = true;
                return Ok(());
            }

            let Some(record) = load_photo_record(&self.options.metadata_dir, photo_id)? else {
                debug!("找不到照片 metadata: photo_{photo_id}.json");
                ctx.result.missing_metadata += 1;
                continue;
            };

            self.place_photo(album, &album_dir, photo_id, &record, ctx)?;
        }

        ctx.result.albums_processed += 1;
        Ok(())
    }

    fn create_album_dir(&self, album_dir: &Path) -> Result<bool, OrganizeError> {
        if self.options.dry_run {
            return Ok(!album_dir.is_dir());
        }

        ensure_directory_exists(album_dir).map_err(|source| OrganizeError::CreateDir {
            path: album_dir.to_path_buf(),
            source,
        })
    }

    fn place_photo(
        &self,
        album: &Album,
        album_dir: &Path,
        photo_id: &str,
        record: &PhotoRecord,
        ctx: &mut RunContext,
    ) -> Result<(), OrganizeError> {
        // 已移走的檔案在來源資料夾找不到，需先檢查是否已被其他相簿放置
        if let Some(first_album) = ctx.processed.get(photo_id) {
            match self.options.claim_policy {
                ClaimPolicy::Strict => {
                    return Err(OrganizeError::DuplicateClaim {
                        photo_id: photo_id.to_string(),
                        first_album: first_album.clone(),
                        second_album: album.title.clone(),
                    });
                }
                ClaimPolicy::Lenient => {
                    warn!(
                        "照片 {photo_id} 已放入相簿 {first_album:?}，略過相簿 {:?}",
                        album.title
                    );
                    ctx.result.shared_skipped += 1;
                    return Ok(());
                }
            }
        }

        let Some(source) = resolve_source_file(&self.options.source_dir, record)? else {
            debug!("找不到照片 {photo_id} 的來源檔案 ({})", record.name);
            ctx.result.missing_source += 1;
            return Ok(());
        };

        let target = album_dir.join(source.file_name().unwrap_or_default());
        if target.exists() {
            return Err(OrganizeError::DestinationExists(target));
        }

        if !self.options.dry_run {
            move_file(&source, &target).map_err(|e| OrganizeError::Move {
                from: source.clone(),
                to: target.clone(),
                source: e,
            })?;
        }
        debug!("移動: {} -> {}", source.display(), target.display());

        ctx.processed.insert(photo_id.to_string(), album.title.clone());
        ctx.result.photos_moved += 1;
        ctx.result.moves.push(PhotoMove {
            photo_id: photo_id.to_string(),
            from: source,
            to: target,
        });

        Ok(())
    }
}
