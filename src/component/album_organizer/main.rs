use super::album_index::AlbumIndex;
use super::album_processor::{AlbumProcessor, OrganizeOptions, OrganizeResult};
use anyhow::Result;
use console::style;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 相簿重建元件
pub struct AlbumOrganizer {
    processor: AlbumProcessor,
    confirm_before_move: bool,
    shutdown_signal: Arc<AtomicBool>,
}

impl AlbumOrganizer {
    #[must_use]
    pub fn new(
        options: OrganizeOptions,
        confirm_before_move: bool,
        shutdown_signal: Arc<AtomicBool>,
    ) -> Self {
        Self {
            processor: AlbumProcessor::new(options, Arc::clone(&shutdown_signal)),
            confirm_before_move,
            shutdown_signal,
        }
    }

    /// 執行整理，使用者取消時回傳 `None`
    pub fn run(&self) -> Result<Option<OrganizeResult>> {
        println!("{}", style("=== 重建 Flickr 相簿 ===").cyan().bold());

        let options = self.processor.options();
        if options.dry_run {
            println!("{}", style("(試執行模式：不會建立資料夾或移動檔案)").dim());
        }

        println!("{}", style("讀取相簿索引中...").dim());
        let index = self.processor.prepare()?;

        if index.albums.is_empty() {
            println!("{}", style("相簿索引中沒有任何相簿").yellow());
        } else {
            self.print_index_summary(&index);
        }

        if self.confirm_before_move && !options.dry_run && !self.confirm_move()? {
            println!("{}", style("操作已取消").yellow());
            return Ok(None);
        }

        if self.shutdown_signal.load(Ordering::SeqCst) {
            warn!("收到中斷訊號，停止處理");
            return Ok(None);
        }

        let progress_bar = ProgressBar::new(index.albums.len() as u64);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
                .progress_chars("#>-"),
        );

        let result = match self.processor.process(&index, &progress_bar) {
            Ok(result) => result,
            Err(e) => {
                progress_bar.abandon_with_message("發生錯誤，已中止");
                return Err(e.into());
            }
        };

        if result.interrupted {
            progress_bar.abandon_with_message("操作已中斷");
        } else {
            progress_bar.finish_with_message("完成");
        }

        self.print_result(&result);

        Ok(Some(result))
    }

    fn confirm_move(&self) -> Result<bool> {
        let confirm = Confirm::new()
            .with_prompt("確定要移動這些檔案嗎？")
            .default(true)
            .interact()?;
        Ok(confirm)
    }

    fn print_index_summary(&self, index: &AlbumIndex) {
        println!();
        println!(
            "{}",
            style(format!(
                "找到 {} 個相簿，共引用 {} 張照片",
                index.albums.len(),
                index.referenced_photo_count()
            ))
            .green()
        );

        // 只顯示前 10 個
        let display_count = index.albums.len().min(10);
        for album in index.albums.iter().take(display_count) {
            println!(
                "  {} {} ({} 張)",
                style("→").dim(),
                style(&album.title).cyan(),
                album.photos.len()
            );
        }
        if index.albums.len() > display_count {
            println!(
                "  {} ...還有 {} 個相簿",
                style("⋯").dim(),
                index.albums.len() - display_count
            );
        }
        println!();
    }

    fn print_result(&self, result: &OrganizeResult) {
        let dry_run = self.processor.options().dry_run;

        println!();
        println!("{}", style("=== 整理結果 ===").cyan().bold());
        println!("  處理相簿: {} 個", result.albums_processed);
        println!("  新建資料夾: {} 個", result.albums_created);
        if dry_run {
            println!("  預計移動: {} 個檔案", style(result.photos_moved).green());
            for photo_move in &result.moves {
                println!(
                    "    {} {} -> {}",
                    style("→").dim(),
                    photo_move.from.display(),
                    photo_move.to.display()
                );
            }
        } else {
            println!("  成功移動: {} 個檔案", style(result.photos_moved).green());
        }

        if result.missing_metadata > 0 {
            println!(
                "  缺少 metadata: {} 張",
                style(result.missing_metadata).yellow()
            );
        }
        if result.missing_source > 0 {
            println!(
                "  找不到來源檔案: {} 張",
                style(result.missing_source).yellow()
            );
        }
        if result.shared_skipped > 0 {
            println!(
                "  已在其他相簿（略過）: {} 張",
                style(result.shared_skipped).dim()
            );
        }
        if result.interrupted {
            println!("{}", style("操作已中斷，可重新執行以繼續").yellow());
        }

        info!(
            "相簿重建完成 - 相簿: {}, 移動: {}, 缺少 metadata: {}, 找不到檔案: {}, 略過: {}",
            result.albums_processed,
            result.photos_moved,
            result.missing_metadata,
            result.missing_source,
            result.shared_skipped
        );
    }
}
