use crate::component::album_organizer::OrganizeOptions;
use crate::config::{ClaimPolicy, UserSettings};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "flickr_album_organize",
    about = "Recreate Flickr albums from an exported data archive"
)]
pub struct Cli {
    /// Metadata directory containing albums.json and photo_<id>.json
    #[arg(long)]
    pub metadata: PathBuf,

    /// Photo and video data directory
    #[arg(long, visible_alias = "src")]
    pub data: PathBuf,

    /// Destination directory for album folders
    #[arg(long, visible_alias = "dst")]
    pub dest: PathBuf,

    /// Keep a photo in its first album when several albums reference it
    #[arg(long)]
    pub allow_shared_photos: bool,

    /// Report planned moves without creating folders or moving files
    #[arg(long)]
    pub dry_run: bool,

    /// Ask for confirmation before moving files
    #[arg(long)]
    pub confirm: bool,

    /// Settings file (default: settings.json in the working directory)
    #[arg(long)]
    pub settings: Option<PathBuf>,
}

impl Cli {
    /// 合併命令列參數與設定檔，命令列開啟的選項優先
    #[must_use]
    pub fn organize_options(&self, settings: &UserSettings) -> OrganizeOptions {
        let claim_policy = if self.allow_shared_photos {
            ClaimPolicy::Lenient
        } else {
            settings.claim_policy()
        };

        OrganizeOptions {
            metadata_dir: self.metadata.clone(),
            source_dir: self.data.clone(),
            dest_dir: self.dest.clone(),
            claim_policy,
            dry_run: self.dry_run,
        }
    }

    #[must_use]
    pub const fn confirm_before_move(&self, settings: &UserSettings) -> bool {
        self.confirm || settings.confirm_before_move
    }
}
