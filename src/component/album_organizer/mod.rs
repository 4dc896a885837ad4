//! 相簿重建元件
//!
//! 讀取 Flickr 匯出的相簿 metadata，建立相簿資料夾並將照片移動到所屬相簿

mod album_index;
mod album_processor;
mod error;
mod main;
mod photo_resolver;
mod title_checker;

pub use album_index::{
    ALBUM_INDEX_FILE, Album, AlbumIndex, PhotoRecord, album_index_path, load_album_index,
    load_photo_record, photo_record_path,
};
pub use album_processor::{AlbumProcessor, OrganizeOptions, OrganizeResult, PhotoMove};
pub use error::OrganizeError;
pub use main::AlbumOrganizer;
pub use photo_resolver::{candidate_prefixes, match_prefix, resolve_source_file};
pub use title_checker::{check_titles, find_duplicate_titles};
