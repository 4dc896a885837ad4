mod file_mover;
mod file_scanner;
mod path_validator;

pub use file_mover::move_file;
pub use file_scanner::{find_files_with_prefix, scan_top_level_files};
pub use path_validator::{ensure_directory_exists, is_same_location, resolve_path};
