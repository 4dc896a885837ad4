use log::warn;
use std::fs;
use std::io;
use std::path::Path;

/// 移動檔案，rename 失敗時（例如跨檔案系統）改為複製後刪除
pub fn move_file(source: &Path, target: &Path) -> io::Result<()> {
    let Err(rename_err) = fs::rename(source, target) else {
        return Ok(());
    };

    copy_and_delete(source, target).inspect_err(|copy_err| {
        warn!(
            "移動檔案失敗 {} -> {}: {copy_err} (原始錯誤: {rename_err})",
            source.display(),
            target.display()
        );
    })
}

/// 複製檔案後刪除原檔案，刪除失敗時移除已複製的檔案
fn copy_and_delete(source: &Path, target: &Path) -> io::Result<()> {
    fs::copy(source, target)?;

    if let Err(e) = fs::remove_file(source) {
        let _ = fs::remove_file(target);
        return Err(e);
    }

    Ok(())
}
