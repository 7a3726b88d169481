use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// 计算实际路径：目标根前缀 + 清单条目
///
/// 这是字符串拼接而不是 `Path::join`，条目本身是绝对路径，
/// join 会直接丢弃前缀。
pub fn effective_path(dest_root: &OsStr, entry: &str) -> PathBuf {
    let mut joined = OsString::with_capacity(dest_root.len() + entry.len());
    joined.push(dest_root);
    joined.push(entry);
    PathBuf::from(joined)
}

/// 路径是否存在（不跟随符号链接，悬空链接也算存在）
pub fn path_exists_no_follow(path: &Path) -> bool {
    std::fs::symlink_metadata(path).is_ok()
}

/// 格式化文件大小
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// 按字符截断，保留末尾部分（路径的文件名比前缀更有用）
pub fn truncate_path(s: &str, max_len: usize) -> String {
    let count = s.chars().count();
    if count > max_len && max_len > 2 {
        let tail: String = s.chars().skip(count - (max_len - 2)).collect();
        format!("..{}", tail)
    } else {
        s.to_string()
    }
}

/// 生成唯一 ID
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
