//! Archive path utilities
//!
//! Archive paths always use forward slashes; folder paths carry no trailing
//! slash except on directory markers. The archive root is written as `"."`.

/// Normalize path separators to forward slashes
pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

/// Non-empty `/`-separated segments of a path
pub fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Last path segment
pub fn file_name(path: &str) -> &str {
    path.trim_end_matches('/').rsplit('/').next().unwrap_or(path)
}

/// Folder containing `path`, or `"."` at the archive root
pub fn parent_folder(path: &str) -> String {
    match path.trim_end_matches('/').rsplit_once('/') {
        Some((parent, _)) if !parent.is_empty() => parent.to_string(),
        _ => ".".to_string(),
    }
}

/// Whether `path` ends with `.ext`, ignoring case
pub fn extension_is(path: &str, ext: &str) -> bool {
    let ext = ext.trim_start_matches('.');
    path.len() > ext.len()
        && path.to_lowercase().ends_with(&format!(".{}", ext.to_lowercase()))
}

/// Join a pack folder with a sub path (`"."` joins to the bare sub path)
pub fn pack_path(folder: &str, sub: &str) -> String {
    let sub = sub.trim_start_matches('/');
    if folder == "." || folder.is_empty() {
        sub.to_string()
    } else {
        format!("{}/{}", folder.trim_end_matches('/'), sub)
    }
}

/// Insert `suffix` before a case-insensitive `.mcaddon` extension
pub fn with_suffix(name: &str, suffix: &str) -> String {
    const EXT: &str = ".mcaddon";
    let split = name.len().saturating_sub(EXT.len());
    match (name.get(..split), name.get(split..)) {
        (Some(stem), Some(ext)) if ext.eq_ignore_ascii_case(EXT) => {
            format!("{stem}{suffix}{EXT}")
        }
        _ => name.to_string(),
    }
}
