use std::path::{Path, PathBuf};

/// Install path of `dir` relative to the fixture root. A directory outside
/// the root is returned unchanged.
pub fn install_path_relative(root: &Path, dir: &Path) -> String {
    match dir.strip_prefix(root) {
        Ok(relative) => relative.to_string_lossy().into_owned(),
        Err(_) => dir.to_string_lossy().into_owned(),
    }
}

pub fn install_path_absolute(root: &Path, relative: &str) -> PathBuf {
    let relative = Path::new(relative);
    if relative.as_os_str().is_empty() {
        root.to_path_buf()
    } else {
        root.join(relative)
    }
}
