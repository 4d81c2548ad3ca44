use std::path::{Path, PathBuf};

/// Where a content file lives, relative to the content directory.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct FileInfo {
    pub path: PathBuf,

    /// The directories between the content directory and the file.
    pub components: Vec<String>,

    /// The file name without its extension.
    pub stem: String,
}

impl FileInfo {
    pub fn new(root_path: impl AsRef<Path>, path: impl AsRef<Path>) -> Self {
        let root_path = root_path.as_ref();
        let path = path.as_ref();
        let relative_path = path.strip_prefix(root_path).unwrap_or(path);

        Self {
            path: path.to_owned(),
            components: relative_path
                .parent()
                .map(|parent| {
                    parent
                        .components()
                        .map(|component| component.as_os_str().to_string_lossy().to_string())
                        .collect()
                })
                .unwrap_or_default(),
            stem: relative_path
                .file_stem()
                .map(|stem| stem.to_string_lossy().to_string())
                .unwrap_or_default(),
        }
    }
}
