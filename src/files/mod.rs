//! Path-relative file and folder helpers.
//!
//! Every path handed to [`FileHelper`] may start with `~`, which expands to
//! the helper's root directory.

mod appender;
mod error;


pub use appender::{LogFileAppender, OutputFormat};
pub use error::FileError;

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::WalkDir;

/// How [`FileHelper::put_contents`] treats an existing file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Replace existing contents
    #[default]
    Truncate,
    /// Add to the end of existing contents
    Append,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ItemKind {
    All,
    Folders,
    Files,
}

/// File helper rooted at a directory that replaces `~` in paths
#[derive(Debug, Clone)]
pub struct FileHelper {
    root: String,
}

impl FileHelper {
    /// Create a helper rooted at an existing directory
    pub fn new(root: impl Into<String>) -> Result<Self, FileError> {
        let root = root.into();

        if root.is_empty() || !Path::new(&root).is_dir() {
            return Err(FileError::InvalidRoot(root));
        }

        Ok(Self { root })
    }

    /// The root that `~` expands to
    pub fn relative_path(&self) -> &str {
        &self.root
    }

    /// Expand a leading `~` into the root directory
    pub fn resolve(&self, path: &str) -> String {
        let Some(rest) = path.strip_prefix('~') else {
            return path.to_string();
        };

        let rest = match rest.strip_prefix('/') {
            Some(trimmed) if self.root.ends_with('/') => trimmed,
            _ => rest,
        };

        format!("{}{}", self.root, rest)
    }

    /// Join path parts with `/`, trimming the separators between them.
    ///
    /// Backslashes become forward slashes. Only the trailing slash of `start`
    /// and the leading slash of the final part are managed.
    pub fn path_join(&self, start: &str, parts: &[&str]) -> String {
        let start = start.replace('\\', "/");

        let Some((last, middle)) = parts.split_last() else {
            return self.resolve(&start);
        };

        let mut path = Vec::with_capacity(parts.len() + 1);

        if start.len() > 1 {
            path.push(start.strip_suffix('/').unwrap_or(&start).to_string());
        } else {
            path.push(start.clone());
        }

        for part in middle {
            let part = part.replace('\\', "/");
            let part = part.strip_prefix('/').unwrap_or(&part);
            let part = part.strip_suffix('/').unwrap_or(part);
            path.push(part.to_string());
        }

        let last = last.replace('\\', "/");
        path.push(last.strip_prefix('/').unwrap_or(&last).to_string());

        self.resolve(&path.join("/"))
    }

    pub fn file_exists(&self, path: &str) -> bool {
        !path.is_empty() && Path::new(&self.resolve(path)).is_file()
    }

    pub fn folder_exists(&self, path: &str) -> bool {
        !path.is_empty() && Path::new(&self.resolve(path)).is_dir()
    }

    /// Read a file as UTF-8 text
    pub fn get_contents(&self, path: &str) -> Result<String, FileError> {
        if !self.file_exists(path) {
            return Err(FileError::NotFound(path.to_string()));
        }

        let resolved = self.resolve(path);
        fs::read_to_string(&resolved).map_err(|e| FileError::io(resolved, e))
    }

    /// Write `data` to a file, creating it if needed. Returns the number of
    /// bytes written.
    pub fn put_contents(
        &self,
        path: &str,
        data: impl AsRef<[u8]>,
        mode: WriteMode,
    ) -> Result<usize, FileError> {
        if path.is_empty() {
            return Err(FileError::EmptyPath);
        }

        let data = data.as_ref();
        if data.is_empty() {
            return Err(FileError::EmptyData(path.to_string()));
        }

        let resolved = self.resolve(path);
        let mut options = OpenOptions::new();
        options.create(true);

        match mode {
            WriteMode::Truncate => options.write(true).truncate(true),
            WriteMode::Append => options.append(true),
        };

        let mut file = options
            .open(&resolved)
            .map_err(|e| FileError::io(&resolved, e))?;
        file.write_all(data)
            .map_err(|e| FileError::io(&resolved, e))?;

        Ok(data.len())
    }

    /// Create the file if missing and set its modification time to now
    pub fn touch_file(&self, path: &str) -> Result<(), FileError> {
        if path.is_empty() {
            return Err(FileError::EmptyPath);
        }

        let resolved = self.resolve(path);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&resolved)
            .map_err(|e| FileError::io(&resolved, e))?;

        file.set_modified(SystemTime::now())
            .map_err(|e| FileError::io(&resolved, e))
    }

    /// Create a folder. Returns `false` when the path is empty or the folder
    /// already exists.
    pub fn make_folder(&self, path: &str, recursive: bool) -> Result<bool, FileError> {
        if path.is_empty() || self.folder_exists(path) {
            return Ok(false);
        }

        let resolved = self.resolve(path);
        let created = if recursive {
            fs::create_dir_all(&resolved)
        } else {
            fs::create_dir(&resolved)
        };

        created.map_err(|e| FileError::io(resolved, e))?;
        Ok(true)
    }

    /// Copy a single file. The source must exist and the destination must not.
    pub fn copy_file(&self, source: &str, destination: &str) -> Result<(), FileError> {
        if source.is_empty() || destination.is_empty() {
            return Err(FileError::EmptyPath);
        }

        for path in [source, destination] {
            if path.ends_with('/') {
                return Err(FileError::NotAFile(path.to_string()));
            }
        }

        if !self.file_exists(source) {
            return Err(FileError::NotFound(source.to_string()));
        }

        if self.file_exists(destination) {
            return Err(FileError::AlreadyExists(destination.to_string()));
        }

        let resolved = self.resolve(source);
        fs::copy(&resolved, self.resolve(destination))
            .map(|_| ())
            .map_err(|e| FileError::io(resolved, e))
    }

    /// Recursively copy a folder. The source must exist and the destination
    /// must not.
    pub fn copy_folder(&self, source: &str, destination: &str) -> Result<(), FileError> {
        if source.is_empty() || destination.is_empty() {
            return Err(FileError::EmptyPath);
        }

        if !self.folder_exists(source) {
            return Err(FileError::NotFound(source.to_string()));
        }

        if self.folder_exists(destination) {
            return Err(FileError::AlreadyExists(destination.to_string()));
        }

        let from = PathBuf::from(self.resolve(source));
        let to = PathBuf::from(self.resolve(destination));

        for entry in WalkDir::new(&from) {
            let entry = entry.map_err(|e| FileError::Walk {
                path: from.display().to_string(),
                source: e,
            })?;

            // Entries always live under the walk root
            let relative = entry.path().strip_prefix(&from).unwrap_or(entry.path());
            let target = to.join(relative);

            if entry.file_type().is_dir() {
                fs::create_dir_all(&target)
                    .map_err(|e| FileError::io(target.display().to_string(), e))?;
            } else {
                fs::copy(entry.path(), &target)
                    .map_err(|e| FileError::io(entry.path().display().to_string(), e))?;
            }
        }

        Ok(())
    }

    /// Files directly inside a folder
    pub fn folder_files(&self, path: &str) -> Option<Vec<String>> {
        self.glob_folder(path, ItemKind::Files, false)
    }

    /// Folders directly inside a folder, each with a trailing `/`
    pub fn folder_folders(&self, path: &str) -> Option<Vec<String>> {
        self.glob_folder(path, ItemKind::Folders, false)
    }

    /// Files and folders inside a folder, optionally descending into
    /// sub-folders
    pub fn folder_items(&self, path: &str, recursive: bool) -> Option<Vec<String>> {
        self.glob_folder(path, ItemKind::All, recursive)
    }

    pub fn remove_file(&self, path: &str) -> Result<(), FileError> {
        if path.is_empty() {
            return Err(FileError::EmptyPath);
        }

        let resolved = self.resolve(path);
        fs::remove_file(&resolved).map_err(|e| FileError::io(resolved, e))
    }

    /// Remove an empty folder
    pub fn remove_folder(&self, path: &str) -> Result<(), FileError> {
        if path.is_empty() {
            return Err(FileError::EmptyPath);
        }

        let resolved = self.resolve(path);
        fs::remove_dir(&resolved).map_err(|e| FileError::io(resolved, e))
    }

    /// Sorted listing of a folder. `None` if the folder does not exist.
    fn glob_folder(&self, path: &str, kind: ItemKind, recursive: bool) -> Option<Vec<String>> {
        if !self.folder_exists(path) {
            return None;
        }

        let mut base = self.resolve(path);
        if !base.ends_with('/') {
            base.push('/');
        }

        let max_depth = if recursive && kind != ItemKind::Files {
            usize::MAX
        } else {
            1
        };

        let mut items = Vec::new();

        for entry in WalkDir::new(&base).min_depth(1).max_depth(max_depth) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("Skipping unreadable entry under {}: {}", base, e);
                    continue;
                }
            };

            let item = entry.path().to_string_lossy().into_owned();

            if entry.file_type().is_dir() {
                if kind != ItemKind::Files {
                    items.push(format!("{}/", item));
                }
            } else if kind != ItemKind::Folders {
                items.push(item);
            }
        }

        items.sort();
        Some(items)
    }
}
