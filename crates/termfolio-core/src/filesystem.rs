//! Flat, read-only virtual filesystem.

use std::collections::HashMap;

use crate::config::CATALOG;
use crate::error::VfsError;
use crate::markup;

/// A named text file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VirtualFile {
    name: String,
    content: String,
}

impl VirtualFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw content, with real newlines.
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Virtual filesystem with a single flat namespace.
///
/// All files are created at construction time and never change afterward.
/// Lookup is exact and case-sensitive; there are no directories and `/` has
/// no special meaning in a name.
#[derive(Clone, Debug, Default)]
pub struct VirtualFs {
    /// Files in insertion order.
    files: Vec<VirtualFile>,
    /// Name to position in `files`.
    index: HashMap<String, usize>,
}

impl VirtualFs {
    /// Create an empty filesystem.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create the filesystem from the compiled-in catalog.
    pub fn from_catalog() -> Self {
        Self::from_files(
            CATALOG
                .iter()
                .map(|(name, content)| VirtualFile::new(*name, *content)),
        )
    }

    /// Create a filesystem from files, in order.
    ///
    /// When a name repeats, the first file wins and the rest are skipped.
    pub fn from_files(files: impl IntoIterator<Item = VirtualFile>) -> Self {
        let mut fs = Self::empty();
        for file in files {
            if fs.index.contains_key(file.name()) {
                tracing::warn!(name = file.name(), "duplicate file skipped");
                continue;
            }
            fs.index.insert(file.name.clone(), fs.files.len());
            fs.files.push(file);
        }
        fs
    }

    /// File names in insertion order.
    pub fn list(&self) -> Vec<&str> {
        self.files.iter().map(VirtualFile::name).collect()
    }

    /// `ls` output: all names separated by two spaces.
    pub fn listing(&self) -> String {
        self.list().join("  ")
    }

    /// Look up a file by exact name.
    pub fn get(&self, name: &str) -> Option<&VirtualFile> {
        self.index.get(name).map(|&i| &self.files[i])
    }

    /// Read a file for display.
    ///
    /// Newlines in the content are replaced with line-break markers since
    /// terminal lines are rendered as markup.
    pub fn read(&self, name: &str) -> Result<String, VfsError> {
        self.get(name)
            .map(|file| markup::line_breaks(file.content()))
            .ok_or_else(|| VfsError::NotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VirtualFs {
        VirtualFs::from_files([
            VirtualFile::new("notes.txt", "one\ntwo"),
            VirtualFile::new("Readme", "hello"),
        ])
    }

    #[test]
    fn test_empty_fs() {
        let fs = VirtualFs::empty();
        assert!(fs.is_empty());
        assert!(fs.list().is_empty());
        assert_eq!(fs.listing(), "");
    }

    #[test]
    fn test_catalog_order() {
        let fs = VirtualFs::from_catalog();
        assert_eq!(
            fs.list(),
            vec![
                "about.txt",
                "skills.md",
                "projects.json",
                "contact.info",
                "secret.bin"
            ]
        );
        assert_eq!(
            fs.listing(),
            "about.txt  skills.md  projects.json  contact.info  secret.bin"
        );
    }

    #[test]
    fn test_list_is_stable() {
        let fs = VirtualFs::from_catalog();
        let first = fs.listing();
        for _ in 0..3 {
            assert_eq!(fs.listing(), first);
        }
        assert_eq!(fs.len(), CATALOG.len());
    }

    #[test]
    fn test_read_converts_newlines() {
        let fs = sample();
        assert_eq!(fs.read("notes.txt").unwrap(), "one<br>two");
        assert_eq!(fs.read("Readme").unwrap(), "hello");
    }

    #[test]
    fn test_read_is_idempotent() {
        let fs = VirtualFs::from_catalog();
        for (name, _) in CATALOG {
            assert_eq!(fs.read(name), fs.read(name));
        }
    }

    #[test]
    fn test_read_keeps_raw_content() {
        let fs = VirtualFs::from_catalog();
        assert_eq!(
            fs.get("contact.info").map(VirtualFile::content),
            Some("GitHub: github.com/TezzzT\nEmail: root@tezzzt.io")
        );
    }

    #[test]
    fn test_read_is_case_sensitive() {
        let fs = sample();
        assert!(fs.read("readme").is_err());
        assert!(fs.read("README").is_err());
        assert!(fs.read("Readme").is_ok());
    }

    #[test]
    fn test_read_missing() {
        let fs = sample();
        assert_eq!(
            fs.read("nofile.xyz"),
            Err(VfsError::NotFound("nofile.xyz".to_string()))
        );
    }

    #[test]
    fn test_no_path_segments() {
        let fs = sample();
        assert!(fs.read("./notes.txt").is_err());
        assert!(fs.read("/notes.txt").is_err());
    }

    #[test]
    fn test_duplicate_keeps_first() {
        let fs = VirtualFs::from_files([
            VirtualFile::new("a", "first"),
            VirtualFile::new("b", "other"),
            VirtualFile::new("a", "second"),
        ]);
        assert_eq!(fs.list(), vec!["a", "b"]);
        assert_eq!(fs.read("a").unwrap(), "first");
    }
}
