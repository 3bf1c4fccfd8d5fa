// Copyright (c) 2025 Bloomgate Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Exact URL blacklist.
//!
//! An ordered list of [`Url`]s guarded by an internal lock, so a single
//! instance can be shared by concurrent sessions. It does not deduplicate on
//! its own: [`BlackList::add_url`] appends unconditionally and callers decide
//! whether to check [`BlackList::contains`] first.
//!
//! The on-disk form is UTF-8 text with one raw URL per line. URLs containing a
//! line feed cannot round-trip through this format.

use std::fs;
use std::path::Path;

use parking_lot::RwLock;

use crate::data_structures::url::Url;
use crate::error::storage::StorageError;

/// Ordered, exact-match URL store.
#[derive(Debug, Default)]
pub struct BlackList {
    urls: RwLock<Vec<Url>>,
}

impl BlackList {
    /// Create an empty blacklist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `url`, even if an equal entry already exists.
    pub fn add_url(&self, url: Url) {
        self.urls.write().push(url);
    }

    /// Returns true if an entry equals `url` exactly.
    pub fn contains(&self, url: &Url) -> bool {
        self.urls.read().iter().any(|entry| entry == url)
    }

    /// Remove the first entry equal to `url`. No-op if absent.
    ///
    /// Returns true if an entry was removed.
    pub fn remove_url(&self, url: &Url) -> bool {
        let mut urls = self.urls.write();
        match urls.iter().position(|entry| entry == url) {
            Some(index) => {
                urls.remove(index);
                true
            }
            None => false,
        }
    }

    /// Add `url` only if no equal entry exists. Returns true if it was added.
    ///
    /// The check and the append happen under one write lock.
    pub fn insert_if_absent(&self, url: Url) -> bool {
        let mut urls = self.urls.write();
        if urls.contains(&url) {
            return false;
        }
        urls.push(url);
        true
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.urls.read().len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.urls.read().is_empty()
    }

    /// A copy of the entries in order.
    pub fn urls(&self) -> Vec<Url> {
        self.urls.read().clone()
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.urls.write().clear();
    }

    /// Overwrite `path` with one URL per line, each terminated by `\n`.
    pub fn save(&self, path: &Path) -> Result<(), StorageError> {
        let contents = self
            .urls
            .read()
            .iter()
            .fold(String::new(), |mut out, url| {
                out.push_str(url.as_str());
                out.push('\n');
                out
            });
        fs::write(path, contents).map_err(|e| StorageError::io(path, e))
    }

    /// Append every non-empty line of `path` as a new entry.
    ///
    /// Existing entries are kept; build a fresh instance for a clean load.
    pub fn load(&self, path: &Path) -> Result<usize, StorageError> {
        let contents = fs::read_to_string(path).map_err(|e| StorageError::io(path, e))?;
        let mut urls = self.urls.write();
        let before = urls.len();
        urls.extend(
            contents
                .split('\n')
                .filter(|line| !line.is_empty())
                .map(Url::new),
        );
        Ok(urls.len() - before)
    }

    /// Build a blacklist from `path`, falling back to an empty list if the
    /// file is missing or unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        let blacklist = Self::new();
        match blacklist.load(path) {
            Ok(count) => tracing::debug!(path = %path.display(), count, "Loaded blacklist"),
            Err(e) if e.is_not_found() => {
                tracing::debug!(path = %path.display(), "No blacklist file, starting empty")
            }
            Err(e) => tracing::warn!(error = %e, "Failed to load blacklist, starting empty"),
        }
        blacklist
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_contains_remove() {
        let list = BlackList::new();
        let url = Url::new("http://example.com");

        assert!(!list.contains(&url));
        list.add_url(url.clone());
        assert!(list.contains(&url));
        assert!(list.remove_url(&url));
        assert!(!list.contains(&url));
        assert!(!list.remove_url(&url));
    }

    #[test]
    fn test_add_allows_duplicates_and_remove_takes_first() {
        let list = BlackList::new();
        let url = Url::new("http://dup.com");
        list.add_url(url.clone());
        list.add_url(Url::new("http://other.com"));
        list.add_url(url.clone());
        assert_eq!(list.len(), 3);

        list.remove_url(&url);
        assert_eq!(
            list.urls(),
            vec![Url::new("http://other.com"), Url::new("http://dup.com")]
        );
    }

    #[test]
    fn test_clear() {
        let list = BlackList::new();
        list.add_url(Url::new("a.com"));
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn test_insert_if_absent() {
        let list = BlackList::new();
        assert!(list.insert_if_absent(Url::new("a.com")));
        assert!(!list.insert_if_absent(Url::new("a.com")));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_save_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blacklist.txt");

        let list = BlackList::new();
        list.add_url(Url::new("http://a.com"));
        list.add_url(Url::new("file:///tmp/x"));
        list.save(&path).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "http://a.com\nfile:///tmp/x\n"
        );
    }

    #[test]
    fn test_load_skips_empty_lines_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blacklist.txt");
        fs::write(&path, "a.com\n\nb.com\n\n").unwrap();

        let list = BlackList::new();
        list.add_url(Url::new("existing.com"));
        assert_eq!(list.load(&path).unwrap(), 2);
        assert_eq!(
            list.urls(),
            vec![Url::new("existing.com"), Url::new("a.com"), Url::new("b.com")]
        );
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let list = BlackList::load_or_default(&dir.path().join("missing.txt"));
        assert!(list.is_empty());
    }
}
