use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::path::{Component, Path};

use super::{AggregateRecord, FileRecord};

/// One directory: its own files, its sub-directories, and totals for the
/// whole subtree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryNode {
    pub name: String,
    pub totals: AggregateRecord,
    pub files: Vec<FileRecord>,
    pub children: BTreeMap<String, DirectoryNode>,
}

impl DirectoryNode {
    fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    fn insert(&mut self, dirs: &[String], file: FileRecord) {
        self.totals.add(&file);
        match dirs.split_first() {
            None => self.files.push(file),
            Some((head, rest)) => self
                .children
                .entry(head.clone())
                .or_insert_with(|| Self::named(head))
                .insert(rest, file),
        }
    }

    /// Files directly in this directory, most code lines first.
    #[must_use]
    pub fn files_by_code(&self) -> Vec<&FileRecord> {
        let mut files: Vec<&FileRecord> = self.files.iter().collect();
        sort_by_code(&mut files);
        files
    }

    /// Every file in this subtree, in directory order.
    #[must_use]
    pub fn all_files(&self) -> Vec<&FileRecord> {
        let mut out = Vec::new();
        self.collect_files(&mut out);
        out
    }

    fn collect_files<'a>(&'a self, out: &mut Vec<&'a FileRecord>) {
        out.extend(self.files.iter());
        for child in self.children.values() {
            child.collect_files(out);
        }
    }
}

/// Directory hierarchy of scanned files, indexed by path segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryTree {
    root: DirectoryNode,
}

impl DirectoryTree {
    /// Build the tree from root-relative file records.
    #[must_use]
    pub fn build(files: impl IntoIterator<Item = FileRecord>) -> Self {
        let mut root = DirectoryNode::named(".");
        for file in files {
            let dirs = parent_segments(&file.path);
            root.insert(&dirs, file);
        }
        Self { root }
    }

    #[must_use]
    pub const fn root(&self) -> &DirectoryNode {
        &self.root
    }

    #[must_use]
    pub const fn totals(&self) -> AggregateRecord {
        self.root.totals
    }

    /// The `n` files with the most code lines across the whole tree.
    #[must_use]
    pub fn largest_files(&self, n: usize) -> Vec<&FileRecord> {
        let mut files = self.root.all_files();
        sort_by_code(&mut files);
        files.truncate(n);
        files
    }
}

fn sort_by_code(files: &mut [&FileRecord]) {
    files.sort_by(|a, b| {
        Reverse(a.counts.code)
            .cmp(&Reverse(b.counts.code))
            .then_with(|| a.path.cmp(&b.path))
    });
}

fn normal_segments(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}

fn parent_segments(path: &Path) -> Vec<String> {
    path.parent().map(normal_segments).unwrap_or_default()
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tests;
