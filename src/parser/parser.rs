use anyhow::{bail, Context, Result};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

use crate::parser::types::*;

/// Builds [`TreeNode`]s from JSON documents and directories
pub struct TreeParser;

impl TreeParser {
    pub fn parse_json(input: &str) -> Result<TreeNode> {
        let raw: RawNode =
            serde_json::from_str(input).context("input is not a valid JSON tree")?;
        Ok(raw.into())
    }

    /// Parse a JSON tree from `path`, or from stdin when `path` is `-`.
    pub fn parse_file(path: &Path) -> Result<TreeNode> {
        let content = if path == Path::new("-") {
            io::read_to_string(io::stdin()).context("Failed to read tree from stdin")?
        } else {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?
        };

        let tree = Self::parse_json(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        debug!(
            path = %path.display(),
            nodes = tree.node_count(),
            "parsed JSON tree"
        );
        Ok(tree)
    }

    /// Build a tree mirroring the directory at `path`.
    ///
    /// Entries are sorted by name. Symlinks are listed but never followed,
    /// and names starting with `.` are skipped unless `show_hidden` is set.
    pub fn parse_directory(path: &Path, show_hidden: bool) -> Result<TreeNode> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if !metadata.is_dir() {
            bail!("{} is not a directory", path.display());
        }

        let mut root = TreeNode::leaf(path.display().to_string());
        root.children = Self::read_entries(path, show_hidden)?;
        debug!(
            path = %path.display(),
            nodes = root.node_count(),
            "walked directory"
        );
        Ok(root)
    }

    fn read_entries(dir: &Path, show_hidden: bool) -> Result<Vec<TreeNode>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir).with_context(|| format!("Failed to list {}", dir.display()))? {
            let entry = entry.with_context(|| format!("Failed to list {}", dir.display()))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if !show_hidden && name.starts_with('.') {
                continue;
            }
            entries.push((name, entry.path()));
        }
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        let mut children = Vec::with_capacity(entries.len());
        for (name, path) in entries {
            let file_type = fs::symlink_metadata(&path)
                .with_context(|| format!("Failed to stat {}", path.display()))?
                .file_type();

            let mut node = TreeNode::leaf(name);
            if file_type.is_dir() {
                match Self::read_entries(&path, show_hidden) {
                    Ok(grandchildren) => node.children = grandchildren,
                    Err(err) => warn!(path = %path.display(), "skipping unreadable directory: {err:#}"),
                }
            }
            children.push(node);
        }

        Ok(children)
    }
}
