//! # tree-format
//!
//! Render any tree as indented box-drawing text, in the familiar
//! directory-listing style.
//!
//! The renderer never inspects nodes itself. Callers pass the root together
//! with one function giving a node's label and one giving its ordered
//! children, so any tree representation works.
//!
//! ```
//! use tree_format::format_tree;
//!
//! struct Entry {
//!     name: &'static str,
//!     entries: Vec<Entry>,
//! }
//!
//! fn entry(name: &'static str, entries: Vec<Entry>) -> Entry {
//!     Entry { name, entries }
//! }
//!
//! let tree = entry(".", vec![
//!     entry("src", vec![entry("lib.rs", vec![])]),
//!     entry("Cargo.toml", vec![]),
//! ]);
//!
//! let output = format_tree(&tree, |e| e.name, |e| e.entries.iter());
//! assert_eq!(output, ".\n├── src\n│   └── lib.rs\n└── Cargo.toml\n");
//! ```
//!
//! Input must be a finite, acyclic tree. Labels are inserted verbatim, so a
//! label containing a newline will break the alignment of the lines below it.

pub mod parser;
pub mod renderer;

pub use parser::{TreeNode, TreeParser};
pub use renderer::{
    format_tree, print_tree, tree_lines, try_format_tree, write_tree, FnSource, RenderContext,
    TreeLines, TreeRenderer, TreeSource, TryFnSource,
};
