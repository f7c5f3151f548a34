/// Box-drawing glyphs used for every rendered tree.
pub const FORK: char = '\u{251C}';
pub const LAST: char = '\u{2514}';
pub const VERTICAL: char = '\u{2502}';
pub const HORIZONTAL: char = '\u{2500}';

/// Connector in front of a child that still has siblings below it: `├── `
pub const FORK_CONNECTOR: &str = "\u{251C}\u{2500}\u{2500} ";
/// Connector in front of the final child of a node: `└── `
pub const LAST_CONNECTOR: &str = "\u{2514}\u{2500}\u{2500} ";
/// Continuation column under a non-last child: `│   `
pub const VERTICAL_SEGMENT: &str = "\u{2502}   ";
/// Continuation column under a last child: four spaces
pub const BLANK_SEGMENT: &str = "    ";

/// Helper for picking the glyph material for a branch
pub struct BranchGlyphs;

impl BranchGlyphs {
    /// The branch connector written between the prefix and a child's label.
    pub fn connector(is_last: bool) -> &'static str {
        if is_last {
            LAST_CONNECTOR
        } else {
            FORK_CONNECTOR
        }
    }

    /// The segment a child contributes to the prefix of its own children.
    ///
    /// Only a non-last child keeps the vertical bar, because a sibling line
    /// still follows its subtree.
    pub fn continuation(is_last: bool) -> &'static str {
        if is_last {
            BLANK_SEGMENT
        } else {
            VERTICAL_SEGMENT
        }
    }
}
