use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;

use crate::renderer::components::BranchGlyphs;

/// Capability interface the renderer walks a tree through
///
/// The renderer never looks inside a node. It only asks the source for the
/// node's label and its ordered children, once each per visited node, in
/// pre-order. Sources must describe a finite, acyclic tree: a source that
/// keeps producing children will make rendering run forever.
pub trait TreeSource {
    /// Caller-owned node value (often a reference into the caller's tree)
    type Node;
    /// Text displayed for a node
    type Label: fmt::Display;
    /// Ordered children of a node
    type Children: IntoIterator<Item = Self::Node>;
    /// Error raised by the caller's functions, passed through untouched
    type Error;

    fn label(&mut self, node: &Self::Node) -> Result<Self::Label, Self::Error>;

    fn children(&mut self, node: &Self::Node) -> Result<Self::Children, Self::Error>;
}

/// [`TreeSource`] built from a label closure and a children closure
pub struct FnSource<N, L, C> {
    label: L,
    children: C,
    _node: PhantomData<fn(&N)>,
}

impl<N, L, C> FnSource<N, L, C> {
    pub fn new<S, I>(label: L, children: C) -> Self
    where
        L: FnMut(&N) -> S,
        C: FnMut(&N) -> I,
    {
        Self {
            label,
            children,
            _node: PhantomData,
        }
    }
}

impl<N, L, C, S, I> TreeSource for FnSource<N, L, C>
where
    L: FnMut(&N) -> S,
    S: fmt::Display,
    C: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    type Node = N;
    type Label = S;
    type Children = I;
    type Error = Infallible;

    fn label(&mut self, node: &N) -> Result<S, Infallible> {
        Ok((self.label)(node))
    }

    fn children(&mut self, node: &N) -> Result<I, Infallible> {
        Ok((self.children)(node))
    }
}

/// [`TreeSource`] built from closures that may fail
pub struct TryFnSource<N, L, C> {
    label: L,
    children: C,
    _node: PhantomData<fn(&N)>,
}

impl<N, L, C> TryFnSource<N, L, C> {
    pub fn new<S, I, E>(label: L, children: C) -> Self
    where
        L: FnMut(&N) -> Result<S, E>,
        C: FnMut(&N) -> Result<I, E>,
    {
        Self {
            label,
            children,
            _node: PhantomData,
        }
    }
}

impl<N, L, C, S, I, E> TreeSource for TryFnSource<N, L, C>
where
    L: FnMut(&N) -> Result<S, E>,
    S: fmt::Display,
    C: FnMut(&N) -> Result<I, E>,
    I: IntoIterator<Item = N>,
{
    type Node = N;
    type Label = S;
    type Children = I;
    type Error = E;

    fn label(&mut self, node: &N) -> Result<S, E> {
        (self.label)(node)
    }

    fn children(&mut self, node: &N) -> Result<I, E> {
        (self.children)(node)
    }
}

/// Prefix state threaded through a traversal
///
/// Holds the guide material inherited from the ancestors of the node being
/// rendered. Each level appends one continuation segment; leaving the level
/// truncates it again.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    prefix: String,
    levels: Vec<usize>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of levels below the root the context currently sits at
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Line for a child at the current level: prefix, connector, label.
    pub fn branch_line(&self, is_last: bool, label: impl fmt::Display) -> String {
        format!(
            "{}{}{}",
            self.prefix,
            BranchGlyphs::connector(is_last),
            label
        )
    }

    /// Enter the children of a child rendered with `is_last`.
    pub fn push_level(&mut self, is_last: bool) {
        self.levels.push(self.prefix.len());
        self.prefix.push_str(BranchGlyphs::continuation(is_last));
    }

    pub fn pop_level(&mut self) {
        if let Some(len) = self.levels.pop() {
            self.prefix.truncate(len);
        }
    }
}
