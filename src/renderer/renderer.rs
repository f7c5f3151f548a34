use std::convert::Infallible;
use std::fmt;
use std::io;
use std::iter::Peekable;

use tracing::debug;

use crate::renderer::traits::*;

/// Renders a [`TreeSource`] as box-drawing text
pub struct TreeRenderer;

impl TreeRenderer {
    /// Render the whole tree, one line per node, each terminated by `\n`.
    ///
    /// The first error produced by the source is returned as is and the
    /// partially built output is dropped.
    pub fn render<S: TreeSource>(&self, source: S, root: S::Node) -> Result<String, S::Error> {
        let mut output = String::new();
        let mut count = 0usize;

        for line in self.lines(source, root) {
            output.push_str(&line?);
            output.push('\n');
            count += 1;
        }

        debug!(lines = count, bytes = output.len(), "rendered tree");
        Ok(output)
    }

    /// Stream the rendered lines lazily, without trailing newlines.
    pub fn lines<S: TreeSource>(&self, source: S, root: S::Node) -> TreeLines<S> {
        TreeLines {
            source,
            root: Some(root),
            stack: Vec::new(),
            context: RenderContext::new(),
            done: false,
        }
    }
}

/// Lazy pre-order walk producing one rendered line per node
///
/// Uses an explicit stack of child iterators, so tree depth is not limited by
/// the call stack. Yields `None` forever once the source has failed.
pub struct TreeLines<S: TreeSource> {
    source: S,
    root: Option<S::Node>,
    stack: Vec<Peekable<<S::Children as IntoIterator>::IntoIter>>,
    context: RenderContext,
    done: bool,
}

impl<S: TreeSource> TreeLines<S> {
    fn advance(&mut self) -> Option<Result<String, S::Error>> {
        if let Some(root) = self.root.take() {
            return Some(self.enter_root(root));
        }

        loop {
            let frame = self.stack.last_mut()?;
            let Some(child) = frame.next() else {
                self.stack.pop();
                // The root frame never pushed a prefix level
                if !self.stack.is_empty() {
                    self.context.pop_level();
                }
                continue;
            };
            let is_last = frame.peek().is_none();
            return Some(self.enter_child(child, is_last));
        }
    }

    fn enter_root(&mut self, root: S::Node) -> Result<String, S::Error> {
        let label = self.source.label(&root)?.to_string();
        let children = self.source.children(&root)?;
        self.stack.push(children.into_iter().peekable());
        Ok(label)
    }

    fn enter_child(&mut self, child: S::Node, is_last: bool) -> Result<String, S::Error> {
        let label = self.source.label(&child)?;
        let line = self.context.branch_line(is_last, label);
        let children = self.source.children(&child)?;
        self.context.push_level(is_last);
        self.stack.push(children.into_iter().peekable());
        Ok(line)
    }
}

impl<S: TreeSource> Iterator for TreeLines<S> {
    type Item = Result<String, S::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let line = self.advance();
        if !matches!(line, Some(Ok(_))) {
            self.done = true;
        }
        line
    }
}

fn unwrap_infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// Format a tree as indented box-drawing text.
///
/// `label` maps a node to the text shown for it and `children` maps a node to
/// its ordered children. Both are called exactly once per node. The output
/// starts with the root's label and ends with a single newline.
///
/// The tree must be finite and acyclic.
pub fn format_tree<N, L, C, S, I>(root: N, label: L, children: C) -> String
where
    L: FnMut(&N) -> S,
    S: fmt::Display,
    C: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    unwrap_infallible(TreeRenderer.render(FnSource::new(label, children), root))
}

/// Like [`format_tree`], for label and children functions that can fail.
///
/// The first error is returned unchanged.
pub fn try_format_tree<N, L, C, S, I, E>(root: N, label: L, children: C) -> Result<String, E>
where
    L: FnMut(&N) -> Result<S, E>,
    S: fmt::Display,
    C: FnMut(&N) -> Result<I, E>,
    I: IntoIterator<Item = N>,
{
    TreeRenderer.render(TryFnSource::new(label, children), root)
}

/// Lines of [`format_tree`], produced on demand and without newlines.
pub fn tree_lines<N, L, C, S, I>(root: N, label: L, children: C) -> impl Iterator<Item = String>
where
    L: FnMut(&N) -> S,
    S: fmt::Display,
    C: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    TreeRenderer
        .lines(FnSource::new(label, children), root)
        .map(unwrap_infallible)
}

/// Stream the formatted tree into `writer`.
pub fn write_tree<W, N, L, C, S, I>(mut writer: W, root: N, label: L, children: C) -> io::Result<()>
where
    W: io::Write,
    L: FnMut(&N) -> S,
    S: fmt::Display,
    C: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    for line in tree_lines(root, label, children) {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()
}

/// Print the formatted tree to standard output.
pub fn print_tree<N, L, C, S, I>(root: N, label: L, children: C)
where
    L: FnMut(&N) -> S,
    S: fmt::Display,
    C: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    print!("{}", format_tree(root, label, children));
}
