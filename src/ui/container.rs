use anyhow::Result;

use crate::markup::{self, Node, escape_text};

/// A display region owned by exactly one component.
///
/// Both operations discard whatever was shown before; there is no partial update.
pub trait Container {
    /// Element id this container is bound to
    fn id(&self) -> &str;

    /// Replace the whole content with `nodes` in one step
    fn replace_content(&mut self, nodes: &[Node]) -> Result<()>;

    /// Replace the whole content with a single literal text node
    fn replace_text(&mut self, text: &str) -> Result<()>;
}

/// Container that keeps its content as serialised markup.
/// Backs the native viewer and the tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryContainer {
    id: String,
    html: String,
    replacements: usize,
}

impl MemoryContainer {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Current inner markup
    pub fn html(&self) -> &str {
        &self.html
    }

    /// How many times the content has been replaced
    pub fn replacements(&self) -> usize {
        self.replacements
    }
}

impl Container for MemoryContainer {
    fn id(&self) -> &str {
        &self.id
    }

    fn replace_content(&mut self, nodes: &[Node]) -> Result<()> {
        self.html = markup::to_html(nodes);
        self.replacements += 1;
        Ok(())
    }

    fn replace_text(&mut self, text: &str) -> Result<()> {
        self.html = escape_text(text);
        self.replacements += 1;
        Ok(())
    }
}
