use anyhow::{Result, anyhow};
use web_sys::Document;

use crate::markup::{Element, Node};
use crate::ui::container::Container;

/// Container bound to a live element of the page.
///
/// The markup tree is turned into DOM nodes with `create_element` / `create_text_node`;
/// `innerHTML` is never written, so server strings cannot inject markup.
pub struct DomContainer {
    id: String,
    document: Document,
    element: web_sys::Element,
}

impl DomContainer {
    /// Look up `id` in `document`. The element must exist before the first event.
    pub fn bind(document: &Document, id: &str) -> Result<Self> {
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| anyhow!("document has no element with id '{}'", id))?;
        Ok(Self {
            id: id.to_string(),
            document: document.clone(),
            element,
        })
    }

    fn build_node(&self, node: &Node) -> Result<web_sys::Node> {
        match node {
            Node::Text(text) => Ok(self.document.create_text_node(text).into()),
            Node::Element(element) => Ok(self.build_element(element)?.into()),
        }
    }

    fn build_element(&self, element: &Element) -> Result<web_sys::Element> {
        let dom = self
            .document
            .create_element(element.tag)
            .map_err(|e| anyhow!("create_element({}) failed: {:?}", element.tag, e))?;
        for (name, value) in &element.attrs {
            dom.set_attribute(name, value)
                .map_err(|e| anyhow!("set_attribute({}) failed: {:?}", name, e))?;
        }
        for child in &element.children {
            dom.append_child(&self.build_node(child)?)
                .map_err(|e| anyhow!("append_child failed: {:?}", e))?;
        }
        Ok(dom)
    }
}

impl Container for DomContainer {
    fn id(&self) -> &str {
        &self.id
    }

    fn replace_content(&mut self, nodes: &[Node]) -> Result<()> {
        // Build off-document first so a failure leaves the old cards in place
        let fragment = self.document.create_document_fragment();
        for node in nodes {
            fragment
                .append_child(&self.build_node(node)?)
                .map_err(|e| anyhow!("fragment append failed: {:?}", e))?;
        }
        self.element.set_text_content(None);
        self.element
            .append_child(&fragment)
            .map_err(|e| anyhow!("append to #{} failed: {:?}", self.id, e))?;
        Ok(())
    }

    fn replace_text(&mut self, text: &str) -> Result<()> {
        self.element.set_text_content(Some(text));
        Ok(())
    }
}
