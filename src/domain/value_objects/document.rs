//! Markup-agnostic structured document tree
//!
//! Card and note documents are lowered into this tree before they are handed
//! to a serializer. Attribute order is preserved exactly as inserted.

/// One element of a structured document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentElement {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<DocumentElement>,
}

impl DocumentElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_child(mut self, child: DocumentElement) -> Self {
        self.children.push(child);
        self
    }

    pub fn append_child(&mut self, child: DocumentElement) {
        self.children.push(child);
    }

    /// Shorthand for the `<data name="...">` elements used throughout
    pub fn data(name: impl Into<String>) -> Self {
        Self::new("data").with_attribute("name", name)
    }

    #[cfg(test)]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Depth-first search for the first `data` element with the given name
    #[cfg(test)]
    pub fn find_data(&self, name: &str) -> Option<&DocumentElement> {
        if self.tag == "data" && self.attribute("name") == Some(name) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_data(name))
    }
}
