/// A KML element: a tag name, ordered child elements, and optional text
/// content.
///
/// This is the sole output type of the encoder. Only `coordinates` elements
/// carry text; every other element carries children. The tree holds no
/// attributes and no namespace declarations, so serializing it is the
/// caller's responsibility (any XML writer will do; the text content is
/// purely numeric and never needs escaping).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    children: Vec<Element>,
    text: Option<String>,
}

impl Element {
    pub(crate) fn new(tag: &'static str, children: Vec<Element>) -> Self {
        Self {
            tag,
            children,
            text: None,
        }
    }

    pub(crate) fn with_text(tag: &'static str, text: String) -> Self {
        Self {
            tag,
            children: Vec::new(),
            text: Some(text),
        }
    }

    /// The element's tag name.
    pub fn tag(&self) -> &str {
        self.tag
    }

    /// The element's child elements, in document order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// The element's text content, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

#[cfg(test)]
impl Element {
    // Minimal serializer for asserting on encoder output. Production
    // serialization is the caller's concern.
    pub(crate) fn to_xml(&self) -> String {
        let mut out = String::new();
        self.write_xml(&mut out);
        out
    }

    fn write_xml(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        out.push('>');
        if let Some(text) = &self.text {
            out.push_str(text);
        }
        for child in &self.children {
            child.write_xml(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}
