//! Owned XML element tree.

/// An XML element with qualified name, ordered attributes, ordered children
/// and optional text content.
///
/// Attribute and child order is preserved and is the serialization order.
///
/// # Examples
///
/// ```
/// use ct2odm::Element;
///
/// let item = Element::new("EnumeratedItem")
///     .attr("CodedValue", "TV1")
///     .child(Element::new("nciodm:CDISCDefinition").text("TDef"));
///
/// assert_eq!(item.attribute("CodedValue"), Some("TV1"));
/// assert_eq!(
///     item.first_child("nciodm:CDISCDefinition").and_then(|e| e.text_content()),
///     Some("TDef")
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
    text: Option<String>,
}

impl Element {
    /// Creates an element with no attributes, children or text.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Adds an attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Sets the text content.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Appends a child element.
    #[must_use]
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Appends a child element in place.
    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Returns the qualified name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the attributes in insertion order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Returns the value of the first attribute called `name`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the child elements.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Iterates over the children called `name`.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Returns the first child called `name`.
    pub fn first_child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Returns the text content, if set.
    pub fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Returns true if the element has no children and no non-empty text.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.text.as_deref().map_or(true, str::is_empty)
    }
}
