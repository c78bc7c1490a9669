//! Detached render-tree nodes produced by the fragment builders.

/// One node of a rendered fragment: a tag, its text content, an
/// optional class list, and child nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub text: String,
    pub classes: Vec<String>,
    pub children: Vec<Element>,
}

impl Default for Element {
    /// The default node kind is an empty paragraph.
    fn default() -> Self {
        Self::new("p")
    }
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            text: String::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// A detached element of `tag` holding `text` and nothing else.
    pub fn text(tag: &str, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::new(tag)
        }
    }

    /// Builder form of [`Element::add_class`].
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Adds `class` unless it is already present; the class list
    /// behaves as a set.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|existing| existing == class)
    }

    pub fn append(&mut self, child: Element) {
        self.children.push(child);
    }
}
