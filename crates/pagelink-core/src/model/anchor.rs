/// The single output node a render mutates
///
/// Stand-in for the templating engine's anchor element: an ordered
/// attribute list plus child content (whatever markup the caller placed
/// between the tags before this component ran). All render side effects
/// are confined to one `Anchor`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Anchor {
    attributes: Vec<(String, String)>,
    child_content: String,
}

impl Anchor {
    /// Create an empty anchor (no attributes, no child content)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an anchor with initial child content
    pub fn with_child_content(content: impl Into<String>) -> Self {
        Self {
            attributes: Vec::new(),
            child_content: content.into(),
        }
    }

    /// Set an attribute, replacing an existing one of the same name
    /// (attribute order is otherwise preserved)
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(existing) = self.attributes.iter_mut().find(|(n, _)| *n == name) {
            existing.1 = value;
        } else {
            self.attributes.push((name, value));
        }
    }

    /// Get an attribute value by name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Check whether an attribute is present at all (even if blank)
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|(n, _)| n == name)
    }

    /// Get the child content
    pub fn child_content(&self) -> &str {
        &self.child_content
    }

    /// Replace the child content
    pub fn set_child_content(&mut self, content: impl Into<String>) {
        self.child_content = content.into();
    }

    /// Check whether the child content is empty or whitespace-only
    pub fn is_child_content_blank(&self) -> bool {
        self.child_content.trim().is_empty()
    }
}
