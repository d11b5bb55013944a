/// Draft state of the input surface: the type selector and the text field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composer {
    kind: String,
    content: String,
}

impl Composer {
    pub fn new(default_kind: impl Into<String>) -> Self {
        Self {
            kind: default_kind.into(),
            content: String::new(),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_kind(&mut self, kind: impl Into<String>) {
        self.kind = kind.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Clear the text field. The type selection is kept.
    pub fn clear_content(&mut self) {
        self.content.clear();
    }
}
