#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    #[default]
    None,
    /// Plain text, escaped when serialized.
    Text(String),
    /// Pre-rendered markup inserted verbatim (cell templates).
    Raw(String),
    Children(Vec<super::Element>),
}

impl Content {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Text(s) | Self::Raw(s) => s.is_empty(),
            Self::Children(c) => c.is_empty(),
        }
    }
}
