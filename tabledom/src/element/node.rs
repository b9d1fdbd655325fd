use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// A markup node.
///
/// Every element gets a process-unique `id` used to target events and
/// lookups. The id is internal: it is only serialized when the writer is
/// asked for it (see [`crate::HtmlWriter::with_ids`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: String,

    // Attributes, kept in insertion order so serialization is stable
    pub classes: Vec<String>,
    pub attrs: Vec<(String, String)>,
    /// `data-*` attributes without the `data-` prefix.
    pub data: Vec<(String, String)>,

    pub content: Content,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: "div".to_string(),
            classes: Vec::new(),
            attrs: Vec::new(),
            data: Vec::new(),
            content: Content::None,
        }
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            id: generate_id(&tag),
            tag,
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new("p").text(text)
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self::new("button").attr("type", "button").text(label)
    }

    pub fn anchor(href: impl Into<String>) -> Self {
        Self::new("a").attr("href", href)
    }

    /// Tagless wrapper around pre-rendered markup. Serializes as the markup
    /// alone.
    pub fn fragment(markup: impl Into<String>) -> Self {
        Self {
            id: generate_id("fragment"),
            tag: String::new(),
            ..Default::default()
        }
        .raw(markup)
    }

    pub fn is_fragment(&self) -> bool {
        self.tag.is_empty()
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Attributes
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(key, value);
        self
    }

    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_data(key, value);
        self
    }

    /// Tag this element with a `data-element` marker name.
    pub fn marker(self, name: impl Into<String>) -> Self {
        self.data(super::MARKER, name)
    }

    // Content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn raw(mut self, markup: impl Into<String>) -> Self {
        self.content = Content::Raw(markup.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.push_child(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    // Mutation

    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        set_pair(&mut self.attrs, key.into(), value.into());
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        get_pair(&self.attrs, key)
    }

    pub fn set_data(&mut self, key: impl Into<String>, value: impl Into<String>) {
        set_pair(&mut self.data, key.into(), value.into());
    }

    pub fn get_data(&self, key: &str) -> Option<&str> {
        get_pair(&self.data, key)
    }

    /// The `data-element` marker name, if any.
    pub fn marker_name(&self) -> Option<&str> {
        self.get_data(super::MARKER)
    }

    pub fn push_child(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            // Text or raw content is replaced by children
            _ => self.content = Content::Children(vec![child]),
        }
    }

    /// Replace all children at once.
    pub fn set_children(&mut self, children: Vec<Element>) {
        self.content = Content::Children(children);
    }

    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    pub fn child_elements_mut(&mut self) -> &mut [Element] {
        match &mut self.content {
            Content::Children(children) => children,
            _ => &mut [],
        }
    }

    /// Visit this element and all descendants in document order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Element)) {
        visit(self);
        for child in self.child_elements() {
            child.walk(visit);
        }
    }
}

fn set_pair(pairs: &mut Vec<(String, String)>, key: String, value: String) {
    match pairs.iter_mut().find(|(k, _)| *k == key) {
        Some((_, v)) => *v = value,
        None => pairs.push((key, value)),
    }
}

fn get_pair<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}
