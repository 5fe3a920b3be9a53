//! In-memory element tree for page fragments
//!
//! The presentation renderers operate on this tree the way the site's
//! scripts operate on the DOM: look a container up by id or class, check
//! its children, append built fragments. Serialization to HTML escapes
//! text and attribute values, so no record content can inject markup.

/// Elements serialized without a closing tag
const VOID_TAGS: &[&str] = &["img", "meta", "link", "br", "hr", "input"];

/// A single element node: tag, identity, classes, attributes, text, children
#[derive(Debug, Clone, Default)]
pub struct Element {
    pub tag: &'static str,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: Vec<(&'static str, String)>,
    pub style: Option<String>,
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            ..Self::default()
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Chaining builders
    // ─────────────────────────────────────────────────────────────

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(&class.into());
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    // ─────────────────────────────────────────────────────────────
    // Mutation and queries
    // ─────────────────────────────────────────────────────────────

    pub fn append(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Add a class unless the element already carries it
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Depth-first search (self included) for the element with `id`
    pub fn find_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_id_mut(id))
    }

    /// Depth-first search (self included) for the first element with `class`
    pub fn find_class_mut(&mut self, class: &str) -> Option<&mut Element> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|c| c.find_class_mut(class))
    }

    /// Visit every element in document order, self included
    pub fn visit(&self, f: &mut impl FnMut(&Element)) {
        f(self);
        for child in &self.children {
            child.visit(f);
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Serialization
    // ─────────────────────────────────────────────────────────────

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        if let Some(id) = &self.id {
            push_attr(out, "id", id);
        }
        if !self.classes.is_empty() {
            push_attr(out, "class", &self.classes.join(" "));
        }
        for (name, value) in &self.attrs {
            push_attr(out, name, value);
        }
        if let Some(style) = &self.style {
            push_attr(out, "style", style);
        }
        out.push('>');
        if VOID_TAGS.contains(&self.tag) {
            return;
        }
        if let Some(text) = &self.text {
            push_escaped_text(out, text);
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out.push('"');
}

fn push_escaped_text(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}
