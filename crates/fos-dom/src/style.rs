//! Inline style declaration
//!
//! `element.style`: ordered declarations with an optional `!important`
//! priority, readable as a single `cssText` string or per property.

use std::fmt;

/// Declaration priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Priority {
    #[default]
    Normal,
    Important,
}

impl Priority {
    /// CSSOM priority string (`""` or `"important"`)
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "",
            Self::Important => "important",
        }
    }
}

/// Single inline declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDeclaration {
    pub name: String,
    pub value: String,
    pub priority: Priority,
}

impl fmt::Display for StyleDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.priority {
            Priority::Normal => write!(f, "{}: {};", self.name, self.value),
            Priority::Important => write!(f, "{}: {} !important;", self.name, self.value),
        }
    }
}

/// Inline style of one element
#[derive(Debug, Clone, Default)]
pub struct CssStyleDeclaration {
    declarations: Vec<StyleDeclaration>,
    /// Text assigned through `set_css_text`, served verbatim until a
    /// per-property change forces re-serialization.
    raw: Option<String>,
}

impl CssStyleDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialized declaration block
    pub fn css_text(&self) -> String {
        if let Some(raw) = &self.raw {
            return raw.clone();
        }
        self.declarations
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Replace the whole declaration block
    pub fn set_css_text(&mut self, text: &str) {
        self.declarations = parse_declarations(text);
        self.raw = Some(text.to_string());
    }

    /// Set one property. An empty value removes it.
    pub fn set_property(&mut self, name: &str, value: &str, priority: Priority) {
        let value = value.trim();
        if value.is_empty() {
            self.remove_property(name);
            return;
        }
        self.raw = None;
        match self.declarations.iter_mut().find(|d| d.name == name) {
            Some(decl) => {
                decl.value = value.to_string();
                decl.priority = priority;
            }
            None => self.declarations.push(StyleDeclaration {
                name: name.to_string(),
                value: value.to_string(),
                priority,
            }),
        }
    }

    /// Property value, or `""` when unset
    pub fn get_property_value(&self, name: &str) -> &str {
        self.find(name).map(|d| d.value.as_str()).unwrap_or("")
    }

    /// Property priority (`Normal` when unset)
    pub fn get_property_priority(&self, name: &str) -> Priority {
        self.find(name).map(|d| d.priority).unwrap_or_default()
    }

    /// Remove a property, returning its old value
    pub fn remove_property(&mut self, name: &str) -> Option<String> {
        let index = self.declarations.iter().position(|d| d.name == name)?;
        self.raw = None;
        Some(self.declarations.remove(index).value)
    }

    fn find(&self, name: &str) -> Option<&StyleDeclaration> {
        self.declarations.iter().find(|d| d.name == name)
    }

    /// Number of declarations
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StyleDeclaration> {
        self.declarations.iter()
    }
}

/// Parse a `name: value; ...` block.
///
/// Semicolons inside parentheses or quotes do not end a declaration.
/// Malformed entries are skipped.
fn parse_declarations(text: &str) -> Vec<StyleDeclaration> {
    let mut out: Vec<StyleDeclaration> = Vec::new();
    for chunk in split_top_level(text, ';') {
        let Some((name, value)) = chunk.split_once(':') else {
            continue;
        };
        let name = name.trim();
        let name = if name.starts_with("--") {
            name.to_string()
        } else {
            name.to_ascii_lowercase()
        };
        let (value, priority) = strip_important(value.trim());
        if name.is_empty() || value.is_empty() {
            continue;
        }
        let decl = StyleDeclaration {
            name,
            value: value.to_string(),
            priority,
        };
        match out.iter_mut().find(|d| d.name == decl.name) {
            Some(existing) => *existing = decl,
            None => out.push(decl),
        }
    }
    out
}

fn strip_important(value: &str) -> (&str, Priority) {
    const MARKER: &str = "important";
    if let Some(head) = value.len().checked_sub(MARKER.len()).and_then(|i| value.get(..i)) {
        let tail = &value[head.len()..];
        if tail.eq_ignore_ascii_case(MARKER) {
            if let Some(rest) = head.trim_end().strip_suffix('!') {
                return (rest.trim_end(), Priority::Important);
            }
        }
    }
    (value, Priority::Normal)
}

fn split_top_level(text: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;
    for (i, c) in text.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, c) if c == sep && depth == 0 => {
                parts.push(&text[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}
