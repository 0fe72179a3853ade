//! Selector shorthand
//!
//! `tag.class#id` strings. Tokens are maximal runs without whitespace,
//! `.` or `#`, optionally led by one `.` or `#`. The first token names the
//! tag only when it is unprefixed; later unprefixed tokens are ignored.

use crate::DocumentModel;

/// One token of a selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorToken<'a> {
    Tag(&'a str),
    Class(&'a str),
    Id(&'a str),
}

/// Parsed selector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector<'a> {
    tokens: Vec<SelectorToken<'a>>,
}

impl<'a> Selector<'a> {
    /// Tokenize a selector. Never fails; text that forms no token is dropped.
    pub fn parse(input: &'a str) -> Self {
        let mut tokens = Vec::new();
        for (index, chunk) in split_chunks(input).into_iter().enumerate() {
            let token = if let Some(name) = chunk.strip_prefix('.') {
                SelectorToken::Class(name)
            } else if let Some(name) = chunk.strip_prefix('#') {
                SelectorToken::Id(name)
            } else if index == 0 {
                SelectorToken::Tag(chunk)
            } else {
                tracing::trace!("Ignoring selector word {:?} in {:?}", chunk, input);
                continue;
            };
            tokens.push(token);
        }
        Self { tokens }
    }

    pub fn tokens(&self) -> &[SelectorToken<'a>] {
        &self.tokens
    }

    /// Explicit tag name, if the selector starts with one
    pub fn tag(&self) -> Option<&'a str> {
        match self.tokens.first() {
            Some(SelectorToken::Tag(tag)) => Some(*tag),
            _ => None,
        }
    }

    pub fn classes(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.tokens.iter().filter_map(|t| match t {
            SelectorToken::Class(c) => Some(*c),
            _ => None,
        })
    }

    /// Effective id: the last one wins
    pub fn id(&self) -> Option<&'a str> {
        self.tokens.iter().rev().find_map(|t| match t {
            SelectorToken::Id(id) => Some(*id),
            _ => None,
        })
    }
}

fn is_separator(c: char) -> bool {
    c == '.' || c == '#'
}

fn split_chunks(input: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c.is_whitespace() {
            continue;
        }
        let mut end = start + c.len_utf8();
        while let Some(&(i, next)) = chars.peek() {
            if next.is_whitespace() || is_separator(next) {
                break;
            }
            end = i + next.len_utf8();
            chars.next();
        }
        // a lone `.` or `#` names nothing
        if !is_separator(c) || end > start + 1 {
            chunks.push(&input[start..end]);
        }
    }
    chunks
}

/// Create the element a selector describes.
///
/// Falls back to `default_tag` when the selector names no tag. Classes and
/// ids are applied in selector order, so a repeated id keeps the last one.
pub fn parse_selector<D: DocumentModel>(
    doc: &mut D,
    input: &str,
    default_tag: &str,
) -> Result<D::Node, D::Error> {
    let selector = Selector::parse(input);
    let element = doc.create_element(selector.tag().unwrap_or(default_tag))?;

    for token in selector.tokens() {
        match token {
            SelectorToken::Tag(_) => {}
            SelectorToken::Class(class) => doc.add_class(&element, class)?,
            SelectorToken::Id(id) => doc.set_attribute(&element, "id", id)?,
        }
    }
    Ok(element)
}
