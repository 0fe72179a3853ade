//! Markup arguments
//!
//! The heterogeneous list handed to the engine, modelled as a closed sum.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use regex::Regex;

use crate::{Bindings, Function};

/// Where construction happens: a selector for a new element, or an
/// existing node to augment.
#[derive(Debug, Clone)]
pub enum Target<N> {
    Selector(String),
    Node(N),
}

impl<N> From<&str> for Target<N> {
    fn from(s: &str) -> Self {
        Target::Selector(s.to_string())
    }
}

impl<N> From<String> for Target<N> {
    fn from(s: String) -> Self {
        Target::Selector(s)
    }
}

/// `config.markup`: nothing, a single text, or an argument list
#[derive(Debug, Clone)]
pub enum Markup<N> {
    Absent,
    Text(String),
    List(Vec<Arg<N>>),
}

impl<N> Default for Markup<N> {
    fn default() -> Self {
        Markup::Absent
    }
}

impl<N> From<&str> for Markup<N> {
    fn from(s: &str) -> Self {
        Markup::Text(s.to_string())
    }
}

impl<N> From<String> for Markup<N> {
    fn from(s: String) -> Self {
        Markup::Text(s)
    }
}

impl<N> From<Vec<Arg<N>>> for Markup<N> {
    fn from(args: Vec<Arg<N>>) -> Self {
        Markup::List(args)
    }
}

/// A child element to build: target plus its own markup
#[derive(Debug, Clone)]
pub struct Shorthand<N> {
    pub target: Target<N>,
    pub markup: Vec<Arg<N>>,
}

impl<N> Shorthand<N> {
    pub fn new(target: impl Into<Target<N>>, markup: Vec<Arg<N>>) -> Self {
        Self {
            target: target.into(),
            markup,
        }
    }
}

/// Values stringified into text nodes
#[derive(Debug, Clone)]
pub enum Scalar {
    Bool(bool),
    Number(f64),
    Date(DateTime<FixedOffset>),
    Pattern(Regex),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Number(n) => f.write_str(&fos_dom::format_number(*n)),
            Scalar::Date(d) => write!(f, "{}", d.format("%a %b %d %Y %H:%M:%S GMT%z")),
            Scalar::Pattern(re) => write!(f, "/{}/", re.as_str()),
        }
    }
}

/// One markup argument
#[derive(Debug, Clone)]
pub enum Arg<N> {
    /// Skipped entirely
    Absent,
    /// Child elements built recursively and appended in order
    Shorthand(Vec<Shorthand<N>>),
    /// Appended as a text node
    Text(String),
    /// Existing node, appended as-is
    Node(N),
    /// Appended as a text node of its string form
    Scalar(Scalar),
    /// Keys applied to the element in order
    Bindings(Bindings),
    /// Has no meaning in markup position; ignored
    Function(Function),
}

/// Classification of a markup argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    Absent,
    NestedShorthand,
    Text,
    Element,
    Scalar,
    Bindings,
    Ignored,
}

impl<N> Arg<N> {
    pub fn kind(&self) -> ArgKind {
        match self {
            Arg::Absent => ArgKind::Absent,
            Arg::Shorthand(_) => ArgKind::NestedShorthand,
            Arg::Text(_) => ArgKind::Text,
            Arg::Node(_) => ArgKind::Element,
            Arg::Scalar(_) => ArgKind::Scalar,
            Arg::Bindings(_) => ArgKind::Bindings,
            Arg::Function(_) => ArgKind::Ignored,
        }
    }
}

impl<N> From<&str> for Arg<N> {
    fn from(s: &str) -> Self {
        Arg::Text(s.to_string())
    }
}

impl<N> From<String> for Arg<N> {
    fn from(s: String) -> Self {
        Arg::Text(s)
    }
}

impl<N> From<bool> for Arg<N> {
    fn from(b: bool) -> Self {
        Arg::Scalar(Scalar::Bool(b))
    }
}

impl<N> From<f64> for Arg<N> {
    fn from(n: f64) -> Self {
        Arg::Scalar(Scalar::Number(n))
    }
}

impl<N> From<i32> for Arg<N> {
    fn from(n: i32) -> Self {
        Arg::Scalar(Scalar::Number(f64::from(n)))
    }
}

impl<N> From<DateTime<FixedOffset>> for Arg<N> {
    fn from(d: DateTime<FixedOffset>) -> Self {
        Arg::Scalar(Scalar::Date(d))
    }
}

impl<N> From<Regex> for Arg<N> {
    fn from(re: Regex) -> Self {
        Arg::Scalar(Scalar::Pattern(re))
    }
}

impl<N> From<Scalar> for Arg<N> {
    fn from(s: Scalar) -> Self {
        Arg::Scalar(s)
    }
}

impl<N> From<Bindings> for Arg<N> {
    fn from(b: Bindings) -> Self {
        Arg::Bindings(b)
    }
}

impl<N> From<Function> for Arg<N> {
    fn from(f: Function) -> Self {
        Arg::Function(f)
    }
}

impl<N> From<Vec<Shorthand<N>>> for Arg<N> {
    fn from(tuples: Vec<Shorthand<N>>) -> Self {
        Arg::Shorthand(tuples)
    }
}

impl<N, T: Into<Arg<N>>> From<Option<T>> for Arg<N> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Arg::Absent, Into::into)
    }
}

impl<N> From<Shorthand<N>> for Arg<N> {
    fn from(tuple: Shorthand<N>) -> Self {
        Arg::Shorthand(vec![tuple])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_kinds() {
        let args: Vec<Arg<u32>> = vec![
            Arg::Absent,
            Shorthand::new("h1", vec![]).into(),
            "text".into(),
            Arg::Node(7),
            true.into(),
            Bindings::new().into(),
            Function::computed(|| 1).into(),
        ];
        let kinds: Vec<ArgKind> = args.iter().map(Arg::kind).collect();
        assert_eq!(
            kinds,
            vec![
                ArgKind::Absent,
                ArgKind::NestedShorthand,
                ArgKind::Text,
                ArgKind::Element,
                ArgKind::Scalar,
                ArgKind::Bindings,
                ArgKind::Ignored,
            ]
        );
    }

    #[test]
    fn test_scalar_display() {
        assert_eq!(Scalar::Bool(false).to_string(), "false");
        assert_eq!(Scalar::Number(4.0).to_string(), "4");
        assert_eq!(Scalar::Number(2.5).to_string(), "2.5");
        assert_eq!(Scalar::Pattern(Regex::new("hello").unwrap()).to_string(), "/hello/");

        let utc = FixedOffset::east_opt(0).unwrap();
        let date = utc.with_ymd_and_hms(2001, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(
            Scalar::Date(date).to_string(),
            "Mon Jan 15 2001 00:00:00 GMT+0000"
        );
    }
}
