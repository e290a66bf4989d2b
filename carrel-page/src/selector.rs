//! Small CSS selector engine for the in-memory document tree.
//!
//! Supports the subset the styling manifest actually uses: compound
//! selectors built from a tag name, `.class`, `[attr]`, `[attr="value"]`
//! and `:not(<compound>)`, combined with the descendant combinator
//! (whitespace). The browser document never goes through this engine; it
//! exists so the manifest can be validated at load and so [`crate::memdom`]
//! matches the way the real `querySelectorAll` would.

use thiserror::Error;

use crate::tree::ElementHandle;

/// Selector text the subset grammar cannot express.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty selector")]
    Empty,
    #[error("unexpected character `{0}`")]
    UnexpectedChar(char),
    #[error("unsupported pseudo-class `:{0}`")]
    UnsupportedPseudo(String),
    #[error("unterminated `{0}`")]
    Unterminated(&'static str),
    #[error("expected a name after `{0}`")]
    MissingName(char),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttrTest {
    name: String,
    value: Option<String>,
}

/// One compound selector: every part must match the same element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Compound {
    tag: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrTest>,
    not: Vec<Compound>,
}

/// A parsed selector: a chain of compounds joined by descendant
/// combinators, the last being the subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    compounds: Vec<Compound>,
}

impl Selector {
    /// Parse selector text.
    ///
    /// # Errors
    ///
    /// Returns an error when the text falls outside the supported subset.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut cur = Cursor {
            rest: input.trim(),
        };
        if cur.rest.is_empty() {
            return Err(ParseError::Empty);
        }

        let mut compounds = Vec::new();
        loop {
            compounds.push(parse_compound(&mut cur)?);
            let mut saw_space = false;
            while matches!(cur.peek(), Some(c) if c.is_whitespace()) {
                cur.bump();
                saw_space = true;
            }
            match cur.peek() {
                None => break,
                Some(c) if !saw_space => return Err(ParseError::UnexpectedChar(c)),
                Some(_) => {}
            }
        }
        Ok(Self { compounds })
    }

    /// Whether `el` matches this selector in its tree context.
    ///
    /// The subject compound must match `el`; each earlier compound must
    /// match some strict ancestor, outermost first. For pure descendant
    /// chains the greedy nearest-ancestor walk is exact.
    pub fn matches<E: ElementHandle>(&self, el: &E) -> bool {
        let Some((subject, ancestors)) = self.compounds.split_last() else {
            return false;
        };
        if !compound_matches(subject, el) {
            return false;
        }

        let mut remaining = ancestors.len();
        let mut cursor = el.parent();
        while remaining > 0 {
            let Some(node) = cursor else {
                return false;
            };
            if compound_matches(&ancestors[remaining - 1], &node) {
                remaining -= 1;
            }
            cursor = node.parent();
        }
        true
    }
}

fn compound_matches<E: ElementHandle>(compound: &Compound, el: &E) -> bool {
    if let Some(tag) = &compound.tag
        && el.tag_name() != *tag
    {
        return false;
    }
    compound.classes.iter().all(|class| el.has_class(class))
        && compound.attrs.iter().all(|test| match el.attr(&test.name) {
            Some(actual) => test.value.as_ref().is_none_or(|want| *want == actual),
            None => false,
        })
        && compound.not.iter().all(|inner| !compound_matches(inner, el))
}

struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let mut chars = self.rest.chars();
        let c = chars.next()?;
        self.rest = chars.as_str();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    // [A-Za-z0-9_-]+, possibly empty
    fn take_ident(&mut self) -> &'a str {
        let end = self
            .rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
            .unwrap_or(self.rest.len());
        let (ident, rest) = self.rest.split_at(end);
        self.rest = rest;
        ident
    }
}

fn parse_compound(cur: &mut Cursor<'_>) -> Result<Compound, ParseError> {
    let mut compound = Compound::default();
    let mut saw_part = false;

    let tag = cur.take_ident();
    if !tag.is_empty() {
        compound.tag = Some(tag.to_ascii_lowercase());
        saw_part = true;
    }

    loop {
        match cur.peek() {
            Some('.') => {
                cur.bump();
                let class = cur.take_ident();
                if class.is_empty() {
                    return Err(ParseError::MissingName('.'));
                }
                compound.classes.push(class.to_string());
                saw_part = true;
            }
            Some('[') => {
                cur.bump();
                compound.attrs.push(parse_attr(cur)?);
                saw_part = true;
            }
            Some(':') => {
                cur.bump();
                let pseudo = cur.take_ident();
                if pseudo != "not" {
                    return Err(ParseError::UnsupportedPseudo(pseudo.to_string()));
                }
                if !cur.eat('(') {
                    return Err(ParseError::Unterminated(":not("));
                }
                let inner = parse_compound(cur)?;
                if !cur.eat(')') {
                    return Err(ParseError::Unterminated(":not("));
                }
                compound.not.push(inner);
                saw_part = true;
            }
            _ => break,
        }
    }

    if saw_part {
        Ok(compound)
    } else {
        match cur.peek() {
            Some(c) => Err(ParseError::UnexpectedChar(c)),
            None => Err(ParseError::Empty),
        }
    }
}

fn parse_attr(cur: &mut Cursor<'_>) -> Result<AttrTest, ParseError> {
    let name = cur.take_ident();
    if name.is_empty() {
        return Err(ParseError::MissingName('['));
    }
    let value = if cur.eat('=') {
        if !cur.eat('"') {
            return Err(ParseError::Unterminated("attribute value"));
        }
        let Some(end) = cur.rest.find('"') else {
            return Err(ParseError::Unterminated("attribute value"));
        };
        let (value, rest) = cur.rest.split_at(end);
        cur.rest = rest;
        cur.bump(); // closing quote
        Some(value.to_string())
    } else {
        None
    };
    if !cur.eat(']') {
        return Err(ParseError::Unterminated("["));
    }
    Ok(AttrTest {
        name: name.to_string(),
        value,
    })
}
