//! Structural selectors.
//!
//! Supports the subset the site's markup contract uses: type, `.class`, `#id`,
//! `[attr]`, `[attr=value]` and `:nth-child(n)` compounds joined by the
//! descendant combinator (whitespace).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,

    #[error("unexpected character '{ch}' at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },

    #[error("expected a name at offset {0}")]
    ExpectedName(usize),

    #[error("unterminated attribute selector")]
    UnterminatedAttribute,

    #[error("unsupported pseudo-class ':{0}'")]
    UnsupportedPseudo(String),

    #[error("invalid :nth-child argument '{0}'")]
    InvalidNthChild(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AttributeMatch {
    pub(crate) name: String,
    pub(crate) value: Option<String>,
}

/// One compound selector, e.g. `p.lead[data-x]:nth-child(2)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Compound {
    pub(crate) tag: Option<String>,
    pub(crate) id: Option<String>,
    pub(crate) classes: Vec<String>,
    pub(crate) attributes: Vec<AttributeMatch>,
    pub(crate) nth_child: Option<usize>,
}

/// A parsed selector: compounds from outermost ancestor to the subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub(crate) compounds: Vec<Compound>,
}

impl Selector {
    pub fn parse(input: &str) -> Result<Selector, SelectorError> {
        let mut parser = Parser {
            chars: input.char_indices().collect(),
            pos: 0,
        };
        let mut compounds = Vec::new();

        loop {
            parser.skip_whitespace();
            if parser.peek().is_none() {
                break;
            }
            compounds.push(parser.compound()?);
        }

        if compounds.is_empty() {
            return Err(SelectorError::Empty);
        }
        Ok(Selector { compounds })
    }
}

struct Parser {
    chars: Vec<(usize, char)>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).map(|(_, ch)| *ch)
    }

    fn offset(&self) -> usize {
        self.chars
            .get(self.pos)
            .map(|(offset, _)| *offset)
            .unwrap_or_else(|| self.chars.last().map(|(o, c)| o + c.len_utf8()).unwrap_or(0))
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek();
        if ch.is_some() {
            self.pos += 1;
        }
        ch
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn name(&mut self) -> Result<String, SelectorError> {
        let start = self.offset();
        let mut name = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() || ch == '-' || ch == '_' {
                name.push(ch);
                self.pos += 1;
            } else {
                break;
            }
        }
        if name.is_empty() {
            return Err(SelectorError::ExpectedName(start));
        }
        Ok(name)
    }

    fn compound(&mut self) -> Result<Compound, SelectorError> {
        let mut compound = Compound::default();

        match self.peek() {
            Some('*') => {
                self.pos += 1;
            }
            Some(ch) if ch.is_alphanumeric() => {
                compound.tag = Some(self.name()?.to_ascii_lowercase());
            }
            _ => {}
        }

        while let Some(ch) = self.peek() {
            match ch {
                '.' => {
                    self.pos += 1;
                    compound.classes.push(self.name()?);
                }
                '#' => {
                    self.pos += 1;
                    compound.id = Some(self.name()?);
                }
                '[' => {
                    self.pos += 1;
                    compound.attributes.push(self.attribute()?);
                }
                ':' => {
                    self.pos += 1;
                    compound.nth_child = Some(self.pseudo()?);
                }
                c if c.is_whitespace() => break,
                c => {
                    return Err(SelectorError::UnexpectedChar {
                        ch: c,
                        offset: self.offset(),
                    })
                }
            }
        }

        Ok(compound)
    }

    fn attribute(&mut self) -> Result<AttributeMatch, SelectorError> {
        self.skip_whitespace();
        let name = self.name()?;
        self.skip_whitespace();

        let value = match self.bump() {
            Some(']') => return Ok(AttributeMatch { name, value: None }),
            Some('=') => {
                self.skip_whitespace();
                let value = match self.peek() {
                    Some(quote @ ('"' | '\'')) => {
                        self.pos += 1;
                        let mut value = String::new();
                        loop {
                            match self.bump() {
                                Some(ch) if ch == quote => break,
                                Some(ch) => value.push(ch),
                                None => return Err(SelectorError::UnterminatedAttribute),
                            }
                        }
                        value
                    }
                    _ => self.name()?,
                };
                self.skip_whitespace();
                value
            }
            Some(ch) => {
                return Err(SelectorError::UnexpectedChar {
                    ch,
                    offset: self.offset() - ch.len_utf8(),
                })
            }
            None => return Err(SelectorError::UnterminatedAttribute),
        };

        match self.bump() {
            Some(']') => Ok(AttributeMatch {
                name,
                value: Some(value),
            }),
            _ => Err(SelectorError::UnterminatedAttribute),
        }
    }

    fn pseudo(&mut self) -> Result<usize, SelectorError> {
        let name = self.name()?;
        if name != "nth-child" {
            return Err(SelectorError::UnsupportedPseudo(name));
        }
        if self.bump() != Some('(') {
            return Err(SelectorError::InvalidNthChild(String::new()));
        }

        let mut argument = String::new();
        loop {
            match self.bump() {
                Some(')') => break,
                Some(ch) => argument.push(ch),
                None => return Err(SelectorError::InvalidNthChild(argument)),
            }
        }

        match argument.trim().parse::<usize>() {
            Ok(n) if n >= 1 => Ok(n),
            _ => Err(SelectorError::InvalidNthChild(argument)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_class() {
        let selector = Selector::parse(".hero-title").unwrap();
        assert_eq!(selector.compounds.len(), 1);
        assert_eq!(selector.compounds[0].classes, vec!["hero-title"]);
        assert_eq!(selector.compounds[0].tag, None);
    }

    #[test]
    fn test_parse_descendant_chain() {
        let selector = Selector::parse(".page-header   h1").unwrap();
        assert_eq!(selector.compounds.len(), 2);
        assert_eq!(selector.compounds[1].tag.as_deref(), Some("h1"));
    }

    #[test]
    fn test_parse_compound_with_everything() {
        let selector = Selector::parse("p.lead#intro[data-x='a b']:nth-child(2)").unwrap();
        let compound = &selector.compounds[0];

        assert_eq!(compound.tag.as_deref(), Some("p"));
        assert_eq!(compound.classes, vec!["lead"]);
        assert_eq!(compound.id.as_deref(), Some("intro"));
        assert_eq!(
            compound.attributes,
            vec![AttributeMatch {
                name: "data-x".to_string(),
                value: Some("a b".to_string()),
            }]
        );
        assert_eq!(compound.nth_child, Some(2));
    }

    #[test]
    fn test_parse_bare_attribute() {
        let selector = Selector::parse("[data-category-id]").unwrap();
        assert_eq!(selector.compounds[0].attributes[0].name, "data-category-id");
        assert_eq!(selector.compounds[0].attributes[0].value, None);
    }

    #[test]
    fn test_parse_unquoted_attribute_value() {
        let selector = Selector::parse("a[href=contact]").unwrap();
        assert_eq!(
            selector.compounds[0].attributes[0].value.as_deref(),
            Some("contact")
        );
    }

    #[test]
    fn test_tag_is_lowercased() {
        let selector = Selector::parse("H1").unwrap();
        assert_eq!(selector.compounds[0].tag.as_deref(), Some("h1"));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Selector::parse("   "), Err(SelectorError::Empty));
        assert_eq!(Selector::parse("[data-x"), Err(SelectorError::UnterminatedAttribute));
        assert_eq!(
            Selector::parse("a:hover"),
            Err(SelectorError::UnsupportedPseudo("hover".to_string()))
        );
        assert_eq!(
            Selector::parse("p:nth-child(0)"),
            Err(SelectorError::InvalidNthChild("0".to_string()))
        );
        assert!(matches!(
            Selector::parse("a > b"),
            Err(SelectorError::UnexpectedChar { ch: '>', .. })
        ));
        assert!(matches!(Selector::parse("."), Err(SelectorError::ExpectedName(_))));
    }
}
