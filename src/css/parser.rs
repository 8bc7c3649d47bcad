//! Recursive descent parser for registry rules and inline styles.
//!
//! [`parse_css`] turns rule text into a [`StyleSheet`]; [`parse_declarations`]
//! parses the body of a rule on its own, which is how inline widget styles
//! (`"width: 40; color: red;"`) are written.

use logos::Logos;

use crate::css::model::*;
use crate::css::tokenizer::Token;

/// Errors from style parsing.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected token at position {position}: {message}")]
    UnexpectedToken { position: usize, message: String },
    #[error("unexpected end of input: {0}")]
    UnexpectedEof(String),
}

/// A token with its stream index and byte span (for adjacency checks).
#[derive(Debug, Clone)]
struct PToken {
    token: Token,
    text: String,
    pos: usize,
    byte_start: usize,
    byte_end: usize,
}

/// Replace each `/* ... */` comment with a single space.
fn strip_comments(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find("/*") {
        result.push_str(&rest[..start]);
        result.push(' ');
        rest = match rest[start + 2..].find("*/") {
            Some(end) => &rest[start + 2 + end + 2..],
            // Unterminated comment swallows the rest of the input.
            None => "",
        };
    }
    result.push_str(rest);
    result
}

fn tokenize_with_spans(input: &str) -> Vec<PToken> {
    Token::lexer(input)
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|token| (token, span)))
        .enumerate()
        .map(|(pos, (token, span))| PToken {
            text: input[span.clone()].to_string(),
            token,
            pos,
            byte_start: span.start,
            byte_end: span.end,
        })
        .collect()
}

fn parser_for(input: &str) -> Parser {
    let cleaned = strip_comments(input);
    Parser {
        tokens: tokenize_with_spans(&cleaned),
        cursor: 0,
    }
}

/// Parse rule text into a [`StyleSheet`].
pub fn parse_css(input: &str) -> Result<StyleSheet, ParseError> {
    let mut parser = parser_for(input);
    let mut rules = Vec::new();
    while !parser.is_eof() {
        rules.push(parser.parse_rule()?);
    }
    Ok(StyleSheet { rules })
}

/// Parse a bare declaration list such as `"width: 40; color: red;"`.
pub fn parse_declarations(input: &str) -> Result<Vec<Declaration>, ParseError> {
    let mut parser = parser_for(input);
    let declarations = parser.parse_declarations()?;
    if let Some(tok) = parser.peek() {
        return Err(ParseError::UnexpectedToken {
            position: tok.pos,
            message: format!("unexpected {:?} '{}' after declarations", tok.token, tok.text),
        });
    }
    Ok(declarations)
}

struct Parser {
    tokens: Vec<PToken>,
    cursor: usize,
}

impl Parser {
    fn is_eof(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    fn peek(&self) -> Option<&PToken> {
        self.tokens.get(self.cursor)
    }

    fn peek_is(&self, token: &Token) -> bool {
        self.peek().is_some_and(|t| &t.token == token)
    }

    fn advance(&mut self) -> Option<PToken> {
        let tok = self.tokens.get(self.cursor).cloned();
        if tok.is_some() {
            self.cursor += 1;
        }
        tok
    }

    fn current_pos(&self) -> usize {
        self.peek().map(|t| t.pos).unwrap_or(self.tokens.len())
    }

    fn expect(&mut self, expected: &Token) -> Result<PToken, ParseError> {
        match self.advance() {
            Some(tok) if &tok.token == expected => Ok(tok),
            Some(tok) => Err(ParseError::UnexpectedToken {
                position: tok.pos,
                message: format!("expected {:?}, got {:?} '{}'", expected, tok.token, tok.text),
            }),
            None => Err(ParseError::UnexpectedEof(format!("expected {expected:?}"))),
        }
    }

    /// Consume an identifier naming a class, id or property.
    fn expect_name(&mut self, what: &str) -> Result<String, ParseError> {
        match self.advance() {
            Some(tok) if tok.token == Token::Ident => Ok(tok.text),
            Some(tok) => Err(ParseError::UnexpectedToken {
                position: tok.pos,
                message: format!("expected {what}, got {:?} '{}'", tok.token, tok.text),
            }),
            None => Err(ParseError::UnexpectedEof(format!("expected {what}"))),
        }
    }

    /// Whether the current token touches the previous one (no whitespace).
    fn is_adjacent(&self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev = &self.tokens[self.cursor - 1];
        self.peek().is_some_and(|curr| curr.byte_start == prev.byte_end)
    }

    fn parse_rule(&mut self) -> Result<RuleSet, ParseError> {
        let mut selectors = vec![self.parse_selector()?];
        while self.peek_is(&Token::Comma) {
            self.advance();
            selectors.push(self.parse_selector()?);
        }
        self.expect(&Token::BraceOpen)?;
        let declarations = self.parse_declarations()?;
        self.expect(&Token::BraceClose)?;
        Ok(RuleSet {
            selectors,
            declarations,
        })
    }

    fn parse_selector(&mut self) -> Result<Selector, ParseError> {
        let mut parts = vec![SelectorPart::Compound(self.parse_compound()?)];
        loop {
            match self.peek().map(|t| &t.token) {
                Some(Token::GreaterThan) => {
                    self.advance();
                    parts.push(SelectorPart::Combinator(Combinator::Child));
                    parts.push(SelectorPart::Compound(self.parse_compound()?));
                }
                // A selector start that was not glued onto the previous
                // compound is separated by whitespace: descendant.
                Some(
                    Token::Ident | Token::Hash | Token::Dot | Token::Star | Token::PseudoClass,
                ) => {
                    parts.push(SelectorPart::Combinator(Combinator::Descendant));
                    parts.push(SelectorPart::Compound(self.parse_compound()?));
                }
                _ => break,
            }
        }
        Ok(Selector { parts })
    }

    /// Parse one simple component. `first` allows type and universal selectors.
    fn parse_component(&mut self, first: bool) -> Result<Option<SelectorComponent>, ParseError> {
        let Some(tok) = self.peek().cloned() else {
            return Ok(None);
        };
        let component = match tok.token {
            Token::Ident if first => {
                self.advance();
                SelectorComponent::Type(tok.text)
            }
            Token::Star if first => {
                self.advance();
                SelectorComponent::Universal
            }
            Token::Dot => {
                self.advance();
                SelectorComponent::Class(self.expect_name("class name after '.'")?)
            }
            Token::Hash => {
                self.advance();
                SelectorComponent::Id(self.expect_name("id name after '#'")?)
            }
            Token::PseudoClass => {
                self.advance();
                SelectorComponent::PseudoClass(tok.text[1..].to_string())
            }
            _ => return Ok(None),
        };
        Ok(Some(component))
    }

    fn parse_compound(&mut self) -> Result<CompoundSelector, ParseError> {
        let mut components = match self.parse_component(true)? {
            Some(component) => vec![component],
            None => {
                return Err(ParseError::UnexpectedToken {
                    position: self.current_pos(),
                    message: "expected selector part".into(),
                })
            }
        };
        while self.is_adjacent() {
            match self.parse_component(false)? {
                Some(component) => components.push(component),
                None => break,
            }
        }
        Ok(CompoundSelector { components })
    }

    fn parse_declarations(&mut self) -> Result<Vec<Declaration>, ParseError> {
        let mut declarations = Vec::new();
        while self.peek().is_some_and(|t| t.token != Token::BraceClose) {
            declarations.push(self.parse_declaration()?);
        }
        Ok(declarations)
    }

    /// `property: value1 value2 [!important];`
    fn parse_declaration(&mut self) -> Result<Declaration, ParseError> {
        let property = self.expect_name("property name")?;
        let mut values = Vec::new();
        // `color:red` lexes the colon and first value as one pseudo-class token.
        let glued = self
            .peek()
            .filter(|t| t.token == Token::PseudoClass)
            .map(|t| t.text[1..].to_string());
        match glued {
            Some(first) => {
                self.advance();
                values.push(DeclarationValue::Ident(first));
            }
            None => {
                self.expect(&Token::Colon)?;
            }
        }

        let mut important = false;
        loop {
            match self.peek().map(|t| &t.token) {
                None | Some(Token::Semicolon) | Some(Token::BraceClose) => break,
                Some(Token::Important) => {
                    self.advance();
                    important = true;
                    break;
                }
                Some(_) => values.push(self.parse_value()?),
            }
        }
        if self.peek_is(&Token::Semicolon) {
            self.advance();
        }
        Ok(Declaration {
            property,
            values,
            important,
        })
    }

    fn parse_value(&mut self) -> Result<DeclarationValue, ParseError> {
        let tok = self
            .advance()
            .ok_or_else(|| ParseError::UnexpectedEof("expected declaration value".into()))?;
        let invalid = |what: &str| ParseError::UnexpectedToken {
            position: tok.pos,
            message: format!("invalid {what}: {}", tok.text),
        };

        match tok.token {
            Token::Number => tok
                .text
                .parse()
                .map(DeclarationValue::Number)
                .map_err(|_| invalid("number")),
            Token::Dimension => {
                let (number, unit) = split_dimension(&tok.text).ok_or_else(|| invalid("dimension"))?;
                let n = number.parse().map_err(|_| invalid("dimension"))?;
                Ok(DeclarationValue::Dimension(n, unit.to_string()))
            }
            Token::Ident => Ok(DeclarationValue::Ident(tok.text.clone())),
            Token::HexColor => Ok(DeclarationValue::Color(tok.text[1..].to_string())),
            Token::StringLiteral | Token::StringLiteralSingle => Ok(DeclarationValue::String(
                tok.text[1..tok.text.len() - 1].to_string(),
            )),
            Token::Variable => Ok(DeclarationValue::Variable(tok.text[1..].to_string())),
            ref other => Err(ParseError::UnexpectedToken {
                position: tok.pos,
                message: format!("unexpected token in declaration value: {other:?} '{}'", tok.text),
            }),
        }
    }
}

/// Split `"50%"` or `"1fr"` into number and unit.
fn split_dimension(s: &str) -> Option<(&str, &str)> {
    let unit_start = s
        .char_indices()
        .find(|&(i, c)| !c.is_ascii_digit() && c != '.' && !(c == '-' && i == 0))
        .map(|(i, _)| i)?;
    if unit_start == 0 || unit_start >= s.len() {
        return None;
    }
    Some((&s[..unit_start], &s[unit_start..]))
}
