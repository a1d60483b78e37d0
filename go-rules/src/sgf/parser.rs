use super::error::SgfError;
use super::types::{Node, Property};

/// Parse the main line of the first game tree in `input` into a flat node list.
///
/// Only nodes directly inside the outermost tree are kept. Nested trees
/// (variations) are skipped without being parsed.
pub fn parse_nodes(input: &str) -> Result<Vec<Node>, SgfError> {
    let mut p = Parser::new(input);
    let nodes = p.main_line()?;
    tracing::debug!("parsed {} node(s) on the main line", nodes.len());
    Ok(nodes)
}

struct Parser<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Parser {
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let b = self.bytes.get(self.pos).copied()?;
        self.pos += 1;
        Some(b)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn syntax_error(&self, expected: &'static str) -> SgfError {
        SgfError::Syntax {
            expected,
            found: self.peek().map(char::from),
            pos: self.pos,
        }
    }

    fn expect(&mut self, ch: u8, expected: &'static str) -> Result<(), SgfError> {
        self.skip_whitespace();
        if self.peek() == Some(ch) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.syntax_error(expected))
        }
    }

    // GameTree = '(' { Node | GameTree } ')'
    fn main_line(&mut self) -> Result<Vec<Node>, SgfError> {
        self.expect(b'(', "'('")?;

        let mut nodes = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b';') => nodes.push(self.node()?),
                Some(b'(') => self.skip_tree()?,
                Some(b')') => {
                    self.pos += 1;
                    break;
                }
                _ => return Err(self.syntax_error("';', '(' or ')'")),
            }
        }

        Ok(nodes)
    }

    /// Consume a whole game tree by counting parentheses. Property values are
    /// still scanned so that brackets inside them do not affect the count.
    fn skip_tree(&mut self) -> Result<(), SgfError> {
        let start = self.pos;
        self.expect(b'(', "'('")?;
        let mut depth = 1usize;
        while depth > 0 {
            match self.advance() {
                Some(b'(') => depth += 1,
                Some(b')') => depth -= 1,
                Some(b'[') => {
                    self.value_body()?;
                }
                Some(_) => {}
                None => return Err(self.syntax_error("')'")),
            }
        }
        tracing::trace!("skipped variation at byte {start}..{}", self.pos);
        Ok(())
    }

    // Node = ';' Property*
    fn node(&mut self) -> Result<Node, SgfError> {
        self.expect(b';', "';'")?;
        let mut properties = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b) if b.is_ascii_uppercase() => properties.push(self.property()?),
                Some(b';' | b'(' | b')') => break,
                _ => return Err(self.syntax_error("property identifier")),
            }
        }
        Ok(Node { properties })
    }

    // Property = UcLetter+ Value+
    fn property(&mut self) -> Result<Property, SgfError> {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_uppercase()) {
            self.pos += 1;
        }
        let ident = String::from_utf8_lossy(&self.bytes[start..self.pos]).into_owned();

        self.skip_whitespace();
        if self.peek() != Some(b'[') {
            return Err(self.syntax_error("'['"));
        }

        let mut values = Vec::new();
        while self.peek() == Some(b'[') {
            self.pos += 1;
            values.push(self.value_body()?);
            self.skip_whitespace();
        }

        Ok(Property { ident, values })
    }

    /// Read a value after its opening '[' up to the closing unescaped ']'.
    /// A backslash makes the following character literal.
    fn value_body(&mut self) -> Result<String, SgfError> {
        let mut value = Vec::new();
        loop {
            match self.advance() {
                None => return Err(self.syntax_error("']'")),
                Some(b'\\') => match self.advance() {
                    Some(b) => value.push(b),
                    None => return Err(self.syntax_error("']'")),
                },
                Some(b']') => break,
                Some(b) => value.push(b),
            }
        }
        Ok(String::from_utf8_lossy(&value).into_owned())
    }
}
