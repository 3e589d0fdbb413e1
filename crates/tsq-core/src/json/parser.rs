//! Recursive-descent parser over the token stream.
//!
//! Stops at the first error. Nesting is bounded by recursion fuel so hostile
//! input cannot exhaust the stack.

use super::lexer::{Token, TokenKind, lex, unescape};
use super::{JsonError, JsonErrorKind, JsonKind, JsonNode, JsonScalar, MAX_DEPTH};

type ParseResult<T> = Result<T, JsonError>;

pub(super) struct Parser<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    pos: usize,
    depth: u32,
    recursion_fuel_limit: u32,
}

impl<'src> Parser<'src> {
    pub(super) fn new(source: &'src str) -> Self {
        Self {
            source,
            tokens: lex(source),
            pos: 0,
            depth: 0,
            recursion_fuel_limit: MAX_DEPTH,
        }
    }

    pub(super) fn parse(mut self) -> ParseResult<JsonNode> {
        let root = self.value()?;
        if let Some(token) = self.peek() {
            return Err(JsonError::new(JsonErrorKind::TrailingContent, token.start()));
        }
        Ok(root)
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    fn eof(&self) -> JsonError {
        JsonError::new(JsonErrorKind::UnexpectedEof, self.source.len())
    }

    /// Consumes the next token, failing with `kind` if it is anything else.
    fn expect(&mut self, expected: TokenKind, kind: JsonErrorKind) -> ParseResult<Token> {
        let token = self.bump().ok_or_else(|| self.eof())?;
        if token.kind != expected {
            return Err(unexpected(token, kind));
        }
        Ok(token)
    }

    fn enter(&mut self, at: usize) -> ParseResult<()> {
        if self.depth >= self.recursion_fuel_limit {
            return Err(JsonError::new(JsonErrorKind::TooDeep, at));
        }
        self.depth += 1;
        Ok(())
    }

    fn exit(&mut self) {
        self.depth -= 1;
    }

    fn value(&mut self) -> ParseResult<JsonNode> {
        let token = self.bump().ok_or_else(|| self.eof())?;
        match token.kind {
            TokenKind::BraceOpen => self.object(token),
            TokenKind::BracketOpen => self.array(token),
            TokenKind::String => self.string(token),
            TokenKind::Number => {
                let text = &self.source[token.span];
                let number = text.parse::<f64>().unwrap_or(f64::NAN);
                Ok(JsonNode::scalar(
                    JsonKind::Number,
                    token.span,
                    JsonScalar::Number(number),
                ))
            }
            TokenKind::True | TokenKind::False => Ok(JsonNode::scalar(
                JsonKind::Boolean,
                token.span,
                JsonScalar::Boolean(token.kind == TokenKind::True),
            )),
            TokenKind::Null => Ok(JsonNode::scalar(JsonKind::Null, token.span, JsonScalar::Null)),
            _ => Err(unexpected(token, JsonErrorKind::ExpectedValue)),
        }
    }

    fn string(&self, token: Token) -> ParseResult<JsonNode> {
        let decoded = unescape(&self.source[token.span])
            .ok_or_else(|| JsonError::new(JsonErrorKind::InvalidEscape, token.start()))?;
        Ok(JsonNode::scalar(
            JsonKind::String,
            token.span,
            JsonScalar::String(decoded),
        ))
    }

    fn array(&mut self, open: Token) -> ParseResult<JsonNode> {
        self.enter(open.start())?;
        let mut items = Vec::new();

        let close = loop {
            let Some(next) = self.peek() else {
                return Err(self.eof());
            };
            if items.is_empty() && next.kind == TokenKind::BracketClose {
                self.pos += 1;
                break next;
            }

            items.push(self.value()?);

            let sep = self.bump().ok_or_else(|| self.eof())?;
            match sep.kind {
                TokenKind::Comma => continue,
                TokenKind::BracketClose => break sep,
                _ => return Err(unexpected(sep, JsonErrorKind::ExpectedCommaOr(']'))),
            }
        };

        self.exit();
        Ok(JsonNode::container(
            JsonKind::Array,
            open.start(),
            close.span.end().into(),
            items,
        ))
    }

    fn object(&mut self, open: Token) -> ParseResult<JsonNode> {
        self.enter(open.start())?;
        let mut props = Vec::new();

        let close = loop {
            let Some(next) = self.peek() else {
                return Err(self.eof());
            };
            if props.is_empty() && next.kind == TokenKind::BraceClose {
                self.pos += 1;
                break next;
            }

            props.push(self.property()?);

            let sep = self.bump().ok_or_else(|| self.eof())?;
            match sep.kind {
                TokenKind::Comma => continue,
                TokenKind::BraceClose => break sep,
                _ => return Err(unexpected(sep, JsonErrorKind::ExpectedCommaOr('}'))),
            }
        };

        self.exit();
        Ok(JsonNode::container(
            JsonKind::Object,
            open.start(),
            close.span.end().into(),
            props,
        ))
    }

    fn property(&mut self) -> ParseResult<JsonNode> {
        let key_token = self.expect(TokenKind::String, JsonErrorKind::ExpectedPropertyName)?;
        let key = self.string(key_token)?;
        self.expect(TokenKind::Colon, JsonErrorKind::ExpectedColon)?;
        let value = self.value()?;
        let (start, end) = (key.offset, value.end());
        Ok(JsonNode::container(
            JsonKind::Property,
            start,
            end,
            vec![key, value],
        ))
    }
}

fn unexpected(token: Token, kind: JsonErrorKind) -> JsonError {
    let kind = match token.kind {
        TokenKind::Garbage => JsonErrorKind::InvalidCharacter,
        _ => kind,
    };
    JsonError::new(kind, token.start())
}
