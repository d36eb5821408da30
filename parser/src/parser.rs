//! Recursive-descent parser for spec strings.
//!
//! The grammar is character-level; there is no separate token stage.
//! Structural characters are `{` `}` `:` `,` `%` `\`, but `:` only
//! separates container sections and `,`/`%` only matter inside leaf
//! directives; elsewhere they are plain literals. A backslash escape
//! turns any structural character into literal output and also admits
//! the control characters `\n`, `\t` and `\b`.

use crate::ast::{ContainerSpec, Directive, FieldSpec, LeafSpec};
use crate::error::{SpecError, SpecResult};

/// Maximum directive nesting depth. Exceeding it is reported as a
/// compile-time error rather than risking parser stack exhaustion.
pub const MAX_DEPTH: usize = 64;

/// Compile a spec string into a directive sequence.
pub fn parse_spec(input: &str) -> SpecResult<Vec<Directive>> {
    let mut parser = Parser::new(input);
    let (pieces, term) = parser.parse_pieces(Ctx::TopLevel)?;
    debug_assert!(term.is_none(), "top level has no terminator");
    Ok(pieces)
}

/// Which characters end the current piece sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Ctx {
    /// Whole-spec level: only end of input terminates.
    TopLevel,
    /// Container section: `:` moves to the next section, `}` closes.
    Section,
    /// Leaf field prefix: `%` starts the format code, `,` or `}` end the
    /// field without one.
    Field,
}

impl Ctx {
    fn is_terminator(self, c: char) -> bool {
        match self {
            Ctx::TopLevel => false,
            Ctx::Section => c == ':' || c == '}',
            Ctx::Field => c == '%' || c == ',' || c == '}',
        }
    }
}

/// Parser state.
struct Parser<'a> {
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    len: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.char_indices().peekable(),
            len: input.len(),
            depth: 0,
        }
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn next_char(&mut self) -> Option<char> {
        self.chars.next().map(|(_, c)| c)
    }

    /// Byte offset of the next unread character (input length at EOF).
    fn pos(&mut self) -> usize {
        self.chars.peek().map(|(i, _)| *i).unwrap_or(self.len)
    }

    /// Parse a run of directives until a terminator for `ctx` or end of
    /// input. Returns the pieces plus the terminator consumed, if any.
    fn parse_pieces(&mut self, ctx: Ctx) -> SpecResult<(Vec<Directive>, Option<char>)> {
        let mut pieces = Vec::new();
        let mut literal = String::new();

        loop {
            let Some(c) = self.peek_char() else {
                flush_literal(&mut pieces, &mut literal);
                return Ok((pieces, None));
            };

            if c == '\\' {
                flush_literal(&mut pieces, &mut literal);
                pieces.push(self.parse_escape()?);
            } else if c == '{' {
                flush_literal(&mut pieces, &mut literal);
                pieces.push(self.parse_directive()?);
            } else if ctx.is_terminator(c) {
                self.next_char();
                flush_literal(&mut pieces, &mut literal);
                return Ok((pieces, Some(c)));
            } else if c == '}' {
                // Only reachable at top level; nested levels treat `}`
                // as a terminator above.
                return Err(SpecError::StrayClose { pos: self.pos() });
            } else {
                literal.push(c);
                self.next_char();
            }
        }
    }

    /// Parse a backslash escape into an `Escape` directive.
    fn parse_escape(&mut self) -> SpecResult<Directive> {
        let pos = self.pos();
        self.next_char(); // consume the backslash
        match self.next_char() {
            None => Err(SpecError::DanglingEscape { pos }),
            Some(c @ ('{' | '}' | ':' | ',' | '%' | '\\')) => Ok(Directive::Escape(c)),
            Some('n') => Ok(Directive::Escape('\n')),
            Some('t') => Ok(Directive::Escape('\t')),
            Some('b') => Ok(Directive::Escape('\u{8}')),
            Some(c) => Err(SpecError::UnknownEscape { found: c, pos }),
        }
    }

    /// Parse a brace directive: a leaf if it starts `{=`, a container
    /// otherwise.
    fn parse_directive(&mut self) -> SpecResult<Directive> {
        let open_pos = self.pos();
        self.next_char(); // consume '{'

        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(SpecError::TooDeep {
                pos: open_pos,
                limit: MAX_DEPTH,
            });
        }

        let directive = if self.peek_char() == Some('=') {
            self.next_char();
            self.parse_leaf(open_pos)
        } else {
            self.parse_container(open_pos)
        };
        self.depth -= 1;
        directive
    }

    /// Parse the open/sep/close/inner sections of a container directive.
    /// The opening `{` is already consumed.
    fn parse_container(&mut self, open_pos: usize) -> SpecResult<Directive> {
        let mut sections = Vec::new();
        loop {
            let (pieces, term) = self.parse_pieces(Ctx::Section)?;
            sections.push(pieces);
            match term {
                Some(':') => continue,
                Some('}') => break,
                None => return Err(SpecError::UnbalancedOpen { pos: open_pos }),
                Some(other) => unreachable!("unexpected section terminator {:?}", other),
            }
        }

        match <[Vec<Directive>; 4]>::try_from(sections) {
            Ok([open, sep, close, inner]) => Ok(Directive::Container(ContainerSpec {
                open,
                sep,
                close,
                inner,
            })),
            Err(sections) => Err(SpecError::SectionCount {
                pos: open_pos,
                found: sections.len(),
            }),
        }
    }

    /// Parse the comma-separated fields of a leaf directive. The opening
    /// `{=` is already consumed.
    fn parse_leaf(&mut self, open_pos: usize) -> SpecResult<Directive> {
        let mut fields: Vec<FieldSpec> = Vec::new();
        loop {
            let field_pos = self.pos();
            let (prefix, term) = self.parse_pieces(Ctx::Field)?;
            let Some(term) = term else {
                return Err(SpecError::UnbalancedOpen { pos: open_pos });
            };
            if term != '%' {
                if term == '}' && fields.is_empty() && prefix.is_empty() {
                    return Err(SpecError::EmptyLeaf { pos: open_pos });
                }
                return Err(SpecError::MissingFormatCode { pos: field_pos });
            }

            let code_pos = self.pos();
            let mut code = String::new();
            while let Some(c) = self.peek_char() {
                if c.is_ascii_alphanumeric() || c == '_' {
                    code.push(c);
                    self.next_char();
                } else {
                    break;
                }
            }
            let starts_like_ident = code
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
            if !starts_like_ident {
                return Err(SpecError::InvalidFormatCode {
                    found: code,
                    pos: code_pos,
                });
            }

            fields.push(FieldSpec {
                prefix,
                index: fields.len(),
                code,
            });

            let after_pos = self.pos();
            match self.next_char() {
                Some(',') => continue,
                Some('}') => break,
                Some(c) => {
                    // A format code must run straight into `,` or `}`.
                    return Err(SpecError::InvalidFormatCode {
                        found: c.to_string(),
                        pos: after_pos,
                    });
                }
                None => return Err(SpecError::UnbalancedOpen { pos: open_pos }),
            }
        }
        Ok(Directive::Leaf(LeafSpec { fields }))
    }
}

fn flush_literal(pieces: &mut Vec<Directive>, literal: &mut String) {
    if !literal.is_empty() {
        pieces.push(Directive::Literal(std::mem::take(literal)));
    }
}

// ==================== TESTS ====================
