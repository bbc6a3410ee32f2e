use crate::arg::Arg;
use crate::format_spec::FormatSpec;
use thiserror::Error;

/// Reasons a template cannot be rendered against a given argument list.
///
/// Offsets are byte positions in the template source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("unmatched '{{' in format string at byte {offset}")]
    UnmatchedOpen { offset: usize },
    #[error("unmatched '}}' in format string at byte {offset}")]
    UnmatchedClose { offset: usize },
    #[error("invalid placeholder '{{{content}}}' at byte {offset}")]
    InvalidPlaceholder { offset: usize, content: String },
    #[error("cannot switch between automatic and manual argument indexing at byte {offset}")]
    MixedIndexing { offset: usize },
    #[error("argument not found: index {index} but {available} argument(s) given")]
    ArgumentNotFound { index: usize, available: usize },
    #[error("argument {index} is never used")]
    UnusedArgument { index: usize },
}

/// One parsed segment of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    /// Text copied through unchanged, with `{{` and `}}` already unescaped.
    Literal(String),
    /// A placeholder resolved to the argument it refers to.
    ///
    /// `content` is the text between the braces, kept for diagnostics.
    Placeholder {
        index: usize,
        offset: usize,
        content: String,
        spec: FormatSpec,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Indexing {
    Automatic,
    Manual,
}

/// A parsed template.
///
/// Parsing validates the template grammar only; whether the placeholders
/// match an argument list is checked by [`Template::render`].
///
/// Grammar:
///
/// - `{}` takes the next argument in order
/// - `{N}` takes argument `N` (zero based)
/// - `{:spec}` / `{N:spec}` add padding, precision and type options, see
///   [`crate::format_spec`]
/// - `{{` and `}}` produce literal braces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pieces: Vec<Piece>,
}

impl Template {
    /// Parses `source` into literal and placeholder pieces.
    pub fn parse(source: &str) -> Result<Self, FormatError> {
        let mut pieces = Vec::new();
        let mut literal = String::new();
        let mut indexing: Option<Indexing> = None;
        let mut next_auto = 0usize;
        let mut chars = source.char_indices().peekable();

        while let Some((offset, ch)) = chars.next() {
            match ch {
                '{' => {
                    if chars.next_if(|&(_, c)| c == '{').is_some() {
                        literal.push('{');
                        continue;
                    }

                    let mut content = String::new();
                    let mut closed = false;
                    for (_, c) in chars.by_ref() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        content.push(c);
                    }
                    if !closed {
                        return Err(FormatError::UnmatchedOpen { offset });
                    }

                    let invalid = || FormatError::InvalidPlaceholder {
                        offset,
                        content: content.clone(),
                    };
                    let (position, spec) = match content.split_once(':') {
                        Some((position, spec)) => {
                            (position, FormatSpec::parse(spec).ok_or_else(invalid)?)
                        }
                        None => (content.as_str(), FormatSpec::default()),
                    };
                    let (mode, index) = if position.is_empty() {
                        let index = next_auto;
                        next_auto += 1;
                        (Indexing::Automatic, index)
                    } else {
                        (Indexing::Manual, parse_index(position).ok_or_else(invalid)?)
                    };
                    match indexing {
                        Some(current) if current != mode => {
                            return Err(FormatError::MixedIndexing { offset });
                        }
                        _ => indexing = Some(mode),
                    }

                    if !literal.is_empty() {
                        pieces.push(Piece::Literal(std::mem::take(&mut literal)));
                    }
                    pieces.push(Piece::Placeholder {
                        index,
                        offset,
                        content,
                        spec,
                    });
                }
                '}' => {
                    if chars.next_if(|&(_, c)| c == '}').is_some() {
                        literal.push('}');
                    } else {
                        return Err(FormatError::UnmatchedClose { offset });
                    }
                }
                _ => literal.push(ch),
            }
        }

        if !literal.is_empty() {
            pieces.push(Piece::Literal(literal));
        }
        Ok(Self { pieces })
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Number of placeholders in the template, counting repeats.
    pub fn placeholder_count(&self) -> usize {
        self.pieces
            .iter()
            .filter(|p| matches!(p, Piece::Placeholder { .. }))
            .count()
    }

    /// Substitutes `args` into the placeholders.
    ///
    /// Every placeholder must name an existing argument whose kind accepts
    /// the placeholder's options, and every argument must be referenced at
    /// least once.
    pub fn render(&self, args: &[Arg]) -> Result<String, FormatError> {
        let mut used = vec![false; args.len()];
        let mut out = String::new();

        for piece in &self.pieces {
            match piece {
                Piece::Literal(text) => out.push_str(text),
                Piece::Placeholder {
                    index,
                    offset,
                    content,
                    spec,
                } => {
                    let arg = args.get(*index).ok_or(FormatError::ArgumentNotFound {
                        index: *index,
                        available: args.len(),
                    })?;
                    used[*index] = true;
                    let text = spec.apply(arg).ok_or_else(|| FormatError::InvalidPlaceholder {
                        offset: *offset,
                        content: content.clone(),
                    })?;
                    out.push_str(&text);
                }
            }
        }

        if let Some(index) = used.iter().position(|u| !u) {
            return Err(FormatError::UnusedArgument { index });
        }
        Ok(out)
    }
}

fn parse_index(position: &str) -> Option<usize> {
    if !position.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    position.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_literal_only() {
        let template = Template::parse("no placeholders here").unwrap();
        assert_eq!(
            template.pieces(),
            &[Piece::Literal("no placeholders here".to_string())]
        );
        assert_eq!(template.placeholder_count(), 0);
    }

    fn placeholder(index: usize, offset: usize, content: &str) -> Piece {
        let spec = match content.split_once(':') {
            Some((_, spec)) => FormatSpec::parse(spec).unwrap(),
            None => FormatSpec::default(),
        };
        Piece::Placeholder {
            index,
            offset,
            content: content.to_string(),
            spec,
        }
    }

    #[test]
    fn test_parse_automatic_indices() {
        let template = Template::parse("{} and {}").unwrap();
        assert_eq!(
            template.pieces(),
            &[
                placeholder(0, 0, ""),
                Piece::Literal(" and ".to_string()),
                placeholder(1, 7, ""),
            ]
        );
    }

    #[test]
    fn test_parse_index_with_options() {
        let template = Template::parse("{1:>5}{0:.2f}").unwrap();
        assert_eq!(
            template.pieces(),
            &[placeholder(1, 0, "1:>5"), placeholder(0, 6, "0:.2f")]
        );
    }

    #[test]
    fn test_parse_escaped_braces() {
        let template = Template::parse("{{}} {}").unwrap();
        assert_eq!(template.placeholder_count(), 1);
        assert_eq!(template.render(&[Arg::Int(1)]).unwrap(), "{} 1");
    }

    #[test]
    fn test_parse_unterminated_placeholder() {
        assert_eq!(
            Template::parse("abc {"),
            Err(FormatError::UnmatchedOpen { offset: 4 })
        );
    }

    #[test]
    fn test_parse_stray_close() {
        assert_eq!(
            Template::parse("a } b"),
            Err(FormatError::UnmatchedClose { offset: 2 })
        );
    }

    #[test]
    fn test_render_format_options() {
        let template = Template::parse("{:.2f} {:>5}").unwrap();
        let out = template.render(&[Arg::Float(3.14159), Arg::Int(7)]).unwrap();
        assert_eq!(out, "3.14     7");
    }

    #[test]
    fn test_parse_rejects_malformed_options() {
        let err = Template::parse("{:>5q}").unwrap_err();
        assert_eq!(
            err,
            FormatError::InvalidPlaceholder {
                offset: 0,
                content: ":>5q".to_string()
            }
        );
        assert_eq!(err.to_string(), "invalid placeholder '{:>5q}' at byte 0");
    }

    #[test]
    fn test_render_rejects_options_for_wrong_kind() {
        let template = Template::parse("value {:x}").unwrap();
        assert_eq!(
            template.render(&[Arg::from("text")]),
            Err(FormatError::InvalidPlaceholder {
                offset: 6,
                content: ":x".to_string()
            })
        );
        assert_eq!(template.render(&[Arg::Int(255)]).unwrap(), "value ff");
    }

    #[test]
    fn test_parse_rejects_mixed_indexing() {
        assert_eq!(
            Template::parse("{} {0}"),
            Err(FormatError::MixedIndexing { offset: 3 })
        );
        assert_eq!(
            Template::parse("{1} {}"),
            Err(FormatError::MixedIndexing { offset: 4 })
        );
    }

    #[test]
    fn test_render_manual_indices_reorder_and_repeat() {
        let template = Template::parse("{1}-{0}-{1}").unwrap();
        let out = template.render(&[Arg::from("a"), Arg::from("b")]).unwrap();
        assert_eq!(out, "b-a-b");
    }

    #[test]
    fn test_render_too_few_arguments() {
        let template = Template::parse("{} {}").unwrap();
        assert_eq!(
            template.render(&[Arg::Int(1)]),
            Err(FormatError::ArgumentNotFound {
                index: 1,
                available: 1
            })
        );
    }

    #[test]
    fn test_render_too_many_arguments() {
        let template = Template::parse("{}").unwrap();
        assert_eq!(
            template.render(&[Arg::Int(1), Arg::Int(2)]),
            Err(FormatError::UnusedArgument { index: 1 })
        );
    }

    #[test]
    fn test_offsets_are_byte_positions() {
        // 'é' is two bytes in UTF-8.
        assert_eq!(
            Template::parse("é}"),
            Err(FormatError::UnmatchedClose { offset: 2 })
        );
    }
}
