use miette::{NamedSource, SourceSpan};

use crate::core::{EdgeTriple, VertexId};
use crate::error::{EdgeListParseError, PolygonWheelError};

/// A whitespace-delimited token and its byte offset in the source
#[derive(Debug, Clone, Copy)]
struct Token<'a> {
    text: &'a str,
    offset: usize,
}

impl Token<'_> {
    fn span(&self) -> SourceSpan {
        SourceSpan::new(self.offset.into(), self.text.len())
    }
}

/// Parser for edge-list text: `SOURCE DESTINATION WEIGHT` triples
///
/// Line breaks carry no meaning, tokens are consumed three at a time. A line
/// whose first non-blank character is `#` is a comment.
pub struct EdgeListParser<'a> {
    name: String,
    content: &'a str,
}

impl<'a> EdgeListParser<'a> {
    pub fn new(name: impl Into<String>, content: &'a str) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }

    pub fn parse(&self) -> Result<Vec<EdgeTriple>, PolygonWheelError> {
        let tokens = self.tokenize();
        let mut edges = Vec::with_capacity(tokens.len() / 3);

        for triple in tokens.chunks(3) {
            let [source, destination, weight] = triple else {
                let last = triple.last().map_or(self.content.len(), |t| t.offset + t.text.len());
                return Err(self.error(
                    "incomplete edge, expected `SOURCE DESTINATION WEIGHT`",
                    SourceSpan::new(triple[0].offset.into(), last - triple[0].offset),
                ));
            };

            let span_end = weight.offset + weight.text.len();
            edges.push(EdgeTriple {
                source: self.label(source)?,
                destination: self.label(destination)?,
                weight: self.weight(weight)?,
                span: Some(SourceSpan::new(source.offset.into(), span_end - source.offset)),
            });
        }

        Ok(edges)
    }

    fn tokenize(&self) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        let mut line_start = 0;

        for line in self.content.split_inclusive('\n') {
            if !line.trim_start().starts_with('#') {
                let mut rest = line;
                let mut offset = line_start;
                while let Some(start) = rest.find(|c: char| !c.is_whitespace()) {
                    let after = &rest[start..];
                    let len = after.find(char::is_whitespace).unwrap_or(after.len());
                    tokens.push(Token {
                        text: &after[..len],
                        offset: offset + start,
                    });
                    rest = &after[len..];
                    offset += start + len;
                }
            }
            line_start += line.len();
        }

        tokens
    }

    fn label(&self, token: &Token<'_>) -> Result<char, PolygonWheelError> {
        let mut chars = token.text.chars();
        match (chars.next(), chars.next()) {
            (Some(label), None) => {
                VertexId::from_label(label).map_err(|_| {
                    self.error("vertex labels are uppercase letters A-Z", token.span())
                })?;
                Ok(label)
            }
            _ => Err(self.error("vertex label must be a single letter", token.span())),
        }
    }

    fn weight(&self, token: &Token<'_>) -> Result<u32, PolygonWheelError> {
        token
            .text
            .parse::<u32>()
            .map_err(|_| self.error("weight must be a non-negative integer", token.span()))
    }

    fn error(&self, reason: &str, span: SourceSpan) -> PolygonWheelError {
        PolygonWheelError::EdgeListParseError(Box::new(EdgeListParseError {
            file: self.name.clone(),
            reason: reason.to_string(),
            source_code: NamedSource::new(self.name.clone(), self.content.to_string()),
            span: Some(span),
        }))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(content: &str) -> Result<Vec<EdgeTriple>, PolygonWheelError> {
        EdgeListParser::new("sample.txt", content).parse()
    }

    fn parse_error(content: &str) -> EdgeListParseError {
        match parse(content) {
            Err(PolygonWheelError::EdgeListParseError(error)) => *error,
            other => panic!("Expected a parse error, got {other:?}"),
        }
    }

    fn plain(edges: &[EdgeTriple]) -> Vec<(char, char, u32)> {
        edges
            .iter()
            .map(|edge| (edge.source, edge.destination, edge.weight))
            .collect()
    }

    #[test]
    fn test_parse_one_edge_per_line() {
        let edges = parse("A B 1\nB C 2\nC A 3\n").unwrap();
        assert_eq!(plain(&edges), vec![('A', 'B', 1), ('B', 'C', 2), ('C', 'A', 3)]);
    }

    #[test]
    fn test_line_breaks_are_insignificant() {
        let edges = parse("A B\n1 B\tC 2   C\n\nA 3").unwrap();
        assert_eq!(plain(&edges), vec![('A', 'B', 1), ('B', 'C', 2), ('C', 'A', 3)]);
    }

    #[test]
    fn test_comments_and_empty_input() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("   \n\n").unwrap().is_empty());

        let edges = parse("# triangle\nA B 1\n  # the closing edge\nB C 2\n").unwrap();
        assert_eq!(plain(&edges), vec![('A', 'B', 1), ('B', 'C', 2)]);
    }

    #[test]
    fn test_edge_span_covers_triple() {
        let edges = parse("X Y 10\nA B 7\n").unwrap();
        assert_eq!(edges[1].span, Some(SourceSpan::new(7.into(), 5)));
    }

    #[test]
    fn test_invalid_weight_points_at_token() {
        let error = parse_error("A B 1\nB C x\n");
        assert_eq!(error.reason, "weight must be a non-negative integer");
        assert_eq!(error.span, Some(SourceSpan::new(10.into(), 1)));

        let negative = parse_error("A B -4");
        assert_eq!(negative.span, Some(SourceSpan::new(4.into(), 2)));
    }

    #[test]
    fn test_invalid_labels() {
        let lowercase = parse_error("a B 1");
        assert_eq!(lowercase.reason, "vertex labels are uppercase letters A-Z");
        assert_eq!(lowercase.span, Some(SourceSpan::new(0.into(), 1)));

        let long = parse_error("A BC 1");
        assert_eq!(long.reason, "vertex label must be a single letter");
        assert_eq!(long.span, Some(SourceSpan::new(2.into(), 2)));
    }

    #[test]
    fn test_incomplete_triple() {
        let error = parse_error("A B 1\nC D");
        assert_eq!(
            error.reason,
            "incomplete edge, expected `SOURCE DESTINATION WEIGHT`"
        );
        assert_eq!(error.span, Some(SourceSpan::new(6.into(), 3)));
    }
}
