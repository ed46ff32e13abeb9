//! Diagnostic rendering for parse errors.

use std::ops::Range;

use ariadne::{Color, Label, Report, ReportKind, Source};
use louvre_parse::{SyntaxErrorKind, Tag};

use crate::{NodeErrorKind, ParseError};

/// Character range covering a tag from its `#` to the end of its name.
fn tag_range(tag: &Tag) -> Range<usize> {
    let location = tag.location();
    let start = location.offset.saturating_sub(1);
    start..location.offset + tag.name().chars().count()
}

impl ParseError {
    /// Character range of the source this error points at.
    pub fn range(&self) -> Range<usize> {
        match self {
            ParseError::Syntax(e) => match e.kind {
                // point at the last character of the input
                SyntaxErrorKind::UnexpectedEof => {
                    e.location.offset.saturating_sub(1)..e.location.offset
                }
                SyntaxErrorKind::UnexpectedToken(_) => e.location.range(1),
            },
            ParseError::Tag(e) => tag_range(&e.tag),
            ParseError::Node(e) => e.node.tag().map(|tag| tag_range(tag)).unwrap_or(0..0),
        }
    }

    /// Render this error with ariadne.
    ///
    /// Returns a string containing the formatted error message with source context.
    pub fn render(&self, filename: &str, source: &str) -> String {
        let mut output = Vec::new();
        self.write_report(filename, source, &mut output);
        String::from_utf8(output).unwrap_or_else(|_| format!("{}", self))
    }

    /// Write the error report to a writer.
    pub fn write_report<W: std::io::Write>(&self, filename: &str, source: &str, writer: W) {
        let report = self.build_report(filename);
        let _ = report
            .finish()
            .write((filename, Source::from(source)), writer);
    }

    fn build_report<'a>(
        &self,
        filename: &'a str,
    ) -> ariadne::ReportBuilder<'static, (&'a str, Range<usize>)> {
        let range = self.range();

        match self {
            ParseError::Syntax(e) => match e.kind {
                SyntaxErrorKind::UnexpectedEof => Report::build(ReportKind::Error, (filename, range.clone()))
                    .with_message("unexpected end of input in tag arguments")
                    .with_label(
                        Label::new((filename, range))
                            .with_message("input ends here")
                            .with_color(Color::Red),
                    )
                    .with_help("close the argument list with ')'"),

                SyntaxErrorKind::UnexpectedToken(c) => Report::build(ReportKind::Error, (filename, range.clone()))
                    .with_message(format!("unexpected token {:?} in tag arguments", c))
                    .with_label(
                        Label::new((filename, range))
                            .with_message("expected ',' or ')'")
                            .with_color(Color::Red),
                    )
                    .with_help("arguments may only contain letters, digits and '_'"),
            },

            ParseError::Tag(e) => Report::build(ReportKind::Error, (filename, range.clone()))
                .with_message(format!("unknown tag `{}`", e.tag.name()))
                .with_label(
                    Label::new((filename, range))
                        .with_message("no handler is bound to this tag")
                        .with_color(Color::Red),
                )
                .with_help("write '##' for a literal '#'"),

            ParseError::Node(e) => match e.kind {
                NodeErrorKind::UnexpectedEnd => Report::build(ReportKind::Error, (filename, range.clone()))
                    .with_message("unexpected branch return at root level")
                    .with_label(
                        Label::new((filename, range))
                            .with_message("nothing to close here")
                            .with_color(Color::Red),
                    )
                    .with_help("remove this '#end' or open a block before it"),

                NodeErrorKind::UnclosedBranch => Report::build(ReportKind::Error, (filename, range.clone()))
                    .with_message("unclosed branch at end of input")
                    .with_label(
                        Label::new((filename, range))
                            .with_message("opened here")
                            .with_color(Color::Red),
                    )
                    .with_help("add a matching '#end'"),
            },
        }
    }
}
