// Error reporting with Ariadne
//
// This module turns lexer and parser failures into Ariadne reports.

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use chumsky::error::{Simple, SimpleReason};
use lexer::token::Token;
use lexer::Span;

/// Type alias for Chumsky parser errors
pub type ParseError = Simple<Token>;

/// Build one report per parse error
fn parse_error_reports<'a>(
    filename: &'a str,
    errors: &[ParseError],
    config: Config,
) -> Vec<Report<'a, (&'a str, Span)>> {
    errors
        .iter()
        .map(|error| {
            let span = error.span();
            let msg = match error.reason() {
                SimpleReason::Unclosed { delimiter, .. } => {
                    format!("Unclosed delimiter {}", delimiter)
                }
                _ => match error.found() {
                    Some(found) => format!("Unexpected token '{}'", found),
                    None => "Unexpected end of input".to_string(),
                },
            };

            let report = Report::build(ReportKind::Error, filename, span.start)
                .with_config(config)
                .with_code("E001")
                .with_message("Parse Error")
                .with_label(
                    Label::new((filename, span))
                        .with_message(msg)
                        .with_color(Color::Red),
                );

            // Add expected tokens if available (limit to 5 to avoid overwhelming output)
            let report = if error.expected().len() > 0 {
                let mut expected: Vec<String> = error.expected().map(format_expected).collect();
                expected.sort();
                let more = expected.len() > 5;
                expected.truncate(5);

                let help_msg = if more {
                    format!("Expected one of: {}, ...", expected.join(", "))
                } else {
                    format!("Expected: {}", expected.join(", "))
                };

                report.with_help(help_msg)
            } else {
                report
            };

            report.finish()
        })
        .collect()
}

/// Print parse errors to stderr
pub fn report_errors(filename: &str, source: &str, errors: &[ParseError]) -> std::io::Result<()> {
    for report in parse_error_reports(filename, errors, Config::default()) {
        report.eprint((filename, Source::from(source)))?;
    }
    Ok(())
}

/// Render parse errors without colors, for logs and tests
pub fn render_errors(filename: &str, source: &str, errors: &[ParseError]) -> String {
    let mut out = Vec::new();
    for report in parse_error_reports(filename, errors, Config::default().with_color(false)) {
        // Writing into a Vec cannot fail
        let _ = report.write((filename, Source::from(source)), &mut out);
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Format expected token for human-readable output
fn format_expected(token: &Option<Token>) -> String {
    match token {
        Some(Token::Identifier(_)) => "identifier".to_string(),
        Some(Token::Int(_)) => "integer".to_string(),
        Some(Token::Float(_)) => "float".to_string(),
        Some(Token::String(_)) => "string".to_string(),
        Some(Token::Error) => "valid token".to_string(),
        Some(t) => match t.spelling() {
            Some(s) if s.chars().all(char::is_alphabetic) => format!("keyword '{}'", s),
            Some(s) => format!("'{}'", s),
            None => format!("{:?}", t),
        },
        None => "end of input".to_string(),
    }
}

/// Reports characters the lexer rejected (`Token::Error`) and returns whether any were found.
/// Checked before parsing so the user sees the bad character rather than a confusing parse error.
pub fn check_and_report_invalid_tokens(
    filename: &str,
    source: &str,
    tokens: &[(Token, Span)],
) -> std::io::Result<bool> {
    let mut found = false;

    for (token, span) in tokens {
        if *token != Token::Error {
            continue;
        }
        found = true;

        let text = source.get(span.clone()).unwrap_or_default();
        Report::build(ReportKind::Error, filename, span.start)
            .with_code("E002")
            .with_message("Invalid character")
            .with_label(
                Label::new((filename, span.clone()))
                    .with_message(format!("'{}' is not part of the language", text))
                    .with_color(Color::Red),
            )
            .finish()
            .eprint((filename, Source::from(source)))?;
    }

    Ok(found)
}
