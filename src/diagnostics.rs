// Rewrite suggestions as Ariadne advice
//
// One report per available rewrite, labelled on the method name of the call.

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use lexer::Span;
use rewrite::RewriteResult;
use std::io::{self, IsTerminal};

fn rewrite_report<'a>(
    filename: &'a str,
    source: &str,
    rewrite: &RewriteResult,
    config: Config,
) -> Report<'a, (&'a str, Span)> {
    let original = source.get(rewrite.target_span().clone()).unwrap_or_default();

    let report = Report::build(ReportKind::Advice, filename, rewrite.callee_span.start)
        .with_config(config)
        .with_code("A001")
        .with_message(rewrite.description())
        .with_label(
            Label::new((filename, rewrite.callee_span.clone()))
                .with_message(format!("'{}' call can be written as an operator", rewrite.callee()))
                .with_color(Color::Cyan),
        )
        .with_help(format!("write `{}`", rewrite.replacement));

    let report = if original.is_empty() {
        report
    } else {
        report.with_note(format!("replaces `{}`", original))
    };

    report.finish()
}

fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && io::stderr().is_terminal()
}

/// Print one advice report per rewrite to stderr
pub fn report_rewrites(filename: &str, source: &str, rewrites: &[RewriteResult]) -> io::Result<()> {
    let config = Config::default().with_color(use_color());
    for rewrite in rewrites {
        rewrite_report(filename, source, rewrite, config).eprint((filename, Source::from(source)))?;
    }
    Ok(())
}

/// Render rewrites without colors
#[cfg(test)]
pub fn render_rewrites(filename: &str, source: &str, rewrites: &[RewriteResult]) -> String {
    let mut out = Vec::new();
    for rewrite in rewrites {
        let report = rewrite_report(filename, source, rewrite, Config::default().with_color(false));
        // Writing into a Vec cannot fail
        let _ = report.write((filename, Source::from(source)), &mut out);
    }
    String::from_utf8_lossy(&out).into_owned()
}
