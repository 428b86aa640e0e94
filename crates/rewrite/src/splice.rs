// Source splicing
//
// Applies rewrites to the text they were found in instead of re-printing the
// tree, so comments and layout outside the rewritten expressions survive.
// Rewrites whose targets overlap go in later rounds; every round re-parses
// the text the previous one produced.

use crate::resolve::ResolutionOracle;
use crate::rewriter::RewriteResult;
use crate::AppliedRewrite;
use parser::ast::{Expr, ExprKind, Program, Span};
use parser::error::ParseError;
use parser::printer::{precedence, required_precedence};
use parser::tree::SyntaxIndex;
use thiserror::Error;
use tracing::{debug, info};

/// Replace the bytes in `span` with `text`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEdit {
    pub span: Span,
    pub text: String,
}

#[derive(Debug, Error)]
#[error("rewritten source does not parse ({} error(s))", .errors.len())]
pub struct ReparseError {
    /// The text that failed to parse
    pub text: String,
    pub errors: Vec<ParseError>,
}

/// Text edit performing `result` on `source`, the text `index` was parsed from.
///
/// Operands keep their source text. Parentheses are added around an operand
/// or around the whole operator expression only where the surrounding
/// operator binds tighter.
pub fn edit_for(index: &SyntaxIndex<'_>, source: &str, result: &RewriteResult) -> Option<SourceEdit> {
    let span = result.target_span().clone();
    source.get(span.clone())?;

    let ExprKind::Binary { lhs, rhs, .. } = &result.replacement.kind else {
        return None;
    };
    let lhs = operand_text(source, &result.replacement, lhs)?;
    let rhs = operand_text(source, &result.replacement, rhs)?;

    let mut text = format!("{} {} {}", lhs, result.op.symbol(), rhs);
    let enclosing = index
        .parent(result.target)
        .map_or(0, |parent| required_precedence(parent, result.target));
    if result.op.precedence() < enclosing {
        text = format!("({})", text);
    }

    // Keep a neighbouring word from running into the new text
    if ends_with_word(&source[..span.start]) && starts_with_word(&text) {
        text.insert(0, ' ');
    }
    if ends_with_word(&text) && starts_with_word(&source[span.end..]) {
        text.push(' ');
    }

    Some(SourceEdit { span, text })
}

fn operand_text(source: &str, parent: &Expr, operand: &Expr) -> Option<String> {
    let text = source.get(operand.span.clone())?;
    if precedence(operand) < required_precedence(parent, operand.id) {
        Some(format!("({})", text))
    } else {
        Some(text.to_string())
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn starts_with_word(text: &str) -> bool {
    text.chars().next().is_some_and(is_word_char)
}

fn ends_with_word(text: &str) -> bool {
    text.chars().next_back().is_some_and(is_word_char)
}

/// Apply non-overlapping edits. Edits go back to front so earlier spans stay valid.
pub fn apply_edits(source: &str, edits: &[SourceEdit]) -> String {
    let mut ordered: Vec<&SourceEdit> = edits.iter().collect();
    ordered.sort_by_key(|edit| std::cmp::Reverse(edit.span.start));

    let mut text = source.to_string();
    for edit in ordered {
        text.replace_range(edit.span.clone(), &edit.text);
    }
    text
}

fn overlaps(a: &Span, b: &Span) -> bool {
    a.start < b.end && b.start < a.end
}

/// Edits for every rewrite in `program` whose target does not overlap an
/// earlier (outer) one, with a record of each.
fn plan_round(
    source: &str,
    program: &Program,
    oracle: &dyn ResolutionOracle,
) -> (Vec<SourceEdit>, Vec<AppliedRewrite>) {
    let index = SyntaxIndex::build(program);
    let mut edits: Vec<SourceEdit> = Vec::new();
    let mut applied = Vec::new();

    for result in crate::rewrites_in(&index, oracle) {
        let Some(edit) = edit_for(&index, source, &result) else {
            debug!(node = result.target.0, "no source text for rewrite");
            continue;
        };
        if edits.iter().any(|kept| overlaps(&kept.span, &edit.span)) {
            continue;
        }

        let before = source[edit.span.clone()].to_string();
        let after = edit.text.trim().to_string();
        info!(before = %before, after = %after, "applied rewrite");
        applied.push(AppliedRewrite {
            before,
            after,
            callee_span: result.callee_span,
            idiom: result.idiom,
        });
        edits.push(edit);
    }

    (edits, applied)
}

/// Applies every available rewrite to `source`, which `program` was parsed
/// from, and returns the new text.
///
/// Each round removes at least one method call, so the loop ends after at
/// most as many rounds as the source has calls.
pub fn rewrite_source(
    source: &str,
    program: Program,
    oracle: &dyn ResolutionOracle,
) -> Result<(String, Vec<AppliedRewrite>), ReparseError> {
    let mut text = source.to_string();
    let mut program = program;
    let mut applied = Vec::new();

    loop {
        let (edits, round) = plan_round(&text, &program, oracle);
        if edits.is_empty() {
            break;
        }
        debug!(edits = edits.len(), "splicing round");

        applied.extend(round);
        text = apply_edits(&text, &edits);
        program = parser::parse_source(&text).map_err(|errors| ReparseError {
            text: text.clone(),
            errors,
        })?;
    }

    Ok((text, applied))
}
