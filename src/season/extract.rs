//! Range extraction (pass 1) and residual tokenization (pass 2).

use super::month::MonthTable;
use super::range::resolve_range;
use super::{ResolvedSpan, SpanOrigin};
use crate::SeasonResult;

/// Spans found by pass 1 plus the text left once their matches are removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RangeExtraction {
    pub spans: Vec<ResolvedSpan>,
    pub residual: String,
}

/// Find every non-overlapping `<token> till <token>` in `text` and resolve it.
///
/// Tokens are runs of lowercase letters and hyphens. The returned residual has
/// every match cut out, so range endpoints are never seen again as bare months.
pub(crate) fn extract_ranges(text: &str, table: &MonthTable) -> SeasonResult<RangeExtraction> {
    let pattern = regex!(r"([a-z-]+) till ([a-z-]+)");

    let mut spans = Vec::new();
    for caps in pattern.captures_iter(text) {
        let (whole, [start, stop]) = caps.extract();
        let span = resolve_range(start, stop, table)?;
        spans.push(ResolvedSpan { source: whole.to_string(), origin: SpanOrigin::Range, span });
    }

    let residual = pattern.replace_all(text, "").into_owned();
    Ok(RangeExtraction { spans, residual })
}

/// Split the residual of pass 1 into bare month tokens, dropping the `and` connective.
pub(crate) fn residual_tokens(residual: &str) -> impl Iterator<Item = &str> {
    residual.split_whitespace().filter(|token| *token != "and")
}
