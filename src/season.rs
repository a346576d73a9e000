//! Season expression pipeline.
//!
//! Turning a description like `"mid-june till july, late-september"` into days
//! is a short, strictly ordered pipeline:
//!
//! ```text
//! raw text ── normalize (normalize.rs)
//!                 │   ordered literal rewrites: commas, qualifiers, typos
//!                 v
//!            extract_ranges (extract.rs)            pass 1
//!                 │   "<token> till <token>" ──▶ resolve_range (range.rs)
//!                 │                                  └─▶ resolve_month (month.rs)
//!                 v
//!            residual text ── residual_tokens       pass 2
//!                 │   bare month tokens ──▶ expand_token (expand.rs)
//!                 │                             └─▶ resolve_month
//!                 v
//!            build_dates (dates.rs)
//!                     daily expansion + union ──▶ SeasonDates
//! ```
//!
//! Both passes are pure: pass 1 returns its spans together with the residual
//! string instead of editing a shared buffer.
//!
//! ## Responsibilities by module
//!
//! - `month.rs`: the month table, qualifiers and per-token day resolution.
//! - `range.rs`: start/stop pairs, including end-of-month extension.
//! - `normalize.rs`: the ordered rewrite table.
//! - `extract.rs`: range matching and residual tokenization.
//! - `expand.rs`: bare tokens to spans running to the end of their month.
//! - `dates.rs`: span expansion and the year-boundary policy.
//!
//! ## Debugging
//!
//! Every stage logs through the `log` facade; run the CLI with `RUST_LOG=debug`
//! to see the trace.

#[path = "season/dates.rs"]
mod dates;
#[path = "season/expand.rs"]
mod expand;
#[path = "season/extract.rs"]
mod extract;
#[path = "season/month.rs"]
mod month;
#[path = "season/normalize.rs"]
mod normalize;
#[path = "season/range.rs"]
mod range;

#[cfg(test)]
#[path = "season/tests.rs"]
mod tests;

pub(crate) use dates::build_dates;
pub(crate) use expand::expand_token;
pub(crate) use extract::{RangeExtraction, extract_ranges, residual_tokens};
pub(crate) use month::ENGLISH_MONTHS;
pub use month::{MonthTable, Qualifier, ResolvedMonth, days_in_month, last_day_of_month, resolve_month};
pub use normalize::normalize;
pub use range::resolve_range;

use crate::api::Options;
use crate::{DateSpan, SeasonDates, SeasonResult};
use serde::Serialize;

/// Which extraction path produced a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpanOrigin {
    /// An explicit `<token> till <token>` range.
    Range,
    /// A bare month mention.
    Single,
}

/// A span together with the text it was resolved from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSpan {
    pub source: String,
    pub origin: SpanOrigin,
    pub span: DateSpan,
}

/// Everything one pipeline run produced.
#[derive(Debug, Clone)]
pub(crate) struct SeasonRun {
    pub normalized: String,
    pub spans: Vec<ResolvedSpan>,
    pub dates: SeasonDates,
}

/// Run the whole pipeline over an already lowercased, trimmed description.
pub(crate) fn run(text: &str, table: &MonthTable, options: &Options) -> SeasonResult<SeasonRun> {
    let normalized = normalize(text);

    let RangeExtraction { mut spans, residual } = extract_ranges(&normalized, table)?;
    for token in residual_tokens(&residual) {
        let span = expand_token(token, table)?;
        spans.push(ResolvedSpan { source: token.to_string(), origin: SpanOrigin::Single, span });
    }

    let dates = build_dates(spans.iter().map(|s| s.span), options.year_boundary)?;
    log::debug!("[season] \"{}\" -> {} spans, {} days", normalized, spans.len(), dates.len());

    Ok(SeasonRun { normalized, spans, dates })
}
