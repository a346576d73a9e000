use inseason::{ParseDetails, ResolvedSpan, SpanOrigin};

/// What a piece of report text is, mapped to an SGR code when color is on.
#[derive(Debug, Clone, Copy)]
enum Tone {
    Heading,
    Muted,
    Source,
    Range,
    Single,
    Season,
    Count,
}

impl Tone {
    fn sgr(self) -> &'static str {
        match self {
            Tone::Heading => "1;36",
            Tone::Muted => "2",
            Tone::Source => "1",
            Tone::Range => "36",
            Tone::Single => "34",
            Tone::Season => "1;32",
            Tone::Count => "33",
        }
    }
}

struct Styler {
    color: bool,
}

impl Styler {
    fn tone(&self, tone: Tone, text: impl std::fmt::Display) -> String {
        if self.color { format!("\x1b[{}m{}\x1b[0m", tone.sgr(), text) } else { text.to_string() }
    }

    fn section(&self, title: &str) {
        println!("\n{}", self.tone(Tone::Muted, format!("── {title} ──")));
    }
}

pub fn print_run(details: &ParseDetails, color: bool) {
    let style = Styler { color };
    println!("\n{}", style.tone(Tone::Heading, format!("season: \"{}\"", details.text)));

    style.section("normalized");
    if details.normalized == details.text {
        println!("  {}", style.tone(Tone::Muted, "(unchanged)"));
    } else {
        println!("  {}", style.tone(Tone::Source, &details.normalized));
    }

    style.section("spans");
    if details.spans.is_empty() {
        println!("  {}", style.tone(Tone::Muted, "none"));
    }
    for (idx, span) in details.spans.iter().enumerate() {
        println!("  {:>2}. {}", idx + 1, fmt_span(span, &style));
    }

    style.section("season");
    let runs = details.dates.runs();
    if runs.is_empty() {
        println!("  {}", style.tone(Tone::Muted, "empty"));
    }
    for (first, last) in &runs {
        let label = if first == last {
            first.format("%b %d").to_string()
        } else {
            format!("{} .. {}", first.format("%b %d"), last.format("%b %d"))
        };
        println!("  {}", style.tone(Tone::Season, label));
    }
    println!(
        "  {} days in {} runs, {:?}",
        style.tone(Tone::Count, details.dates.len()),
        style.tone(Tone::Count, runs.len()),
        details.elapsed
    );
    println!();
}

fn fmt_span(span: &ResolvedSpan, style: &Styler) -> String {
    let origin = match span.origin {
        SpanOrigin::Range => style.tone(Tone::Range, "range "),
        SpanOrigin::Single => style.tone(Tone::Single, "single"),
    };
    format!(
        "{} {}  {}..={}",
        origin,
        style.tone(Tone::Source, &span.source),
        span.span.start.format("%b %d"),
        span.span.stop.format("%b %d"),
    )
}
