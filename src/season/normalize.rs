//! Text normalization.
//!
//! Descriptions come from hand-edited tables and disagree on punctuation,
//! connectives and spelling. Normalization rewrites them into the shape the
//! extractors match: `<token> till <token>` ranges and bare month tokens joined
//! by `and`, with qualifiers bound to their month by a hyphen.
//!
//! The rewrites are plain substring replacements applied in table order.
//! Order is part of the contract: `south dakota` must go before `south`.

/// One literal rewrite.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Rewrite {
    pub from: &'static str,
    pub to: &'static str,
    /// What the rule is for.
    pub note: &'static str,
}

const fn rewrite(from: &'static str, to: &'static str, note: &'static str) -> Rewrite {
    Rewrite { from, to, note }
}

/// The rewrite table, in application order.
pub(crate) const REWRITES: &[Rewrite] = &[
    rewrite(",", " and ", "list separator becomes the connective"),
    rewrite("late ", "late-", "bind the qualifier to its month"),
    rewrite("early ", "early-", "keep 'early' attached so it fails as one token"),
    rewrite("jully", "july", "recorded typo"),
    rewrite("novemeber", "november", "recorded typo"),
    rewrite("novemebr", "november", "recorded typo"),
    rewrite("south dakota", "", "state name leaking into the cell; must run before 'south'"),
    rewrite("south", "", "region noise that is not a month modifier"),
    rewrite("janury", "january", "recorded typo"),
    rewrite(" \u{2013} ", " and ", "en dash connective"),
    rewrite("octobert", "october", "recorded typo"),
];

/// Apply [`REWRITES`] to `text`, in order.
pub fn normalize(text: &str) -> String {
    let mut normalized = text.to_string();
    for rule in REWRITES {
        if normalized.contains(rule.from) {
            log::trace!("[normalize] {:?} -> {:?} ({})", rule.from, rule.to, rule.note);
            normalized = normalized.replace(rule.from, rule.to);
        }
    }

    if normalized != text {
        log::debug!("[normalize] \"{}\" -> \"{}\"", text, normalized);
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commas_become_and() {
        assert_eq!(normalize("january, march"), "january and  march");
        assert_eq!(normalize("january,march"), "january and march");
    }

    #[test]
    fn qualifiers_are_hyphenated() {
        assert_eq!(normalize("late march till early may"), "late-march till early-may");
    }

    #[test]
    fn typos_are_fixed() {
        assert_eq!(normalize("jully"), "july");
        assert_eq!(normalize("novemeber and novemebr"), "november and november");
        assert_eq!(normalize("janury till octobert"), "january till october");
    }

    #[test]
    fn south_dakota_goes_before_south() {
        assert_eq!(normalize("june south dakota"), "june ");
        assert_eq!(normalize("south june"), " june");
    }

    #[test]
    fn en_dash_is_a_connective() {
        assert_eq!(normalize("june \u{2013} august"), "june and august");
    }

    #[test]
    fn clean_text_is_untouched() {
        assert_eq!(normalize("mid-june till late-august"), "mid-june till late-august");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn normalizing_twice_is_normalizing_once() {
        let inputs = [
            "january, march",
            "june,july",
            "june, , july",
            "late march till early may",
            "jully, novemeber \u{2013} janury",
            "mid-june till late august, south dakota october",
            "late  june",
            "",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn every_rule_documents_itself() {
        assert!(REWRITES.iter().all(|r| !r.from.is_empty() && !r.note.is_empty()));
    }
}
