//! Ordered pattern matching from raw text to [`Intent`].

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::Intent;

type Build = fn(&Captures) -> Intent;

/// Matchers are tried top to bottom; the first pattern that matches wins.
/// Order matters: the looser patterns further down would shadow the more
/// specific ones above them if tried first.
static MATCHERS: Lazy<Vec<(Regex, Build)>> = Lazy::new(|| {
    vec![
        (
            pattern(
                r"\b(?:who(?:'s|\s+is)\s+faster|compare\s+speed)[,:]?\s+(.+?)\s+(?:vs\.?|versus|or)\s+(.+)$",
            ),
            build_compare_speed as Build,
        ),
        (pattern(r"\bweakness(?:es)?\s+of\s+(.+)$"), build_weaknesses),
        (
            pattern(r"\b(?:evolutions?|evo(?:\s+line)?)\b\s*(?:of\s+)?(.+)$"),
            build_evolution,
        ),
        (pattern(r"\b(?:base\s+)?stats?\s+of\s+(.+)$"), build_stats),
        (pattern(r"\btypes?\s+of\s+(.+)$"), build_types),
        (
            pattern(r"\b(?:(?:what\s+does|info\s+on|details\s+for)\s+)?move\s+(.+)$"),
            build_move,
        ),
    ]
});

/// Classify a free-text query into an [`Intent`].
///
/// Never fails: when no pattern matches, the last whitespace-delimited token
/// is taken as a creature name for a full dex entry.
pub fn classify(text: &str) -> Intent {
    let text = normalize(text);

    for (matcher, build) in MATCHERS.iter() {
        if let Some(caps) = matcher.captures(&text) {
            return build(&caps);
        }
    }

    Intent::Dex {
        name: text.split_whitespace().next_back().unwrap_or_default().to_string(),
    }
}

fn pattern(source: &str) -> Regex {
    // patterns are literals above; a compile failure is a bug, not input
    Regex::new(source).expect("valid classifier pattern")
}

fn build_compare_speed(caps: &Captures) -> Intent {
    Intent::CompareSpeed {
        first: capture(caps, 1),
        second: capture(caps, 2),
    }
}

fn build_weaknesses(caps: &Captures) -> Intent {
    Intent::Weaknesses { name: capture(caps, 1) }
}

fn build_evolution(caps: &Captures) -> Intent {
    Intent::Evolution { name: capture(caps, 1) }
}

fn build_stats(caps: &Captures) -> Intent {
    Intent::Stats { name: capture(caps, 1) }
}

fn build_types(caps: &Captures) -> Intent {
    Intent::Types { name: capture(caps, 1) }
}

fn build_move(caps: &Captures) -> Intent {
    Intent::MoveInfo { name: capture(caps, 1) }
}

/// Lower-case, trim, and strip trailing sentence punctuation.
fn normalize(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .trim_end_matches(['?', '.', '!'])
        .trim_end()
        .to_string()
}

fn capture(caps: &Captures, index: usize) -> String {
    caps.get(index).map(|m| m.as_str().trim().to_string()).unwrap_or_default()
}
