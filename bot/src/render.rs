//! Response rendering: structured results to a single natural-language reply.
//!
//! Pure formatting, no network access. Every formatter takes already-fetched
//! records; names arrive lower-cased and are capitalized for display.

use rotom_dex::query::Effectiveness;
use rotom_dex::{Creature, Move, Type};

/// Uppercase the first character, leave the rest unchanged.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Join with a serial comma: `A`, `A <conj> B`, `A, B, <conj> C`.
pub fn oxford_join(items: &[String], conjunction: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [a, b] => format!("{a} {conjunction} {b}"),
        [rest @ .., last] => format!("{}, {conjunction} {last}", rest.join(", ")),
    }
}

/// `×2` for integral multipliers, `×0.50` otherwise.
pub fn fmt_multiplier(multiplier: f32) -> String {
    if multiplier.fract() == 0.0 {
        format!("×{}", multiplier as u32)
    } else {
        format!("×{multiplier:.2}")
    }
}

pub fn types_line(creature: &Creature) -> String {
    let names: Vec<String> = creature.types.iter().map(|t| t.as_str().to_string()).collect();
    format!("{} is {} type.", capitalize(&creature.name), oxford_join(&names, "and"))
}

pub fn stats_line(creature: &Creature) -> String {
    let s = &creature.stats;
    format!(
        "{}'s base stats — HP {}, Atk {}, Def {}, SpA {}, SpD {}, Spe {}.",
        capitalize(&creature.name),
        s.hp,
        s.atk,
        s.def,
        s.spa,
        s.spd,
        s.spe
    )
}

pub fn weaknesses_line(name: &str, eff: &Effectiveness) -> String {
    if eff.weaknesses.is_empty() {
        return format!("{} has no notable weaknesses.", capitalize(name));
    }

    let mut line = format!("Weak to {}.", with_multipliers(&eff.weaknesses));
    if !eff.resistances.is_empty() {
        line.push_str(&format!(" Resists {}.", with_multipliers(&eff.resistances)));
    }
    if !eff.immunities.is_empty() {
        let names: Vec<String> = eff.immunities.iter().map(Type::to_string).collect();
        line.push_str(&format!(" Immune to {}.", names.join(", ")));
    }
    line
}

fn with_multipliers(entries: &[(Type, f32)]) -> String {
    let rendered: Vec<String> = entries
        .iter()
        .map(|(kind, multiplier)| format!("{kind} ({})", fmt_multiplier(*multiplier)))
        .collect();
    rendered.join(", ")
}

/// Render flattened lineages, deduplicating identical sequences for display
/// only (the flattener itself keeps raw branch multiplicity).
pub fn evolution_line(name: &str, paths: &[Vec<String>]) -> String {
    if paths.iter().all(|path| path.len() <= 1) {
        return format!("{} does not evolve.", capitalize(name));
    }

    let mut rendered: Vec<String> = Vec::new();
    for path in paths {
        let line = path.iter().map(|s| capitalize(s)).collect::<Vec<_>>().join(" → ");
        if !rendered.contains(&line) {
            rendered.push(line);
        }
    }

    format!("{}'s evolution line: {}.", capitalize(name), rendered.join(" | "))
}

pub fn compare_line(a: &Creature, b: &Creature) -> String {
    let (speed_a, speed_b) = (a.stats.spe, b.stats.spe);
    if speed_a == speed_b {
        return format!(
            "{} and {} tie in Speed ({speed_a}).",
            capitalize(&a.name),
            capitalize(&b.name)
        );
    }

    let (faster, slower, high, low) = if speed_a > speed_b {
        (a, b, speed_a, speed_b)
    } else {
        (b, a, speed_b, speed_a)
    };
    format!(
        "{} is faster than {} ({high} vs {low}).",
        capitalize(&faster.name),
        capitalize(&slower.name)
    )
}

/// Up to three lines: summary, numbers, effect text. Absent numbers are
/// omitted; the `$effect_chance` placeholder is filled with the numeric
/// chance, or the empty string when the move has none.
pub fn move_lines(record: &Move) -> String {
    let kind = record.kind.map(|t| t.as_str()).unwrap_or("Unknown");
    let mut lines = vec![format!(
        "{} is {} {kind}-type {} move.",
        capitalize(&record.name),
        article(kind),
        record.damage_class
    )];

    let mut numbers = Vec::new();
    if let Some(power) = record.power {
        numbers.push(format!("Power {power}"));
    }
    if let Some(accuracy) = record.accuracy {
        numbers.push(format!("Accuracy {accuracy}"));
    }
    if let Some(pp) = record.pp {
        numbers.push(format!("{pp} PP"));
    }
    if !numbers.is_empty() {
        lines.push(numbers.join(" • "));
    }

    if let Some(effect) = &record.effect {
        let chance = record.effect_chance.map(|c| c.to_string()).unwrap_or_default();
        lines.push(effect.replace("$effect_chance", &chance));
    }

    lines.join("\n")
}

pub fn dex_line(creature: &Creature) -> String {
    let types: Vec<String> = creature.types.iter().map(|t| t.as_str().to_string()).collect();
    let abilities: Vec<String> = creature.abilities.iter().map(|a| capitalize(a)).collect();
    format!(
        "{} (#{}) is {} type. Abilities: {}. Height {} m, weight {} kg.",
        capitalize(&creature.name),
        creature.id,
        oxford_join(&types, "and"),
        oxford_join(&abilities, "and"),
        creature.height as f32 / 10.0,
        creature.weight as f32 / 10.0
    )
}

fn article(word: &str) -> &'static str {
    match word.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}
