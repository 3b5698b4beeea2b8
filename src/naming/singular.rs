use once_cell::sync::Lazy;
use regex::Regex;

// ------- Singularization policy -------

/// Plural → singular for words the suffix rules get wrong. Lowercase.
const IRREGULAR: &[(&str, &str)] = &[
    ("people", "person"),
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("teeth", "tooth"),
    ("feet", "foot"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("oxen", "ox"),
    ("indices", "index"),
    ("vertices", "vertex"),
    ("matrices", "matrix"),
    ("criteria", "criterion"),
    ("movies", "movie"),
    ("cookies", "cookie"),
    ("pies", "pie"),
    ("ties", "tie"),
    ("shoes", "shoe"),
];

/// Left alone: already singular, or no useful singular.
const UNCOUNTABLE: &[&str] = &[
    "data", "metadata", "info", "information", "news", "series", "species",
    "equipment", "media", "sheep", "fish", "deer", "money", "feedback",
];

/// Suffix rules, tried in order; first match wins.
static SUFFIX_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"(?i)(quiz)zes$", "${1}"),
        (r"(?i)(analy|ba|diagno|parenthe|progno|synop|the|cri)ses$", "${1}sis"),
        (r"(?i)(alias|status|bus)es$", "${1}"),
        (r"(?i)(kni|wi|li)ves$", "${1}fe"),
        (r"(?i)([lr])ves$", "${1}f"),
        (r"(?i)([^aeiouy]|qu)ies$", "${1}y"),
        (r"(?i)(her|potat|tomat|ech|vet)oes$", "${1}o"),
        (r"(?i)(ss)es$", "${1}"),
        (r"(?i)(x|ch|sh|zz)es$", "${1}"),
        (r"(?i)([^sui])s$", "${1}"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).expect("singular rule pattern"), replacement))
    .collect()
});

/// Heuristic plural → singular for an identifier-ish key.
///
/// Irregular and uncountable words are looked up on the last camelCase /
/// snake_case segment (`allChildren` → `allChild`); suffix rules only touch
/// the end of the word anyway.
pub fn singularize(word: &str) -> String {
    let split = last_segment_start(word);
    let (head, tail) = word.split_at(split);
    let tail_lower = tail.to_lowercase();

    if UNCOUNTABLE.contains(&tail_lower.as_str()) {
        return word.to_string();
    }
    if let Some((_, single)) = IRREGULAR.iter().find(|(plural, _)| *plural == tail_lower) {
        return format!("{head}{}", match_first_case(tail, single));
    }

    for (rx, replacement) in SUFFIX_RULES.iter() {
        if rx.is_match(word) {
            return rx.replace(word, *replacement).into_owned();
        }
    }
    word.to_string()
}

/// Byte offset where the last word segment starts.
fn last_segment_start(word: &str) -> usize {
    word.char_indices()
        .filter(|(i, c)| *i > 0 && (c.is_uppercase() || *c == '_' || *c == '-'))
        .map(|(i, c)| if c.is_uppercase() { i } else { i + c.len_utf8() })
        .last()
        .unwrap_or(0)
}

fn match_first_case(original: &str, replacement: &str) -> String {
    match original.chars().next() {
        Some(first) if first.is_uppercase() => super::capitalize(replacement),
        _ => replacement.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{singularize, SUFFIX_RULES};

    #[test]
    fn every_suffix_rule_compiles() {
        assert_eq!(SUFFIX_RULES.len(), 10);
    }

    #[test]
    fn regular_plurals() {
        assert_eq!(singularize("dogs"), "dog");
        assert_eq!(singularize("cats"), "cat");
        assert_eq!(singularize("cities"), "city");
        assert_eq!(singularize("boxes"), "box");
        assert_eq!(singularize("matches"), "match");
        assert_eq!(singularize("classes"), "class");
        assert_eq!(singularize("wolves"), "wolf");
        assert_eq!(singularize("knives"), "knife");
        assert_eq!(singularize("heroes"), "hero");
        assert_eq!(singularize("analyses"), "analysis");
    }

    #[test]
    fn already_singular_is_untouched() {
        assert_eq!(singularize("dog"), "dog");
        assert_eq!(singularize("address"), "address");
        assert_eq!(singularize("status"), "status");
        assert_eq!(singularize("axis"), "axis");
        assert_eq!(singularize(""), "");
    }

    #[test]
    fn irregular_and_uncountable_segments() {
        assert_eq!(singularize("people"), "person");
        assert_eq!(singularize("allChildren"), "allChild");
        assert_eq!(singularize("user_People"), "user_Person");
        assert_eq!(singularize("data"), "data");
        assert_eq!(singularize("userData"), "userData");
        assert_eq!(singularize("news"), "news");
    }

    #[test]
    fn camel_case_suffix() {
        assert_eq!(singularize("lineItems"), "lineItem");
        assert_eq!(singularize("childNodes"), "childNode");
    }
}
