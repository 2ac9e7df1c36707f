//! Naming conventions shared by the config builder and the linkable-keys mapper.

use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
    sync::LazyLock,
};

use regex::Regex;

/// Inserts `_` at every lowercase-to-uppercase boundary, then lowercases.
///
/// Only ASCII letters form a boundary, so acronyms collapse:
/// `OrderItem` -> `order_item`, `HTTPRequest` -> `httprequest`.
pub fn camel_to_snake_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    let mut prev_lower = false;

    for ch in input.chars() {
        if prev_lower && ch.is_ascii_uppercase() {
            out.push('_');
        }
        prev_lower = ch.is_ascii_lowercase();
        out.extend(ch.to_lowercase());
    }

    out
}

pub fn upper_case_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Keeps the first occurrence of every item, preserving order.
pub fn deduplicate<T, I>(items: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Returns the text after the last `separator`, or the whole input when absent.
pub fn last_segment(input: &str, separator: char) -> &str {
    input.rsplit(separator).next().unwrap_or(input)
}

const UNCOUNTABLE_WORDS: &[&str] = &[
    "adulthood", "advice", "agenda", "aid", "aircraft", "alcohol", "ammo", "analytics",
    "anime", "athletics", "audio", "bison", "blood", "bream", "buffalo", "butter", "carp",
    "cash", "chassis", "chess", "clothing", "cod", "commerce", "cooperation", "corps",
    "debris", "diabetes", "digestion", "elk", "energy", "equipment", "excretion",
    "expertise", "firmware", "flounder", "fun", "gallows", "garbage", "graffiti",
    "hardware", "headquarters", "health", "herpes", "highjinks", "homework", "housework",
    "information", "jeans", "justice", "kudos", "labour", "literature", "machinery",
    "mackerel", "mail", "media", "mews", "moose", "music", "mud", "manga", "news", "only",
    "personnel", "pike", "plankton", "pliers", "police", "pollution", "premises", "rain",
    "research", "rice", "salmon", "scissors", "series", "sewage", "shambles", "shrimp",
    "software", "staff", "swine", "tennis", "traffic", "transportation", "trout", "tuna",
    "wealth", "welfare", "whiting", "wildebeest", "wildlife", "you",
];

const UNCOUNTABLE_PATTERNS: &[&str] = &[
    r"pok[eé]mon$",
    r"[^aeiou]ese$",
    r"deer$",
    r"fish$",
    r"measles$",
    r"o[iu]s$",
    r"pox$",
    r"sheep$",
];

const IRREGULARS: &[(&str, &str)] = &[
    ("i", "we"),
    ("me", "us"),
    ("he", "they"),
    ("she", "they"),
    ("them", "them"),
    ("myself", "ourselves"),
    ("yourself", "yourselves"),
    ("itself", "themselves"),
    ("herself", "themselves"),
    ("himself", "themselves"),
    ("themself", "themselves"),
    ("is", "are"),
    ("was", "were"),
    ("has", "have"),
    ("this", "these"),
    ("that", "those"),
    ("echo", "echoes"),
    ("dingo", "dingoes"),
    ("volcano", "volcanoes"),
    ("tornado", "tornadoes"),
    ("torpedo", "torpedoes"),
    ("genus", "genera"),
    ("viscus", "viscera"),
    ("stigma", "stigmata"),
    ("stoma", "stomata"),
    ("dogma", "dogmata"),
    ("lemma", "lemmata"),
    ("schema", "schemata"),
    ("anathema", "anathemata"),
    ("ox", "oxen"),
    ("axe", "axes"),
    ("die", "dice"),
    ("yes", "yeses"),
    ("foot", "feet"),
    ("eave", "eaves"),
    ("goose", "geese"),
    ("tooth", "teeth"),
    ("quiz", "quizzes"),
    ("human", "humans"),
    ("proof", "proofs"),
    ("carve", "carves"),
    ("valve", "valves"),
    ("looey", "looies"),
    ("thief", "thieves"),
    ("groove", "grooves"),
    ("pickaxe", "pickaxes"),
    ("passerby", "passersby"),
    ("canvas", "canvases"),
];

// Later rules win.
const PLURAL_RULES: &[(&str, &str)] = &[
    (r"s?$", "s"),
    (r"[^\x00-\x7F]$", "${0}"),
    (r"([^aeiou]ese)$", "${1}"),
    (r"(ax|test)is$", "${1}es"),
    (r"(alias|[^aou]us|t[lm]as|gas|ris)$", "${1}es"),
    (r"(e[mn]u)s?$", "${1}s"),
    (r"([^l]ias|[aeiou]las|[ejzr]as|[iu]am)$", "${1}"),
    (
        r"(alumn|syllab|vir|radi|nucle|fung|cact|stimul|termin|bacill|foc|uter|loc|strat)(?:us|i)$",
        "${1}i",
    ),
    (r"(alumn|alg|vertebr)(?:a|ae)$", "${1}ae"),
    (r"(seraph|cherub)(?:im)?$", "${1}im"),
    (r"(her|at|gr)o$", "${1}oes"),
    (
        r"(agend|addend|millenni|dat|extrem|bacteri|desiderat|strat|candelabr|errat|ov|symposi|curricul|automat|quor)(?:a|um)$",
        "${1}a",
    ),
    (
        r"(apheli|hyperbat|periheli|asyndet|noumen|phenomen|criteri|organ|prolegomen|hedr|automat)(?:a|on)$",
        "${1}a",
    ),
    (r"sis$", "ses"),
    (r"(?:(kni|wi|li)fe|(ar|l|ea|eo|oa|hoo)f)$", "${1}${2}ves"),
    (r"([^aeiouy]|qu)y$", "${1}ies"),
    (r"([^ch][ieo][ln])ey$", "${1}ies"),
    (r"(x|ch|ss|sh|zz)$", "${1}es"),
    (r"(matr|cod|mur|sil|vert|ind|append)(?:ix|ex)$", "${1}ices"),
    (r"\b((?:tit)?m|l)(?:ice|ouse)$", "${1}ice"),
    (r"(pe)(?:rson|ople)$", "${1}ople"),
    (r"(child)(?:ren)?$", "${1}ren"),
    (r"eaux$", "${0}"),
    (r"m[ae]n$", "men"),
    (r"^thou$", "you"),
];

struct Inflections {
    singular_to_plural: HashMap<&'static str, &'static str>,
    plurals: HashSet<&'static str>,
    uncountable: HashSet<&'static str>,
    // Uncountable patterns are folded in as identity rules.
    rules: Vec<(Regex, &'static str)>,
}

fn case_insensitive(pattern: &str) -> Regex {
    Regex::new(&format!("(?i){pattern}")).expect("built-in inflection pattern must compile")
}

static INFLECTIONS: LazyLock<Inflections> = LazyLock::new(|| {
    let mut rules: Vec<(Regex, &'static str)> = PLURAL_RULES
        .iter()
        .map(|(pattern, replacement)| (case_insensitive(pattern), *replacement))
        .collect();
    rules.extend(
        UNCOUNTABLE_PATTERNS
            .iter()
            .map(|pattern| (case_insensitive(pattern), "${0}")),
    );

    Inflections {
        singular_to_plural: IRREGULARS.iter().copied().collect(),
        plurals: IRREGULARS.iter().map(|(_, plural)| *plural).collect(),
        uncountable: UNCOUNTABLE_WORDS.iter().copied().collect(),
        rules,
    }
});

/// English pluralization that keeps the casing of the input.
///
/// `OrderItem` -> `OrderItems`, `Category` -> `Categories`, `Person` -> `People`.
pub fn pluralize(word: &str) -> String {
    let inflections = &*INFLECTIONS;
    let token = word.to_lowercase();

    if inflections.plurals.contains(token.as_str()) {
        return restore_case(word, &token);
    }
    if let Some(plural) = inflections.singular_to_plural.get(token.as_str()) {
        return restore_case(word, plural);
    }
    if token.is_empty() || inflections.uncountable.contains(token.as_str()) {
        return word.to_string();
    }

    for (pattern, replacement) in inflections.rules.iter().rev() {
        if let Some(captures) = pattern.captures(word) {
            let matched = captures.get(0).expect("group 0 is always present");
            let mut expanded = String::new();
            captures.expand(replacement, &mut expanded);

            // An empty match takes its casing from the preceding character.
            let reference = if matched.as_str().is_empty() {
                word[..matched.start()]
                    .chars()
                    .next_back()
                    .map(String::from)
                    .unwrap_or_default()
            } else {
                matched.as_str().to_string()
            };

            let mut out = String::with_capacity(word.len() + expanded.len());
            out.push_str(&word[..matched.start()]);
            out.push_str(&restore_case(&reference, &expanded));
            out.push_str(&word[matched.end()..]);
            return out;
        }
    }

    word.to_string()
}

fn restore_case(reference: &str, token: &str) -> String {
    if reference == token {
        return token.to_string();
    }
    if reference == reference.to_lowercase() {
        return token.to_lowercase();
    }
    if reference == reference.to_uppercase() {
        return token.to_uppercase();
    }
    if reference.chars().next().is_some_and(char::is_uppercase) {
        let lowered = token.to_lowercase();
        return upper_case_first(&lowered);
    }
    token.to_lowercase()
}
