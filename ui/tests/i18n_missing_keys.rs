use std::collections::{BTreeMap, BTreeSet};

/// Locale consistency checks against the fallback (en-US) `affilio-ui.ftl`:
/// - every locale defines every fallback message, with no duplicates
/// - every message uses the same `{ $variable }` placeholders as the fallback
///
/// Only message lines of the form `key = value` are considered; comments, attributes and
/// continuation lines are skipped.
///
/// If you add a new locale:
/// 1. Create `ui/i18n/<locale>/affilio-ui.ftl`
/// 2. Copy all keys from `en-US/affilio-ui.ftl`
/// 3. Register it in `LOCALES` below and run `cargo test -p affilio-ui`.
const EN_US: &str = include_str!("../i18n/en-US/affilio-ui.ftl");

const LOCALES: &[(&str, &str)] = &[
    ("es-ES", include_str!("../i18n/es-ES/affilio-ui.ftl")),
    ("fr-FR", include_str!("../i18n/fr-FR/affilio-ui.ftl")),
];

/// Keys the product page looks up through its translator.
const PAGE_KEYS: &[&str] = &["buy", "description", "benefits", "testimonials", "faq", "copyright"];

#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback = parse_messages(EN_US, "en-US");
    assert!(!fallback.is_empty(), "Fallback (en-US) contains no keys.");

    let mut failures = Vec::new();
    for (locale, src) in LOCALES {
        let messages = parse_messages(src, locale);
        let missing: Vec<_> = fallback
            .keys()
            .filter(|k| !messages.contains_key(*k))
            .cloned()
            .collect();
        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from en-US, then translate.",
            failures.join("\n\n")
        );
    }
}

#[test]
fn placeholders_match_fallback() {
    let fallback = parse_messages(EN_US, "en-US");
    let mut mismatches = Vec::new();

    for (locale, src) in LOCALES {
        for (key, value) in parse_messages(src, locale) {
            let Some(reference) = fallback.get(&key) else {
                continue;
            };
            let expected = variables(reference);
            let actual = variables(&value);
            if expected != actual {
                mismatches.push(format!("{locale}/{key}: expected {expected:?}, found {actual:?}"));
            }
        }
    }

    assert!(
        mismatches.is_empty(),
        "Placeholder mismatches:\n  {}",
        mismatches.join("\n  ")
    );
}

#[test]
fn page_keys_are_defined() {
    let fallback = parse_messages(EN_US, "en-US");
    for key in PAGE_KEYS {
        assert!(fallback.contains_key(*key), "fallback is missing page key `{key}`");
    }
}

/// Message key to (single-line) value. Panics on duplicate definitions.
fn parse_messages(src: &str, locale: &str) -> BTreeMap<String, String> {
    let mut messages = BTreeMap::new();
    let mut dups = BTreeSet::new();

    for raw in src.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        let Some((left, right)) = line.split_once('=') else {
            continue;
        };
        let key = left.trim();
        if key.is_empty() || key.contains(char::is_whitespace) || key.starts_with('-') {
            continue;
        }
        if messages
            .insert(key.to_string(), right.trim().to_string())
            .is_some()
        {
            dups.insert(format!("{key}  (line: \"{raw}\")"));
        }
    }

    if !dups.is_empty() {
        panic!(
            "Duplicate key definitions in {locale}:\n  {}",
            dups.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
    messages
}

/// Variable names referenced as `{ $name }` in a message value.
fn variables(value: &str) -> BTreeSet<String> {
    value
        .split('$')
        .skip(1)
        .filter_map(|rest| {
            let name: String = rest
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
                .collect();
            (!name.is_empty()).then_some(name)
        })
        .collect()
}
