//! Translation parity guard.
//!
//! Every non-fallback locale must define at least the message keys the
//! fallback (`en`) `bykeon-ui.ftl` defines, and no file may define a key
//! twice. Key extraction is a lightweight line scan, not a full Fluent
//! parse: comments (`#`), attributes (`.`), and continuation lines are
//! skipped, and anything of the form `key =` counts as a definition.
//!
//! Adding a locale:
//! 1. Create `ui/i18n/<tag>/bykeon-ui.ftl` with every key from `en`.
//! 2. Register it in `LOCALES` below.

use std::collections::BTreeSet;

const FALLBACK: (&str, &str) = ("en", include_str!("../i18n/en/bykeon-ui.ftl"));

const LOCALES: &[(&str, &str)] = &[
    ("fr", include_str!("../i18n/fr/bykeon-ui.ftl")),
    ("ko", include_str!("../i18n/ko/bykeon-ui.ftl")),
    // Add new locales here.
];

fn message_keys(src: &str) -> Vec<String> {
    let mut keys = Vec::new();
    for line in src.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        let Some((left, _)) = line.split_once('=') else {
            continue;
        };
        let key = left.trim();
        let well_formed = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if well_formed {
            keys.push(key.to_string());
        }
    }
    keys
}

fn duplicates(keys: &[String]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut dups = BTreeSet::new();
    for key in keys {
        if !seen.insert(key.as_str()) {
            dups.insert(key.clone());
        }
    }
    dups.into_iter().collect()
}

#[test]
fn fallback_has_keys_and_no_duplicates() {
    let keys = message_keys(FALLBACK.1);
    assert!(!keys.is_empty(), "Fallback (en) contains no message keys.");
    let dups = duplicates(&keys);
    assert!(dups.is_empty(), "Duplicate keys in en: {}", dups.join(", "));
}

#[test]
fn every_locale_covers_the_fallback_key_set() {
    let fallback_keys: BTreeSet<_> = message_keys(FALLBACK.1).into_iter().collect();
    let mut failures = Vec::new();

    for (locale, src) in LOCALES {
        let keys = message_keys(src);
        let dups = duplicates(&keys);
        if !dups.is_empty() {
            failures.push(format!("{locale}: duplicate keys: {}", dups.join(", ")));
        }

        let key_set: BTreeSet<_> = keys.into_iter().collect();
        let missing: Vec<_> = fallback_keys.difference(&key_set).cloned().collect();
        if !missing.is_empty() {
            failures.push(format!(
                "{locale}: missing {} key(s):\n  {}",
                missing.len(),
                missing.join("\n  ")
            ));
        }
    }

    assert!(
        failures.is_empty(),
        "Translation parity check failed:\n\n{}\n\nHint: copy the missing keys from en, then translate.",
        failures.join("\n\n")
    );
}

#[test]
fn locales_introduce_no_stray_keys() {
    // Keys present in a locale but absent from the fallback are dead
    // weight (the loader can never serve them ahead of en); flag them.
    let fallback_keys: BTreeSet<_> = message_keys(FALLBACK.1).into_iter().collect();

    for (locale, src) in LOCALES {
        let key_set: BTreeSet<_> = message_keys(src).into_iter().collect();
        let stray: Vec<_> = key_set.difference(&fallback_keys).cloned().collect();
        assert!(
            stray.is_empty(),
            "{locale} defines keys the fallback lacks: {}",
            stray.join(", ")
        );
    }
}
