use rdfalign::lexicon::stem;

fn assert_stems(pairs: &[(&str, &str)]) {
    for (word, expected) in pairs {
        assert_eq!(
            stem(word),
            *expected,
            "stem({word:?}) should be {expected:?}"
        );
    }
}

// --- Plurals (step 1a) ---

#[test]
fn plural_suffixes() {
    assert_stems(&[
        ("caresses", "caress"),
        ("ponies", "poni"),
        ("ties", "ti"),
        ("caress", "caress"),
        ("cats", "cat"),
    ]);
}

// --- Past tense and gerunds (step 1b) ---

#[test]
fn ed_and_ing_suffixes() {
    assert_stems(&[
        ("feed", "feed"),
        ("agreed", "agree"),
        ("plastered", "plaster"),
        ("motoring", "motor"),
        ("sing", "sing"),
    ]);
}

#[test]
fn double_consonant_undoubling() {
    assert_stems(&[
        ("hopping", "hop"),
        ("tanned", "tan"),
        ("falling", "fall"),
        ("hissing", "hiss"),
        ("filing", "file"),
    ]);
}

// --- Terminal y (step 1c) ---

#[test]
fn terminal_y_becomes_i() {
    assert_stems(&[("happy", "happi"), ("sky", "sky")]);
}

// --- Longer derivational chains ---

#[test]
fn derivational_suffix_chains() {
    assert_stems(&[
        ("oscillators", "oscil"),
        ("relational", "relat"),
        ("izers", "izer"),
    ]);
}

// --- Inputs left untouched ---

#[test]
fn short_words_unchanged() {
    assert_stems(&[("as", "as"), ("is", "is"), ("be", "be"), ("a", "a")]);
}

#[test]
fn non_alphabetic_tokens_unchanged() {
    assert_stems(&[("42", "42"), ("x86", "x86"), ("köln", "köln")]);
}

#[test]
fn domain_tokens() {
    assert_stems(&[("dark", "dark"), ("scape", "scape"), ("film", "film")]);
}

// --- Determinism ---

#[test]
fn stemming_is_deterministic() {
    for word in ["alignment", "matching", "ontologies", "properties"] {
        assert_eq!(stem(word), stem(word));
    }
}
