use std::collections::{BTreeMap, BTreeSet};

use rand::rngs::StdRng;
use rand::SeedableRng;
use universle::{pick_hint, HintKey};

fn full_attributes() -> BTreeMap<String, String> {
    HintKey::ALL
        .iter()
        .map(|k| (k.as_str().to_string(), format!("value of {k}")))
        .collect()
}

#[test]
fn never_repeats_a_used_key() {
    let attrs = full_attributes();
    let mut rng = StdRng::seed_from_u64(42);
    let mut used = BTreeSet::new();
    for _ in 0..HintKey::ALL.len() {
        let hint = pick_hint(&attrs, &used, &mut rng).expect("unused keys remain");
        assert!(!used.contains(&hint.key));
        assert_eq!(hint.value, format!("value of {}", hint.key));
        used.insert(hint.key);
    }
    assert_eq!(used.len(), HintKey::ALL.len());
    for _ in 0..5 {
        assert_eq!(pick_hint(&attrs, &used, &mut rng), None);
    }
}

#[test]
fn extra_attributes_are_never_offered() {
    let mut attrs = BTreeMap::new();
    attrs.insert("Founded".to_string(), "1890".to_string());
    attrs.insert("Website".to_string(), "uchicago.edu".to_string());
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(pick_hint(&attrs, &BTreeSet::new(), &mut rng), None);
}

#[test]
fn same_seed_same_hint() {
    let attrs = full_attributes();
    let used = BTreeSet::from([HintKey::Motto, HintKey::Campus]);
    let a = pick_hint(&attrs, &used, &mut StdRng::seed_from_u64(9));
    let b = pick_hint(&attrs, &used, &mut StdRng::seed_from_u64(9));
    assert_eq!(a, b);
}

#[test]
fn selection_reaches_every_key() {
    let attrs = full_attributes();
    let used = BTreeSet::new();
    let mut rng = StdRng::seed_from_u64(7);
    let mut seen = BTreeSet::new();
    for _ in 0..2000 {
        if let Some(h) = pick_hint(&attrs, &used, &mut rng) {
            seen.insert(h.key);
        }
    }
    assert_eq!(seen.len(), HintKey::ALL.len());
}
