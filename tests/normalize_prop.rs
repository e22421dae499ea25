use quickcheck::quickcheck;
use universle::normalize;

quickcheck! {
    fn normalize_is_idempotent(s: String) -> bool {
        let once = normalize(&s);
        normalize(&once) == once
    }

    fn normalize_ignores_ascii_case(s: String) -> bool {
        normalize(&s.to_ascii_uppercase()) == normalize(&s.to_ascii_lowercase())
    }

    fn output_alphabet_is_restricted(s: String) -> bool {
        let n = normalize(&s);
        !n.starts_with(' ')
            && !n.ends_with(' ')
            && !n.contains("  ")
            && n.chars().all(|c| c == ' ' || c.is_ascii_lowercase() || c.is_ascii_digit())
    }
}

#[test]
fn punctuation_and_case_collapse() {
    assert_eq!(normalize("Stanford!!"), "stanford");
    assert_eq!(normalize("stanford"), "stanford");
    assert_eq!(normalize("STANFORD"), "stanford");
}
