use honggfuzz::fuzz;
use universle::normalize;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let text = String::from_utf8_lossy(data);
            let once = normalize(&text);
            assert_eq!(normalize(&once), once);
            assert!(once
                .chars()
                .all(|c| c == ' ' || c.is_ascii_lowercase() || c.is_ascii_digit()));
        });
    }
}
