// src/util/ids.rs
use rand::Rng;

/// Generate a random card file name of `len` lowercase latin letters.
///
/// Card names are opaque identifiers; nothing ever parses them.
pub fn random_name(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| {
            let idx = rng.random_range(0..26);
            (b'a' + idx) as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_length_when_generating_name_then_has_that_length() {
        assert_eq!(random_name(64).len(), 64);
        assert_eq!(random_name(8).len(), 8);
        assert_eq!(random_name(0).len(), 0);
    }

    #[test]
    fn given_generated_name_then_contains_only_lowercase_ascii() {
        let name = random_name(128);

        assert!(name.chars().all(|c| c.is_ascii_lowercase()));
    }
}
