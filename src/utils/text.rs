//! Text normalization helpers

/// Convert a string to title case.
///
/// Every alphabetic character that starts the string or follows a
/// non-alphabetic character is upper-cased; the rest are lower-cased.
/// Non-alphabetic characters pass through unchanged.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_alpha = false;

    for ch in input.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_words() {
        assert_eq!(title_case("jane doe"), "Jane Doe");
        assert_eq!(title_case("cs"), "Cs");
        assert_eq!(title_case("COMPUTER SCIENCE"), "Computer Science");
    }

    #[test]
    fn test_title_case_after_punctuation_and_digits() {
        assert_eq!(title_case("o'neil"), "O'Neil");
        assert_eq!(title_case("mary-kate"), "Mary-Kate");
        assert_eq!(title_case("3d art"), "3D Art");
    }

    #[test]
    fn test_title_case_non_ascii_and_empty() {
        assert_eq!(title_case("élodie ÅSTRÖM"), "Élodie Åström");
        assert_eq!(title_case(""), "");
    }
}
