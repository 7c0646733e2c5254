/// Capitalize the first letter of every alphabetic run and lower-case the
/// rest, so `getting started` becomes `Getting Started` and `2fa` becomes `2Fa`.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            result.push(c);
            in_word = false;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("getting started"), "Getting Started");
        assert_eq!(title_case("api v2"), "Api V2");
        assert_eq!(title_case("2fa setup"), "2Fa Setup");
        assert_eq!(title_case("README notes"), "Readme Notes");
        assert_eq!(title_case("snake_case"), "Snake_Case");
    }
}
