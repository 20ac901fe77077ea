use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for Austrian postal codes: exactly four digits, first digit non-zero
    /// - Valid: "5020", "1010", "6900"
    /// - Invalid: "502", "50200", "0123", "A-5020"
    pub static ref POSTAL_CODE_REGEX: Regex = Regex::new(r"^[1-9][0-9]{3}$").unwrap();

    /// Regex for phone numbers in international format
    /// - Valid: "+43 664 123 4567", "+436641234567"
    /// - Invalid: "0664 1234567", "+43", "call me"
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\+[1-9][0-9]{0,2}[ ]?[0-9][0-9 ]{5,17}$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postal_code_regex_valid() {
        assert!(POSTAL_CODE_REGEX.is_match("5020"));
        assert!(POSTAL_CODE_REGEX.is_match("1010"));
        assert!(POSTAL_CODE_REGEX.is_match("6900"));
        assert!(POSTAL_CODE_REGEX.is_match("9500"));
    }

    #[test]
    fn test_postal_code_regex_invalid() {
        assert!(!POSTAL_CODE_REGEX.is_match("502")); // too short
        assert!(!POSTAL_CODE_REGEX.is_match("50200")); // too long
        assert!(!POSTAL_CODE_REGEX.is_match("0123")); // leading zero
        assert!(!POSTAL_CODE_REGEX.is_match("A-5020")); // prefixed
        assert!(!POSTAL_CODE_REGEX.is_match("")); // empty
        assert!(!POSTAL_CODE_REGEX.is_match("50 20")); // inner space
    }

    #[test]
    fn test_phone_regex_valid() {
        assert!(PHONE_REGEX.is_match("+43 664 123 4567"));
        assert!(PHONE_REGEX.is_match("+436641234567"));
        assert!(PHONE_REGEX.is_match("+49 170 1234567"));
    }

    #[test]
    fn test_phone_regex_invalid() {
        assert!(!PHONE_REGEX.is_match("0664 1234567")); // no country code
        assert!(!PHONE_REGEX.is_match("+43")); // too short
        assert!(!PHONE_REGEX.is_match("call me")); // not a number
        assert!(!PHONE_REGEX.is_match("")); // empty
    }
}
