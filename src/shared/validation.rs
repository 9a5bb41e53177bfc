use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating contact phone numbers
    /// Digits with optional leading "+" and single "-" or space separators
    /// - Valid: "011-2200000", "+963 11 2200000", "0944123456"
    /// - Invalid: "phone", "011--22", "-0112200", "1"
    pub static ref PHONE_REGEX: Regex =
        Regex::new(r"^\+?[0-9]{2,}(?:[- ][0-9]+)*$").unwrap();
}
