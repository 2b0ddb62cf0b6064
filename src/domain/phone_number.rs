use once_cell::sync::Lazy;
use regex::Regex;

// International-friendly: optional leading `+` and country code, optional
// parenthesized area code, grouped digit runs separated by spaces or dashes.
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\+?\d{1,4}?[\s-]?)?((\(\d{1,4}\))|\d{1,4})[\s-]?\d{3,4}[\s-]?\d{3,4}$")
        .expect("Failed to compile the phone number pattern")
});

#[derive(Debug, Clone)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(s: String) -> Result<PhoneNumber, String> {
        if PHONE_PATTERN.is_match(&s) {
            Ok(Self(s))
        } else {
            Err(format!("{s} is not a valid phone number."))
        }
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
