use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone)]
pub struct SubmitterName(String);

impl SubmitterName {
    /// Returns an instance of `SubmitterName` if the input satisfies all our
    /// validation constraints on submitter names, an error message otherwise.
    pub fn parse(s: String) -> Result<SubmitterName, String> {
        // `.trim()` returns a view over the input `s` without trailing
        // whitespace-like characters. `.is_empty` checks if the view contains
        // any character.
        let is_empty_or_whitespace = s.trim().is_empty();

        // A grapheme is defined by the Unicode standard as a "user-perceived"
        // character: `å` is a single grapheme, but it is composed of two
        // characters (`a` and `̊`).
        //
        // `graphemes` returns an iterator over the graphemes in the input `s`.
        // `true` specifies that we want to use the extended grapheme
        // definition set, the recommended one.
        let is_too_long = s.graphemes(true).count() > 100;

        let forbidden_characters = ['/', '(', ')', '"', '<', '>', '\\', '{', '}'];
        let contains_forbidden_characters = s.chars().any(|g| forbidden_characters.contains(&g));

        if is_empty_or_whitespace || is_too_long || contains_forbidden_characters {
            Err(format!("{s} is not a valid name."))
        } else {
            Ok(Self(s))
        }
    }
}

/// The caller gets a shared reference to the inner string. This gives the
/// caller **read-only** access, they have no way to compromise our invariants!
impl AsRef<str> for SubmitterName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
