use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone)]
pub struct MessageBody(String);

impl MessageBody {
    /// Returns an instance of `MessageBody` if the input is non-empty and at
    /// most 1000 graphemes long, an error message otherwise.
    pub fn parse(s: String) -> Result<MessageBody, String> {
        let is_empty_or_whitespace = s.trim().is_empty();
        let is_too_long = s.graphemes(true).count() > 1000;

        if is_empty_or_whitespace || is_too_long {
            Err("The message must be between 1 and 1000 characters long.".to_string())
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for MessageBody {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
