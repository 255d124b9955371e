//! Bounded text type for names and courses
//!
//! Text fields are stored in fixed-width, zero-padded slots on disk. Instead
//! of truncating input that does not fit, `BoundedText` refuses it.
//!
//! ## Validation
//!
//! Text must:
//! - Be at most `MAX_TEXT_LEN` bytes of UTF-8
//! - Not contain a NUL byte (NUL is the padding byte)
//!
//! Empty text is allowed.

use crate::error::{Error, Result};
use crate::limits::MAX_TEXT_LEN;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length-checked text that always fits a fixed-width record slot
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BoundedText(String);

impl BoundedText {
    /// Create bounded text for the named field, validating the input
    ///
    /// # Errors
    ///
    /// `TextTooLong` when the payload exceeds `MAX_TEXT_LEN` bytes,
    /// `InvalidText` when it contains a NUL byte.
    pub fn for_field(field: &'static str, text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        Self::validate(field, &text)?;
        Ok(BoundedText(text))
    }

    /// Create bounded text with a generic field label
    pub fn new(text: impl Into<String>) -> Result<Self> {
        Self::for_field("text", text)
    }

    /// Validate text against the slot width
    pub fn validate(field: &'static str, text: &str) -> Result<()> {
        if text.len() > MAX_TEXT_LEN {
            return Err(Error::TextTooLong {
                field,
                len: text.len(),
                max: MAX_TEXT_LEN,
            });
        }
        if let Some(position) = text.bytes().position(|b| b == 0) {
            return Err(Error::InvalidText {
                field,
                reason: format!("NUL byte at offset {}", position),
            });
        }
        Ok(())
    }

    /// The text itself
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Payload length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the text is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Unwrap into the owned string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for BoundedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BoundedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for BoundedText {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for BoundedText {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl TryFrom<String> for BoundedText {
    type Error = Error;

    fn try_from(text: String) -> Result<Self> {
        BoundedText::new(text)
    }
}

impl TryFrom<&str> for BoundedText {
    type Error = Error;

    fn try_from(text: &str) -> Result<Self> {
        BoundedText::new(text)
    }
}

impl From<BoundedText> for String {
    fn from(text: BoundedText) -> String {
        text.0
    }
}
