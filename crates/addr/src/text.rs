//! Encoder outputs. Encoders never fail loudly: a payload that cannot be rendered under the
//! current profile produces `EncodedText::Unencodable` with the reason. The legacy "???" text
//! appears only when such a value is displayed.

use std::fmt;

use thiserror::Error;

use crate::profile::PrefixKind;

/// The text shown for a value that cannot be encoded.
pub const SENTINEL: &str = "???";

/// Why a value could not be encoded.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum Unencodable {
    /// The profile does not configure a prefix this encoding needs
    #[error("no {0} prefix is configured")]
    MissingPrefix(PrefixKind),

    /// The profile does not configure a witness HRP
    #[error("no bech32 hrp is configured")]
    MissingHrp,

    /// The witness program has the wrong length for its rule
    #[error("witness program must be {expected} bytes, got {got}")]
    ProgramLength {
        /// The required length
        expected: usize,
        /// The actual length
        got: usize,
    },

    /// The script kind has no address form
    #[error("script has no address form")]
    UnrecognizedScript,

    /// The underlying codec refused the input (e.g. an invalid HRP)
    #[error("codec error: {0}")]
    Codec(String),
}

/// The result of encoding a key, blob, or script as text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EncodedText {
    /// An address or key text
    Text(String),
    /// A non-address description of the value, e.g. for OP_RETURN outputs
    Diagnostic(String),
    /// The value cannot be encoded under this profile
    Unencodable(Unencodable),
}

impl EncodedText {
    /// The text, or the sentinel if the value could not be encoded.
    pub fn as_str(&self) -> &str {
        match self {
            EncodedText::Text(s) | EncodedText::Diagnostic(s) => s,
            EncodedText::Unencodable(_) => SENTINEL,
        }
    }

    /// True if this is address or key text.
    pub fn is_text(&self) -> bool {
        matches!(self, EncodedText::Text(_))
    }

    /// True if the value could not be encoded.
    pub fn is_unencodable(&self) -> bool {
        matches!(self, EncodedText::Unencodable(_))
    }

    /// The address or key text, if any. `None` for diagnostics and unencodable values.
    pub fn text(&self) -> Option<&str> {
        match self {
            EncodedText::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The reason the value could not be encoded, if any.
    pub fn reason(&self) -> Option<&Unencodable> {
        match self {
            EncodedText::Unencodable(r) => Some(r),
            _ => None,
        }
    }

    /// Convert to a `Result`. Diagnostics count as success.
    pub fn into_result(self) -> Result<String, Unencodable> {
        match self {
            EncodedText::Text(s) | EncodedText::Diagnostic(s) => Ok(s),
            EncodedText::Unencodable(r) => Err(r),
        }
    }
}

impl fmt::Display for EncodedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<EncodedText> for String {
    fn from(t: EncodedText) -> String {
        match t {
            EncodedText::Text(s) | EncodedText::Diagnostic(s) => s,
            EncodedText::Unencodable(_) => SENTINEL.to_owned(),
        }
    }
}
