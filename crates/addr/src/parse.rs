//! Parsing text back into scripts and key blobs. Unlike the encoders, parsing fails loudly.

use coins_addr_core::enc::{decode_base58check, decode_segwit_for_hrp, EncodingError};
use thiserror::Error;
use tracing::debug;

use crate::{
    profile::{FormatProfile, PrefixKind},
    script::Script,
};

const HASH160_LEN: usize = 20;

/// The kinds of text a parser may be asked to recognize
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TextFamily {
    /// Legacy base58check or witness addresses
    Address,
    /// Private keys in the wire format
    Wif,
    /// Extended keys
    Bip32,
    /// Prefixed hex public keys
    Sec,
}

/// A successfully parsed text
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Parsed {
    /// An address, as the script it pays to
    Address(Script),
    /// A WIF payload with the prefix removed
    Wif(Vec<u8>),
    /// An extended key payload with the version bytes removed
    Bip32 {
        /// True if the private prefix matched
        private: bool,
        /// The key body
        blob: Vec<u8>,
    },
    /// A SEC-encoded public key
    Sec(Vec<u8>),
}

/// Errors from parsing text
#[derive(Debug, Error)]
pub enum ParseError {
    /// The text is not any of the requested families under this profile
    #[error("{0:?} does not match any allowed text family")]
    NoMatchingFamily(String),

    /// The text looked like a witness address for this network but was malformed
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// The text carried the SEC prefix but was not valid hex
    #[error(transparent)]
    Hex(#[from] hex::FromHexError),
}

/// Parses text into one of the `TextFamily` forms
pub trait TextParser {
    /// Try each of `families` in order, returning the first that matches.
    fn parse(&self, text: &str, families: &[TextFamily]) -> Result<Parsed, ParseError>;
}

/// Parses text using the prefixes of a `FormatProfile`.
#[derive(Copy, Clone, Debug)]
pub struct StandardParser<'a> {
    profile: &'a FormatProfile,
}

impl<'a> StandardParser<'a> {
    /// Instantiate a parser over a profile
    pub fn new(profile: &'a FormatProfile) -> Self {
        Self { profile }
    }

    /// Decode base58check text and strip a configured prefix. `None` if the text is not
    /// base58check, or the prefix is absent or does not match.
    fn strip_base58_prefix(&self, text: &str, kind: PrefixKind) -> Option<Vec<u8>> {
        let prefix = self.profile.prefix(kind)?;
        let payload = decode_base58check(text).ok()?;
        payload.strip_prefix(prefix.items()).map(<[u8]>::to_vec)
    }

    fn parse_legacy_address(&self, text: &str) -> Option<Script> {
        for kind in [PrefixKind::Address, PrefixKind::PayToScript].iter() {
            let body = match self.strip_base58_prefix(text, *kind) {
                Some(body) if body.len() == HASH160_LEN => body,
                _ => continue,
            };
            let mut hash = [0u8; HASH160_LEN];
            hash.copy_from_slice(&body);
            return Some(match kind {
                PrefixKind::Address => Script::p2pkh(&hash),
                _ => Script::p2sh(&hash),
            });
        }
        None
    }

    fn parse_witness_address(&self, text: &str) -> Result<Option<Script>, ParseError> {
        let hrp = match self.profile.bech32_hrp() {
            Some(hrp) => hrp,
            None => return Ok(None),
        };
        let found = match text.rfind('1') {
            Some(pos) => &text[..pos],
            None => return Ok(None),
        };
        if !found.eq_ignore_ascii_case(hrp) {
            return Ok(None);
        }
        let (version, program) = decode_segwit_for_hrp(hrp, text)?;
        Ok(Some(Script::witness_program(version, &program)))
    }

    fn parse_sec(&self, text: &str) -> Result<Option<Vec<u8>>, ParseError> {
        let prefix = match self.profile.sec_prefix() {
            Some(prefix) => prefix.as_text(),
            None => return Ok(None),
        };
        match text.strip_prefix(prefix.as_str()) {
            Some(body) => Ok(Some(hex::decode(body)?)),
            None => Ok(None),
        }
    }

    fn try_family(&self, text: &str, family: TextFamily) -> Result<Option<Parsed>, ParseError> {
        Ok(match family {
            TextFamily::Address => match self.parse_legacy_address(text) {
                Some(script) => Some(Parsed::Address(script)),
                None => self.parse_witness_address(text)?.map(Parsed::Address),
            },
            TextFamily::Wif => self
                .strip_base58_prefix(text, PrefixKind::Wif)
                .map(Parsed::Wif),
            TextFamily::Bip32 => {
                if let Some(blob) = self.strip_base58_prefix(text, PrefixKind::Bip32Private) {
                    Some(Parsed::Bip32 {
                        private: true,
                        blob,
                    })
                } else {
                    self.strip_base58_prefix(text, PrefixKind::Bip32Public)
                        .map(|blob| Parsed::Bip32 {
                            private: false,
                            blob,
                        })
                }
            }
            TextFamily::Sec => self.parse_sec(text)?.map(Parsed::Sec),
        })
    }
}

impl<'a> TextParser for StandardParser<'a> {
    fn parse(&self, text: &str, families: &[TextFamily]) -> Result<Parsed, ParseError> {
        for family in families.iter() {
            if let Some(parsed) = self.try_family(text, *family)? {
                return Ok(parsed);
            }
        }
        debug!(text, ?families, "text matched no allowed family");
        Err(ParseError::NoMatchingFamily(text.to_owned()))
    }
}
