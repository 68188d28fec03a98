//! The `AddressCodec` renders keys, blobs, and scripts as network text, and reverses address
//! text into scripts.
//!
//! ```
//! use coins_addr::{presets, AddressCodec, Script};
//!
//! let codec = AddressCodec::new(presets::bitcoin_mainnet());
//!
//! let script = Script::p2wpkh(&[0x11; 20]);
//! let address = codec.address_for_script(script.items());
//! assert!(address.as_str().starts_with("bc1q"));
//!
//! let decoded = codec.script_for_address(address.as_str()).unwrap();
//! assert_eq!(decoded, script);
//! ```

use std::marker::PhantomData;

use coins_addr_core::enc::{encode_base58check, encode_segwit};
use tracing::{debug, trace};

use crate::{
    hashes::{BitcoinHashes, HashScheme},
    parse::{ParseError, Parsed, StandardParser, TextFamily, TextParser},
    profile::{FormatProfile, PrefixKind},
    script::{Script, ScriptClassifier, ScriptInfo, StandardClassifier},
    text::{EncodedText, Unencodable},
};

const WITNESS_PUBKEY_HASH_LEN: usize = 20;
const WITNESS_SCRIPT_HASH_LEN: usize = 32;

fn unencodable(reason: Unencodable) -> EncodedText {
    debug!(%reason, "value cannot be encoded under this profile");
    EncodedText::Unencodable(reason)
}

/// Encodes keys and scripts as text for one network profile. Parameterized by a
/// `ScriptClassifier` and a `HashScheme`, which default to the standard Bitcoin ones.
///
/// The codec is never mutated after construction, and may be shared freely between threads.
#[derive(Clone, Debug)]
pub struct AddressCodec<C = StandardClassifier, H = BitcoinHashes> {
    profile: FormatProfile,
    classifier: C,
    hashes: PhantomData<fn(H) -> H>,
}

impl AddressCodec {
    /// Instantiate a codec with the standard classifier and Bitcoin hashes.
    pub fn new(profile: FormatProfile) -> Self {
        Self::with_classifier(profile, StandardClassifier)
    }
}

impl<C, H> AddressCodec<C, H>
where
    C: ScriptClassifier,
    H: HashScheme,
{
    /// Instantiate a codec with a custom classifier.
    pub fn with_classifier(profile: FormatProfile, classifier: C) -> Self {
        Self {
            profile,
            classifier,
            hashes: PhantomData,
        }
    }

    /// The profile this codec encodes with
    pub fn profile(&self) -> &FormatProfile {
        &self.profile
    }

    /// The classifier used by `address_for_script`
    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// A parser over this codec's profile
    pub fn parser(&self) -> StandardParser<'_> {
        StandardParser::new(&self.profile)
    }

    fn prefixed_base58(&self, kind: PrefixKind, payload: &[u8]) -> EncodedText {
        match self.profile.prefix(kind) {
            Some(prefix) => {
                let mut v = Vec::with_capacity(prefix.len() + payload.len());
                v.extend_from_slice(prefix.items());
                v.extend_from_slice(payload);
                EncodedText::Text(encode_base58check(&v))
            }
            None => unencodable(Unencodable::MissingPrefix(kind)),
        }
    }

    fn witness_v0(&self, program: &[u8], expected: usize) -> EncodedText {
        let hrp = match self.profile.bech32_hrp() {
            Some(hrp) => hrp,
            None => return unencodable(Unencodable::MissingHrp),
        };
        if program.len() != expected {
            return unencodable(Unencodable::ProgramLength {
                expected,
                got: program.len(),
            });
        }
        match encode_segwit(hrp, 0, program) {
            Ok(s) => EncodedText::Text(s),
            Err(e) => unencodable(Unencodable::Codec(e.to_string())),
        }
    }

    /// Render a serialized extended key body (without version bytes) as base58check text,
    /// using the private or public prefix. The blob length is not checked.
    pub fn bip32_text(&self, blob: &[u8], as_private: bool) -> EncodedText {
        let kind = if as_private {
            PrefixKind::Bip32Private
        } else {
            PrefixKind::Bip32Public
        };
        self.prefixed_base58(kind, blob)
    }

    /// Render a private key blob in the wire format (WIF).
    pub fn wif_text(&self, blob: &[u8]) -> EncodedText {
        self.prefixed_base58(PrefixKind::Wif, blob)
    }

    /// Render a SEC public key as the text prefix followed by hex. Not checksummed.
    pub fn pubkey_text(&self, blob: &[u8]) -> EncodedText {
        match self.profile.sec_prefix() {
            Some(prefix) => EncodedText::Text(format!("{}{}", prefix.as_text(), hex::encode(blob))),
            None => unencodable(Unencodable::MissingPrefix(PrefixKind::Sec)),
        }
    }

    /// Classify a script and render its address.
    pub fn address_for_script(&self, script: &[u8]) -> EncodedText {
        let info = self.classifier.classify(script);
        self.address_for_script_info(&info)
    }

    /// Render the address for a classified script.
    ///
    /// A bare public key is rendered as the pubkey-hash address of its hash160. This is the
    /// network convention, not a distinct address kind.
    pub fn address_for_script_info(&self, info: &ScriptInfo) -> EncodedText {
        trace!(kind = info.kind(), "encoding script info");
        match info {
            ScriptInfo::PubkeyHash(h) => self.address_for_pubkey_hash(h),
            ScriptInfo::WitnessPubkeyHash(h) => self.address_for_witness_pubkey_hash(h),
            ScriptInfo::WitnessScriptHash(h) => self.address_for_witness_script_hash(h),
            ScriptInfo::PublicKey(sec) => self.address_for_pubkey_hash(&H::hash160(sec)),
            ScriptInfo::ScriptHash(h) => self.address_for_script_hash(h),
            ScriptInfo::NullData(data) => {
                EncodedText::Diagnostic(format!("(nulldata {})", hex::encode(data)))
            }
            ScriptInfo::Unrecognized => unencodable(Unencodable::UnrecognizedScript),
        }
    }

    /// Render a legacy pubkey-hash address.
    pub fn address_for_pubkey_hash(&self, hash160: &[u8]) -> EncodedText {
        self.prefixed_base58(PrefixKind::Address, hash160)
    }

    /// Render a legacy script-hash address.
    pub fn address_for_script_hash(&self, hash160: &[u8]) -> EncodedText {
        self.prefixed_base58(PrefixKind::PayToScript, hash160)
    }

    /// Render a witness v0 pubkey-hash address. The program must be exactly 20 bytes.
    pub fn address_for_witness_pubkey_hash(&self, hash160: &[u8]) -> EncodedText {
        self.witness_v0(hash160, WITNESS_PUBKEY_HASH_LEN)
    }

    /// Render a witness v0 script-hash address. The program must be exactly 32 bytes.
    pub fn address_for_witness_script_hash(&self, hash256: &[u8]) -> EncodedText {
        self.witness_v0(hash256, WITNESS_SCRIPT_HASH_LEN)
    }

    /// Hash a script and render its legacy script-hash address.
    pub fn address_for_raw_script(&self, script: &[u8]) -> EncodedText {
        self.address_for_script_hash(&H::hash160(script))
    }

    /// Hash a script and render its witness v0 script-hash address.
    pub fn address_for_raw_script_witness(&self, script: &[u8]) -> EncodedText {
        self.address_for_witness_script_hash(&H::witness_hash(script))
    }

    /// Parse address text into the script it pays to. Fails if the text is not an address
    /// under this profile.
    pub fn script_for_address(&self, address: &str) -> Result<Script, ParseError> {
        match self.parser().parse(address, &[TextFamily::Address])? {
            Parsed::Address(script) => Ok(script),
            _ => Err(ParseError::NoMatchingFamily(address.to_owned())),
        }
    }
}
