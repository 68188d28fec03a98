//! The `FormatProfile` holds the network-specific prefixes used to render keys and addresses as
//! text. Every prefix is optional. A network that has no witness addresses simply has no HRP,
//! and encoders that need a missing prefix report it instead of producing text.
//!
//! Profiles are built once, either from a preset (see `presets`), a `FormatProfileBuilder`, or
//! a serialized config in which byte prefixes are hex strings:
//!
//! ```
//! use coins_addr::FormatProfile;
//!
//! let profile: FormatProfile = serde_json::from_str(r#"{
//!     "address_prefix": "00",
//!     "pay_to_script_prefix": "05",
//!     "bech32_hrp": "bc"
//! }"#).unwrap();
//! assert_eq!(profile.address_prefix().unwrap().items(), &[0x00]);
//! assert!(profile.wif_prefix().is_none());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

coins_addr_core::wrap_byte_vector!(
    /// A network prefix, prepended to a payload before text encoding.
    Prefix
);

impl<const N: usize> From<[u8; N]> for Prefix {
    fn from(v: [u8; N]) -> Self {
        Self(v.to_vec())
    }
}

impl From<&str> for Prefix {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl Prefix {
    /// Render the prefix as text. Used for prefixes that are prepended to text rather than to
    /// bytes, e.g. the SEC text prefix.
    pub fn as_text(&self) -> String {
        String::from_utf8_lossy(&self.0).into_owned()
    }
}

/// Names each prefix slot of a `FormatProfile`
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PrefixKind {
    /// Extended private key version bytes
    Bip32Private,
    /// Extended public key version bytes
    Bip32Public,
    /// Private-key wire format (WIF) version byte
    Wif,
    /// Public-key text prefix
    Sec,
    /// Legacy pubkey-hash address version byte
    Address,
    /// Legacy script-hash address version byte
    PayToScript,
}

impl fmt::Display for PrefixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PrefixKind::Bip32Private => "bip32 private",
            PrefixKind::Bip32Public => "bip32 public",
            PrefixKind::Wif => "wif",
            PrefixKind::Sec => "sec",
            PrefixKind::Address => "address",
            PrefixKind::PayToScript => "pay-to-script",
        };
        f.write_str(s)
    }
}

/// The immutable set of text-encoding parameters for one network.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatProfile {
    bip32_prv_prefix: Option<Prefix>,
    bip32_pub_prefix: Option<Prefix>,
    wif_prefix: Option<Prefix>,
    sec_prefix: Option<Prefix>,
    address_prefix: Option<Prefix>,
    pay_to_script_prefix: Option<Prefix>,
    bech32_hrp: Option<String>,
}

impl FormatProfile {
    /// Start building a profile. All prefixes start out absent.
    pub fn builder() -> FormatProfileBuilder {
        FormatProfileBuilder::default()
    }

    /// Look up a prefix by kind
    pub fn prefix(&self, kind: PrefixKind) -> Option<&Prefix> {
        match kind {
            PrefixKind::Bip32Private => self.bip32_prv_prefix.as_ref(),
            PrefixKind::Bip32Public => self.bip32_pub_prefix.as_ref(),
            PrefixKind::Wif => self.wif_prefix.as_ref(),
            PrefixKind::Sec => self.sec_prefix.as_ref(),
            PrefixKind::Address => self.address_prefix.as_ref(),
            PrefixKind::PayToScript => self.pay_to_script_prefix.as_ref(),
        }
    }

    /// The extended private key prefix
    pub fn bip32_prv_prefix(&self) -> Option<&Prefix> {
        self.bip32_prv_prefix.as_ref()
    }

    /// The extended public key prefix
    pub fn bip32_pub_prefix(&self) -> Option<&Prefix> {
        self.bip32_pub_prefix.as_ref()
    }

    /// The private-key wire format prefix
    pub fn wif_prefix(&self) -> Option<&Prefix> {
        self.wif_prefix.as_ref()
    }

    /// The public-key text prefix
    pub fn sec_prefix(&self) -> Option<&Prefix> {
        self.sec_prefix.as_ref()
    }

    /// The legacy pubkey-hash address prefix
    pub fn address_prefix(&self) -> Option<&Prefix> {
        self.address_prefix.as_ref()
    }

    /// The legacy script-hash address prefix
    pub fn pay_to_script_prefix(&self) -> Option<&Prefix> {
        self.pay_to_script_prefix.as_ref()
    }

    /// The witness human-readable prefix
    pub fn bech32_hrp(&self) -> Option<&str> {
        self.bech32_hrp.as_deref()
    }
}

/// Builds a `FormatProfile`. The built profile cannot be modified.
#[derive(Clone, Debug, Default)]
pub struct FormatProfileBuilder {
    profile: FormatProfile,
}

impl FormatProfileBuilder {
    /// Set the extended private key prefix
    pub fn bip32_prv_prefix(mut self, prefix: impl Into<Prefix>) -> Self {
        self.profile.bip32_prv_prefix = Some(prefix.into());
        self
    }

    /// Set the extended public key prefix
    pub fn bip32_pub_prefix(mut self, prefix: impl Into<Prefix>) -> Self {
        self.profile.bip32_pub_prefix = Some(prefix.into());
        self
    }

    /// Set the private-key wire format prefix
    pub fn wif_prefix(mut self, prefix: impl Into<Prefix>) -> Self {
        self.profile.wif_prefix = Some(prefix.into());
        self
    }

    /// Set the public-key text prefix
    pub fn sec_prefix(mut self, prefix: impl Into<Prefix>) -> Self {
        self.profile.sec_prefix = Some(prefix.into());
        self
    }

    /// Set the legacy pubkey-hash address prefix
    pub fn address_prefix(mut self, prefix: impl Into<Prefix>) -> Self {
        self.profile.address_prefix = Some(prefix.into());
        self
    }

    /// Set the legacy script-hash address prefix
    pub fn pay_to_script_prefix(mut self, prefix: impl Into<Prefix>) -> Self {
        self.profile.pay_to_script_prefix = Some(prefix.into());
        self
    }

    /// Set the witness human-readable prefix
    pub fn bech32_hrp(mut self, hrp: impl Into<String>) -> Self {
        self.profile.bech32_hrp = Some(hrp.into());
        self
    }

    /// Finish building
    pub fn build(self) -> FormatProfile {
        self.profile
    }
}
