//! Output scripts and their classification.
//!
//! We do not handle assembly, disassembly, or Script execution. Scripts are treated as opaque
//! byte vectors. The only semantics we care about are the standard output templates, which a
//! `ScriptClassifier` maps to a `ScriptInfo`.

use coins_addr_core::hashes::{Hash160Digest, Sha256Digest};

const OP_0: u8 = 0x00;
const OP_PUSHDATA1: u8 = 0x4c;
const OP_PUSHDATA2: u8 = 0x4d;
const OP_1: u8 = 0x51;
const OP_RETURN: u8 = 0x6a;
const OP_EQUAL: u8 = 0x87;
const OP_EQUALVERIFY: u8 = 0x88;
const OP_DUP: u8 = 0x76;
const OP_HASH160: u8 = 0xa9;
const OP_CHECKSIG: u8 = 0xac;

coins_addr_core::wrap_byte_vector!(
    /// An output script. `Script::default()` is the empty script.
    Script
);

fn push_data(script: &mut Vec<u8>, data: &[u8]) {
    let len = data.len();
    if len <= 75 {
        script.push(len as u8);
    } else if len <= 0xff {
        script.push(OP_PUSHDATA1);
        script.push(len as u8);
    } else {
        script.push(OP_PUSHDATA2);
        script.extend_from_slice(&(len as u16).to_le_bytes());
    }
    script.extend_from_slice(data);
}

impl Script {
    /// Instantiate a standard p2pkh script from a pubkey hash.
    pub fn p2pkh(hash: &Hash160Digest) -> Self {
        let mut v: Vec<u8> = vec![OP_DUP, OP_HASH160, 0x14];
        v.extend(hash);
        v.extend(&[OP_EQUALVERIFY, OP_CHECKSIG]);
        v.into()
    }

    /// Instantiate a standard p2sh script from a script hash.
    pub fn p2sh(hash: &Hash160Digest) -> Self {
        let mut v: Vec<u8> = vec![OP_HASH160, 0x14];
        v.extend(hash);
        v.push(OP_EQUAL);
        v.into()
    }

    /// Instantiate a witness program script: a version opcode followed by a single push.
    /// Callers are responsible for the version and program length being valid.
    pub fn witness_program(version: u8, program: &[u8]) -> Self {
        let op = if version == 0 { OP_0 } else { OP_1 + version - 1 };
        let mut v: Vec<u8> = vec![op];
        push_data(&mut v, program);
        v.into()
    }

    /// Instantiate a standard p2wpkh script from a pubkey hash.
    pub fn p2wpkh(hash: &Hash160Digest) -> Self {
        Self::witness_program(0, hash)
    }

    /// Instantiate a standard p2wsh script from a script hash.
    pub fn p2wsh(hash: &Sha256Digest) -> Self {
        Self::witness_program(0, hash)
    }

    /// Instantiate a bare pay-to-pubkey script from a SEC-encoded pubkey.
    pub fn p2pk(pubkey: &[u8]) -> Self {
        let mut v = vec![];
        push_data(&mut v, pubkey);
        v.push(OP_CHECKSIG);
        v.into()
    }

    /// Instantiate an OP_RETURN script carrying a single data push.
    pub fn null_data(data: &[u8]) -> Self {
        let mut v = vec![OP_RETURN];
        if !data.is_empty() {
            push_data(&mut v, data);
        }
        v.into()
    }
}

/// The standard output kinds, with the payload each carries. `Unrecognized` covers all other
/// scripts, including witness versions after 0.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum ScriptInfo {
    /// Pay to Pubkeyhash
    PubkeyHash(Hash160Digest),
    /// Pay to Witness Pubkeyhash
    WitnessPubkeyHash(Hash160Digest),
    /// Pay to Witness Scripthash
    WitnessScriptHash(Sha256Digest),
    /// Pay to Pubkey. Carries the SEC-encoded key.
    PublicKey(Vec<u8>),
    /// Pay to Scripthash
    ScriptHash(Hash160Digest),
    /// OP_RETURN with its pushed data
    NullData(Vec<u8>),
    /// Nonstandard or unknown
    Unrecognized,
}

impl ScriptInfo {
    /// A short name for the kind, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            ScriptInfo::PubkeyHash(_) => "p2pkh",
            ScriptInfo::WitnessPubkeyHash(_) => "p2pkh_wit",
            ScriptInfo::WitnessScriptHash(_) => "p2sh_wit",
            ScriptInfo::PublicKey(_) => "p2pk",
            ScriptInfo::ScriptHash(_) => "p2sh",
            ScriptInfo::NullData(_) => "nulldata",
            ScriptInfo::Unrecognized => "unrecognized",
        }
    }
}

/// Inspects a script and determines its kind. Must be total: every byte string maps to some
/// `ScriptInfo`, with `ScriptInfo::Unrecognized` as the fallthrough.
pub trait ScriptClassifier {
    /// Classify the script
    fn classify(&self, script: &[u8]) -> ScriptInfo;
}

/// Recognizes the standard Bitcoin output templates.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct StandardClassifier;

impl StandardClassifier {
    fn extract_null_data(items: &[u8]) -> Option<Vec<u8>> {
        match items {
            [OP_RETURN] => Some(vec![]),
            [OP_RETURN, OP_PUSHDATA1, len, data @ ..] if *len as usize == data.len() => {
                Some(data.to_vec())
            }
            [OP_RETURN, OP_PUSHDATA2, l0, l1, data @ ..]
                if u16::from_le_bytes([*l0, *l1]) as usize == data.len() =>
            {
                Some(data.to_vec())
            }
            [OP_RETURN, len, data @ ..] if *len <= 75 && *len as usize == data.len() => {
                Some(data.to_vec())
            }
            _ => None,
        }
    }

    fn extract_pubkey(items: &[u8]) -> Option<Vec<u8>> {
        match items {
            [0x21, key @ .., OP_CHECKSIG] if key.len() == 33 => Some(key.to_vec()),
            [0x41, key @ .., OP_CHECKSIG] if key.len() == 65 => Some(key.to_vec()),
            _ => None,
        }
    }
}

impl ScriptClassifier for StandardClassifier {
    fn classify(&self, items: &[u8]) -> ScriptInfo {
        if let Some(data) = Self::extract_null_data(items) {
            return ScriptInfo::NullData(data);
        }
        if let Some(key) = Self::extract_pubkey(items) {
            return ScriptInfo::PublicKey(key);
        }

        let mut h20 = Hash160Digest::default();
        let mut h32 = Sha256Digest::default();
        match items.len() {
            0x19 if items[0..3] == [OP_DUP, OP_HASH160, 0x14]
                && items[0x17..] == [OP_EQUALVERIFY, OP_CHECKSIG] =>
            {
                h20.copy_from_slice(&items[3..0x17]);
                ScriptInfo::PubkeyHash(h20)
            }
            0x17 if items[0..2] == [OP_HASH160, 0x14] && items[0x16] == OP_EQUAL => {
                h20.copy_from_slice(&items[2..0x16]);
                ScriptInfo::ScriptHash(h20)
            }
            0x16 if items[0..2] == [OP_0, 0x14] => {
                h20.copy_from_slice(&items[2..]);
                ScriptInfo::WitnessPubkeyHash(h20)
            }
            0x22 if items[0..2] == [OP_0, 0x20] => {
                h32.copy_from_slice(&items[2..]);
                ScriptInfo::WitnessScriptHash(h32)
            }
            _ => ScriptInfo::Unrecognized,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn classify_hex(s: &str) -> ScriptInfo {
        StandardClassifier.classify(&hex::decode(s).unwrap())
    }

    #[test]
    fn it_determines_script_types_accurately() {
        let h20 = hex::decode("751e76e8199196d454941c45d1b3a323f1433bd6").unwrap();
        let mut hash = Hash160Digest::default();
        hash.copy_from_slice(&h20);

        assert_eq!(
            classify_hex("76a914751e76e8199196d454941c45d1b3a323f1433bd688ac"),
            ScriptInfo::PubkeyHash(hash)
        );
        assert_eq!(
            classify_hex("a914751e76e8199196d454941c45d1b3a323f1433bd687"),
            ScriptInfo::ScriptHash(hash)
        );
        assert_eq!(
            classify_hex("0014751e76e8199196d454941c45d1b3a323f1433bd6"),
            ScriptInfo::WitnessPubkeyHash(hash)
        );
        assert_eq!(
            classify_hex("0020701a8d401c84fb13e6baf169d59684e17abd9fa216c8cc5b9fc63d622ff8c58d"),
            ScriptInfo::WitnessScriptHash(
                hex::decode("701a8d401c84fb13e6baf169d59684e17abd9fa216c8cc5b9fc63d622ff8c58d")
                    .unwrap()
                    .as_slice()
                    .try_into()
                    .unwrap()
            )
        );
        assert_eq!(
            classify_hex("210279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798ac"),
            ScriptInfo::PublicKey(
                hex::decode("0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798")
                    .unwrap()
            )
        );
        assert_eq!(
            classify_hex("6a0568656c6c6f"),
            ScriptInfo::NullData(b"hello".to_vec())
        );
        assert_eq!(classify_hex("6a"), ScriptInfo::NullData(vec![]));
    }

    #[test]
    fn it_falls_through_to_unrecognized() {
        let cases = [
            "",
            "00",
            "76a914751e76e8199196d454941c45d1b3a323f1433bd688ad",
            "a914751e76e8199196d454941c45d1b3a323f1433bd688",
            "0114751e76e8199196d454941c45d1b3a323f1433bd6",
            // witness v1
            "5120751e76e8199196d454941c45d1b3a323f1433bd6751e76e8199196d454941c45",
            "6a0668656c6c6f",
            "2102ac",
        ];
        for case in cases.iter() {
            assert_eq!(classify_hex(case), ScriptInfo::Unrecognized, "{}", case);
        }
    }

    #[test]
    fn it_classifies_what_it_builds() {
        let h20 = [7u8; 20];
        let h32 = [9u8; 32];
        let c = StandardClassifier;
        assert_eq!(c.classify(Script::p2pkh(&h20).items()), ScriptInfo::PubkeyHash(h20));
        assert_eq!(c.classify(Script::p2sh(&h20).items()), ScriptInfo::ScriptHash(h20));
        assert_eq!(
            c.classify(Script::p2wpkh(&h20).items()),
            ScriptInfo::WitnessPubkeyHash(h20)
        );
        assert_eq!(
            c.classify(Script::p2wsh(&h32).items()),
            ScriptInfo::WitnessScriptHash(h32)
        );
        let key = [2u8; 33];
        assert_eq!(
            c.classify(Script::p2pk(&key).items()),
            ScriptInfo::PublicKey(key.to_vec())
        );
        for len in [0usize, 5, 75, 76, 80, 300].iter() {
            let data = vec![0xab; *len];
            assert_eq!(
                c.classify(Script::null_data(&data).items()),
                ScriptInfo::NullData(data)
            );
        }
    }

    #[test]
    fn it_builds_later_witness_versions() {
        let s = Script::witness_program(1, &[3u8; 32]);
        assert_eq!(s.items()[0], 0x51);
        assert_eq!(s.items()[1], 0x20);
        assert_eq!(s.len(), 34);
        assert_eq!(Script::witness_program(16, &[3u8; 2]).items()[0], 0x60);
    }
}
