use bech32::{u5, FromBase32, ToBase32, Variant};

use crate::enc::{EncodingError, EncodingResult};

/// The highest defined witness version
pub const MAX_WITNESS_VERSION: u8 = 16;

fn variant_for(version: u8) -> Variant {
    if version == 0 {
        Variant::Bech32
    } else {
        Variant::Bech32m
    }
}

/// Check that a witness program length is allowed for its version. Version 0 programs must be
/// 20 or 32 bytes. Later versions must be between 2 and 40 bytes.
pub fn check_witness_program(version: u8, len: usize) -> EncodingResult<()> {
    if version > MAX_WITNESS_VERSION {
        return Err(EncodingError::SegwitVersion(version));
    }
    let ok = match version {
        0 => len == 20 || len == 32,
        _ => (2..=40).contains(&len),
    };
    if !ok {
        return Err(EncodingError::ProgramLength { version, len });
    }
    Ok(())
}

/// Encode a witness program as a segwit string. Version 0 uses the bech32 checksum, later
/// versions use bech32m.
pub fn encode_segwit(hrp: &str, version: u8, program: &[u8]) -> EncodingResult<String> {
    check_witness_program(version, program.len())?;

    let mut data = vec![u5::try_from_u8(version)?];
    data.extend(program.to_base32());
    Ok(bech32::encode(hrp, data, variant_for(version))?)
}

/// Decode a segwit string into its (lowercase) HRP, witness version, and witness program.
pub fn decode_segwit(s: &str) -> EncodingResult<(String, u8, Vec<u8>)> {
    let (hrp, data, variant) = bech32::decode(s)?;
    let (v, p) = match data.split_first() {
        Some(split) => split,
        None => return Err(EncodingError::EmptyData),
    };

    let version = v.to_u8();
    if version > MAX_WITNESS_VERSION {
        return Err(EncodingError::SegwitVersion(version));
    }
    if variant != variant_for(version) {
        return Err(EncodingError::WrongVariant);
    }

    let program = Vec::<u8>::from_base32(p)?;
    check_witness_program(version, program.len())?;
    Ok((hrp, version, program))
}

/// Decode a witness program from a segwit string. Caller specifies an expected HRP. If a
/// different HRP is found, returns `WrongHrp`.
pub fn decode_segwit_for_hrp(expected_hrp: &str, s: &str) -> EncodingResult<(u8, Vec<u8>)> {
    let (hrp, version, program) = decode_segwit(s)?;
    if !hrp.eq_ignore_ascii_case(expected_hrp) {
        return Err(EncodingError::WrongHrp {
            got: hrp,
            expected: expected_hrp.to_owned(),
        });
    }
    Ok((version, program))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_should_encode_and_decode_bech32() {
        let hrp = "bc";
        let addrs = [
            "bc1q233q49ve8ysdsztqh9ue57m6227627j8ztscl9",
            "bc1qaqm8wh8sr6gfx49mdpz3w70z48xdh0pzlf5kgr",
            "bc1qjl8uwezzlech723lpnyuza0h2cdkvxvh54v3dn",
            "bc1qn0q63kkp3rj5wyap5fzymlvat28cu2s87tgzu6",
            "bc1qnsupj8eqya02nm8v6tmk93zslu2e2z8chlmcej",
            "bc1qmcwrdlcqrwcfs6654m8zvmzdmtpuvcxuzn9ahy",
            "bc1qvyyvsdcd0t9863stt7u9rf37wx443lzasg0usy",
            "bc1qza7dfgl2q83cf68fqkkdd754qx546h4u9vd9tg",
            "bc1qwqdg6squsna38e46795at95yu9atm8azzmyvckulcc7kytlcckxswvvzej",
        ];
        for addr in addrs.iter() {
            let (version, program) = decode_segwit_for_hrp(hrp, addr).unwrap();
            assert_eq!(version, 0);
            let reencoded = encode_segwit(hrp, version, &program).unwrap();
            assert_eq!(*addr, reencoded);
        }
    }

    #[test]
    fn it_decodes_uppercase_strings() {
        let (hrp, version, program) =
            decode_segwit("BC1QW508D6QEJXTDG4Y5R3ZARVARY0C5XW7KV8F3T4").unwrap();
        assert_eq!(hrp, "bc");
        assert_eq!(version, 0);
        assert_eq!(hex::encode(&program), "751e76e8199196d454941c45d1b3a323f1433bd6");
        assert_eq!(
            encode_segwit("bc", 0, &program).unwrap(),
            "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4"
        );
    }

    #[test]
    fn it_uses_bech32m_after_version_0() {
        let program = hex::decode(
            "751e76e8199196d454941c45d1b3a323f1433bd6751e76e8199196d454941c45d1b3a323f1433bd6",
        )
        .unwrap();
        let s = encode_segwit("bc", 1, &program).unwrap();
        assert_eq!(
            s,
            "bc1pw508d6qejxtdg4y5r3zarvary0c5xw7kw508d6qejxtdg4y5r3zarvary0c5xw7kt5nd6y"
        );
        assert_eq!(decode_segwit(&s).unwrap(), ("bc".to_owned(), 1, program));

        // a version 2 string with a bech32 checksum
        match decode_segwit("bc1zw508d6qejxtdg4y5r3zarvaryvg6kdaj") {
            Err(EncodingError::WrongVariant) => {}
            other => panic!("expected WrongVariant, got {:?}", other),
        }
    }

    #[test]
    fn it_rejects_bad_program_lengths() {
        for len in [0usize, 19, 21, 31, 33].iter() {
            match encode_segwit("bc", 0, &vec![1u8; *len]) {
                Err(EncodingError::ProgramLength { version: 0, len: l }) => assert_eq!(l, *len),
                other => panic!("expected ProgramLength, got {:?}", other),
            }
        }
        match encode_segwit("bc", 17, &[0u8; 20]) {
            Err(EncodingError::SegwitVersion(17)) => {}
            other => panic!("expected SegwitVersion, got {:?}", other),
        }
    }

    #[test]
    fn it_should_error_on_wrong_hrp_and_invalid_addrs() {
        match decode_segwit_for_hrp("tb", "bc1qvyyvsdcd0t9863stt7u9rf37wx443lzasg0usy") {
            Err(EncodingError::WrongHrp { got, expected }) => {
                assert_eq!(got, "bc");
                assert_eq!(expected, "tb");
            }
            other => panic!("expected WrongHrp, got {:?}", other),
        }
        match decode_segwit("bc1qvyyvsdcd0t9863stt7u9rf37wx443lzasg0usx") {
            Err(EncodingError::Bech32(_)) => {}
            other => panic!("expected Bech32 error, got {:?}", other),
        }
    }
}
