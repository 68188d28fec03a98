use crate::{
    enc::{EncodingError, EncodingResult},
    hashes::hash256,
};

const CHECKSUM_LEN: usize = 4;

/// Encode a byte slice into a base58check String. The checksum is the first 4 bytes of the
/// double-sha2 of the payload.
pub fn encode_base58check(v: &[u8]) -> String {
    let mut data = Vec::with_capacity(v.len() + CHECKSUM_LEN);
    data.extend_from_slice(v);
    data.extend_from_slice(&hash256(v)[..CHECKSUM_LEN]);

    bs58::encode(data).into_string()
}

/// Decode a bytevector from a base58check string. The checksum is verified and stripped.
pub fn decode_base58check(s: &str) -> EncodingResult<Vec<u8>> {
    let mut data: Vec<u8> = bs58::decode(s).into_vec()?;
    if data.len() < CHECKSUM_LEN {
        return Err(EncodingError::PayloadTooShort(data.len()));
    }

    let idx = data.len() - CHECKSUM_LEN;
    let expected = hash256(&data[..idx]);
    if expected[..CHECKSUM_LEN] != data[idx..] {
        return Err(EncodingError::BadChecksum);
    }

    data.truncate(idx);
    Ok(data)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_encodes_the_zero_address() {
        assert_eq!(encode_base58check(&[0u8; 21]), "1111111111111111111114oLvT2");
        assert_eq!(
            decode_base58check("1111111111111111111114oLvT2").unwrap(),
            vec![0u8; 21]
        );
    }

    #[test]
    fn it_encodes_and_decodes_known_payloads() {
        let cases = [
            (
                "00751e76e8199196d454941c45d1b3a323f1433bd6",
                "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH",
            ),
            (
                "80000000000000000000000000000000000000000000000000000000000000000101",
                "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn",
            ),
        ];
        for case in cases.iter() {
            let payload = hex::decode(case.0).unwrap();
            assert_eq!(encode_base58check(&payload), case.1);
            assert_eq!(decode_base58check(case.1).unwrap(), payload);
        }
    }

    #[test]
    fn it_errors_on_bad_checksums_and_short_payloads() {
        match decode_base58check("1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMJ") {
            Err(EncodingError::BadChecksum) => {}
            other => panic!("expected BadChecksum, got {:?}", other),
        }
        match decode_base58check("111") {
            Err(EncodingError::PayloadTooShort(3)) => {}
            other => panic!("expected PayloadTooShort, got {:?}", other),
        }
        match decode_base58check("0OIl") {
            Err(EncodingError::Base58(_)) => {}
            other => panic!("expected Base58 error, got {:?}", other),
        }
    }
}
