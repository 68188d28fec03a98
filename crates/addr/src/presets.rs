//! Format profiles for well-known networks.

use crate::profile::FormatProfile;

macro_rules! profile {
    (
        $(#[$outer:meta])*
        $name:ident {
            $($field:ident: $value:expr),* $(,)?
        }
    ) => {
        $(#[$outer])*
        pub fn $name() -> FormatProfile {
            FormatProfile::builder()
                $(.$field($value))*
                .build()
        }
    };
}

profile!(
    /// Bitcoin mainnet
    bitcoin_mainnet {
        bip32_prv_prefix: [0x04, 0x88, 0xad, 0xe4],
        bip32_pub_prefix: [0x04, 0x88, 0xb2, 0x1e],
        wif_prefix: [0x80],
        sec_prefix: "BTCSEC:",
        address_prefix: [0x00],
        pay_to_script_prefix: [0x05],
        bech32_hrp: "bc",
    }
);

profile!(
    /// Bitcoin testnet
    bitcoin_testnet {
        bip32_prv_prefix: [0x04, 0x35, 0x83, 0x94],
        bip32_pub_prefix: [0x04, 0x35, 0x87, 0xcf],
        wif_prefix: [0xef],
        sec_prefix: "XTNSEC:",
        address_prefix: [0x6f],
        pay_to_script_prefix: [0xc4],
        bech32_hrp: "tb",
    }
);

profile!(
    /// Bitcoin regtest. Shares its base58 prefixes with testnet.
    bitcoin_regtest {
        bip32_prv_prefix: [0x04, 0x35, 0x83, 0x94],
        bip32_pub_prefix: [0x04, 0x35, 0x87, 0xcf],
        wif_prefix: [0xef],
        sec_prefix: "XRTSEC:",
        address_prefix: [0x6f],
        pay_to_script_prefix: [0xc4],
        bech32_hrp: "bcrt",
    }
);

profile!(
    /// Litecoin mainnet
    litecoin_mainnet {
        bip32_prv_prefix: [0x01, 0x9d, 0x9c, 0xfe],
        bip32_pub_prefix: [0x01, 0x9d, 0xa4, 0x62],
        wif_prefix: [0xb0],
        sec_prefix: "LTCSEC:",
        address_prefix: [0x30],
        pay_to_script_prefix: [0x32],
        bech32_hrp: "ltc",
    }
);

profile!(
    /// Dogecoin mainnet. Has no witness addresses.
    dogecoin_mainnet {
        bip32_prv_prefix: [0x02, 0xfa, 0xc3, 0x98],
        bip32_pub_prefix: [0x02, 0xfa, 0xca, 0xfd],
        wif_prefix: [0x9e],
        sec_prefix: "DOGESEC:",
        address_prefix: [0x1e],
        pay_to_script_prefix: [0x16],
    }
);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_builds_presets() {
        let main = bitcoin_mainnet();
        assert_eq!(main.address_prefix().unwrap().items(), &[0x00]);
        assert_eq!(main.bech32_hrp(), Some("bc"));
        assert_eq!(main.sec_prefix().unwrap().as_text(), "BTCSEC:");

        let test = bitcoin_testnet();
        let reg = bitcoin_regtest();
        assert_eq!(test.address_prefix(), reg.address_prefix());
        assert_ne!(test.bech32_hrp(), reg.bech32_hrp());

        assert!(dogecoin_mainnet().bech32_hrp().is_none());
        assert_eq!(litecoin_mainnet().bech32_hrp(), Some("ltc"));
    }
}
