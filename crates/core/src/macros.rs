//! Useful macros for byte-string newtypes

#[macro_export]
/// Implement `serde::Serialize` and `serde::Deserialize` for a byte newtype by
/// passing through to its hex string. The type must implement `AsRef<[u8]>`
/// and `From<Vec<u8>>`.
macro_rules! impl_hex_serde {
    ($item:ty) => {
        impl serde::Serialize for $item {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                let s = $crate::hex::encode(AsRef::<[u8]>::as_ref(self));
                serializer.serialize_str(&s)
            }
        }

        impl<'de> serde::Deserialize<'de> for $item {
            fn deserialize<D>(deserializer: D) -> Result<$item, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s: std::borrow::Cow<'de, str> = serde::Deserialize::deserialize(deserializer)?;
                $crate::hex::decode(s.as_ref())
                    .map(<$item>::from)
                    .map_err(|e| serde::de::Error::custom(e.to_string()))
            }
        }
    };
}

#[macro_export]
/// Wrap a vector of bytes (`u8`) in a newtype, and implement convenience functions for it.
macro_rules! wrap_byte_vector {
    (
        $(#[$outer:meta])*
        $wrapper_name:ident
    ) => {
        $(#[$outer])*
        #[derive(Clone, Debug, Eq, PartialEq, Default, Hash, PartialOrd, Ord)]
        pub struct $wrapper_name(Vec<u8>);

        $crate::impl_hex_serde!($wrapper_name);

        impl std::convert::AsRef<[u8]> for $wrapper_name {
            fn as_ref(&self) -> &[u8] {
                &self.0[..]
            }
        }

        impl From<Vec<u8>> for $wrapper_name {
            fn from(v: Vec<u8>) -> Self {
                Self(v)
            }
        }

        impl From<&[u8]> for $wrapper_name {
            fn from(v: &[u8]) -> Self {
                Self(v.to_vec())
            }
        }

        impl From<$wrapper_name> for Vec<u8> {
            fn from(w: $wrapper_name) -> Vec<u8> {
                w.0
            }
        }

        impl $wrapper_name {
            /// Instantate a new wrapped vector
            pub fn new(v: Vec<u8>) -> Self {
                Self(v)
            }

            /// Return a reference to the underlying bytes
            pub fn items(&self) -> &[u8] {
                &self.0
            }

            /// Return the length of the item vector.
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// Return true if the length of the item vector is 0.
            pub fn is_empty(&self) -> bool {
                self.len() == 0
            }

            /// Lowercase hex of the underlying bytes
            pub fn to_hex(&self) -> String {
                $crate::hex::encode(&self.0)
            }
        }
    };
}

#[cfg(test)]
mod test {
    use serde::{Deserialize, Serialize};

    wrap_byte_vector!(
        /// test wrapper
        Blob
    );

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Holder {
        blob: Blob,
    }

    #[test]
    fn it_serializes_byte_vectors_as_hex() {
        let h = Holder {
            blob: Blob::new(vec![0x04, 0x88, 0xb2, 0x1e]),
        };
        let s = serde_json::to_string(&h).unwrap();
        assert_eq!(s, r#"{"blob":"0488b21e"}"#);
        let back: Holder = serde_json::from_str(&s).unwrap();
        assert_eq!(back, h);
        assert_eq!(back.blob.len(), 4);
        assert_eq!(back.blob.to_hex(), "0488b21e");
    }

    #[test]
    fn it_rejects_bad_hex() {
        assert!(serde_json::from_str::<Holder>(r#"{"blob":"zz"}"#).is_err());
    }
}
