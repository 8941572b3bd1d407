//! Typed keys and values of the PPK text format, one `Key: value` pair per line.

mod macros;
mod reader;

use std::str::FromStr;

use base64::engine::general_purpose::STANDARD as BASE64_ENGINE;
use base64::Engine;

use crate::key::KeyAlgorithm;
use crate::PpkError;

use self::macros::*;

pub(crate) use reader::{parse_literal, PuttyKvReader};

pub struct PpkValueParsingError {
    pub expected: &'static str,
    pub actual: String,
}

const KV_DELIMITER: &str = ": ";

/// Common prefix of every PPK header key; the format version number follows it.
pub(crate) const PPK_HEADER_PREFIX: &str = "PuTTY-User-Key-File-";

/// Key or value spelled as one of a fixed set of strings.
pub(crate) trait PpkLiteral: Copy + 'static {
    const ALL: &'static [Self];
    /// Type name reported in parsing errors.
    const CONTEXT: &'static str;
    const EXPECTED: &'static str;

    fn as_static_str(&self) -> &'static str;
}

/// Trait for key-value pairs that use multiline format.
pub(crate) trait PpkMultilineKeyValue {
    type Key: FromStr<Err = PpkValueParsingError> + PpkLiteral;
    type Value: FromStr<Err = PpkValueParsingError>;
}

/// Trait for key-value pairs that use single-line format.
pub(crate) trait PpkKeyValue {
    type Key: FromStr<Err = PpkValueParsingError> + PpkLiteral;
    type Value: FromStr<Err = PpkValueParsingError>;
}

/// Wrapper type for base64 multiline data inside PPK file.
pub(crate) struct Base64PpkValue(Vec<u8>);

impl FromStr for Base64PpkValue {
    type Err = PpkValueParsingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BASE64_ENGINE
            .decode(s)
            .map_err(|e| PpkValueParsingError {
                expected: "<valid base64 data>",
                // Section data may be an unencrypted private key, never echo it
                actual: format!("{} base64 characters ({})", s.len(), e),
            })
            .map(Self)
    }
}

impl From<Base64PpkValue> for Vec<u8> {
    fn from(value: Base64PpkValue) -> Self {
        value.0
    }
}

/// Wrapper type for hex-string data inside PPK file.
pub(crate) struct HexPpkValue(Vec<u8>);

impl FromStr for HexPpkValue {
    type Err = PpkValueParsingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex::decode(s)
            .map_err(|_| PpkValueParsingError {
                expected: "<valid hex data>",
                actual: s.to_string(),
            })
            .map(Self)
    }
}

impl From<HexPpkValue> for Vec<u8> {
    fn from(value: HexPpkValue) -> Self {
        value.0
    }
}

/// Free-form single line value.
pub(crate) struct PpkCommentValue(String);

impl FromStr for PpkCommentValue {
    type Err = PpkValueParsingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_owned()))
    }
}

impl From<PpkCommentValue> for String {
    fn from(value: PpkCommentValue) -> Self {
        value.0
    }
}

ppk_enum!(PpkVersionKey {
    V1 = "PuTTY-User-Key-File-1",
    V2 = "PuTTY-User-Key-File-2",
});

ppk_enum!(PpkKeyAlgorithmValue {
    Rsa = "ssh-rsa",
    Dss = "ssh-dss",
    EcdsaSha2Nistp256 = "ecdsa-sha2-nistp256",
    EcdsaSha2Nistp384 = "ecdsa-sha2-nistp384",
    EcdsaSha2Nistp521 = "ecdsa-sha2-nistp521",
    Ed25519 = "ssh-ed25519",
    Ed448 = "ssh-ed448",
});

ppk_const!(PpkEncryptionKey = "Encryption");
ppk_enum!(PpkEncryptionValue {
    None = "none",
    Aes256Cbc = "aes256-cbc",
});

ppk_const!(PpkCommentKey = "Comment");
ppk_field!(PpkComment: PpkCommentKey => PpkCommentValue);

ppk_const!(PpkPublicLinesKey = "Public-Lines");
ppk_field!(multiline PpkPublicLines: PpkPublicLinesKey => Base64PpkValue);

ppk_const!(PpkPrivateLinesKey = "Private-Lines");
ppk_field!(multiline PpkPrivateLines: PpkPrivateLinesKey => Base64PpkValue);

ppk_enum!(PpkIntegrityKey {
    Mac = "Private-MAC",
    Hash = "Private-Hash",
});
ppk_field!(PpkPrivateIntegrity: PpkIntegrityKey => HexPpkValue);

impl PpkKeyAlgorithmValue {
    /// Maps the header algorithm to one this crate can decode.
    pub(crate) fn to_key_algorithm(self) -> Result<KeyAlgorithm, PpkError> {
        match self {
            PpkKeyAlgorithmValue::Rsa => Ok(KeyAlgorithm::Rsa),
            PpkKeyAlgorithmValue::Dss => Ok(KeyAlgorithm::Dss),
            PpkKeyAlgorithmValue::EcdsaSha2Nistp256
            | PpkKeyAlgorithmValue::EcdsaSha2Nistp384
            | PpkKeyAlgorithmValue::EcdsaSha2Nistp521
            | PpkKeyAlgorithmValue::Ed25519
            | PpkKeyAlgorithmValue::Ed448 => Err(PpkError::unsupported_algorithm(self.as_static_str())),
        }
    }
}
