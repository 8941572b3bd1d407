//! PPK decoding functions.

use crate::key::KeyAlgorithm;
use crate::putty::key_value::{
    parse_literal, PpkComment, PpkEncryptionKey, PpkEncryptionValue, PpkIntegrityKey, PpkKeyAlgorithmValue,
    PpkPrivateIntegrity, PpkPrivateLines, PpkPublicLines, PpkVersionKey, PuttyKvReader, PPK_HEADER_PREFIX,
};
use crate::putty::ppk::{KeyFile, PpkIntegrity};
use crate::PpkError;
use std::str::FromStr;
use zeroize::Zeroizing;

impl FromStr for KeyFile {
    type Err = PpkError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut reader = PuttyKvReader::from_str(input);

        let (version, algorithm) = parse_header(reader.next_raw_key_value()?)?;
        let encryption = parse_encryption(reader.next_raw_key_value()?)?;
        let comment = reader.next_value::<PpkComment>()?;
        let public_key = reader.next_multiline_value::<PpkPublicLines>()?;
        let private_key = Zeroizing::new(Vec::from(reader.next_multiline_value::<PpkPrivateLines>()?));
        let (integrity_key, integrity_value) = reader.next_key_value::<PpkPrivateIntegrity>()?;

        let integrity = match (integrity_key, version) {
            (PpkIntegrityKey::Mac, _) => PpkIntegrity::Mac(integrity_value.into()),
            (PpkIntegrityKey::Hash, PpkVersionKey::V1) => PpkIntegrity::Hash(integrity_value.into()),
            (PpkIntegrityKey::Hash, PpkVersionKey::V2) => {
                return Err(PpkError::InvalidInput {
                    context: "PpkIntegrityKey",
                    expected: "Private-MAC",
                    actual: integrity_key.to_string(),
                })
            }
        };

        let key_file = KeyFile {
            version,
            algorithm,
            encryption,
            comment: comment.into(),
            public_key: public_key.into(),
            private_key,
            integrity,
        };

        log::debug!(
            "parsed {} {} key file (encryption: {}, public: {} bytes, private: {} bytes)",
            key_file.version,
            key_file.algorithm,
            key_file.encryption,
            key_file.public_key.len(),
            key_file.private_key.len()
        );

        Ok(key_file)
    }
}

impl KeyFile {
    /// Parses a PPK file from raw bytes; the content must be UTF-8 text.
    pub fn from_bytes(data: &[u8]) -> Result<Self, PpkError> {
        let input = std::str::from_utf8(data).map_err(|_| PpkError::InvalidInput {
            context: "KeyFile",
            expected: "<UTF-8 text>",
            actual: "<binary data>".to_owned(),
        })?;

        input.parse()
    }
}

fn parse_header((key, value): (&str, &str)) -> Result<(PpkVersionKey, KeyAlgorithm), PpkError> {
    let version = parse_literal::<PpkVersionKey>(key).map_err(|e| match key.strip_prefix(PPK_HEADER_PREFIX) {
        Some(number) if !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit()) => {
            PpkError::UnsupportedVersion {
                version: number.to_owned(),
            }
        }
        _ => e,
    })?;

    let algorithm = value
        .parse::<PpkKeyAlgorithmValue>()
        .map_err(|_| PpkError::unsupported_algorithm(value))?
        .to_key_algorithm()?;

    if version == PpkVersionKey::V1 && algorithm != KeyAlgorithm::Rsa {
        return Err(PpkError::unsupported_algorithm(format!(
            "{} (PPK v1 files are RSA only)",
            algorithm
        )));
    }

    Ok((version, algorithm))
}

fn parse_encryption((key, value): (&str, &str)) -> Result<PpkEncryptionValue, PpkError> {
    parse_literal::<PpkEncryptionKey>(key)?;
    value
        .parse()
        .map_err(|_| PpkError::unsupported_algorithm(format!("cipher {}", value)))
}
