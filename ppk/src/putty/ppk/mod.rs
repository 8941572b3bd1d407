mod aes;
mod encoding;
mod encryption;
mod kdf;
mod mac;

use crate::key::{self, Key, KeyAlgorithm, SshVersion};
use crate::putty::key_value::{PpkEncryptionValue, PpkVersionKey};
use crate::PpkError;
use std::fmt;
use zeroize::Zeroizing;

/// Stored integrity value of the private section.
#[derive(Clone, PartialEq, Eq)]
pub(crate) enum PpkIntegrity {
    /// HMAC-SHA1 keyed by the passphrase (`Private-MAC`).
    Mac(Vec<u8>),
    /// Plain SHA-1 of the private section (`Private-Hash`, PPK v1 only).
    Hash(Vec<u8>),
}

/// PuTTY Private Key (PPK) file, as parsed from text and before any decryption.
///
/// ### Usage notes
/// - Parsing never needs a passphrase: the version, algorithm, comment and public key are
///   always readable, see [`KeyFile::public_key`].
/// - [`KeyFile::decode`] decrypts the private section if needed, verifies its integrity and
///   builds the full [`Key`].
/// - Raw private bytes are wiped from memory when the `KeyFile` is dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyFile {
    version: PpkVersionKey,
    algorithm: KeyAlgorithm,
    encryption: PpkEncryptionValue,
    comment: String,
    public_key: Vec<u8>,
    private_key: Zeroizing<Vec<u8>>,
    integrity: PpkIntegrity,
}

impl KeyFile {
    /// Returns the version of the PPK file format.
    pub fn version(&self) -> PpkVersionKey {
        self.version
    }

    /// Returns the key algorithm declared in the header.
    pub fn algorithm(&self) -> KeyAlgorithm {
        self.algorithm
    }

    pub fn encryption(&self) -> PpkEncryptionValue {
        self.encryption
    }

    /// Returns key comment.
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Returns the raw public section, which is the SSH2 public key blob.
    pub fn public_key_blob(&self) -> &[u8] {
        &self.public_key
    }

    /// Returns a public-only key without decrypting the private section.
    ///
    /// The integrity value of unencrypted files is still verified, since it needs no passphrase.
    pub fn public_key(&self) -> Result<Key, PpkError> {
        if !self.is_encrypted() {
            self.verify_integrity("", &self.private_key)?;
        }

        let public_key = key::parse_public_key(self.algorithm, &self.public_key)?;
        Key::new(SshVersion::Ssh2, public_key, None, self.comment.clone())
    }

    /// Decodes the full key.
    ///
    /// `passphrase` is required when the file is encrypted and ignored otherwise.
    pub fn decode(&self, passphrase: Option<&str>) -> Result<Key, PpkError> {
        let private_key_data = self.decrypt_private_key(passphrase)?;

        let public_key = key::parse_public_key(self.algorithm, &self.public_key)?;
        let private_key = key::parse_private_key(self.algorithm, &private_key_data, self.max_private_padding())?;

        Key::new(SshVersion::Ssh2, public_key, Some(private_key), self.comment.clone())
    }
}

impl fmt::Debug for KeyFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyFile")
            .field("version", &self.version)
            .field("algorithm", &self.algorithm)
            .field("encryption", &self.encryption)
            .field("comment", &self.comment)
            .field("public_key", &self.public_key.len())
            .field("private_key", &self.private_key.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{PrivateKeyMaterial, PublicKeyMaterial};
    use crate::ErrorKind;
    use num_bigint_dig::BigUint;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use ppk_test_data::{
        PASSPHRASE, PPK_DSA_COMMENT, PPK_DSA_PRIVATE_X, PPK_RSA_COMMENT, PPK_V1_RSA, PPK_V1_RSA_ENCRYPTED, PPK_V2_DSA,
        PPK_V2_DSA_ENCRYPTED, PPK_V2_RSA, PPK_V2_RSA_ENCRYPTED,
    };

    #[rstest]
    #[case(PPK_V2_RSA, PpkVersionKey::V2, KeyAlgorithm::Rsa, PPK_RSA_COMMENT, false)]
    #[case(PPK_V2_RSA_ENCRYPTED, PpkVersionKey::V2, KeyAlgorithm::Rsa, PPK_RSA_COMMENT, true)]
    #[case(PPK_V1_RSA, PpkVersionKey::V1, KeyAlgorithm::Rsa, PPK_RSA_COMMENT, false)]
    #[case(PPK_V1_RSA_ENCRYPTED, PpkVersionKey::V1, KeyAlgorithm::Rsa, PPK_RSA_COMMENT, true)]
    #[case(PPK_V2_DSA, PpkVersionKey::V2, KeyAlgorithm::Dss, PPK_DSA_COMMENT, false)]
    #[case(PPK_V2_DSA_ENCRYPTED, PpkVersionKey::V2, KeyAlgorithm::Dss, PPK_DSA_COMMENT, true)]
    fn header_fields(
        #[case] input: &str,
        #[case] version: PpkVersionKey,
        #[case] algorithm: KeyAlgorithm,
        #[case] comment: &str,
        #[case] encrypted: bool,
    ) {
        let key_file: KeyFile = input.parse().unwrap();
        assert_eq!(key_file.version(), version);
        assert_eq!(key_file.algorithm(), algorithm);
        assert_eq!(key_file.comment(), comment);
        assert_eq!(key_file.is_encrypted(), encrypted);
    }

    #[rstest]
    #[case(PPK_V2_RSA, PPK_V2_RSA_ENCRYPTED)]
    #[case(PPK_V1_RSA, PPK_V1_RSA_ENCRYPTED)]
    #[case(PPK_V2_DSA, PPK_V2_DSA_ENCRYPTED)]
    fn encrypted_and_plain_decode_to_same_key(#[case] plain: &str, #[case] encrypted: &str) {
        let plain_key = plain.parse::<KeyFile>().unwrap().decode(None).unwrap();
        let encrypted_key = encrypted.parse::<KeyFile>().unwrap().decode(Some(PASSPHRASE)).unwrap();
        assert_eq!(plain_key, encrypted_key);
    }

    #[test]
    fn dsa_private_value() {
        let key = PPK_V2_DSA.parse::<KeyFile>().unwrap().decode(None).unwrap();
        let x = BigUint::parse_bytes(PPK_DSA_PRIVATE_X.as_bytes(), 16).unwrap();
        assert_eq!(key.private_key(), Some(&PrivateKeyMaterial::Dss { x }));
    }

    #[test]
    fn rsa_exponent() {
        let key = PPK_V2_RSA.parse::<KeyFile>().unwrap().decode(None).unwrap();
        match key.public_key() {
            PublicKeyMaterial::Rsa { e, n } => {
                assert_eq!(e, &BigUint::from(37u32));
                assert_eq!(n.bits(), 1024);
            }
            PublicKeyMaterial::Dss { .. } => panic!("expected an RSA key"),
        }
    }

    #[rstest]
    #[case(PPK_V2_RSA_ENCRYPTED)]
    #[case(PPK_V1_RSA_ENCRYPTED)]
    #[case(PPK_V2_DSA_ENCRYPTED)]
    fn missing_passphrase(#[case] input: &str) {
        let key_file: KeyFile = input.parse().unwrap();
        let err = key_file.decode(None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PassphraseRequired);
    }

    #[rstest]
    #[case(PPK_V2_RSA_ENCRYPTED)]
    #[case(PPK_V1_RSA_ENCRYPTED)]
    #[case(PPK_V2_DSA_ENCRYPTED)]
    fn wrong_passphrase(#[case] input: &str) {
        let key_file: KeyFile = input.parse().unwrap();
        let err = key_file.decode(Some("wrong")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Integrity);
    }

    #[test]
    fn passphrase_is_ignored_for_plain_files() {
        let key_file: KeyFile = PPK_V2_RSA.parse().unwrap();
        assert_eq!(
            key_file.decode(Some("unused")).unwrap(),
            key_file.decode(None).unwrap()
        );
    }

    #[test]
    fn tampered_comment_breaks_v2_mac() {
        let input = PPK_V2_RSA.replacen(PPK_RSA_COMMENT, "rsa-key-20261020", 1);
        let err = input.parse::<KeyFile>().unwrap().decode(None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Integrity);
    }

    #[test]
    fn tampered_integrity_value() {
        let line = PPK_V1_RSA.lines().last().unwrap();
        let (key, value) = line.split_once(": ").unwrap();
        let flipped = if value.starts_with('0') { "1" } else { "0" };
        let tampered = format!("{}: {}{}", key, flipped, &value[1..]);

        let input = PPK_V1_RSA.replacen(line, &tampered, 1);
        let err = input.parse::<KeyFile>().unwrap().decode(None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Integrity);
    }

    #[test]
    fn public_key_without_passphrase() {
        let key_file: KeyFile = PPK_V2_RSA_ENCRYPTED.parse().unwrap();
        let public = key_file.public_key().unwrap();
        assert!(!public.has_private_key());
        assert_eq!(public.comment(), PPK_RSA_COMMENT);

        let full = key_file.decode(Some(PASSPHRASE)).unwrap();
        assert_eq!(public, full.to_public_only());
        assert_eq!(key_file.public_key_blob(), full.public_key_blob().unwrap().as_slice());
    }

    #[rstest]
    #[case::comment(PPK_V2_RSA.replacen(PPK_RSA_COMMENT, "rsa-key-20261020", 1))]
    #[case::public_blob(PPK_V2_RSA.replacen("AAAAB3NzaC1yc2EAAAABJQ", "AAAAB3NzaC1yc2EAAAABJw", 1))]
    fn public_key_of_tampered_plain_file(#[case] input: String) {
        let err = input.parse::<KeyFile>().unwrap().public_key().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Integrity);
    }

    #[test]
    fn debug_output_hides_private_section() {
        let key_file: KeyFile = PPK_V2_DSA.parse().unwrap();
        let printed = format!("{:?}", key_file);
        assert!(printed.contains("dsa-key-20261019"));
        assert!(!printed.contains("integrity"));
    }
}
