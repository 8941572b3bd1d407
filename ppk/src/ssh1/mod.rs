//! Legacy SSH1 RSA private key files (`SSH PRIVATE KEY FILE FORMAT 1.1`).

mod des3;

use crate::key::{Key, PrivateKeyMaterial, PublicKeyMaterial, SshVersion};
use crate::ssh::decode::SshReadExt;
use crate::PpkError;
use byteorder::{BigEndian, ReadBytesExt};
use std::fmt;
use std::io::Read;
use std::mem;
use zeroize::Zeroizing;

/// File signature, including the terminating NUL byte.
pub const SSH1_MAGIC: &[u8] = b"SSH PRIVATE KEY FILE FORMAT 1.1\n\0";

const CIPHER_NONE: u8 = 0;
const CIPHER_3DES: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ssh1Cipher {
    None,
    TripleDes,
}

impl Ssh1Cipher {
    fn from_id(id: u8) -> Result<Self, PpkError> {
        match id {
            CIPHER_NONE => Ok(Ssh1Cipher::None),
            CIPHER_3DES => Ok(Ssh1Cipher::TripleDes),
            other => Err(PpkError::unsupported_algorithm(format!("SSH1 cipher {}", other))),
        }
    }
}

/// SSH1 private key file, parsed up to its (possibly encrypted) private section.
#[derive(Clone, PartialEq, Eq)]
pub struct Ssh1KeyFile {
    cipher: Ssh1Cipher,
    public_key: PublicKeyMaterial,
    comment: String,
    private_key: Zeroizing<Vec<u8>>,
}

impl Ssh1KeyFile {
    pub fn from_bytes(data: &[u8]) -> Result<Self, PpkError> {
        let mut cursor = data.strip_prefix(SSH1_MAGIC).ok_or_else(|| PpkError::InvalidInput {
            context: "Ssh1KeyFile",
            expected: "SSH PRIVATE KEY FILE FORMAT 1.1",
            actual: "<unknown file signature>".to_owned(),
        })?;

        let cipher = Ssh1Cipher::from_id(cursor.read_u8().map_err(header_error)?)?;
        let _reserved = cursor.read_u32::<BigEndian>().map_err(header_error)?;

        let bits = cursor.read_u32::<BigEndian>().map_err(header_error)?;
        let n = cursor.read_ssh1_mpint().map_err(header_error)?;
        let e = cursor.read_ssh1_mpint().map_err(header_error)?;

        if n.bits() != bits as usize {
            return Err(PpkError::corrupt("SSH1 modulus size does not match the declared bit count"));
        }

        let comment = cursor.read_ssh_string().map_err(header_error)?;

        log::debug!(
            "parsed SSH1 key file ({} bits, cipher: {:?}, private: {} bytes)",
            bits,
            cipher,
            cursor.len()
        );

        Ok(Self {
            cipher,
            public_key: PublicKeyMaterial::Rsa { e, n },
            comment,
            private_key: Zeroizing::new(cursor.to_vec()),
        })
    }

    pub fn cipher(&self) -> Ssh1Cipher {
        self.cipher
    }

    pub fn is_encrypted(&self) -> bool {
        self.cipher != Ssh1Cipher::None
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Returns a public-only key; the private section is not touched.
    pub fn public_key(&self) -> Result<Key, PpkError> {
        Key::new(SshVersion::Ssh1, self.public_key.clone(), None, self.comment.clone())
    }

    /// Decodes the full key.
    ///
    /// `passphrase` is required when the file is encrypted and ignored otherwise.
    pub fn decode(&self, passphrase: Option<&str>) -> Result<Key, PpkError> {
        let mut data = self.private_key.clone();

        match self.cipher {
            Ssh1Cipher::None => self.decode_private_section(&data),
            Ssh1Cipher::TripleDes => {
                let passphrase = passphrase.ok_or(PpkError::PassphraseRequired)?;
                des3::decrypt(&mut data, passphrase)?;

                // Check bytes let about one wrong passphrase in 65536 through
                self.decode_private_section(&data).map_err(|e| {
                    log::debug!("SSH1 private section rejected after decryption: {}", e);
                    PpkError::Integrity
                })
            }
        }
    }

    fn decode_private_section(&self, data: &[u8]) -> Result<Key, PpkError> {
        let mut cursor = data;

        // Two random bytes repeated
        let mut check = Zeroizing::new([0u8; 4]);
        cursor.read_exact(&mut check[..])?;
        if check[0] != check[2] || check[1] != check[3] {
            log::debug!("SSH1 check bytes mismatch");
            return Err(PpkError::Integrity);
        }

        let mut d = Zeroizing::new(cursor.read_ssh1_mpint()?);
        let mut iqmp = Zeroizing::new(cursor.read_ssh1_mpint()?);
        let mut q = Zeroizing::new(cursor.read_ssh1_mpint()?);
        let mut p = Zeroizing::new(cursor.read_ssh1_mpint()?);

        if cursor.len() >= des3::BLOCK_SIZE {
            return Err(PpkError::corrupt("unexpected trailing data after SSH1 private key fields"));
        }

        let private_key = PrivateKeyMaterial::Rsa {
            d: mem::take(&mut *d),
            p: mem::take(&mut *p),
            q: mem::take(&mut *q),
            iqmp: mem::take(&mut *iqmp),
        };

        Key::new(
            SshVersion::Ssh1,
            self.public_key.clone(),
            Some(private_key),
            self.comment.clone(),
        )
    }
}

/// Truncated or malformed public header fields are container errors, not key corruption.
fn header_error(error: std::io::Error) -> PpkError {
    match error.kind() {
        std::io::ErrorKind::UnexpectedEof => PpkError::EndOfInput,
        _ => PpkError::InvalidInput {
            context: "Ssh1KeyFile",
            expected: "<well-formed SSH1 public key header>",
            actual: error.to_string(),
        },
    }
}

impl fmt::Debug for Ssh1KeyFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ssh1KeyFile")
            .field("cipher", &self.cipher)
            .field("public_key", &self.public_key)
            .field("comment", &self.comment)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use base64::engine::general_purpose::STANDARD as BASE64_ENGINE;
    use base64::Engine;
    use num_bigint_dig::BigUint;
    use ppk_test_data::{
        PASSPHRASE, SSH1_RSA, SSH1_RSA_COMMENT, SSH1_RSA_ENCRYPTED, SSH1_RSA_FINGERPRINT, SSH1_RSA_PUBLIC_BLOB,
    };
    use rstest::rstest;

    #[rstest]
    #[case(SSH1_RSA, Ssh1Cipher::None)]
    #[case(SSH1_RSA_ENCRYPTED, Ssh1Cipher::TripleDes)]
    fn header(#[case] input: &[u8], #[case] cipher: Ssh1Cipher) {
        let key_file = Ssh1KeyFile::from_bytes(input).unwrap();
        assert_eq!(key_file.cipher(), cipher);
        assert_eq!(key_file.comment(), SSH1_RSA_COMMENT);

        let public = key_file.public_key().unwrap();
        assert_eq!(public.version(), SshVersion::Ssh1);
        assert_eq!(public.fingerprint().unwrap().to_string(), SSH1_RSA_FINGERPRINT);
    }

    #[test]
    fn encrypted_and_plain_decode_to_same_key() {
        let plain = Ssh1KeyFile::from_bytes(SSH1_RSA).unwrap().decode(None).unwrap();
        let encrypted = Ssh1KeyFile::from_bytes(SSH1_RSA_ENCRYPTED)
            .unwrap()
            .decode(Some(PASSPHRASE))
            .unwrap();
        assert_eq!(plain, encrypted);
    }

    #[test]
    fn private_primes_and_coefficient() {
        let key = Ssh1KeyFile::from_bytes(SSH1_RSA).unwrap().decode(None).unwrap();
        match key.private_key() {
            Some(PrivateKeyMaterial::Rsa { p, q, iqmp, .. }) => {
                assert_eq!((iqmp * q) % p, BigUint::from(1u32));
            }
            _ => panic!("expected RSA private key"),
        }
    }

    #[test]
    fn public_blob() {
        let key = Ssh1KeyFile::from_bytes(SSH1_RSA).unwrap().decode(None).unwrap();
        let blob = key.ssh1_public_key_blob().unwrap();
        assert_eq!(BASE64_ENGINE.encode(&blob), SSH1_RSA_PUBLIC_BLOB);
        assert_eq!(&PublicKeyMaterial::from_ssh1_blob(&blob).unwrap(), key.public_key());
    }

    #[test]
    fn wrong_passphrase() {
        let key_file = Ssh1KeyFile::from_bytes(SSH1_RSA_ENCRYPTED).unwrap();
        let err = key_file.decode(Some("wrong")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Integrity);
    }

    #[test]
    fn wrong_passphrase_passing_check_bytes() {
        // Decrypts to matching check bytes followed by garbage fields
        let key_file = Ssh1KeyFile::from_bytes(SSH1_RSA_ENCRYPTED).unwrap();
        let err = key_file.decode(Some("wrong32027")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Integrity);
    }

    #[rstest]
    #[case::cipher_only(SSH1_MAGIC.len() + 1)]
    #[case::bit_count(SSH1_MAGIC.len() + 7)]
    #[case::modulus(SSH1_MAGIC.len() + 60)]
    #[case::comment(190)]
    fn truncated_header(#[case] len: usize) {
        let err = Ssh1KeyFile::from_bytes(&SSH1_RSA[..len]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn missing_passphrase() {
        let key_file = Ssh1KeyFile::from_bytes(SSH1_RSA_ENCRYPTED).unwrap();
        let err = key_file.decode(None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PassphraseRequired);
    }

    #[test]
    fn unknown_cipher() {
        let mut input = SSH1_RSA.to_vec();
        input[SSH1_MAGIC.len()] = 1;
        let err = Ssh1KeyFile::from_bytes(&input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedAlgorithm);
    }

    #[test]
    fn wrong_signature() {
        let mut input = SSH1_RSA.to_vec();
        input[0] = b'X';
        let err = Ssh1KeyFile::from_bytes(&input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn declared_bits_must_match_modulus() {
        let mut input = SSH1_RSA.to_vec();
        // Last byte of the u32 bit count following the cipher byte and reserved bytes
        input[SSH1_MAGIC.len() + 8] ^= 1;
        let err = Ssh1KeyFile::from_bytes(&input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CorruptKey);
    }

    #[test]
    fn corrupted_check_bytes() {
        let key_file = Ssh1KeyFile::from_bytes(SSH1_RSA).unwrap();
        let mut input = SSH1_RSA.to_vec();
        let private_offset = input.len() - key_file.private_key.len();
        input[private_offset] ^= 0xff;

        let err = Ssh1KeyFile::from_bytes(&input).unwrap().decode(None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Integrity);
    }

    #[test]
    fn truncated_private_section() {
        let err = Ssh1KeyFile::from_bytes(&SSH1_RSA[..SSH1_RSA.len() - 80])
            .unwrap()
            .decode(None)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CorruptKey);
    }
}
