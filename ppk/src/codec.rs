//! Format-independent entry points.
//!
//! Every supported file format has a [`KeyCodec`] producing the same in-memory [`Key`].
//! Passphrases are pulled lazily through a [`PassphraseProvider`], only for encrypted files.

use crate::putty::KeyFile;
use crate::ssh1::{Ssh1KeyFile, SSH1_MAGIC};
use crate::{Key, PpkError};
use zeroize::Zeroizing;

/// Source of the passphrase protecting an encrypted key file.
pub trait PassphraseProvider {
    /// Returns the passphrase for the key described by `comment`, or `None` to give up.
    fn passphrase(&mut self, comment: &str) -> Option<Zeroizing<String>>;
}

impl PassphraseProvider for Option<&str> {
    fn passphrase(&mut self, _comment: &str) -> Option<Zeroizing<String>> {
        self.map(|passphrase| Zeroizing::new(passphrase.to_owned()))
    }
}

impl<F> PassphraseProvider for F
where
    F: FnMut(&str) -> Option<Zeroizing<String>>,
{
    fn passphrase(&mut self, comment: &str) -> Option<Zeroizing<String>> {
        self(comment)
    }
}

/// Provider for callers that only expect unencrypted files.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPassphrase;

impl PassphraseProvider for NoPassphrase {
    fn passphrase(&mut self, _comment: &str) -> Option<Zeroizing<String>> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyFormat {
    /// PuTTY private key file, versions 1 and 2.
    Ppk,
    /// Binary SSH1 RSA private key file.
    Ssh1,
}

impl KeyFormat {
    pub fn codec(self) -> &'static dyn KeyCodec {
        match self {
            KeyFormat::Ppk => &PpkCodec,
            KeyFormat::Ssh1 => &Ssh1Codec,
        }
    }
}

pub trait KeyCodec: Send + Sync {
    fn format(&self) -> KeyFormat;

    /// Decodes the full key, asking `passphrase` only if the private section is encrypted.
    fn decode(&self, data: &[u8], passphrase: &mut dyn PassphraseProvider) -> Result<Key, PpkError>;

    /// Decodes the public part only; never needs a passphrase.
    fn decode_public(&self, data: &[u8]) -> Result<Key, PpkError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PpkCodec;

impl KeyCodec for PpkCodec {
    fn format(&self) -> KeyFormat {
        KeyFormat::Ppk
    }

    fn decode(&self, data: &[u8], passphrase: &mut dyn PassphraseProvider) -> Result<Key, PpkError> {
        let key_file = KeyFile::from_bytes(data)?;

        let passphrase = if key_file.is_encrypted() {
            passphrase.passphrase(key_file.comment())
        } else {
            None
        };

        key_file.decode(passphrase.as_deref().map(String::as_str))
    }

    fn decode_public(&self, data: &[u8]) -> Result<Key, PpkError> {
        KeyFile::from_bytes(data)?.public_key()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Ssh1Codec;

impl KeyCodec for Ssh1Codec {
    fn format(&self) -> KeyFormat {
        KeyFormat::Ssh1
    }

    fn decode(&self, data: &[u8], passphrase: &mut dyn PassphraseProvider) -> Result<Key, PpkError> {
        let key_file = Ssh1KeyFile::from_bytes(data)?;

        let passphrase = if key_file.is_encrypted() {
            passphrase.passphrase(key_file.comment())
        } else {
            None
        };

        key_file.decode(passphrase.as_deref().map(String::as_str))
    }

    fn decode_public(&self, data: &[u8]) -> Result<Key, PpkError> {
        Ssh1KeyFile::from_bytes(data)?.public_key()
    }
}

const PPK_SIGNATURE: &[u8] = b"PuTTY-User-Key-File-";

/// Guesses the key file format from its leading bytes.
pub fn detect_format(data: &[u8]) -> Option<KeyFormat> {
    if data.starts_with(SSH1_MAGIC) {
        Some(KeyFormat::Ssh1)
    } else if data.starts_with(PPK_SIGNATURE) {
        Some(KeyFormat::Ppk)
    } else {
        None
    }
}

fn detect_codec(data: &[u8]) -> Result<&'static dyn KeyCodec, PpkError> {
    let format = detect_format(data).ok_or_else(|| PpkError::InvalidInput {
        context: "key file",
        expected: "PuTTY or SSH1 private key file",
        actual: "<unrecognised data>".to_owned(),
    })?;

    log::debug!("detected {:?} key file", format);

    Ok(format.codec())
}

/// Decodes a key file of any supported format.
pub fn decode_key(data: &[u8], mut passphrase: impl PassphraseProvider) -> Result<Key, PpkError> {
    detect_codec(data)?.decode(data, &mut passphrase)
}

/// Decodes the public part of a key file of any supported format.
pub fn decode_public_key(data: &[u8]) -> Result<Key, PpkError> {
    detect_codec(data)?.decode_public(data)
}
