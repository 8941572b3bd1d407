//! # ppk
//!
//! Decoder for PuTTY private key files (PPK versions 1 and 2) and legacy SSH1 RSA private
//! key files, with SSH public key blobs and MD5 fingerprints.
//!
//! ```no_run
//! # fn main() -> Result<(), ppk::PpkError> {
//! let data = std::fs::read("id_rsa.ppk")?;
//! let key = ppk::decode_key(&data, Some("passphrase"))?;
//! println!("{} {} {}", key.algorithm(), key.fingerprint()?, key.comment());
//! # Ok(())
//! # }
//! ```

mod error;

pub mod codec;
pub mod fingerprint;
pub mod key;
pub mod putty;
pub mod ssh;
pub mod ssh1;

pub use codec::{
    decode_key, decode_public_key, detect_format, KeyCodec, KeyFormat, NoPassphrase, PassphraseProvider, PpkCodec,
    Ssh1Codec,
};
pub use error::{ErrorKind, PpkError};
pub use fingerprint::{fingerprint, Fingerprint};
pub use key::{Key, KeyAlgorithm, PrivateKeyMaterial, PublicKeyMaterial, SshVersion};
pub use putty::{KeyFile, PpkEncryption, PpkVersion};
pub use ssh1::{Ssh1Cipher, Ssh1KeyFile};
