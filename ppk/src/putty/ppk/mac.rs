//! PPK integrity check functions

use crate::putty::key_value::{PpkLiteral, PpkVersionKey};
use crate::putty::ppk::{KeyFile, PpkIntegrity};
use crate::PpkError;

use digest::Digest;
use hmac::Mac;
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

type HmacSha1 = hmac::Hmac<sha1::Sha1>;

const MAC_KEY_TAG: &[u8] = b"putty-private-key-file-mac-key";

fn mac_key(passphrase: &str) -> Zeroizing<[u8; 20]> {
    let mut digest = sha1::Sha1::new();
    digest.update(MAC_KEY_TAG);
    digest.update(passphrase.as_bytes());
    Zeroizing::new(digest.finalize().into())
}

impl KeyFile {
    /// HMAC over every public header field and the decrypted private section.
    pub(super) fn calculate_mac_v2(&self, passphrase: &str, private_key_data: &[u8]) -> Result<HmacSha1, PpkError> {
        let mac_key = mac_key(passphrase);
        let mut hmac = HmacSha1::new_from_slice(mac_key.as_ref()).map_err(|_| PpkError::Integrity)?;

        let mut hash_bytes = |data: &[u8]| -> Result<(), PpkError> {
            hmac.update(
                &u32::try_from(data.len())
                    .map_err(|_| PpkError::Integrity)?
                    .to_be_bytes(),
            );
            hmac.update(data);
            Ok(())
        };

        hash_bytes(self.algorithm.as_str().as_bytes())?;
        hash_bytes(self.encryption.as_static_str().as_bytes())?;
        hash_bytes(self.comment.as_bytes())?;
        hash_bytes(&self.public_key)?;
        hash_bytes(private_key_data)?;

        Ok(hmac)
    }

    /// PPK v1 MAC only covers the private section.
    pub(super) fn calculate_mac_v1(&self, passphrase: &str, private_key_data: &[u8]) -> Result<HmacSha1, PpkError> {
        let mac_key = mac_key(passphrase);
        let mut hmac = HmacSha1::new_from_slice(mac_key.as_ref()).map_err(|_| PpkError::Integrity)?;
        hmac.update(private_key_data);
        Ok(hmac)
    }

    /// Checks the stored MAC or hash against the decrypted private section.
    ///
    /// `passphrase` is the empty string for unencrypted files.
    pub(super) fn verify_integrity(&self, passphrase: &str, private_key_data: &[u8]) -> Result<(), PpkError> {
        let valid = match (&self.integrity, self.version) {
            (PpkIntegrity::Mac(expected), PpkVersionKey::V2) => self
                .calculate_mac_v2(passphrase, private_key_data)?
                .verify_slice(expected)
                .is_ok(),
            (PpkIntegrity::Mac(expected), PpkVersionKey::V1) => self
                .calculate_mac_v1(passphrase, private_key_data)?
                .verify_slice(expected)
                .is_ok(),
            // Plain digest, not bound to the passphrase
            (PpkIntegrity::Hash(expected), _) => {
                let digest = sha1::Sha1::digest(private_key_data);
                bool::from(digest.as_slice().ct_eq(expected.as_slice()))
            }
        };

        if valid {
            Ok(())
        } else {
            log::debug!("{} integrity check failed for {} key", self.version, self.algorithm);
            Err(PpkError::Integrity)
        }
    }
}
