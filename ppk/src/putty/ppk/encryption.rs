//! PPK decryption functions

use crate::putty::key_value::PpkEncryptionValue;
use crate::putty::ppk::kdf::{self, KeyMaterial};
use crate::putty::ppk::{aes as ppk_aes, KeyFile};
use crate::PpkError;
use zeroize::Zeroizing;

impl KeyFile {
    /// Returns true if the private section is encrypted
    pub fn is_encrypted(&self) -> bool {
        self.encryption == PpkEncryptionValue::Aes256Cbc
    }

    /// Trailing bytes tolerated after the last private field.
    pub(super) fn max_private_padding(&self) -> usize {
        if self.is_encrypted() {
            ppk_aes::BLOCK_SIZE - 1
        } else {
            0
        }
    }

    /// Returns the verified plaintext private section.
    ///
    /// The passphrase is ignored for unencrypted files.
    pub(crate) fn decrypt_private_key(&self, passphrase: Option<&str>) -> Result<Zeroizing<Vec<u8>>, PpkError> {
        let mut private_key = self.private_key.clone();

        let passphrase = match self.encryption {
            PpkEncryptionValue::None => "",
            PpkEncryptionValue::Aes256Cbc => {
                let passphrase = passphrase.ok_or(PpkError::PassphraseRequired)?;
                let key_material = kdf::derive_key_material(passphrase);
                ppk_aes::decrypt(&mut private_key, key_material.key(), KeyMaterial::iv())?;
                passphrase
            }
        };

        self.verify_integrity(passphrase, &private_key)?;

        log::trace!("private section verified ({} bytes)", private_key.len());

        Ok(private_key)
    }
}
