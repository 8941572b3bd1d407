//! AES decryption utilities.

use crate::PpkError;
use cbc::cipher::block_padding::NoPadding;
use cbc::cipher::{BlockDecryptMut, KeyIvInit};

pub const KEY_SIZE: usize = 32;
pub const BLOCK_SIZE: usize = 16;

/// Decrypts the message in-place using AES-256 in CBC mode.
///
/// Padding is left in place: the plaintext has exactly the ciphertext length.
pub fn decrypt(message: &mut [u8], key: &[u8], iv: &[u8]) -> Result<(), PpkError> {
    if message.len() % BLOCK_SIZE != 0 {
        return Err(PpkError::Cipher);
    }

    let decryptor = cbc::Decryptor::<aes::Aes256>::new_from_slices(key, iv).map_err(|_| PpkError::Cipher)?;

    decryptor
        .decrypt_padded_mut::<NoPadding>(message)
        .map_err(|_| PpkError::Cipher)?;

    Ok(())
}
