//! SSH1 flavour of triple DES: three independent CBC passes ("inner CBC"), each with a zero IV.

use crate::PpkError;
use cbc::cipher::block_padding::NoPadding;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use des::Des;
use md5::{Digest, Md5};
use zeroize::Zeroizing;

pub const BLOCK_SIZE: usize = 8;

const KEY_SIZE: usize = 8;
const ZERO_IV: [u8; BLOCK_SIZE] = [0; BLOCK_SIZE];

/// Decrypts the private section in-place with the MD5-derived two-key 3DES.
pub(crate) fn decrypt(data: &mut [u8], passphrase: &str) -> Result<(), PpkError> {
    if data.len() % BLOCK_SIZE != 0 {
        return Err(PpkError::Cipher);
    }

    let key: Zeroizing<[u8; 2 * KEY_SIZE]> = Zeroizing::new(Md5::digest(passphrase.as_bytes()).into());
    let (k1, k2) = key.split_at(KEY_SIZE);

    cbc_decrypt(data, k1)?;
    cbc_encrypt(data, k2)?;
    cbc_decrypt(data, k1)?;

    Ok(())
}

fn cbc_decrypt(data: &mut [u8], key: &[u8]) -> Result<(), PpkError> {
    cbc::Decryptor::<Des>::new_from_slices(key, &ZERO_IV)
        .map_err(|_| PpkError::Cipher)?
        .decrypt_padded_mut::<NoPadding>(data)
        .map_err(|_| PpkError::Cipher)?;
    Ok(())
}

fn cbc_encrypt(data: &mut [u8], key: &[u8]) -> Result<(), PpkError> {
    let len = data.len();
    cbc::Encryptor::<Des>::new_from_slices(key, &ZERO_IV)
        .map_err(|_| PpkError::Cipher)?
        .encrypt_padded_mut::<NoPadding>(data, len)
        .map_err(|_| PpkError::Cipher)?;
    Ok(())
}
