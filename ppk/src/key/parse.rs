use super::{KeyAlgorithm, PrivateKeyMaterial, PublicKeyMaterial};
use crate::ssh::decode::SshReadExt;
use crate::PpkError;
use std::mem;
use zeroize::Zeroizing;

/// Parses the public section of a key file and checks it describes `algorithm`.
pub(crate) fn parse_public_key(algorithm: KeyAlgorithm, data: &[u8]) -> Result<PublicKeyMaterial, PpkError> {
    let public_key = PublicKeyMaterial::from_blob(data)?;

    if public_key.algorithm() != algorithm {
        return Err(PpkError::corrupt("public key type does not match the declared algorithm"));
    }

    Ok(public_key)
}

/// Parses private fields in the fixed per-algorithm order.
///
/// `max_padding` is the number of trailing bytes tolerated after the last field (cipher
/// block padding of encrypted sections); unencrypted sections must pass `0`.
pub(crate) fn parse_private_key(
    algorithm: KeyAlgorithm,
    data: &[u8],
    max_padding: usize,
) -> Result<PrivateKeyMaterial, PpkError> {
    let mut cursor = data;

    let private_key = match algorithm {
        KeyAlgorithm::Rsa => {
            // Fields read so far are wiped if a later one fails
            let mut d = Zeroizing::new(cursor.read_ssh_mpint()?);
            let mut p = Zeroizing::new(cursor.read_ssh_mpint()?);
            let mut q = Zeroizing::new(cursor.read_ssh_mpint()?);
            let mut iqmp = Zeroizing::new(cursor.read_ssh_mpint()?);
            PrivateKeyMaterial::Rsa {
                d: mem::take(&mut *d),
                p: mem::take(&mut *p),
                q: mem::take(&mut *q),
                iqmp: mem::take(&mut *iqmp),
            }
        }
        KeyAlgorithm::Dss => {
            let x = cursor.read_ssh_mpint()?;
            PrivateKeyMaterial::Dss { x }
        }
    };

    if cursor.len() > max_padding {
        log::debug!(
            "{} trailing bytes after {} private key fields (at most {} allowed)",
            cursor.len(),
            algorithm,
            max_padding
        );
        return Err(PpkError::corrupt("unexpected trailing data after private key fields"));
    }

    Ok(private_key)
}
