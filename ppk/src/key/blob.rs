use super::{KeyAlgorithm, PublicKeyMaterial};
use crate::ssh::decode::{SshComplexTypeDecode, SshReadExt};
use crate::ssh::encode::{magnitude_bytes, SshComplexTypeEncode, SshWriteExt};
use crate::PpkError;
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Write};

impl SshComplexTypeEncode for PublicKeyMaterial {
    type Error = PpkError;

    fn encode(&self, mut stream: impl Write) -> Result<(), Self::Error> {
        stream.write_ssh_string(self.algorithm().as_str())?;

        match self {
            PublicKeyMaterial::Rsa { e, n } => {
                stream.write_ssh_mpint(e)?;
                stream.write_ssh_mpint(n)?;
            }
            PublicKeyMaterial::Dss { p, q, g, y } => {
                stream.write_ssh_mpint(p)?;
                stream.write_ssh_mpint(q)?;
                stream.write_ssh_mpint(g)?;
                stream.write_ssh_mpint(y)?;
            }
        }

        Ok(())
    }
}

impl SshComplexTypeDecode for PublicKeyMaterial {
    type Error = PpkError;

    fn decode(mut stream: impl Read) -> Result<Self, Self::Error> {
        let key_type = stream.read_ssh_string()?;

        match KeyAlgorithm::from_key_type(&key_type)? {
            KeyAlgorithm::Rsa => {
                let e = stream.read_ssh_mpint()?;
                let n = stream.read_ssh_mpint()?;
                Ok(PublicKeyMaterial::Rsa { e, n })
            }
            KeyAlgorithm::Dss => {
                let p = stream.read_ssh_mpint()?;
                let q = stream.read_ssh_mpint()?;
                let g = stream.read_ssh_mpint()?;
                let y = stream.read_ssh_mpint()?;
                Ok(PublicKeyMaterial::Dss { p, q, g, y })
            }
        }
    }
}

impl PublicKeyMaterial {
    /// Encodes the SSH2 wire-format public key blob.
    pub fn to_blob(&self) -> Result<Vec<u8>, PpkError> {
        let mut blob = Vec::new();
        self.encode(&mut blob)?;
        Ok(blob)
    }

    /// Decodes an SSH2 wire-format public key blob. The whole input must be consumed.
    pub fn from_blob(blob: &[u8]) -> Result<Self, PpkError> {
        let mut cursor = blob;
        let key = Self::decode(&mut cursor)?;

        if !cursor.is_empty() {
            return Err(PpkError::corrupt("unexpected trailing data after public key blob"));
        }

        Ok(key)
    }

    /// Encodes the legacy SSH1 public key blob: modulus bit count, exponent, modulus.
    pub fn to_ssh1_blob(&self) -> Result<Vec<u8>, PpkError> {
        let (e, n) = self.ssh1_parts()?;

        let bits = u32::try_from(n.bits()).map_err(|_| PpkError::corrupt("RSA modulus is too large"))?;

        let mut blob = Vec::new();
        blob.write_u32::<BigEndian>(bits)?;
        blob.write_ssh1_mpint(e)?;
        blob.write_ssh1_mpint(n)?;

        Ok(blob)
    }

    /// Decodes the legacy SSH1 public key blob produced by [`PublicKeyMaterial::to_ssh1_blob`].
    pub fn from_ssh1_blob(blob: &[u8]) -> Result<Self, PpkError> {
        let mut cursor = blob;

        let bits = cursor.read_u32::<BigEndian>()?;
        let e = cursor.read_ssh1_mpint()?;
        let n = cursor.read_ssh1_mpint()?;

        if n.bits() != bits as usize {
            return Err(PpkError::corrupt("SSH1 modulus size does not match its bit count"));
        }

        if !cursor.is_empty() {
            return Err(PpkError::corrupt("unexpected trailing data after SSH1 public key blob"));
        }

        Ok(PublicKeyMaterial::Rsa { e, n })
    }

    /// Fingerprint input for SSH1 keys: raw modulus bytes followed by raw exponent bytes.
    pub(crate) fn ssh1_fingerprint_input(&self) -> Result<Vec<u8>, PpkError> {
        let (e, n) = self.ssh1_parts()?;

        let mut input = magnitude_bytes(n);
        input.extend_from_slice(&magnitude_bytes(e));

        Ok(input)
    }

    fn ssh1_parts(&self) -> Result<(&num_bigint_dig::BigUint, &num_bigint_dig::BigUint), PpkError> {
        match self {
            PublicKeyMaterial::Rsa { e, n } => Ok((e, n)),
            PublicKeyMaterial::Dss { .. } => Err(PpkError::unsupported_algorithm("ssh-dss (SSH1 keys are RSA only)")),
        }
    }
}
