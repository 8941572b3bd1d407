use byteorder::{BigEndian, WriteBytesExt};
use num_bigint_dig::BigUint;
use std::io::{self, Write};

pub trait SshWriteExt {
    type Error;

    fn write_ssh_string(&mut self, data: &str) -> Result<(), Self::Error>;
    fn write_ssh_bytes(&mut self, data: &[u8]) -> Result<(), Self::Error>;
    fn write_ssh_mpint(&mut self, data: &BigUint) -> Result<(), Self::Error>;
    fn write_ssh1_mpint(&mut self, data: &BigUint) -> Result<(), Self::Error>;
}

impl<T> SshWriteExt for T
where
    T: Write,
{
    type Error = io::Error;

    fn write_ssh_string(&mut self, data: &str) -> Result<(), Self::Error> {
        self.write_ssh_bytes(data.as_bytes())
    }

    fn write_ssh_bytes(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        let size = u32::try_from(data.len()).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        self.write_u32::<BigEndian>(size)?;
        self.write_all(data)
    }

    fn write_ssh_mpint(&mut self, data: &BigUint) -> Result<(), Self::Error> {
        let data = magnitude_bytes(data);
        let size = u32::try_from(data.len()).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        // Top bit set: a zero byte keeps the value non-negative
        if data.first().map_or(false, |byte| byte & 0x80 != 0) {
            self.write_u32::<BigEndian>(size + 1)?;
            self.write_u8(0)?;
        } else {
            self.write_u32::<BigEndian>(size)?;
        }
        self.write_all(&data)
    }

    fn write_ssh1_mpint(&mut self, data: &BigUint) -> Result<(), Self::Error> {
        let bits = u16::try_from(data.bits()).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        self.write_u16::<BigEndian>(bits)?;
        self.write_all(&magnitude_bytes(data))
    }
}

/// Minimal big-endian magnitude; zero has no bytes at all.
pub(crate) fn magnitude_bytes(value: &BigUint) -> Vec<u8> {
    if value.bits() == 0 {
        Vec::new()
    } else {
        value.to_bytes_be()
    }
}

pub trait SshComplexTypeEncode {
    type Error;

    fn encode(&self, stream: impl Write) -> Result<(), Self::Error>;
}
