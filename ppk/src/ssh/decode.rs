use byteorder::{BigEndian, ReadBytesExt};
use num_bigint_dig::BigUint;
use std::io::{self, Read};

pub trait SshReadExt {
    type Error;

    fn read_ssh_string(&mut self) -> Result<String, Self::Error>;
    fn read_ssh_bytes(&mut self) -> Result<Vec<u8>, Self::Error>;
    fn read_ssh_mpint(&mut self) -> Result<BigUint, Self::Error>;
    /// SSH1 integer: 16-bit bit count followed by the minimal big-endian magnitude.
    fn read_ssh1_mpint(&mut self) -> Result<BigUint, Self::Error>;
}

impl<T> SshReadExt for T
where
    T: Read,
{
    type Error = io::Error;

    fn read_ssh_string(&mut self) -> Result<String, Self::Error> {
        let buffer = self.read_ssh_bytes()?;
        String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn read_ssh_bytes(&mut self) -> Result<Vec<u8>, Self::Error> {
        let size = self.read_u32::<BigEndian>()? as usize;
        let mut buffer = Vec::new();
        // Do not trust the declared size for the allocation
        let read = self.by_ref().take(size as u64).read_to_end(&mut buffer)?;
        if read != size {
            return Err(io::ErrorKind::UnexpectedEof.into());
        }

        Ok(buffer)
    }

    fn read_ssh_mpint(&mut self) -> Result<BigUint, Self::Error> {
        let buffer = zeroize::Zeroizing::new(self.read_ssh_bytes()?);

        match buffer.as_slice() {
            [] => Ok(BigUint::default()),
            [first, ..] if first & 0x80 != 0 => Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "negative mpint where an unsigned value is expected",
            )),
            [0, second, ..] if second & 0x80 == 0 => Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "mpint has a redundant leading zero byte",
            )),
            [0] => Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "zero mpint must be encoded with an empty body",
            )),
            bytes => Ok(BigUint::from_bytes_be(bytes)),
        }
    }

    fn read_ssh1_mpint(&mut self) -> Result<BigUint, Self::Error> {
        let bits = self.read_u16::<BigEndian>()? as usize;
        let mut buffer = zeroize::Zeroizing::new(vec![0; (bits + 7) / 8]);
        self.read_exact(&mut buffer)?;

        let value = BigUint::from_bytes_be(&buffer);
        if value.bits() != bits {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "SSH1 integer bit count does not match its value",
            ));
        }

        Ok(value)
    }
}

pub trait SshComplexTypeDecode: Sized {
    type Error;

    fn decode(stream: impl Read) -> Result<Self, Self::Error>;
}
