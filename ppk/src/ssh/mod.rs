//! SSH wire primitives: length-prefixed strings and byte arrays, SSH2 `mpint`s and the
//! bit-length-prefixed integers of the SSH1 protocol.

pub mod decode;
pub mod encode;

pub(crate) mod key_type {
    pub const RSA: &str = "ssh-rsa";
    pub const DSA: &str = "ssh-dss";
}

#[cfg(test)]
mod tests {
    use super::decode::SshReadExt;
    use super::encode::SshWriteExt;
    use num_bigint_dig::BigUint;
    use rstest::rstest;

    #[rstest]
    #[case::top_bit_set(&[0x80], &[0x00, 0x00, 0x00, 0x02, 0x00, 0x80])]
    #[case::natural_leading_zero_nibble(&[0x09, 0xa3, 0x78, 0xf9], &[0x00, 0x00, 0x00, 0x04, 0x09, 0xa3, 0x78, 0xf9])]
    #[case::leading_zero_byte_is_dropped(&[0x00, 0x00, 0x7f, 0xff], &[0x00, 0x00, 0x00, 0x02, 0x7f, 0xff])]
    #[case::zero(&[], &[0x00, 0x00, 0x00, 0x00])]
    fn mpint_edge_values(#[case] magnitude: &[u8], #[case] encoded: &[u8]) {
        let value = BigUint::from_bytes_be(magnitude);

        let mut buffer = Vec::new();
        buffer.write_ssh_mpint(&value).unwrap();
        assert_eq!(buffer, encoded);

        let mut cursor = encoded;
        let decoded = cursor.read_ssh_mpint().unwrap();
        assert_eq!(decoded, value);
        assert!(cursor.is_empty());
    }

    #[rstest]
    #[case::negative(&[0x00, 0x00, 0x00, 0x02, 0xed, 0xcc])]
    #[case::redundant_zero(&[0x00, 0x00, 0x00, 0x02, 0x00, 0x7f])]
    #[case::truncated(&[0x00, 0x00, 0x00, 0x04, 0x01])]
    fn mpint_rejects_non_canonical_or_truncated(#[case] encoded: &[u8]) {
        let mut cursor = encoded;
        assert!(cursor.read_ssh_mpint().is_err());
    }

    #[rstest]
    #[case(&[0x01, 0x00, 0x01], &[0x00, 0x11, 0x01, 0x00, 0x01])]
    #[case(&[0x25], &[0x00, 0x06, 0x25])]
    #[case(&[], &[0x00, 0x00])]
    fn ssh1_mpint_roundtrip(#[case] magnitude: &[u8], #[case] encoded: &[u8]) {
        let value = BigUint::from_bytes_be(magnitude);

        let mut buffer = Vec::new();
        buffer.write_ssh1_mpint(&value).unwrap();
        assert_eq!(buffer, encoded);

        let mut cursor = encoded;
        assert_eq!(cursor.read_ssh1_mpint().unwrap(), value);
        assert!(cursor.is_empty());
    }

    #[test]
    fn string_roundtrip() {
        let mut buffer = Vec::new();
        buffer.write_ssh_string("ssh-rsa").unwrap();
        assert_eq!(buffer, b"\x00\x00\x00\x07ssh-rsa");

        let mut cursor = buffer.as_slice();
        assert_eq!(cursor.read_ssh_string().unwrap(), "ssh-rsa");
    }
}
