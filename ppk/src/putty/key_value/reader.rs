use super::{PpkKeyValue, PpkLiteral, PpkMultilineKeyValue, PpkValueParsingError, KV_DELIMITER};
use crate::PpkError;
use std::str::FromStr;
use zeroize::Zeroizing;

/// Reader for PPK key-value format.
///
/// Lines may end with either LF or CRLF.
pub struct PuttyKvReader<'a> {
    input: std::str::Lines<'a>,
}

impl<'a> PuttyKvReader<'a> {
    pub fn from_str(input: &'a str) -> Self {
        Self { input: input.lines() }
    }

    /// Splits the next line into its raw key and value without interpreting either.
    pub fn next_raw_key_value(&mut self) -> Result<(&'a str, &'a str), PpkError> {
        let line = self.input.next().ok_or(PpkError::EndOfInput)?;
        line.split_once(KV_DELIMITER).ok_or(PpkError::InvalidKeyValueFormat)
    }

    pub fn next_value<T: PpkKeyValue>(&mut self) -> Result<T::Value, PpkError> {
        let (_, value) = self.next_key_value::<T>()?;
        Ok(value)
    }

    pub fn next_key_value<T: PpkKeyValue>(&mut self) -> Result<(T::Key, T::Value), PpkError> {
        let (key, value) = self.next_raw_key_value()?;

        let parsed_key = parse_literal::<T::Key>(key)?;
        let parsed_value = parse_value::<T::Key, _>(value)?;

        Ok((parsed_key, parsed_value))
    }

    pub fn next_multiline_value<T: PpkMultilineKeyValue>(&mut self) -> Result<T::Value, PpkError> {
        let (key, value) = self.next_raw_key_value()?;

        parse_literal::<T::Key>(key)?;

        // Number of following lines, not bytes
        let lines_count: u16 = value.parse().map_err(|_| PpkError::InvalidInput {
            context: T::Key::CONTEXT,
            expected: "<valid lines count>",
            actual: value.to_string(),
        })?;

        // May hold an unencrypted private key
        let mut encoded = Zeroizing::new(String::new());

        for _ in 0..lines_count {
            encoded.push_str(self.input.next().ok_or(PpkError::EndOfInput)?);
        }

        parse_value::<T::Key, _>(&encoded)
    }
}

pub(crate) fn parse_literal<K>(key: &str) -> Result<K, PpkError>
where
    K: FromStr<Err = PpkValueParsingError> + PpkLiteral,
{
    key.parse().map_err(|e: PpkValueParsingError| PpkError::InvalidInput {
        context: K::CONTEXT,
        expected: e.expected,
        actual: e.actual,
    })
}

fn parse_value<K, V>(value: &str) -> Result<V, PpkError>
where
    K: PpkLiteral,
    V: FromStr<Err = PpkValueParsingError>,
{
    value.parse().map_err(|e: PpkValueParsingError| PpkError::InvalidInput {
        context: K::CONTEXT,
        expected: e.expected,
        actual: e.actual,
    })
}
