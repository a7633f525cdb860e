//! `signatureData` byte-layout parser
//!
//! ```text
//! +---+-----+-----------+
//! | 1 |  4  | remainder |
//! +---+-----+-----------+
//!  user  counter  signature
//!  presence (BE)  (DER)
//! ```

use crate::error::{Error, Result};

/// Length, in bytes, of the big-endian counter field.
pub const COUNTER_LEN: usize = 4;

/// Strict minimum total length of a `signatureData` blob. Inputs of exactly
/// this length are still rejected -- the check is `>`, not `>=`.
pub const MIN_LEN: usize = 1 + COUNTER_LEN;

/// The parsed fields of a `signatureData` blob.
pub struct SignatureData {
    pub user_presence: u8,
    pub counter: u32,
    pub signature: Vec<u8>,
}

/// Parses an already base64-decoded `signatureData` blob.
///
/// Rejects with [`Error::Format`] if the user-presence bit is unset --
/// signature verification must never even be attempted in that case.
pub fn parse(data: &[u8]) -> Result<SignatureData> {
    if data.len() <= MIN_LEN {
        return Err(Error::Format("signatureData is too short"));
    }

    let user_presence = data[0] & 0x01;
    if user_presence == 0 {
        return Err(Error::Format("user presence bit is not set"));
    }

    let mut counter_bytes = [0u8; COUNTER_LEN];
    counter_bytes.copy_from_slice(&data[1..1 + COUNTER_LEN]);
    let counter = u32::from_be_bytes(counter_bytes);

    let signature = data[1 + COUNTER_LEN..].to_vec();

    Ok(SignatureData {
        user_presence,
        counter,
        signature,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(presence: u8, counter: u32) -> Vec<u8> {
        let mut data = vec![presence];
        data.extend_from_slice(&counter.to_be_bytes());
        data.extend_from_slice(&[0u8; 8]); // stand-in signature bytes
        data
    }

    #[test]
    fn parses_presence_and_counter() {
        let data = sample(0x01, 7);
        let parsed = parse(&data).unwrap();
        assert_eq!(parsed.user_presence, 1);
        assert_eq!(parsed.counter, 7);
    }

    #[test]
    fn rejects_cleared_presence_bit() {
        let data = sample(0x00, 7);
        assert!(matches!(parse(&data), Err(Error::Format(_))));
    }

    #[test]
    fn high_bits_of_presence_byte_are_ignored() {
        let data = sample(0b1111_1111, 1);
        assert_eq!(parse(&data).unwrap().user_presence, 1);
    }

    #[test]
    fn rejects_buffers_at_or_below_strict_minimum() {
        let data = vec![0x01u8; MIN_LEN];
        assert!(matches!(parse(&data), Err(Error::Format(_))));
    }

    #[test]
    fn counter_round_trips_through_big_endian_bytes() {
        let counter: u32 = 0xDEADBEEF;
        let data = sample(0x01, counter);
        let parsed = parse(&data).unwrap();
        assert_eq!(parsed.counter, counter);
        assert_eq!(parsed.counter.to_be_bytes(), counter.to_be_bytes());
    }
}
