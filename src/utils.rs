use crate::error::{Error, Result};
use std::convert::TryInto;

// out ^= b, byte by byte
pub(crate) fn xor_into(out: &mut [u8; 32], b: &[u8; 32]) {
    for (o, x) in out.iter_mut().zip(b.iter()) {
        *o ^= x;
    }
}

// a ^ b ^ c
pub(crate) fn xor3(a: &[u8; 32], b: &[u8; 32], c: &[u8; 32]) -> [u8; 32] {
    let mut out = *a;
    xor_into(&mut out, b);
    xor_into(&mut out, c);
    out
}

pub(crate) fn to_array<const N: usize>(field: &'static str, bytes: &[u8]) -> Result<[u8; N]> {
    bytes.try_into().map_err(|_| Error::InvalidLength {
        field,
        expected: N,
        actual: bytes.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor3_cancels_repeated_operand() {
        let a = [0x5a; 32];
        let b = [0xc3; 32];
        assert_eq!(xor3(&a, &b, &b), a);
        assert_eq!(xor3(&a, &a, &b), b);
    }

    #[test]
    fn to_array_reports_lengths() {
        let ok: [u8; 32] = to_array("commitment", &[7u8; 32]).unwrap();
        assert_eq!(ok, [7u8; 32]);

        match to_array::<32>("commitment", &[7u8; 31]) {
            Err(Error::InvalidLength {
                field,
                expected,
                actual,
            }) => {
                assert_eq!(field, "commitment");
                assert_eq!(expected, 32);
                assert_eq!(actual, 31);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
