use anchor_lang::prelude::*;

use crate::error::RaffleError;

/// An oracle output, read as a big-endian unsigned 256-bit integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RandomValue([u8; 32]);

impl RandomValue {
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// `self mod len`, exact over all 256 bits.
    ///
    /// Long division one byte at a time: the running remainder stays below
    /// `len`, so `remainder * 256 + 255` always fits in a `u128`.
    pub fn index_into(&self, len: usize) -> Result<usize> {
        require!(len > 0, RaffleError::IndexOutOfRange);
        let modulus = len as u128;
        let remainder = self
            .0
            .iter()
            .fold(0u128, |acc, &byte| ((acc << 8) | byte as u128) % modulus);
        Ok(remainder as usize)
    }
}

impl From<u64> for RandomValue {
    fn from(value: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[24..].copy_from_slice(&value.to_be_bytes());
        Self(bytes)
    }
}

impl From<u128> for RandomValue {
    fn from(value: u128) -> Self {
        let mut bytes = [0u8; 32];
        bytes[16..].copy_from_slice(&value.to_be_bytes());
        Self(bytes)
    }
}
