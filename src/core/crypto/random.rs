/*!
Per-call randomness.

Every nonce and every key byte is read straight from the operating system
generator. No generator state is shared between calls.
*/

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::core::crypto::types::errors::{CryptoError, Result};

/// Fill a fixed-size array from the operating system generator
pub fn random_array<const N: usize>() -> Result<[u8; N]> {
    let mut out = [0u8; N];
    OsRng
        .try_fill_bytes(&mut out)
        .map_err(|e| CryptoError::Randomness(e.to_string()))?;
    Ok(out)
}

/// Fill a vector of `len` bytes from the operating system generator
pub fn random_vec(len: usize) -> Result<Vec<u8>> {
    let mut out = vec![0u8; len];
    OsRng
        .try_fill_bytes(&mut out)
        .map_err(|e| CryptoError::Randomness(e.to_string()))?;
    Ok(out)
}
