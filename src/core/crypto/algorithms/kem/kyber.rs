/*!
CRYSTALS-Kyber key encapsulation implementation.

This module provides Kyber768 encapsulation and decapsulation primitives.
The raw shared secret never leaves this module: both sides run it through
HKDF-SHA256 and hand out the derived 32-byte key.
*/

use crate::core::crypto::traits::kem::{KemDecapsulate, KemEncapsulate};
use crate::core::crypto::types::algorithms::KemAlgorithm;
use crate::core::crypto::types::constants::{HKDF_INFO_KYBER768, HKDF_SALT, kyber};
use crate::core::crypto::types::errors::{CryptoError, Result};

use hkdf::Hkdf;
use pqcrypto_kyber::kyber768::{
    self,
    Ciphertext as Kyber768Ciphertext,
    PublicKey as Kyber768PublicKey,
    SecretKey as Kyber768SecretKey,
};
use pqcrypto_traits::kem::{Ciphertext, PublicKey, SecretKey, SharedSecret};
use sha2::Sha256;

/// Generate a new Kyber768 key pair as `(public_key, secret_key)` bytes
pub fn generate_keypair() -> (Vec<u8>, Vec<u8>) {
    let (pk, sk) = kyber768::keypair();
    (pk.as_bytes().to_vec(), sk.as_bytes().to_vec())
}

/// Check that bytes form a Kyber768 public key
pub fn validate_public_key(public_key: &[u8]) -> Result<()> {
    Kyber768PublicKey::from_bytes(public_key)
        .map(|_| ())
        .map_err(|_| CryptoError::InvalidKeyFormat)
}

fn derive_key(shared_secret: &[u8]) -> Result<[u8; kyber::DERIVED_KEY_BYTES]> {
    let mut okm = [0u8; kyber::DERIVED_KEY_BYTES];
    let hkdf = Hkdf::<Sha256>::new(Some(HKDF_SALT), shared_secret);

    hkdf.expand(HKDF_INFO_KYBER768, &mut okm)
        .map_err(|_e| CryptoError::KeyDerivationFailed)?;

    Ok(okm)
}

/// Kyber768 sender bound to the receiver's public key
pub struct KyberEncapsulator {
    public_key: Kyber768PublicKey,
}

impl KyberEncapsulator {
    /// Create an encapsulator from raw public key bytes
    pub fn new(public_key: &[u8]) -> Result<Self> {
        let public_key = Kyber768PublicKey::from_bytes(public_key)
            .map_err(|_| CryptoError::InvalidKeyFormat)?;
        Ok(Self { public_key })
    }
}

impl KemEncapsulate for KyberEncapsulator {
    fn encapsulate(&self) -> Result<(Vec<u8>, [u8; 32])> {
        let (ss, ct) = kyber768::encapsulate(&self.public_key);
        let key = derive_key(ss.as_bytes())?;
        Ok((ct.as_bytes().to_vec(), key))
    }

    fn algorithm(&self) -> KemAlgorithm {
        KemAlgorithm::Kyber768
    }
}

/// Kyber768 receiver bound to a secret key
pub struct KyberDecapsulator {
    secret_key: Kyber768SecretKey,
}

impl KyberDecapsulator {
    /// Create a decapsulator from raw secret key bytes
    pub fn new(secret_key: &[u8]) -> Result<Self> {
        let secret_key = Kyber768SecretKey::from_bytes(secret_key)
            .map_err(|_| CryptoError::InvalidKeyFormat)?;
        Ok(Self { secret_key })
    }
}

impl KemDecapsulate for KyberDecapsulator {
    fn decapsulate(&self, ciphertext: &[u8]) -> Result<[u8; 32]> {
        if ciphertext.len() != kyber::CIPHERTEXT_BYTES {
            return Err(CryptoError::DecapsulationFailed);
        }
        let ct = Kyber768Ciphertext::from_bytes(ciphertext)
            .map_err(|_| CryptoError::DecapsulationFailed)?;
        let ss = kyber768::decapsulate(&ct, &self.secret_key);
        derive_key(ss.as_bytes())
    }

    fn algorithm(&self) -> KemAlgorithm {
        KemAlgorithm::Kyber768
    }
}
