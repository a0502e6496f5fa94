/*!
CRYSTALS-Dilithium signature implementation.

This module provides Dilithium3 signing and verification primitives, plus
the keypair generator used by the Dilithium key manager.
*/

use crate::core::crypto::traits::signature::{PublicKeySign, PublicKeyVerify};
use crate::core::crypto::types::algorithms::SignatureAlgorithm;
use crate::core::crypto::types::errors::{CryptoError, Result};

use pqcrypto_dilithium::dilithium3::{
    self,
    DetachedSignature as Dilithium3Signature,
    PublicKey as Dilithium3PublicKey,
    SecretKey as Dilithium3SecretKey,
};
use pqcrypto_traits::sign::{DetachedSignature, PublicKey, SecretKey};

/// Generate a new Dilithium3 key pair as `(public_key, secret_key)` bytes
pub fn generate_keypair() -> (Vec<u8>, Vec<u8>) {
    let (pk, sk) = dilithium3::keypair();
    (pk.as_bytes().to_vec(), sk.as_bytes().to_vec())
}

/// Check that bytes form a Dilithium3 public key
pub fn validate_public_key(public_key: &[u8]) -> Result<()> {
    Dilithium3PublicKey::from_bytes(public_key)
        .map(|_| ())
        .map_err(|_| CryptoError::InvalidKeyFormat)
}

/// Dilithium3 signer bound to a secret key
pub struct DilithiumSigner {
    secret_key: Dilithium3SecretKey,
}

impl DilithiumSigner {
    /// Create a signer from raw secret key bytes
    pub fn new(secret_key: &[u8]) -> Result<Self> {
        let secret_key = Dilithium3SecretKey::from_bytes(secret_key)
            .map_err(|_| CryptoError::InvalidKeyFormat)?;
        Ok(Self { secret_key })
    }
}

impl PublicKeySign for DilithiumSigner {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>> {
        let signature = dilithium3::detached_sign(data, &self.secret_key);
        Ok(signature.as_bytes().to_vec())
    }

    fn algorithm(&self) -> SignatureAlgorithm {
        SignatureAlgorithm::Dilithium3
    }
}

/// Dilithium3 verifier bound to a public key
pub struct DilithiumVerifier {
    public_key: Dilithium3PublicKey,
}

impl DilithiumVerifier {
    /// Create a verifier from raw public key bytes
    pub fn new(public_key: &[u8]) -> Result<Self> {
        let public_key = Dilithium3PublicKey::from_bytes(public_key)
            .map_err(|_| CryptoError::InvalidKeyFormat)?;
        Ok(Self { public_key })
    }
}

impl PublicKeyVerify for DilithiumVerifier {
    fn verify(&self, signature: &[u8], data: &[u8]) -> Result<()> {
        let sig = Dilithium3Signature::from_bytes(signature)
            .map_err(|_| CryptoError::SignatureVerificationFailed)?;
        dilithium3::verify_detached_signature(&sig, data, &self.public_key)
            .map_err(|_| CryptoError::SignatureVerificationFailed)
    }

    fn algorithm(&self) -> SignatureAlgorithm {
        SignatureAlgorithm::Dilithium3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::crypto::types::constants::dilithium;

    #[test]
    fn test_sign_verify() {
        let (pk, sk) = generate_keypair();
        assert_eq!(pk.len(), dilithium::PUBLIC_KEY_BYTES);

        let signer = DilithiumSigner::new(&sk).unwrap();
        let verifier = DilithiumVerifier::new(&pk).unwrap();
        let sig = signer.sign(b"message").unwrap();

        assert!(verifier.verify(&sig, b"message").is_ok());
        assert!(matches!(
            verifier.verify(&sig, b"other message"),
            Err(CryptoError::SignatureVerificationFailed)
        ));
    }

    #[test]
    fn test_truncated_keys_rejected() {
        let (pk, sk) = generate_keypair();
        assert!(DilithiumSigner::new(&sk[..sk.len() - 1]).is_err());
        assert!(DilithiumVerifier::new(&pk[..10]).is_err());
        assert!(validate_public_key(&pk).is_ok());
    }
}
