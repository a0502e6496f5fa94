use pqc_keymanager::{
    Aead, CryptoError, ErrorKind, KeyData, KeyFactory, KeyManager, KeyManagerHandle,
    KeyMaterialType, KeyTemplate, KeyTypeManager, KeyTypeUrl, OutputPrefixType, Registry,
    Result, output_prefix,
};
use pqc_keymanager::core::crypto::types::{Result as CryptoResult, SymmetricAlgorithm};
use prost::Message;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

const SAMPLE_TYPE: &str = "type.example.com/SampleAeadKey";
const OTHER_TYPE: &str = "type.example.com/OtherKey";

// ----- Stub key type -----

struct SampleAead;

impl Aead for SampleAead {
    fn encrypt(&self, plaintext: &[u8], _associated_data: &[u8]) -> CryptoResult<Vec<u8>> {
        Ok(plaintext.to_vec())
    }

    fn decrypt(&self, ciphertext: &[u8], _associated_data: &[u8]) -> CryptoResult<Vec<u8>> {
        Ok(ciphertext.to_vec())
    }

    fn algorithm(&self) -> SymmetricAlgorithm {
        SymmetricAlgorithm::ChaCha20Poly1305
    }
}

struct SampleFactory {
    calls: Arc<AtomicUsize>,
}

impl KeyFactory for SampleFactory {
    fn new_key_data(&self, serialized_key_format: &[u8]) -> CryptoResult<KeyData> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if serialized_key_format != b"128" {
            return Err(CryptoError::invalid_parameters("only 128-bit keys"));
        }
        Ok(KeyData::new(SAMPLE_TYPE, vec![0x42; 16], KeyMaterialType::Symmetric))
    }
}

// Returns the same record whatever it is asked for.
struct FixedOutputFactory {
    output: KeyData,
}

impl KeyFactory for FixedOutputFactory {
    fn new_key_data(&self, _serialized_key_format: &[u8]) -> CryptoResult<KeyData> {
        Ok(self.output.clone())
    }
}

struct SampleKeyManager {
    key_type: KeyTypeUrl,
    factory: Box<dyn KeyFactory>,
}

impl KeyTypeManager for SampleKeyManager {
    fn key_type(&self) -> &KeyTypeUrl {
        &self.key_type
    }

    fn key_factory(&self) -> &dyn KeyFactory {
        self.factory.as_ref()
    }
}

impl KeyManager<dyn Aead> for SampleKeyManager {
    fn primitive(&self, key_data: &KeyData) -> CryptoResult<Box<dyn Aead>> {
        if key_data.value.len() != 16 {
            return Err(CryptoError::InvalidKeySize(key_data.value.len()));
        }
        Ok(Box::new(SampleAead))
    }
}

fn sample_registry(factory: impl KeyFactory + 'static) -> Result<Registry> {
    let mut registry = Registry::new();
    registry.register::<dyn Aead, _>(SampleKeyManager {
        key_type: KeyTypeUrl::new(SAMPLE_TYPE)?,
        factory: Box::new(factory),
    })?;
    Ok(registry)
}

fn sample_handle() -> Result<(KeyManagerHandle<dyn Aead>, Arc<AtomicUsize>)> {
    let calls = Arc::new(AtomicUsize::new(0));
    let registry = sample_registry(SampleFactory { calls: calls.clone() })?;
    let handle = KeyManagerHandle::lookup(&registry, SAMPLE_TYPE)?;
    Ok((handle, calls))
}

fn template(type_url: &str, parameters: &[u8]) -> Vec<u8> {
    KeyTemplate::new(type_url, parameters.to_vec(), OutputPrefixType::Tink).encode_to_vec()
}

// ----- Key generation -----

#[test]
fn test_sample_key_generation() -> Result<()> {
    let (handle, calls) = sample_handle()?;
    assert_eq!(handle.key_type(), SAMPLE_TYPE);

    let serialized = handle.new_key_data(&template(SAMPLE_TYPE, b"128"))?;
    let key_data = KeyData::decode(serialized.as_slice()).unwrap();

    assert_eq!(key_data.type_url, SAMPLE_TYPE);
    assert_eq!(key_data.value.len(), 16);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    Ok(())
}

#[test]
fn test_sample_rejected_parameters() -> Result<()> {
    let (handle, calls) = sample_handle()?;

    let err = handle.new_key_data(&template(SAMPLE_TYPE, b"999")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::KeyGeneration);
    assert!(matches!(err.crypto_cause(), Some(CryptoError::InvalidParameters(_))));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    Ok(())
}

#[test]
fn test_sample_type_mismatch_skips_factory() -> Result<()> {
    let (handle, calls) = sample_handle()?;

    let err = handle.new_key_data(&template(OTHER_TYPE, b"128")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    assert_eq!(calls.load(Ordering::SeqCst), 0, "factory must not run on mismatch");
    Ok(())
}

#[test]
fn test_malformed_template() -> Result<()> {
    let (handle, calls) = sample_handle()?;

    let err = handle.new_key_data(&[0xff; 7]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedInput);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    Ok(())
}

#[test]
fn test_generated_key_under_foreign_identifier_rejected() -> Result<()> {
    let output = KeyData::new(OTHER_TYPE, vec![0x42; 16], KeyMaterialType::Symmetric);
    let registry = sample_registry(FixedOutputFactory { output })?;
    let handle = KeyManagerHandle::<dyn Aead>::lookup(&registry, SAMPLE_TYPE)?;

    let err = handle.new_key_data(&template(SAMPLE_TYPE, b"128")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::KeyGeneration);
    assert!(matches!(err.crypto_cause(), Some(CryptoError::UnexpectedKeyData(_))));

    let template = KeyTemplate::new(SAMPLE_TYPE, b"128".to_vec(), OutputPrefixType::Tink);
    let err = registry.new_key_data(&template).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::KeyGeneration);
    Ok(())
}

#[test]
fn test_generated_key_without_metadata_rejected() -> Result<()> {
    let mut output = KeyData::new(SAMPLE_TYPE, vec![0x42; 16], KeyMaterialType::Symmetric);
    output.key_material_type = 0;
    let registry = sample_registry(FixedOutputFactory { output })?;
    let handle = KeyManagerHandle::<dyn Aead>::lookup(&registry, SAMPLE_TYPE)?;

    let err = handle.new_key_data(&template(SAMPLE_TYPE, b"128")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::KeyGeneration);
    assert!(matches!(err.crypto_cause(), Some(CryptoError::UnexpectedKeyData(_))));
    Ok(())
}

#[test]
fn test_output_prefix_size_matches_prefix() -> Result<()> {
    let (handle, calls) = sample_handle()?;

    let size = handle.output_prefix_size(&template(SAMPLE_TYPE, b"128"))?;
    assert_eq!(size, output_prefix(OutputPrefixType::Tink, 7).unwrap().len());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    Ok(())
}

// ----- Primitive instantiation -----

#[test]
fn test_generated_key_builds_primitive() -> Result<()> {
    let (handle, _) = sample_handle()?;

    let serialized = handle.new_key_data(&template(SAMPLE_TYPE, b"128"))?;
    let aead = handle.primitive(&serialized)?;
    assert_eq!(aead.encrypt(b"abc", b"").unwrap().as_slice(), b"abc");
    Ok(())
}

#[test]
fn test_bad_key_material_is_construction_error() -> Result<()> {
    let (handle, _) = sample_handle()?;

    let key_data = KeyData::new(SAMPLE_TYPE, vec![1, 2, 3], KeyMaterialType::Symmetric);
    let err = handle.primitive(&key_data.encode_to_vec()).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::PrimitiveConstruction);
    assert!(matches!(err.crypto_cause(), Some(CryptoError::InvalidKeySize(3))));
    Ok(())
}

#[test]
fn test_foreign_key_data_rejected_before_delegation() -> Result<()> {
    let (handle, _) = sample_handle()?;

    let key_data = KeyData::new(OTHER_TYPE, vec![0x42; 16], KeyMaterialType::Symmetric);
    let err = handle.primitive(&key_data.encode_to_vec()).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    Ok(())
}

#[test]
fn test_malformed_key_data() -> Result<()> {
    let (handle, _) = sample_handle()?;

    assert_eq!(handle.primitive(&[0xff; 7]).err().unwrap().kind(), ErrorKind::MalformedInput);
    assert_eq!(handle.primitive(&[]).err().unwrap().kind(), ErrorKind::MalformedInput);
    Ok(())
}

// ----- Public key derivation -----

#[test]
fn test_symmetric_manager_has_no_public_key() -> Result<()> {
    let (handle, _) = sample_handle()?;

    // Unsupported is reported before the input is even looked at.
    for input in [&[0xff; 7][..], &[][..], b"anything"] {
        let err = handle.public_key_data(input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);
    }
    Ok(())
}

// ----- Handles -----

#[test]
fn test_cloned_handles_share_manager() -> Result<()> {
    let (handle, calls) = sample_handle()?;
    let clone = handle.clone();

    handle.new_key_data(&template(SAMPLE_TYPE, b"128"))?;
    clone.new_key_data(&template(SAMPLE_TYPE, b"128"))?;
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(clone.key_type(), handle.key_type());
    Ok(())
}
