/*!
Output prefixes for ciphertexts and signatures.

A key's `OutputPrefixType` decides which bytes are prepended to everything
made with it, so a keyset can route a ciphertext back to the key that
produced it. `KeyManagerHandle::output_prefix_size` reports this length for
a template before any key is generated.

The non-raw prefix has the following format:
- Start byte (1 byte): 0x01 for TINK, 0x00 for LEGACY and CRUNCHY
- Key id (4 bytes, big-endian)
*/

use byteorder::{BigEndian, ByteOrder};

use crate::core::crypto::types::errors::{CryptoError, Result};
use crate::core::proto::OutputPrefixType;

/// Size of a TINK, LEGACY or CRUNCHY prefix
pub const NON_RAW_PREFIX_SIZE: usize = 5;

/// Size of a RAW prefix
pub const RAW_PREFIX_SIZE: usize = 0;

/// First byte of a TINK prefix
pub const TINK_START_BYTE: u8 = 0x01;

/// First byte of a LEGACY or CRUNCHY prefix
pub const LEGACY_START_BYTE: u8 = 0x00;

/// Compute the output prefix for a key with the given id
pub fn output_prefix(prefix_type: OutputPrefixType, key_id: u32) -> Result<Vec<u8>> {
    match prefix_type {
        OutputPrefixType::Tink => Ok(non_raw_prefix(TINK_START_BYTE, key_id).to_vec()),
        OutputPrefixType::Legacy | OutputPrefixType::Crunchy => {
            Ok(non_raw_prefix(LEGACY_START_BYTE, key_id).to_vec())
        }
        OutputPrefixType::Raw => Ok(Vec::new()),
        OutputPrefixType::UnknownPrefix => Err(CryptoError::invalid_parameters(
            "unknown output prefix type",
        )),
    }
}

/// Length of the prefix a key with this output prefix type produces
pub fn prefix_size(prefix_type: OutputPrefixType) -> Result<usize> {
    match prefix_type {
        OutputPrefixType::Raw => Ok(RAW_PREFIX_SIZE),
        OutputPrefixType::UnknownPrefix => Err(CryptoError::invalid_parameters(
            "unknown output prefix type",
        )),
        _ => Ok(NON_RAW_PREFIX_SIZE),
    }
}

fn non_raw_prefix(start_byte: u8, key_id: u32) -> [u8; NON_RAW_PREFIX_SIZE] {
    let mut bytes = [0u8; NON_RAW_PREFIX_SIZE];
    bytes[0] = start_byte;
    BigEndian::write_u32(&mut bytes[1..NON_RAW_PREFIX_SIZE], key_id);
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tink_prefix() {
        let prefix = output_prefix(OutputPrefixType::Tink, 0x0102_0304).unwrap();
        assert_eq!(prefix, vec![0x01, 0x01, 0x02, 0x03, 0x04]);
        assert_eq!(prefix.len(), prefix_size(OutputPrefixType::Tink).unwrap());
    }

    #[test]
    fn test_legacy_and_crunchy_share_start_byte() {
        let legacy = output_prefix(OutputPrefixType::Legacy, 7).unwrap();
        let crunchy = output_prefix(OutputPrefixType::Crunchy, 7).unwrap();
        assert_eq!(legacy, crunchy);
        assert_eq!(legacy, vec![0x00, 0, 0, 0, 7]);
    }

    #[test]
    fn test_raw_prefix_is_empty() {
        assert!(output_prefix(OutputPrefixType::Raw, 99).unwrap().is_empty());
        assert_eq!(prefix_size(OutputPrefixType::Raw).unwrap(), RAW_PREFIX_SIZE);
    }

    #[test]
    fn test_unknown_prefix_rejected() {
        assert!(output_prefix(OutputPrefixType::UnknownPrefix, 1).is_err());
        assert!(prefix_size(OutputPrefixType::UnknownPrefix).is_err());
    }
}
