/*!
Protocol buffer messages crossing the key manager boundary.

`KeyTemplate` and `KeyData` are the envelope every caller sees; the key
messages in `keys` are the algorithm-specific payloads carried in their
`value` fields.
*/

pub mod keys;
pub mod tink;

pub use tink::{KeyData, KeyMaterialType, KeyTemplate, OutputPrefixType};
