/*!
Primitive kind marker.

Every primitive interface the registry can hand out implements `Primitive`
on its trait object type, so the kind is fixed at compile time by the type
the caller asks for.
*/

use crate::core::crypto::traits::{
    Aead, KemDecapsulate, KemEncapsulate, PublicKeySign, PublicKeyVerify,
};
use crate::core::crypto::types::algorithms::PrimitiveKind;

/// A primitive interface that key managers can be registered for
pub trait Primitive: Send + Sync + 'static {
    /// The kind tag the registry stores for managers of this primitive
    const KIND: PrimitiveKind;
}

impl Primitive for dyn Aead {
    const KIND: PrimitiveKind = PrimitiveKind::Aead;
}

impl Primitive for dyn PublicKeySign {
    const KIND: PrimitiveKind = PrimitiveKind::PublicKeySign;
}

impl Primitive for dyn PublicKeyVerify {
    const KIND: PrimitiveKind = PrimitiveKind::PublicKeyVerify;
}

impl Primitive for dyn KemDecapsulate {
    const KIND: PrimitiveKind = PrimitiveKind::KemDecapsulate;
}

impl Primitive for dyn KemEncapsulate {
    const KIND: PrimitiveKind = PrimitiveKind::KemEncapsulate;
}
