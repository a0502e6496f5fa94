/*!
Key encapsulation mechanism implementations.

This module provides implementations of KEM algorithms.
*/

pub mod kyber;

pub use kyber::{KyberDecapsulator, KyberEncapsulator};
