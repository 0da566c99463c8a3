//! Common - Wire Codec and Payloads for Lock Proxy Contracts
//!
//! Two independently deployed proxies only interoperate when they agree
//! byte-for-byte on the arguments relayed between them. This package holds
//! that agreement: the variable-length primitives (varint, varbytes, fixed
//! 32-byte integers) and the two payloads built from them.

pub mod codec;
pub mod payload;

pub use codec::{CodecError, CodecResult};
pub use payload::{RegisterAssetPayload, TransferPayload};
