//! Constants for traditional elliptic-curve schemes

pub mod curves;
pub mod ecdh;
