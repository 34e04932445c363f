//! Constants for the two-party key agreement demonstration

/// Private scalar of the first demonstration party
pub const DEMO_PARTY_A_SECRET: u64 = 58;

/// Private scalar of the second demonstration party
pub const DEMO_PARTY_B_SECRET: u64 = 42;

/// Message signed by the first party and verified by the second
pub const DEMO_MESSAGE: &str = "Hello, world!";
