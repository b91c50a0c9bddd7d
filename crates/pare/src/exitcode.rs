//! Process exit codes.
//!
//! `1` is reserved for "the code does not exist" so scripts can test for it.
//! Failures use the BSD sysexits.h values.

/// Successful termination
pub const OK: u8 = 0;

/// Shortcode does not exist (`meta`, or `delete --fail-no-exist`)
pub const NOEXIST: u8 = 1;

/// Requested shortcode is already taken
pub const CONFLICT: u8 = 3;

/// Data format error (undecodable response, unencodable output)
pub const DATAERR: u8 = 65;

/// Service unavailable (connection or transport failure)
pub const UNAVAILABLE: u8 = 69;

/// Input/output error
pub const IOERR: u8 = 74;

/// Remote error in protocol (unexpected HTTP status)
pub const PROTOCOL: u8 = 76;

/// Configuration error
pub const CONFIG: u8 = 78;
