//! Infrastructure seams: persistence codec and gateway.

pub mod persistence;
