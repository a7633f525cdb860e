//! Binary framers for the two wire blobs a U2F device produces

pub mod registration;
pub mod signature;
