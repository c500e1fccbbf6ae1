//! PEM bundle machinery
//!
//! Splits a byte buffer into classified PEM blocks while preserving each
//! block's original byte span, and decrypts encrypted private-key blocks in
//! place of their source spans.

mod decrypt;
mod scanner;

pub(crate) use scanner::{scan_bundle, CertificateMaterial};
