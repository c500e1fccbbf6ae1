//! Error types for identity derivation

use thiserror::Error;

/// Errors produced while deriving a client identity from a PEM bundle.
///
/// Every variant is terminal for the configuration-build step: there is no
/// partial identity and no retry at this layer.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// The bundle is structurally unusable: a required block is missing, or
    /// scan bookkeeping was violated. The caller must fix the supplied
    /// bundle.
    #[error("invalid certificate bundle: {0}")]
    InputFormat(String),

    /// A key block is encrypted but no password was given, or the supplied
    /// password is wrong.
    #[error("credential error: {0}")]
    Credential(String),

    /// A malformed encrypted container, malformed DER payload, or a private
    /// key that does not match the certificate's public key.
    #[error("cryptographic failure: {0}")]
    Crypto(String),
}
