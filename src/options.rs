//! Caller-owned connection configuration and the secret bundle shape
//!
//! These mirror the configuration object this subsystem is asked to
//! mutate. The surrounding driver plumbing owns them; nothing here is
//! retained between invocations.

use crate::identity::TlsKeypair;

/// Authentication mechanism whose username derives from the client
/// certificate subject. Compared case-insensitively.
pub const X509_MECHANISM: &str = "MONGODB-X509";

/// Mutable connection configuration handed in by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionOptions {
    /// TLS settings, including the client certificate list.
    pub tls: TlsOptions,
    /// Authentication settings.
    pub auth: AuthOptions,
}

/// TLS settings relevant to client-certificate authentication.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TlsOptions {
    /// Client keypairs presented during the TLS handshake.
    pub client_certificates: Vec<TlsKeypair>,
}

/// Authentication settings on the connection configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthOptions {
    /// Configured authentication mechanism name, e.g. [`X509_MECHANISM`].
    pub mechanism: Option<String>,
    /// Username; left alone when already configured.
    pub username: Option<String>,
    /// Session password.
    pub password: Option<String>,
}

/// Decrypted secrets supplied alongside the connection configuration.
///
/// The password, when present, unlocks an encrypted private key and is then
/// carried over as the session password.
#[derive(Debug, Clone, Default)]
pub struct SecretBundle {
    /// Optional passphrase for the bundle's private key.
    pub password: Option<String>,
    /// PEM-armoured certificate and key material. Empty or absent means the
    /// deployment does not use certificate authentication.
    pub pem_bundle: Option<Vec<u8>>,
}
