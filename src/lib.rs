//! Derive a TLS client identity from a PEM-armoured certificate bundle.
//!
//! A bundle may hold multiple certificates and an optionally encrypted
//! private key (legacy `DEK-Info` encryption or a PKCS#8 v2 container).
//! Scanning preserves each block's original byte framing so unusual headers
//! and algorithm parameters survive reassembly; encrypted key blocks are
//! replaced by freshly encoded plaintext blocks; and the resulting
//! chain/key pair is proven cryptographically consistent before the
//! caller's connection options are touched. The first certificate block in
//! byte order also yields the canonical X.509 username used by
//! certificate-based authentication.
//!
//! The usual entry point is [`apply_secrets`], which installs the derived
//! identity on a caller-owned [`ConnectionOptions`]. Callers that only need
//! the identity itself can use [`ClientIdentity::from_pem_bundle`].

mod bundle;
mod error;
mod identity;
mod options;
mod secrets;
mod subject;

pub use error::IdentityError;
pub use identity::{ClientIdentity, TlsKeypair};
pub use options::{AuthOptions, ConnectionOptions, SecretBundle, TlsOptions, X509_MECHANISM};
pub use secrets::apply_secrets;
pub use subject::reverse_rdn_order;
