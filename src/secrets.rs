//! Applies a decrypted secret bundle to a connection configuration

use tracing::debug;

use crate::error::IdentityError;
use crate::identity::ClientIdentity;
use crate::options::{ConnectionOptions, SecretBundle, X509_MECHANISM};
use crate::subject::reverse_rdn_order;

/// Derive a client identity from the bundle's certificate material and
/// install it on `options`.
///
/// An empty or absent PEM bundle is the common non-certificate deployment
/// and a no-op. Otherwise the identity's keypair is appended to the TLS
/// client certificate list; when the configured mechanism is
/// [`X509_MECHANISM`] (case-insensitive) and no username is set, the
/// username becomes the identity's subject in canonical order. A bundle
/// password unlocks an encrypted private key and is then carried over as
/// the session password.
///
/// # Errors
///
/// Any scanner, decryption, or assembly failure aborts configuration
/// construction and leaves `options` untouched.
pub fn apply_secrets(
    options: &mut ConnectionOptions,
    secrets: &SecretBundle,
) -> Result<(), IdentityError> {
    let pem_bundle = match secrets.pem_bundle.as_deref() {
        Some(bundle) if !bundle.is_empty() => bundle,
        _ => {
            debug!("no client certificate material supplied, leaving connection options as-is");
            return Ok(());
        }
    };

    let identity = ClientIdentity::from_pem_bundle(pem_bundle, secrets.password.as_deref())?;
    debug!(subject = %identity.subject, "derived client certificate identity");

    let certificate_mechanism = options
        .auth
        .mechanism
        .as_deref()
        .is_some_and(|mechanism| mechanism.eq_ignore_ascii_case(X509_MECHANISM));
    if certificate_mechanism && options.auth.username.is_none() {
        options.auth.username = Some(reverse_rdn_order(&identity.subject));
    }
    if let Some(password) = secrets.password.as_deref() {
        if !password.is_empty() {
            options.auth.password = Some(password.to_string());
        }
    }
    options.tls.client_certificates.push(identity.keypair);

    Ok(())
}
