//! Client identity assembly
//!
//! Joins the scanned certificate and key spans into one keypair, proves the
//! private key matches the leaf certificate's public key, and decodes the
//! first certificate's subject.

use der::Decode;
use rustls::crypto::ring;
use rustls::pki_types::{
    PrivateKeyDer, PrivatePkcs1KeyDer, PrivatePkcs8KeyDer, PrivateSec1KeyDer,
};
use rustls::sign::CertifiedKey;
use x509_cert::Certificate;

use crate::bundle::{scan_bundle, CertificateMaterial};
use crate::error::IdentityError;
use crate::subject;

/// A client certificate chain and private key, both PEM-framed exactly as
/// the source bundle supplied them (a decrypted key carries freshly encoded
/// framing under its original tag).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsKeypair {
    /// Concatenated `CERTIFICATE` blocks, newline-joined, in bundle order.
    pub certificate_chain: Vec<u8>,
    /// The private-key block(s), newline-joined.
    pub private_key: Vec<u8>,
}

/// The derived identity: a usable TLS keypair plus the leaf certificate's
/// subject distinguished name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIdentity {
    /// Keypair to present during the TLS handshake.
    pub keypair: TlsKeypair,
    /// Subject of the first certificate block in bundle byte order,
    /// rendered with RDNs in the order standard decoders produce; see
    /// [`crate::reverse_rdn_order`] for the username form.
    pub subject: String,
}

impl ClientIdentity {
    /// Derive an identity from a PEM bundle, decrypting the private key
    /// with `password` when it is encrypted.
    ///
    /// # Errors
    ///
    /// [`IdentityError::InputFormat`] when the bundle lacks a certificate
    /// or private-key block, [`IdentityError::Credential`] for missing or
    /// wrong passwords, and [`IdentityError::Crypto`] for malformed or
    /// mismatched key material.
    pub fn from_pem_bundle(bundle: &[u8], password: Option<&str>) -> Result<Self, IdentityError> {
        let material = scan_bundle(bundle, password)?;
        Self::from_material(material)
    }

    pub(crate) fn from_material(material: CertificateMaterial<'_>) -> Result<Self, IdentityError> {
        if material.certificate_spans.is_empty() {
            return Err(IdentityError::InputFormat("missing certificate".into()));
        }
        if material.key_spans.is_empty() {
            return Err(IdentityError::InputFormat("missing private key".into()));
        }

        let keypair = TlsKeypair {
            certificate_chain: join_spans(material.certificate_spans.iter().copied()),
            private_key: join_spans(material.key_spans.iter().map(|span| span.as_ref())),
        };
        keypair.validate()?;

        // The scanner records the first certificate's payload whenever it
        // records its span, so absence here means the bookkeeping broke.
        let leaf = material.first_certificate.ok_or_else(|| {
            IdentityError::InputFormat("certificate spans recorded without a leaf payload".into())
        })?;
        let certificate = Certificate::from_der(&leaf)
            .map_err(|e| IdentityError::Crypto(format!("failed to decode leaf certificate: {e}")))?;
        let subject = subject::render_subject(&certificate.tbs_certificate.subject);

        Ok(Self { keypair, subject })
    }
}

impl TlsKeypair {
    /// Parse both PEM buffers and prove the private key belongs to the leaf
    /// certificate, the check a TLS stack performs when loading a keypair.
    fn validate(&self) -> Result<(), IdentityError> {
        let mut chain_reader = self.certificate_chain.as_slice();
        let chain = rustls_pemfile::certs(&mut chain_reader)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                IdentityError::Crypto(format!("failed to parse certificate chain: {e}"))
            })?;
        let key = first_key_der(&self.private_key)?;

        CertifiedKey::from_der(chain, key, &ring::default_provider()).map_err(|e| {
            IdentityError::Crypto(format!(
                "private key does not form a usable keypair with the certificate: {e}"
            ))
        })?;
        Ok(())
    }
}

/// Map the first private-key block to its DER flavor by declared tag, the
/// way TLS keypair loaders do. A decrypted PKCS#8 block keeps its original
/// `ENCRYPTED PRIVATE KEY` tag but holds plaintext `PrivateKeyInfo` DER,
/// so anything that is not PKCS#1 or SEC1 is treated as PKCS#8.
fn first_key_der(key_pem: &[u8]) -> Result<PrivateKeyDer<'static>, IdentityError> {
    let blocks = pem::parse_many(key_pem)
        .map_err(|e| IdentityError::Crypto(format!("failed to parse private key block: {e}")))?;
    let block = blocks
        .into_iter()
        .find(|block| block.tag().ends_with("PRIVATE KEY"))
        .ok_or_else(|| IdentityError::InputFormat("missing private key".into()))?;

    let tag = block.tag().to_string();
    let der = block.into_contents();
    Ok(match tag.as_str() {
        "RSA PRIVATE KEY" => PrivateKeyDer::Pkcs1(PrivatePkcs1KeyDer::from(der)),
        "EC PRIVATE KEY" => PrivateKeyDer::Sec1(PrivateSec1KeyDer::from(der)),
        _ => PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(der)),
    })
}

fn join_spans<'a>(spans: impl Iterator<Item = &'a [u8]>) -> Vec<u8> {
    let mut joined = Vec::new();
    for (index, span) in spans.enumerate() {
        if index > 0 {
            joined.push(b'\n');
        }
        joined.extend_from_slice(span);
    }
    joined
}
