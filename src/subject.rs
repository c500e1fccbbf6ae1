//! Subject distinguished-name rendering and username transformation

use der::asn1::{Ia5StringRef, PrintableStringRef, Utf8StringRef};
use der::Encode;
use x509_cert::attr::AttributeTypeAndValue;
use x509_cert::name::Name;

// Common OIDs for DN components
const OID_CN: &str = "2.5.4.3"; // commonName
const OID_O: &str = "2.5.4.10"; // organizationName
const OID_OU: &str = "2.5.4.11"; // organizationalUnitName
const OID_C: &str = "2.5.4.6"; // countryName
const OID_ST: &str = "2.5.4.8"; // stateOrProvinceName
const OID_L: &str = "2.5.4.7"; // localityName

/// Render a subject DN the way standard certificate decoders print it:
/// comma-separated `ATTR=value` pairs with the last RDN of the encoded
/// sequence first, attributes of a multi-valued RDN joined with `+`.
pub(crate) fn render_subject(name: &Name) -> String {
    let mut rdns = Vec::new();
    for rdn in name.0.iter().rev() {
        let attributes: Vec<String> = rdn.0.iter().map(render_attribute).collect();
        rdns.push(attributes.join("+"));
    }
    rdns.join(",")
}

fn render_attribute(atv: &AttributeTypeAndValue) -> String {
    let oid = atv.oid.to_string();
    let attribute = match oid.as_str() {
        OID_CN => "CN",
        OID_O => "O",
        OID_OU => "OU",
        OID_C => "C",
        OID_ST => "ST",
        OID_L => "L",
        _ => oid.as_str(),
    };

    // Try the ASN.1 string types certificates actually use; anything else
    // renders as the hex of its DER encoding.
    let value = if let Ok(printable) = PrintableStringRef::try_from(&atv.value) {
        printable.to_string()
    } else if let Ok(utf8) = Utf8StringRef::try_from(&atv.value) {
        utf8.to_string()
    } else if let Ok(ia5) = Ia5StringRef::try_from(&atv.value) {
        ia5.to_string()
    } else {
        atv.value
            .to_der()
            .map(|der| format!("#{}", hex::encode(der)))
            .unwrap_or_default()
    };

    format!("{attribute}={value}")
}

/// Reverse the comma-separated RDN ordering of a subject string.
///
/// Certificate decoders render the subject with RDN pairs in the reverse of
/// the order certificate-based authentication usernames use, so flipping
/// the components yields the canonical username. Input without commas
/// passes through unchanged; this function never fails.
pub fn reverse_rdn_order(subject: &str) -> String {
    let mut pairs: Vec<&str> = subject.split(',').collect();
    pairs.reverse();
    pairs.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn reverses_rdn_pairs() {
        assert_eq!(reverse_rdn_order("O=Baz,OU=Bar,CN=Foo"), "CN=Foo,OU=Bar,O=Baz");
    }

    #[test]
    fn passes_unstructured_input_through() {
        assert_eq!(reverse_rdn_order("CN=Foo"), "CN=Foo");
        assert_eq!(reverse_rdn_order(""), "");
        assert_eq!(reverse_rdn_order("no equals sign here"), "no equals sign here");
    }

    proptest! {
        #[test]
        fn reversal_is_an_involution(subject in ".*") {
            prop_assert_eq!(reverse_rdn_order(&reverse_rdn_order(&subject)), subject);
        }
    }
}
