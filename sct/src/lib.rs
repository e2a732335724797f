//! # sct
//!
//! Codec for the Signed Certificate Timestamp list carried in X.509
//! certificates (RFC 6962 Section 3.3).
//!
//! The list is a TLS-style structure of nested 2-byte length prefixes:
//!
//! ```text
//! list length (2) | record length (2) | record | record length (2) | record ...
//! record = version (1) | log ID (32) | timestamp (8)
//!        | extensions length (2) | extensions | signature (rest of record)
//! ```
//!
//! [`decode`] and [`encode`] are exact inverses for every list whose lengths
//! fit their 16-bit prefixes. Inside a certificate the list is wrapped in a
//! DER OCTET STRING; [`decode_extension`] and `encode(list, true)` handle
//! that envelope.
//!
//! ```
//! use sct::{LogId, Sct, SctList, Version};
//!
//! let sct = Sct::new(
//!     Version::V1,
//!     LogId::from([0xaa; 32]),
//!     1746057600000,
//!     Vec::new(),
//!     vec![0x04, 0x03, 0x00, 0x01, 0xbb],
//! );
//! let list = SctList::from(vec![sct]);
//!
//! let bytes = sct::encode(&list, false).unwrap();
//! assert_eq!(list, sct::decode(&bytes).unwrap());
//! ```

#![forbid(unsafe_code)]

use der::OctetString;
use sctkit::decoder::Decoder;
use sctkit::encoder::Encoder;

mod decoder;
mod encoder;
pub mod error;
mod json;
mod list;
mod record;

pub use error::{Error, Field, Malformed, Result};
pub use list::SctList;
pub use record::{FIXED_HEADER_LENGTH, LOG_ID_LENGTH, LogId, Sct, Version};

/// Extension OID of the SCT list embedded in a precertificate-derived
/// certificate.
pub const PRECERT_SCT_LIST_OID: &str = "1.3.6.1.4.1.11129.2.4.2";

/// Extension OID of the SCT list delivered alongside a final certificate.
pub const CERT_SCT_LIST_OID: &str = "1.3.6.1.4.1.11129.2.4.5";

/// Decodes a raw SCT list, already taken out of any ASN.1 envelope.
///
/// # Errors
///
/// [`Error::MalformedInput`] when a length prefix runs past the buffer, the
/// records do not add up to the declared list length, or bytes follow the
/// list.
pub fn decode(buffer: &[u8]) -> Result<SctList> {
    buffer.decode()
}

/// Unwraps the DER OCTET STRING of an extension value and decodes the
/// SCT list inside it.
pub fn decode_extension(value: &[u8]) -> Result<SctList> {
    let octets: OctetString = value.decode()?;
    decode(octets.as_bytes())
}

/// Encodes `list`, optionally wrapped in a DER OCTET STRING ready to be
/// embedded as an extension value.
///
/// # Errors
///
/// [`Error::EncodingOverflow`] when the extensions, a record or the whole
/// list is longer than 65535 bytes.
pub fn encode(list: &SctList, wrap_octet_string: bool) -> Result<Vec<u8>> {
    let raw: Vec<u8> = list.encode()?;
    if !wrap_octet_string {
        return Ok(raw);
    }
    Ok(OctetString::from(raw).encode()?)
}

/// Builds the line OpenSSL accepts in an extensions section to embed the
/// raw list `bytes` under `oid`.
pub fn openssl_config_line(oid: &str, bytes: &[u8]) -> String {
    let hex = bytes.iter().map(|b| format!("{:02x}", b)).collect::<String>();
    format!("{oid} = critical,ASN1:FORMAT:HEX,OCTETSTRING:{hex}")
}
