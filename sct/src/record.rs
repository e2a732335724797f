use std::fmt;

use chrono::{DateTime, Utc};

use crate::error::Error;

/*
RFC 6962 Section 3.2
struct {
    Version sct_version;
    LogID id;
    uint64 timestamp;
    CtExtensions extensions;
    digitally-signed struct { ... };
} SignedCertificateTimestamp;

enum { v1(0), (255) } Version;
struct { opaque key_id[32]; } LogID;
opaque CtExtensions<0..2^16-1>;
*/

pub const LOG_ID_LENGTH: usize = 32;

/// Wire size of everything before the extensions bytes:
/// version, log ID, timestamp and the extensions length.
pub const FIXED_HEADER_LENGTH: usize = 1 + LOG_ID_LENGTH + 8 + 2;

const HEX_BYTES_PER_LINE: usize = 16;
const FIELD_INDENT: &str = "                    ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Version {
    V1,
    Unknown(u8),
}

impl From<u8> for Version {
    fn from(value: u8) -> Self {
        match value {
            0 => Version::V1,
            n => Version::Unknown(n),
        }
    }
}

impl From<Version> for u8 {
    fn from(version: Version) -> Self {
        match version {
            Version::V1 => 0,
            Version::Unknown(n) => n,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Version::V1 => write!(f, "v1 (0x0)"),
            Version::Unknown(n) => write!(f, "unknown (0x{n:x})"),
        }
    }
}

/// SHA-256 hash of the log's public key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LogId([u8; LOG_ID_LENGTH]);

impl LogId {
    pub fn as_bytes(&self) -> &[u8; LOG_ID_LENGTH] {
        &self.0
    }
}

impl From<[u8; LOG_ID_LENGTH]> for LogId {
    fn from(value: [u8; LOG_ID_LENGTH]) -> Self {
        LogId(value)
    }
}

impl TryFrom<&[u8]> for LogId {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let bytes = <[u8; LOG_ID_LENGTH]>::try_from(value).map_err(|_| {
            Error::InvalidRecord(format!(
                "log ID must be {LOG_ID_LENGTH} bytes, got {}",
                value.len()
            ))
        })?;
        Ok(LogId(bytes))
    }
}

impl fmt::Display for LogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", colon_hex(&self.0))
    }
}

/// One Signed Certificate Timestamp.
///
/// The signature is kept as the opaque `digitally-signed` blob: hash
/// algorithm, signature algorithm, 2-byte length and signature bytes. It is
/// bounded on the wire only by the enclosing record length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sct {
    version: Version,
    log_id: LogId,
    timestamp: u64,
    extensions: Vec<u8>,
    signature: Vec<u8>,
}

impl Sct {
    pub fn new(
        version: Version,
        log_id: LogId,
        timestamp: u64,
        extensions: Vec<u8>,
        signature: Vec<u8>,
    ) -> Self {
        Sct {
            version,
            log_id,
            timestamp,
            extensions,
            signature,
        }
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn log_id(&self) -> &LogId {
        &self.log_id
    }

    /// Milliseconds since the Unix epoch.
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    pub fn extensions(&self) -> &[u8] {
        &self.extensions
    }

    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// Length of this record on the wire, without its own length prefix.
    pub fn encoded_len(&self) -> usize {
        FIXED_HEADER_LENGTH + self.extensions.len() + self.signature.len()
    }

    /// OpenSSL name of the signature algorithm, read from the first two
    /// bytes of the signature blob. Display only.
    pub fn signature_algorithm_name(&self) -> Option<&'static str> {
        match self.signature.as_slice() {
            [hash, signature, ..] => signature_algorithm_name(*hash, *signature),
            _ => None,
        }
    }

    /// The bytes after the 4-byte `digitally-signed` header, when that
    /// header's length agrees with the blob.
    fn signature_value(&self) -> Option<&[u8]> {
        match self.signature.as_slice() {
            [_, _, hi, lo, rest @ ..]
                if usize::from(u16::from_be_bytes([*hi, *lo])) == rest.len() =>
            {
                Some(rest)
            }
            _ => None,
        }
    }
}

fn signature_algorithm_name(hash: u8, signature: u8) -> Option<&'static str> {
    // RFC 5246 Section 7.4.1.4.1
    match (hash, signature) {
        (1, 1) => Some("md5WithRSAEncryption"),
        (2, 1) => Some("sha1WithRSAEncryption"),
        (3, 1) => Some("sha224WithRSAEncryption"),
        (4, 1) => Some("sha256WithRSAEncryption"),
        (5, 1) => Some("sha384WithRSAEncryption"),
        (6, 1) => Some("sha512WithRSAEncryption"),
        (2, 2) => Some("dsaWithSHA1"),
        (3, 2) => Some("dsa_with_SHA224"),
        (4, 2) => Some("dsa_with_SHA256"),
        (2, 3) => Some("ecdsa-with-SHA1"),
        (3, 3) => Some("ecdsa-with-SHA224"),
        (4, 3) => Some("ecdsa-with-SHA256"),
        (5, 3) => Some("ecdsa-with-SHA384"),
        (6, 3) => Some("ecdsa-with-SHA512"),
        _ => None,
    }
}

fn colon_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(":")
}

// OpenSSL-style hex block: 16 bytes per line, continuation lines indented
// under the field value and earlier lines ending with ':'.
fn write_hex_block(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    let lines = bytes
        .chunks(HEX_BYTES_PER_LINE)
        .map(colon_hex)
        .collect::<Vec<_>>();
    writeln!(f, "{}", lines.join(&format!(":\n{FIELD_INDENT}")))
}

fn format_timestamp(timestamp: u64) -> String {
    i64::try_from(timestamp)
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|t| t.format("%b %e %H:%M:%S%.3f %Y GMT").to_string())
        .unwrap_or_else(|| format!("{timestamp} (out of range)"))
}

impl fmt::Display for Sct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    Signed Certificate Timestamp:")?;
        writeln!(f, "        Version   : {}", self.version)?;
        write!(f, "        Log ID    : ")?;
        write_hex_block(f, self.log_id.as_bytes())?;
        writeln!(f, "        Timestamp : {}", format_timestamp(self.timestamp))?;
        if self.extensions.is_empty() {
            writeln!(f, "        Extensions: none")?;
        } else {
            write!(f, "        Extensions: ")?;
            write_hex_block(f, &self.extensions)?;
        }
        match (self.signature_algorithm_name(), self.signature_value()) {
            (Some(name), Some(value)) => {
                writeln!(f, "        Signature : {name}")?;
                write!(f, "{FIELD_INDENT}")?;
                write_hex_block(f, value)
            }
            _ => {
                write!(f, "        Signature : ")?;
                write_hex_block(f, &self.signature)
            }
        }
    }
}
