//! Just enough DER to carry an SCT list inside a certificate extension.
//!
//! The extension value of `1.3.6.1.4.1.11129.2.4.2` is an OCTET STRING whose
//! payload is the TLS-encoded SCT list. This crate unwraps that envelope and
//! builds it again; it does not attempt general BER/DER decoding.

use nom::{IResult, Parser};
use sctkit::decoder::{DecodableFrom, Decoder};
use sctkit::encoder::{EncodableTo, Encoder};

pub mod error;

use error::Error;

pub const TAG_OCTET_STRING: u8 = 0x04;

// Long-form lengths wider than this do not fit in u64.
const MAX_LENGTH_OCTETS: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    OctetString,
    Other(u8),
}

impl From<u8> for Tag {
    fn from(value: u8) -> Self {
        match value {
            TAG_OCTET_STRING => Tag::OctetString,
            _ => Tag::Other(value),
        }
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::OctetString => TAG_OCTET_STRING,
            Tag::Other(n) => n,
        }
    }
}

/// A single primitive TLV. Constructed values are kept as raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tlv {
    tag: Tag,
    value: Vec<u8>,
}

impl Tlv {
    pub fn parse(input: &[u8]) -> IResult<&[u8], Tlv> {
        let (input, tag) = parse_tag(input)?;
        let (input, length) = parse_length(input)?;
        let (input, data) = nom::bytes::complete::take(length).parse(input)?;

        Ok((
            input,
            Tlv {
                tag,
                value: data.to_vec(),
            },
        ))
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }

    pub fn length(&self) -> usize {
        self.value.len()
    }
}

fn parse_tag(input: &[u8]) -> IResult<&[u8], Tag> {
    let (input, n) = nom::number::complete::be_u8(input)?;
    Ok((input, Tag::from(n)))
}

fn parse_length(input: &[u8]) -> IResult<&[u8], u64> {
    let (rest, n) = nom::number::complete::be_u8(input)?;
    if n & 0x80 == 0x80 {
        // long form
        // The low 7 bits give the number of length octets that follow.
        let octets = n & 0x7f;
        if octets == 0 {
            // 0x80 is the BER indefinite form, which DER forbids.
            return Err(nom::Err::Failure(nom::error::Error::new(
                input,
                nom::error::ErrorKind::LengthValue,
            )));
        }
        if octets > MAX_LENGTH_OCTETS {
            return Err(nom::Err::Failure(nom::error::Error::new(
                input,
                nom::error::ErrorKind::TooLarge,
            )));
        }
        let (rest, bs) = nom::bytes::complete::take(octets).parse(rest)?;
        let n = bs.iter().fold(0u64, |n, &b| (n << 8) | u64::from(b));
        return Ok((rest, n));
    }
    // short form: 0-127
    Ok((rest, u64::from(n)))
}

/// Encodes `length` as a DER length field.
///
/// Short form below 128, otherwise `0x80 | n` followed by the minimal
/// `n`-byte big-endian length.
pub fn encode_length(length: usize) -> Vec<u8> {
    if length < 0x80 {
        return vec![length as u8];
    }
    let bytes = (length as u64).to_be_bytes();
    let skip = bytes.iter().take_while(|&&b| b == 0).count();
    let significant = &bytes[skip..];

    let mut out = Vec::with_capacity(1 + significant.len());
    out.push(0x80 | significant.len() as u8);
    out.extend_from_slice(significant);
    out
}

/// Payload of a DER OCTET STRING.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OctetString {
    inner: Vec<u8>,
}

impl OctetString {
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.inner
    }
}

impl From<Vec<u8>> for OctetString {
    fn from(inner: Vec<u8>) -> Self {
        OctetString { inner }
    }
}

impl From<&[u8]> for OctetString {
    fn from(value: &[u8]) -> Self {
        OctetString {
            inner: value.to_vec(),
        }
    }
}

impl<'a> DecodableFrom<&'a [u8]> for OctetString {}

impl<'a> Decoder<&'a [u8], OctetString> for &'a [u8] {
    type Error = Error;

    fn decode(&self) -> Result<OctetString, Self::Error> {
        let (rest, tlv) = Tlv::parse(self)?;
        if tlv.tag() != Tag::OctetString {
            return Err(Error::UnexpectedTag {
                expected: TAG_OCTET_STRING,
                actual: tlv.tag().into(),
            });
        }
        if !rest.is_empty() {
            return Err(Error::TrailingData(rest.len()));
        }
        tracing::trace!(length = tlv.length(), "unwrapped OCTET STRING");
        Ok(OctetString { inner: tlv.value })
    }
}

impl DecodableFrom<Vec<u8>> for OctetString {}

impl Decoder<Vec<u8>, OctetString> for Vec<u8> {
    type Error = Error;

    fn decode(&self) -> Result<OctetString, Self::Error> {
        let bytes: &[u8] = self;
        bytes.decode()
    }
}

impl EncodableTo<OctetString> for Vec<u8> {}

impl Encoder<OctetString, Vec<u8>> for OctetString {
    type Error = Error;

    fn encode(&self) -> Result<Vec<u8>, Self::Error> {
        let length = encode_length(self.inner.len());
        let mut out = Vec::with_capacity(1 + length.len() + self.inner.len());
        out.push(TAG_OCTET_STRING);
        out.extend_from_slice(&length);
        out.extend_from_slice(&self.inner);
        Ok(out)
    }
}
