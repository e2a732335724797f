//! Wire decoding of a TLS-encoded SCT list.
//!
//! ```text
//! opaque SerializedSCT<1..2^16-1>;
//! struct {
//!     SerializedSCT sct_list <1..2^16-1>;
//! } SignedCertificateTimestampList;
//! ```
//!
//! Every length is a 2-byte big-endian prefix. The signature of a record
//! has no prefix of its own and runs to the end of the record.

use nom::Parser;
use nom::bytes::complete::take;
use nom::number::complete::{be_u8, be_u16, be_u64};
use sctkit::decoder::{DecodableFrom, Decoder};

use crate::error::{Error, Field, Malformed, Result};
use crate::list::SctList;
use crate::record::{LOG_ID_LENGTH, LogId, Sct, Version};

/// Runs `parser` over `input`, reporting a short read as a truncated `field`.
fn read<'a, O, P>(input: &'a [u8], field: Field, mut parser: P) -> Result<(&'a [u8], O)>
where
    P: Parser<&'a [u8], Output = O, Error = nom::error::Error<&'a [u8]>>,
{
    parser.parse(input).map_err(|_| {
        Error::MalformedInput(Malformed::Truncated {
            field,
            available: input.len(),
        })
    })
}

pub(crate) fn decode_list(input: &[u8]) -> Result<SctList> {
    let (rest, total) = read(input, Field::ListLength, be_u16)?;
    let total = usize::from(total);
    let (rest, mut body) = read(rest, Field::List, take(total))?;
    if !rest.is_empty() {
        return Err(Malformed::TrailingData {
            declared: total,
            remaining: rest.len(),
        }
        .into());
    }

    let mut scts = Vec::new();
    while !body.is_empty() {
        let (rest, length) = read(body, Field::RecordLength, be_u16)?;
        let (rest, record) = read(rest, Field::Record, take(length))?;
        let sct = decode_sct(record)?;
        tracing::trace!(index = scts.len(), length, "decoded SCT record");
        scts.push(sct);
        body = rest;
    }

    tracing::debug!(declared = total, count = scts.len(), "decoded SCT list");
    Ok(SctList::from(scts))
}

/// Decodes one record, without its length prefix.
pub(crate) fn decode_sct(record: &[u8]) -> Result<Sct> {
    let (input, version) = read(record, Field::Version, be_u8)?;
    let (input, log_id) = read(input, Field::LogId, take(LOG_ID_LENGTH))?;
    let (input, timestamp) = read(input, Field::Timestamp, be_u64)?;
    let (input, extensions_length) = read(input, Field::ExtensionsLength, be_u16)?;
    let (signature, extensions) = read(input, Field::Extensions, take(extensions_length))?;

    Ok(Sct::new(
        Version::from(version),
        LogId::try_from(log_id)?,
        timestamp,
        extensions.to_vec(),
        signature.to_vec(),
    ))
}

impl<'a> DecodableFrom<&'a [u8]> for SctList {}

impl<'a> Decoder<&'a [u8], SctList> for &'a [u8] {
    type Error = Error;

    fn decode(&self) -> Result<SctList> {
        decode_list(self)
    }
}

impl DecodableFrom<Vec<u8>> for SctList {}

impl Decoder<Vec<u8>, SctList> for Vec<u8> {
    type Error = Error;

    fn decode(&self) -> Result<SctList> {
        decode_list(self)
    }
}
