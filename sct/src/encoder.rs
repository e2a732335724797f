//! Wire encoding of an SCT list, the inverse of [`crate::decoder`].

use sctkit::encoder::{EncodableTo, Encoder};

use crate::error::{Error, Field, Result};
use crate::list::SctList;
use crate::record::Sct;

/// Checks that `length` fits the 2-byte prefix of `field`.
fn u16_length(field: Field, length: usize) -> Result<u16> {
    u16::try_from(length).map_err(|_| Error::EncodingOverflow { field, length })
}

impl EncodableTo<Sct> for Vec<u8> {}

impl Encoder<Sct, Vec<u8>> for Sct {
    type Error = Error;

    /// Serializes the record without its own length prefix.
    fn encode(&self) -> Result<Vec<u8>> {
        let extensions_length = u16_length(Field::Extensions, self.extensions().len())?;

        let mut out = Vec::with_capacity(self.encoded_len());
        out.push(self.version().into());
        out.extend_from_slice(self.log_id().as_bytes());
        out.extend_from_slice(&self.timestamp().to_be_bytes());
        out.extend_from_slice(&extensions_length.to_be_bytes());
        out.extend_from_slice(self.extensions());
        out.extend_from_slice(self.signature());
        Ok(out)
    }
}

impl EncodableTo<SctList> for Vec<u8> {}

impl Encoder<SctList, Vec<u8>> for SctList {
    type Error = Error;

    /// Serializes the list with its total length prefix and no envelope.
    fn encode(&self) -> Result<Vec<u8>> {
        let mut body = Vec::new();
        for sct in self.iter() {
            let record: Vec<u8> = sct.encode()?;
            let length = u16_length(Field::Record, record.len())?;
            body.extend_from_slice(&length.to_be_bytes());
            body.extend_from_slice(&record);
        }
        let total = u16_length(Field::List, body.len())?;

        let mut out = Vec::with_capacity(2 + body.len());
        out.extend_from_slice(&total.to_be_bytes());
        out.extend_from_slice(&body);

        tracing::debug!(count = self.len(), total, "encoded SCT list");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use sctkit::decoder::Decoder;
    use sctkit::encoder::Encoder;

    use super::*;
    use crate::record::{FIXED_HEADER_LENGTH, LOG_ID_LENGTH, LogId, Version};

    fn sct(timestamp: u64, extensions: Vec<u8>, signature: Vec<u8>) -> Sct {
        Sct::new(
            Version::V1,
            LogId::from([0xaa; LOG_ID_LENGTH]),
            timestamp,
            extensions,
            signature,
        )
    }

    fn signature() -> Vec<u8> {
        vec![0x04, 0x03, 0x00, 0x04, 0xbb, 0xbb, 0xbb, 0xbb]
    }

    #[test]
    fn test_encode_sct_layout() {
        let encoded: Vec<u8> = sct(1620000000000, Vec::new(), signature()).encode().unwrap();

        assert_eq!(0, encoded[0]);
        assert_eq!(&[0xaa; 32], &encoded[1..33]);
        assert_eq!(&1620000000000u64.to_be_bytes(), &encoded[33..41]);
        assert_eq!(&[0x00, 0x00], &encoded[41..43]);
        assert_eq!(signature().as_slice(), &encoded[43..]);
    }

    #[test]
    fn test_encode_sct_with_extensions() {
        let encoded: Vec<u8> = sct(1620000000000, vec![0xcc; 4], signature())
            .encode()
            .unwrap();

        assert_eq!(&[0x00, 0x04], &encoded[41..43]);
        assert_eq!(&[0xcc; 4], &encoded[43..47]);
        assert_eq!(signature().as_slice(), &encoded[47..]);
    }

    #[test]
    fn test_encode_unknown_version() {
        let record = Sct::new(
            Version::Unknown(0x2a),
            LogId::from([0x00; LOG_ID_LENGTH]),
            0,
            Vec::new(),
            Vec::new(),
        );

        let encoded: Vec<u8> = record.encode().unwrap();

        assert_eq!(0x2a, encoded[0]);
        assert_eq!(FIXED_HEADER_LENGTH, encoded.len());
    }

    #[test]
    fn test_encode_empty_list() {
        let encoded: Vec<u8> = SctList::default().encode().unwrap();

        assert_eq!(vec![0x00, 0x00], encoded);
    }

    #[test]
    fn test_encode_list_framing() {
        let first = sct(1, Vec::new(), signature());
        let second = sct(2, vec![0xcc; 4], signature());
        let first_len = first.encoded_len();
        let second_len = second.encoded_len();
        let list = SctList::from(vec![first, second]);

        let encoded: Vec<u8> = list.encode().unwrap();

        let total = 2 + first_len + 2 + second_len;
        assert_eq!(total + 2, encoded.len());
        assert_eq!(&(total as u16).to_be_bytes(), &encoded[0..2]);
        assert_eq!(&(first_len as u16).to_be_bytes(), &encoded[2..4]);
        let second_at = 4 + first_len;
        assert_eq!(
            &(second_len as u16).to_be_bytes(),
            &encoded[second_at..second_at + 2]
        );
    }

    #[test]
    fn test_round_trip_preserves_order() {
        // later timestamp first, must not be sorted
        let a = sct(1746057600000, Vec::new(), vec![0x0a]);
        let b = sct(1620000000000, vec![0xcc; 4], vec![0x0b]);
        let list = SctList::from(vec![a.clone(), b.clone()]);

        let encoded: Vec<u8> = list.encode().unwrap();
        let decoded: SctList = encoded.decode().unwrap();

        assert_eq!(vec![a, b], decoded.into_inner());
    }

    #[rstest(extensions, signature, expected_field, expected_length,
        // extensions do not fit their own prefix
        case(vec![0; 65536], vec![], Field::Extensions, 65536),
        // record is one byte over
        case(vec![], vec![0; 65535 - FIXED_HEADER_LENGTH + 1], Field::Record, 65536),
    )]
    fn test_encode_record_overflow(
        extensions: Vec<u8>,
        signature: Vec<u8>,
        expected_field: Field,
        expected_length: usize,
    ) {
        let list = SctList::from(vec![sct(0, extensions, signature)]);

        let result: Result<Vec<u8>> = list.encode();

        assert_eq!(
            Err(Error::EncodingOverflow {
                field: expected_field,
                length: expected_length
            }),
            result
        );
    }

    #[test]
    fn test_encode_list_overflow() {
        // each record fits, together they do not
        let record = sct(0, Vec::new(), vec![0; 40000]);
        let record_len = record.encoded_len();
        let list = SctList::from(vec![record.clone(), record]);

        let result: Result<Vec<u8>> = list.encode();

        assert_eq!(
            Err(Error::EncodingOverflow {
                field: Field::List,
                length: 2 * (2 + record_len)
            }),
            result
        );
    }

    #[test]
    fn test_encode_list_at_limit() {
        // 2 + record == 65535 is the largest list body
        let signature = vec![0; 65535 - 2 - FIXED_HEADER_LENGTH];
        let list = SctList::from(vec![sct(0, Vec::new(), signature)]);

        let encoded: Vec<u8> = list.encode().unwrap();

        assert_eq!(&[0xff, 0xff], &encoded[0..2]);
        let decoded: SctList = encoded.decode().unwrap();
        assert_eq!(list, decoded);
    }
}
