//! JSON interchange form, the shape CT logs return from `add-chain`:
//!
//! ```json
//! {
//!   "sct_version": 0,
//!   "id": "<base64 log ID>",
//!   "timestamp": 1747266466681,
//!   "extensions": "",
//!   "signature": "<base64 digitally-signed blob>"
//! }
//! ```
//!
//! A document is one such object or an array of them.

use std::fmt;

use base64::{Engine, engine::general_purpose::STANDARD};
use serde::de::{MapAccess, SeqAccess, Visitor, value::MapAccessDeserializer};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;
use crate::list::SctList;
use crate::record::{LogId, Sct, Version};

#[derive(Deserialize)]
struct SctFields {
    sct_version: u64,
    id: String,
    timestamp: u64,
    extensions: String,
    signature: String,
}

fn decode_base64(field: &str, value: &str) -> Result<Vec<u8>, Error> {
    STANDARD
        .decode(value)
        .map_err(|e| Error::InvalidRecord(format!("{field} is not valid base64: {e}")))
}

impl TryFrom<SctFields> for Sct {
    type Error = Error;

    fn try_from(fields: SctFields) -> Result<Self, Self::Error> {
        let version = u8::try_from(fields.sct_version).map_err(|_| {
            Error::InvalidRecord(format!(
                "sct_version {} does not fit in 8 bits",
                fields.sct_version
            ))
        })?;
        let log_id = LogId::try_from(decode_base64("id", &fields.id)?.as_slice())?;

        Ok(Sct::new(
            Version::from(version),
            log_id,
            fields.timestamp,
            decode_base64("extensions", &fields.extensions)?,
            decode_base64("signature", &fields.signature)?,
        ))
    }
}

impl Serialize for Sct {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Sct", 5)?;
        state.serialize_field("sct_version", &u8::from(self.version()))?;
        state.serialize_field("id", &STANDARD.encode(self.log_id().as_bytes()))?;
        state.serialize_field("timestamp", &self.timestamp())?;
        state.serialize_field("extensions", &STANDARD.encode(self.extensions()))?;
        state.serialize_field("signature", &STANDARD.encode(self.signature()))?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for Sct {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = SctFields::deserialize(deserializer)?;
        Sct::try_from(fields).map_err(serde::de::Error::custom)
    }
}

impl Serialize for SctList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

struct DocumentVisitor;

impl<'de> Visitor<'de> for DocumentVisitor {
    type Value = SctList;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an SCT object or an array of SCT objects")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut scts = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(sct) = seq.next_element::<Sct>()? {
            scts.push(sct);
        }
        Ok(SctList::from(scts))
    }

    fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let sct = Sct::deserialize(MapAccessDeserializer::new(map))?;
        Ok(SctList::from(vec![sct]))
    }
}

impl<'de> Deserialize<'de> for SctList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DocumentVisitor)
    }
}
