//! Decoder trait for type-safe conversions.
//!
//! The `Decoder` trait converts from a source type `T` to a destination
//! type `D`. It is used throughout sctkit to move between raw bytes, the
//! DER envelope of a certificate extension, and the structured SCT list.
//!
//! # Design Pattern
//!
//! The decoder uses a two-trait pattern:
//!
//! 1. `Decoder<T, D>` - Performs the actual conversion
//! 2. `DecodableFrom<T>` - Marker trait constraining valid conversions
//!
//! # Implementation Guide
//!
//! To add a new decodable type, implement both traits:
//!
//! ```no_run
//! use sctkit::decoder::{Decoder, DecodableFrom};
//!
//! struct Raw(Vec<u8>);
//! struct Version(u8);
//!
//! #[derive(Debug)]
//! struct Truncated;
//!
//! // 1. Mark the destination type as decodable from the source type
//! impl DecodableFrom<Raw> for Version {}
//!
//! // 2. Implement the decoder on the source type
//! impl Decoder<Raw, Version> for Raw {
//!     type Error = Truncated;
//!
//!     fn decode(&self) -> Result<Version, Self::Error> {
//!         self.0.first().copied().map(Version).ok_or(Truncated)
//!     }
//! }
//! ```
//!
//! # Example
//!
//! The `sct` crate implements decoding from byte slices to SCT lists:
//!
//! ```ignore
//! use sctkit::decoder::Decoder;
//! use sct::SctList;
//!
//! let bytes: &[u8] = &[0x00, 0x00]; // empty list
//! let list: SctList = bytes.decode().unwrap();
//! assert!(list.is_empty());
//! ```

/// Decoder trait for converting from type `T` to type `D`.
///
/// This trait is implemented by the source type `T`. The destination type
/// must implement `DecodableFrom<T>`.
///
/// # Type Parameters
///
/// * `T` - The source type (usually `Self`)
/// * `D` - The destination type that can be decoded from `T`
pub trait Decoder<T, D: DecodableFrom<T>> {
    /// The error type returned when decoding fails.
    type Error;

    /// Decodes `self` into type `D`.
    ///
    /// # Errors
    ///
    /// Returns an error if the conversion fails. The specific error
    /// conditions depend on the implementing type.
    fn decode(&self) -> Result<D, Self::Error>;
}

/// Marker trait indicating that type `D` can be decoded from type `T`.
///
/// This trait has no methods. Without it any type could ask to be decoded
/// into any other type; requiring an explicit implementation per pair lets
/// the compiler reject conversions nobody wrote.
///
/// ```no_run
/// use sctkit::decoder::DecodableFrom;
///
/// struct ExtensionValue;
/// struct SignedTimestampList;
///
/// impl DecodableFrom<ExtensionValue> for SignedTimestampList {}
/// ```
pub trait DecodableFrom<T> {}
