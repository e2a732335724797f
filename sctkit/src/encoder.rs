//! Encoder trait, the reverse direction of [`crate::decoder::Decoder`].

/// Encoder trait for converting from type `T` to type `E`.
///
/// Implemented by the source type `T`. The destination type must implement
/// `EncodableTo<T>`.
///
/// ```no_run
/// use sctkit::encoder::{EncodableTo, Encoder};
///
/// struct Record(u8);
///
/// impl EncodableTo<Record> for Vec<u8> {}
///
/// impl Encoder<Record, Vec<u8>> for Record {
///     type Error = std::convert::Infallible;
///
///     fn encode(&self) -> Result<Vec<u8>, Self::Error> {
///         Ok(vec![self.0])
///     }
/// }
/// ```
pub trait Encoder<T, E: EncodableTo<T>> {
    /// The error type returned when encoding fails.
    type Error;

    /// Encodes `self` into type `E`.
    ///
    /// # Errors
    ///
    /// Returns an error if `self` cannot be represented as `E`.
    fn encode(&self) -> Result<E, Self::Error>;
}

/// Marker trait indicating that type `E` can be encoded from type `T`.
pub trait EncodableTo<T> {}
