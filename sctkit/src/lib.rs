//! # sctkit
//!
//! Core traits for encoding and decoding in the sctkit Certificate
//! Transparency toolkit.
//!
//! This crate defines the `Decoder` and `Encoder` traits that every
//! conversion in the workspace goes through.
//!
//! ## Overview
//!
//! Decoding an SCT list out of a certificate extension flows like this:
//! ```text
//! Vec<u8> → OctetString → SctList
//! ```
//!
//! Each step uses the `Decoder` trait to convert from one type to the next,
//! and the `Encoder` trait to convert in the reverse direction.
//!
//! ## Type Safety
//!
//! The traits use marker traits (`DecodableFrom` and `EncodableTo`) so that
//! only conversions that were explicitly declared can be requested.
//!
//! ## Example
//!
//! ```ignore
//! use sctkit::decoder::Decoder;
//! use sctkit::encoder::Encoder;
//! use der::OctetString;
//! use sct::SctList;
//!
//! let octets: OctetString = extension_value.decode()?;
//! let list: SctList = octets.as_bytes().decode()?;
//!
//! let raw: Vec<u8> = list.encode()?;
//! ```

#![forbid(unsafe_code)]

pub mod decoder;
pub mod encoder;
