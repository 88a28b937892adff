//! Route segments that carry a whole serializable value.
//!
//! The value is written as CBOR and then URL-safe base64, so any serde type
//! (the catalog's `FilterState` in particular) can live in a single path segment.

use std::{fmt::Display, str::FromStr};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use serde::{Deserialize, Serialize, de::DeserializeOwned};


#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UrlParam<T>(pub T);

impl<T> From<T> for UrlParam<T> {
    fn from(value: T) -> Self {
        UrlParam(value)
    }
}

#[derive(Debug)]
pub enum UrlParamError {
    Base64(base64::DecodeError),
    Cbor(ciborium::de::Error<std::io::Error>),
}

impl std::fmt::Display for UrlParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base64(err) => write!(f, "url segment is not base64: {}", err),
            Self::Cbor(err) => write!(f, "url segment does not hold a valid state: {}", err),
        }
    }
}

pub fn encode_segment<T: Serialize>(value: &T) -> Option<String> {
    let mut cbor = Vec::new();
    ciborium::into_writer(value, &mut cbor).ok()?;
    Some(URL_SAFE.encode(cbor))
}

pub fn decode_segment<T: DeserializeOwned>(segment: &str) -> Result<T, UrlParamError> {
    let cbor = URL_SAFE.decode(segment.as_bytes()).map_err(UrlParamError::Base64)?;
    ciborium::from_reader(std::io::Cursor::new(cbor)).map_err(UrlParamError::Cbor)
}

// the router needs Display/FromStr to build and match the path segment
impl<T: Serialize> Display for UrlParam<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(segment) = encode_segment(&self.0) {
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl<T: DeserializeOwned> FromStr for UrlParam<T> {
    type Err = UrlParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_segment(s).map(UrlParam)
    }
}
