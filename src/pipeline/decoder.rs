use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    #[error("empty seed")]
    EmptySeed,
    #[error("payload is not valid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("decoded payload is not valid UTF-8")]
    InvalidUtf8,
}

/// Turns the routing page's encoded payload back into a source URL.
///
/// The scheme is chosen by the upstream site and changes from time to time,
/// so the resolver holds it behind this trait instead of hard-wiring it.
pub trait TokenDecoder: Send + Sync {
    fn decode(&self, encoded: &str, seed: &str) -> Result<String, DecodeError>;
}

/// Hex payload XOR-ed byte by byte with the cycled seed.
#[derive(Debug, Default, Clone, Copy)]
pub struct HexXorDecoder;

impl HexXorDecoder {
    /// Inverse of [`TokenDecoder::decode`], mirroring what the site does.
    pub fn encode(plain: &str, seed: &str) -> Result<String, DecodeError> {
        if seed.is_empty() {
            return Err(DecodeError::EmptySeed);
        }
        Ok(hex::encode(xor_with_seed(plain.as_bytes(), seed.as_bytes())))
    }
}

impl TokenDecoder for HexXorDecoder {
    fn decode(&self, encoded: &str, seed: &str) -> Result<String, DecodeError> {
        if seed.is_empty() {
            return Err(DecodeError::EmptySeed);
        }
        let bytes = hex::decode(encoded.trim())?;
        String::from_utf8(xor_with_seed(&bytes, seed.as_bytes()))
            .map_err(|_| DecodeError::InvalidUtf8)
    }
}

fn xor_with_seed(data: &[u8], seed: &[u8]) -> Vec<u8> {
    data.iter()
        .zip(seed.iter().cycle())
        .map(|(b, k)| b ^ k)
        .collect()
}
