//! src/codec/raw.rs
//! Opaque byte payload: encodes its bytes as-is and decodes whatever remains

use crate::codec::{Codec, DataReader, DataWriter};
use crate::error::Result;

/// The whole plaintext as one blob, with no length prefix.
///
/// Moves decrypted bytes between files without knowing their structure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPayload {
    bytes: Vec<u8>,
}

impl RawPayload {
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl Codec for RawPayload {
    fn encode(&self, writer: &mut DataWriter<'_>) -> Result<()> {
        writer.write_bytes(&self.bytes)
    }

    fn decode(&mut self, reader: &mut DataReader<'_>) -> Result<()> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        self.bytes = bytes;
        Ok(())
    }
}
