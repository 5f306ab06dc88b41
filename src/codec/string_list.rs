//! src/codec/string_list.rs
//! Ordered list of strings: a one-byte count, then each string as `utf`

use crate::codec::{Codec, DataReader, DataWriter};
use crate::consts::MAX_STRING_LIST_LEN;
use crate::error::{PbeError, Result};

/// Strings are stored verbatim. Lists longer than 255 entries cannot be encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringListCodec {
    strings: Vec<String>,
}

impl StringListCodec {
    #[must_use]
    pub fn new(strings: Vec<String>) -> Self {
        Self { strings }
    }

    #[must_use]
    pub fn strings(&self) -> &[String] {
        &self.strings
    }

    #[must_use]
    pub fn into_strings(self) -> Vec<String> {
        self.strings
    }
}

impl<S: Into<String>> FromIterator<S> for StringListCodec {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

impl Codec for StringListCodec {
    fn encode(&self, writer: &mut DataWriter<'_>) -> Result<()> {
        let count = u8::try_from(self.strings.len()).map_err(|_| {
            PbeError::Encode(format!(
                "{} strings exceed the {MAX_STRING_LIST_LEN}-entry limit",
                self.strings.len()
            ))
        })?;

        writer.write_u8(count)?;
        for s in &self.strings {
            writer.write_utf(s)?;
        }
        Ok(())
    }

    fn decode(&mut self, reader: &mut DataReader<'_>) -> Result<()> {
        let count = usize::from(reader.read_u8()?);
        let mut strings = Vec::with_capacity(count);
        for _ in 0..count {
            strings.push(reader.read_utf()?);
        }
        self.strings = strings;
        Ok(())
    }
}
