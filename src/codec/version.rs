//! src/codec/version.rs
//! Fixed 4-byte version tuple

use crate::codec::{Codec, DataReader, DataWriter};
use crate::error::{PbeError, Result};
use std::fmt;
use std::str::FromStr;

/// `major.minor.release.build`, one byte each.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionTuple {
    pub major: u8,
    pub minor: u8,
    pub release: u8,
    pub build: u8,
}

impl VersionTuple {
    #[must_use]
    pub const fn new(major: u8, minor: u8, release: u8, build: u8) -> Self {
        Self {
            major,
            minor,
            release,
            build,
        }
    }

    #[must_use]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.major, self.minor, self.release, self.build]
    }
}

impl From<[u8; 4]> for VersionTuple {
    fn from([major, minor, release, build]: [u8; 4]) -> Self {
        Self::new(major, minor, release, build)
    }
}

impl fmt::Display for VersionTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.release, self.build
        )
    }
}

impl FromStr for VersionTuple {
    type Err = PbeError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || PbeError::Decode(format!("not a version tuple: {s:?}"));

        let mut parts = [0u8; 4];
        let mut fields = s.trim().split('.');
        for part in &mut parts {
            *part = fields
                .next()
                .and_then(|f| f.parse().ok())
                .ok_or_else(invalid)?;
        }
        if fields.next().is_some() {
            return Err(invalid());
        }
        Ok(parts.into())
    }
}

/// Codec over a single [`VersionTuple`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VersionCodec {
    version: VersionTuple,
}

impl VersionCodec {
    #[must_use]
    pub const fn new(version: VersionTuple) -> Self {
        Self { version }
    }

    #[must_use]
    pub const fn version(&self) -> VersionTuple {
        self.version
    }
}

impl Codec for VersionCodec {
    fn encode(&self, writer: &mut DataWriter<'_>) -> Result<()> {
        writer.write_bytes(&self.version.to_bytes())
    }

    fn decode(&mut self, reader: &mut DataReader<'_>) -> Result<()> {
        let mut bytes = [0u8; 4];
        reader.read_bytes(&mut bytes)?;
        self.version = bytes.into();
        Ok(())
    }
}
