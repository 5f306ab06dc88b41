//! # Stream Session
//!
//! Opens the target file, attaches a freshly derived cipher handle, and drives a
//! caller's [`Codec`] over the plaintext side of the stream.
//!
//! A session holds only configuration (seed, algorithm, options). The codec is
//! borrowed per call, so one session can serve any number of codecs and threads.
//!
//! # Layering
//!
//! ```text
//! encrypt:  Codec -> DataWriter -> CipherWriter -> [header] -> BufWriter -> File
//! decrypt:  Codec <- DataReader <- CipherReader <- [header] <- BufReader <- File
//! ```

use crate::aliases::PasswordString;
use crate::builders::KeyDerivation;
use crate::codec::Codec;
use crate::consts::{DEFAULT_BUFFER_CAPACITY, DEFAULT_ITERATIONS};
use crate::crypto::algorithm::Algorithm;
use crate::crypto::cipher::{CipherHandle, Direction};
use crate::decryptor::decrypt_payload;
use crate::encryptor::encrypt_payload;
use crate::error::{PbeError, Result};
use crate::header::{read_header, FileHeader};

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// On-disk layout of an encrypted file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// Ciphertext only. Readers must already know the algorithm and iteration count.
    #[default]
    Raw,
    /// A plaintext [`FileHeader`] precedes the ciphertext.
    Framed,
}

/// Session configuration
///
/// Defaults: 5 iterations, [`FileFormat::Raw`], atomic writes on, 8 KiB file buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    iterations: u32,
    format: FileFormat,
    atomic_writes: bool,
    buffer_capacity: usize,
}

impl SessionOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            format: FileFormat::Raw,
            atomic_writes: true,
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }

    #[must_use]
    pub const fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    #[must_use]
    pub const fn with_format(mut self, format: FileFormat) -> Self {
        self.format = format;
        self
    }

    /// Write to a sibling temp file and rename it over the target only on success.
    ///
    /// The replaced file keeps its permissions. A symlinked target is resolved first,
    /// so the linked file is replaced and the link survives; a dangling link is
    /// written through without a temp file.
    ///
    /// When off, the target is truncated up front and a failed encode leaves a
    /// partial file behind.
    #[must_use]
    pub const fn with_atomic_writes(mut self, atomic_writes: bool) -> Self {
        self.atomic_writes = atomic_writes;
        self
    }

    /// Capacity of the buffered file layer (minimum 1).
    #[must_use]
    pub const fn with_buffer_capacity(mut self, buffer_capacity: usize) -> Self {
        self.buffer_capacity = if buffer_capacity == 0 { 1 } else { buffer_capacity };
        self
    }

    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    #[must_use]
    pub const fn format(&self) -> FileFormat {
        self.format
    }

    #[must_use]
    pub const fn atomic_writes(&self) -> bool {
        self.atomic_writes
    }

    #[must_use]
    pub const fn buffer_capacity(&self) -> usize {
        self.buffer_capacity
    }
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// One seed + algorithm pair, ready to encrypt or decrypt files.
///
/// # Thread Safety
///
/// `Copy + Send + Sync`; no state survives between calls. Concurrent calls on the
/// same path are not coordinated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamSession {
    seed: u64,
    derivation: KeyDerivation,
    options: SessionOptions,
}

impl StreamSession {
    /// Session with default options.
    ///
    /// # Errors
    ///
    /// [`PbeError::UnsupportedAlgorithm`] when `algorithm` is not in the registry.
    pub fn new(seed: u64, algorithm: &str) -> Result<Self> {
        Self::with_options(seed, algorithm, SessionOptions::default())
    }

    /// # Errors
    ///
    /// [`PbeError::UnsupportedAlgorithm`] when `algorithm` is not in the registry.
    pub fn with_options(seed: u64, algorithm: &str, options: SessionOptions) -> Result<Self> {
        Ok(Self::for_algorithm(seed, algorithm.parse()?, options))
    }

    /// Session for an already-resolved algorithm.
    #[must_use]
    pub const fn for_algorithm(seed: u64, algorithm: Algorithm, options: SessionOptions) -> Self {
        Self {
            seed,
            derivation: KeyDerivation::new()
                .with_algorithm(algorithm)
                .with_iterations(options.iterations),
            options,
        }
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.derivation.algorithm()
    }

    #[must_use]
    pub const fn options(&self) -> &SessionOptions {
        &self.options
    }

    fn header(&self) -> Option<FileHeader> {
        match self.options.format {
            FileFormat::Raw => None,
            FileFormat::Framed => Some(FileHeader::new(
                self.derivation.algorithm(),
                self.derivation.iterations(),
            )),
        }
    }

    /// Encrypt `codec`'s state into the file at `path`.
    ///
    /// The cipher is derived before the filesystem is touched, so a bad password or
    /// algorithm never creates or truncates a file.
    ///
    /// # Errors
    ///
    /// - [`PbeError::FileNotFound`] - empty path, or its directory does not exist
    /// - derivation errors from [`derive_cipher`](crate::derive_cipher)
    /// - [`PbeError::Encode`] from the codec
    /// - [`PbeError::Io`] on any write, sync or rename failure
    pub fn perform_encrypting<C, P>(&self, codec: &C, path: P, password: &PasswordString) -> Result<()>
    where
        C: Codec + ?Sized,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(PbeError::FileNotFound(path.to_path_buf()));
        }

        let handle = self
            .derivation
            .derive(self.seed, Direction::Encrypt, password)?;

        tracing::debug!(
            path = %path.display(),
            algorithm = %self.algorithm(),
            atomic = self.options.atomic_writes,
            "encrypting file"
        );

        let target = if self.options.atomic_writes {
            atomic_target(path)?
        } else {
            None
        };

        match target {
            Some(target) => {
                let dir = match target.parent() {
                    Some(parent) if !parent.as_os_str().is_empty() => parent,
                    _ => Path::new("."),
                };
                let temp = NamedTempFile::new_in(dir).map_err(|e| missing_or_io(path, e))?;
                // keep the mode of the file being replaced
                if let Ok(existing) = fs::metadata(&target) {
                    temp.as_file().set_permissions(existing.permissions())?;
                }
                self.write_file(codec, temp.as_file(), handle)?;
                temp.persist(&target).map_err(|e| PbeError::Io(e.error))?;
            }
            None => {
                let file = File::create(path).map_err(|e| missing_or_io(path, e))?;
                self.write_file(codec, &file, handle)?;
            }
        }

        Ok(())
    }

    /// Rebuild `codec`'s state from the file at `path`.
    ///
    /// On error the codec may hold partially decoded state.
    ///
    /// # Errors
    ///
    /// - [`PbeError::FileNotFound`] - empty or missing path, checked before any I/O
    /// - derivation errors from [`derive_cipher`](crate::derive_cipher)
    /// - header mismatches for [`FileFormat::Framed`] (see [`FileHeader::ensure_matches`])
    /// - [`PbeError::Decode`] on truncated data, bad padding or malformed fields
    /// - [`PbeError::Io`] on read failures
    pub fn perform_decrypting<C, P>(
        &self,
        codec: &mut C,
        path: P,
        password: &PasswordString,
    ) -> Result<()>
    where
        C: Codec + ?Sized,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        if path.as_os_str().is_empty() || !path.is_file() {
            return Err(PbeError::FileNotFound(path.to_path_buf()));
        }

        let handle = self
            .derivation
            .derive(self.seed, Direction::Decrypt, password)?;

        tracing::debug!(
            path = %path.display(),
            algorithm = %self.algorithm(),
            "decrypting file"
        );

        let file = File::open(path).map_err(|e| missing_or_io(path, e))?;
        let mut reader = BufReader::with_capacity(self.options.buffer_capacity, file);

        if let Some(expected) = self.header() {
            let found = read_header(&mut reader)?;
            found.ensure_matches(expected.algorithm, expected.iterations)?;
        }

        decrypt_payload(codec, reader, handle)?;
        Ok(())
    }

    fn write_file<C>(&self, codec: &C, file: &File, handle: CipherHandle) -> Result<()>
    where
        C: Codec + ?Sized,
    {
        let buffered = BufWriter::with_capacity(self.options.buffer_capacity, file);
        let header = self.header();

        let buffered = encrypt_payload(codec, buffered, handle, header.as_ref())?;
        buffered
            .into_inner()
            .map_err(|e| PbeError::Io(e.into_error()))?;
        file.sync_all()?;
        Ok(())
    }
}

/// Where an atomic replace should land: the path itself, or the file a symlink
/// points at. `None` for a dangling symlink, which is written through instead.
fn atomic_target(path: &Path) -> Result<Option<PathBuf>> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => match fs::canonicalize(path) {
            Ok(resolved) => Ok(Some(resolved)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PbeError::Io(e)),
        },
        Ok(_) => Ok(Some(path.to_path_buf())),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Some(path.to_path_buf())),
        Err(e) => Err(PbeError::Io(e)),
    }
}

fn missing_or_io(path: &Path, err: io::Error) -> PbeError {
    if err.kind() == ErrorKind::NotFound {
        PbeError::FileNotFound(path.to_path_buf())
    } else {
        PbeError::Io(err)
    }
}
