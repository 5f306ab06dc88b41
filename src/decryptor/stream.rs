//! src/decryptor/stream.rs
//! CBC decryption as a `Read` adapter
//!
//! The most recently decrypted block is held back until the next ciphertext block
//! (or EOF) arrives, because only the final block carries padding.

use crate::aliases::Block16;
use crate::consts::MAX_BLOCK_SIZE;
use crate::crypto::block::BlockEngine;
use crate::utils::xor_blocks;
use std::fmt;
use std::io::{self, ErrorKind, Read};

/// Decrypts the inner reader's ciphertext and yields unpadded plaintext.
///
/// Errors surface as `io::ErrorKind::InvalidData` when the ciphertext length is
/// not a multiple of the block size, when it is empty, or when the final block's
/// padding is malformed (the usual symptom of a wrong password or seed).
pub struct CipherReader<R: Read> {
    inner: R,
    engine: BlockEngine,
    chain: [u8; MAX_BLOCK_SIZE],
    held: Block16,
    has_held: bool,
    ready: Block16,
    ready_pos: usize,
    ready_len: usize,
    finished: bool,
    bytes_out: u64,
}

impl<R: Read> CipherReader<R> {
    pub(crate) fn new(inner: R, engine: BlockEngine, iv: &[u8]) -> Self {
        let mut chain = [0u8; MAX_BLOCK_SIZE];
        chain[..iv.len()].copy_from_slice(iv);
        Self {
            inner,
            engine,
            chain,
            held: Block16::new([0u8; MAX_BLOCK_SIZE]),
            has_held: false,
            ready: Block16::new([0u8; MAX_BLOCK_SIZE]),
            ready_pos: 0,
            ready_len: 0,
            finished: false,
            bytes_out: 0,
        }
    }

    /// Plaintext bytes handed out so far.
    #[must_use]
    pub const fn plaintext_len(&self) -> u64 {
        self.bytes_out
    }

    /// True once the final block has been validated and fully consumed.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.finished && self.ready_pos == self.ready_len
    }

    #[must_use]
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Fill `buf` completely unless EOF comes first; returns bytes read.
    fn read_full(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        Ok(filled)
    }

    /// Advance until `ready` holds releasable plaintext or the stream is finished.
    fn refill(&mut self) -> io::Result<()> {
        let bs = self.engine.block_size();

        while !self.finished && self.ready_pos == self.ready_len {
            let mut ciphertext = [0u8; MAX_BLOCK_SIZE];
            let n = self.read_full(&mut ciphertext[..bs])?;

            if n == 0 {
                self.release_final(bs)?;
                continue;
            }
            if n < bs {
                return Err(io::Error::new(
                    ErrorKind::InvalidData,
                    format!("ciphertext is not a multiple of the {bs}-byte block size"),
                ));
            }

            let mut decrypted = ciphertext;
            self.engine.decrypt_block(&mut decrypted[..bs]);

            let mut plain = Block16::new([0u8; MAX_BLOCK_SIZE]);
            xor_blocks(
                &decrypted[..bs],
                &self.chain[..bs],
                &mut plain.expose_secret_mut()[..bs],
            );
            self.chain[..bs].copy_from_slice(&ciphertext[..bs]);

            if self.has_held {
                self.ready = std::mem::replace(&mut self.held, plain);
                self.ready_pos = 0;
                self.ready_len = bs;
            } else {
                self.held = plain;
                self.has_held = true;
            }
        }
        Ok(())
    }

    /// Strip and validate PKCS#5 padding from the held-back block.
    fn release_final(&mut self, bs: usize) -> io::Result<()> {
        if !self.has_held {
            return Err(io::Error::new(
                ErrorKind::InvalidData,
                "ciphertext ended before the final padded block",
            ));
        }

        let block = &self.held.expose_secret()[..bs];
        let pad = usize::from(block[bs - 1]);
        if pad == 0 || pad > bs || block[bs - pad..].iter().any(|&b| usize::from(b) != pad) {
            return Err(io::Error::new(
                ErrorKind::InvalidData,
                "bad padding in final block",
            ));
        }

        self.ready = std::mem::replace(&mut self.held, Block16::new([0u8; MAX_BLOCK_SIZE]));
        self.has_held = false;
        self.ready_pos = 0;
        self.ready_len = bs - pad;
        self.finished = true;
        Ok(())
    }
}

impl<R: Read> Read for CipherReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        self.refill()?;

        let available = self.ready_len - self.ready_pos;
        let n = available.min(buf.len());
        buf[..n].copy_from_slice(&self.ready.expose_secret()[self.ready_pos..self.ready_pos + n]);
        self.ready_pos += n;
        self.bytes_out += n as u64;
        Ok(n)
    }
}

impl<R: Read> fmt::Debug for CipherReader<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherReader")
            .field("block_size", &self.engine.block_size())
            .field("finished", &self.finished)
            .field("bytes_out", &self.bytes_out)
            .finish_non_exhaustive()
    }
}
