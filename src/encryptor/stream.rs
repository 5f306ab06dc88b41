//! src/encryptor/stream.rs
//! CBC encryption with PKCS#5 padding as a `Write` adapter

use crate::aliases::Block16;
use crate::consts::MAX_BLOCK_SIZE;
use crate::crypto::block::BlockEngine;
use crate::utils::xor_in_place;
use std::fmt;
use std::io::{self, Write};

/// Encrypts everything written to it and forwards ciphertext to the inner writer.
///
/// Plaintext is buffered until a full block is available. [`finish`](Self::finish)
/// must be called to emit the final padded block; dropping the writer without it
/// leaves a truncated file.
pub struct CipherWriter<W: Write> {
    inner: W,
    engine: BlockEngine,
    chain: [u8; MAX_BLOCK_SIZE],
    pending: Block16,
    pending_len: usize,
    bytes_in: u64,
}

impl<W: Write> CipherWriter<W> {
    pub(crate) fn new(inner: W, engine: BlockEngine, iv: &[u8]) -> Self {
        let mut chain = [0u8; MAX_BLOCK_SIZE];
        chain[..iv.len()].copy_from_slice(iv);
        Self {
            inner,
            engine,
            chain,
            pending: Block16::new([0u8; MAX_BLOCK_SIZE]),
            pending_len: 0,
            bytes_in: 0,
        }
    }

    /// Plaintext bytes accepted so far.
    #[must_use]
    pub const fn plaintext_len(&self) -> u64 {
        self.bytes_in
    }

    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    #[inline(always)]
    fn emit_pending(&mut self) -> io::Result<()> {
        let bs = self.engine.block_size();
        let block = &mut self.pending.expose_secret_mut()[..bs];

        xor_in_place(block, &self.chain[..bs]);
        self.engine.encrypt_block(block);
        self.chain[..bs].copy_from_slice(block);

        self.inner.write_all(block)?;
        self.pending_len = 0;
        Ok(())
    }

    /// Pad and encrypt the final block, flush, and hand back the inner writer.
    ///
    /// A full padding block is written when the plaintext length is already a
    /// multiple of the block size, so the output is never empty.
    pub fn finish(mut self) -> io::Result<W> {
        let bs = self.engine.block_size();
        let pad = bs - self.pending_len;
        self.pending.expose_secret_mut()[self.pending_len..bs].fill(pad as u8);
        self.pending_len = bs;
        self.emit_pending()?;
        self.inner.flush()?;
        Ok(self.inner)
    }
}

impl<W: Write> Write for CipherWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let bs = self.engine.block_size();
        let mut rest = buf;

        while !rest.is_empty() {
            let take = (bs - self.pending_len).min(rest.len());
            self.pending.expose_secret_mut()[self.pending_len..self.pending_len + take]
                .copy_from_slice(&rest[..take]);
            self.pending_len += take;
            rest = &rest[take..];

            if self.pending_len == bs {
                self.emit_pending()?;
            }
        }

        self.bytes_in += buf.len() as u64;
        Ok(buf.len())
    }

    /// Flushes the inner writer only; a partial block stays buffered until `finish`.
    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl<W: Write> fmt::Debug for CipherWriter<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherWriter")
            .field("block_size", &self.engine.block_size())
            .field("pending_len", &self.pending_len)
            .field("bytes_in", &self.bytes_in)
            .finish_non_exhaustive()
    }
}
