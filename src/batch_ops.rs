//! src/batch_ops.rs
//! Parallel file jobs on the rayon pool (feature `batch-ops`)
//!
//! Every job gets its own cipher handle and file; the first error stops the batch
//! and is returned. Jobs already finished keep their output.

use rayon::prelude::*;
use std::path::Path;

use crate::aliases::PasswordString;
use crate::codec::Codec;
use crate::error::Result;
use crate::session::StreamSession;

/// Encrypt each `(codec, path)` pair with `session`.
pub fn encrypt_batch<C, P>(
    session: &StreamSession,
    batch: &[(C, P)],
    password: &PasswordString,
) -> Result<()>
where
    C: Codec + Sync,
    P: AsRef<Path> + Sync,
{
    batch
        .par_iter()
        .try_for_each(|(codec, path)| session.perform_encrypting(codec, path, password))
}

/// Decrypt each `path` into its paired codec with `session`.
pub fn decrypt_batch<C, P>(
    session: &StreamSession,
    batch: &mut [(C, P)],
    password: &PasswordString,
) -> Result<()>
where
    C: Codec + Send,
    P: AsRef<Path> + Send,
{
    batch
        .par_iter_mut()
        .try_for_each(|(codec, path)| session.perform_decrypting(codec, &*path, password))
}
