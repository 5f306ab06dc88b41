//! src/decryptor/decrypt.rs
//! Codec-driven decryption over any reader

use crate::codec::{Codec, DataReader};
use crate::crypto::cipher::CipherHandle;
use crate::error::{PbeError, Result};
use std::io::{self, Read};

/// Run `codec.decode` over a decrypting stream on top of `input`.
///
/// After the codec returns, any plaintext it left unread is drained so the final
/// block's padding is always checked; a wrong password therefore fails with
/// [`PbeError::Decode`] even for codecs that read only a prefix.
///
/// Returns the number of plaintext bytes the codec consumed.
#[inline(always)]
pub fn decrypt_payload<C, R>(codec: &mut C, input: R, handle: CipherHandle) -> Result<u64>
where
    C: Codec + ?Sized,
    R: Read,
{
    let algorithm = handle.algorithm();
    let mut cipher = handle.into_reader(input)?;

    let consumed = {
        let mut data = DataReader::new(&mut cipher);
        codec.decode(&mut data)?;
        data.bytes_read()
    };

    let trailing = io::copy(&mut cipher, &mut io::sink()).map_err(PbeError::from_stream)?;
    if trailing > 0 {
        tracing::debug!(%algorithm, trailing, "codec left plaintext unread");
    }

    tracing::debug!(%algorithm, consumed, "payload decrypted");
    Ok(consumed)
}
