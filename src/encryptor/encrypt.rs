//! src/encryptor/encrypt.rs
//! Codec-driven encryption over any writer

use crate::codec::{Codec, DataWriter};
use crate::crypto::cipher::CipherHandle;
use crate::encryptor::write::write_header;
use crate::error::Result;
use crate::header::FileHeader;
use std::io::Write;

/// Run `codec.encode` through an encrypting stream on top of `output`.
///
/// Writes the framed header first when one is given. The final padded block is
/// emitted on every exit path; when the codec itself failed, a teardown failure is
/// only logged and the codec's error is returned.
///
/// Returns the inner writer so the caller can finish its own layers (buffer flush,
/// `sync_all`, temp-file persist).
#[inline(always)]
pub fn encrypt_payload<C, W>(
    codec: &C,
    mut output: W,
    handle: CipherHandle,
    header: Option<&FileHeader>,
) -> Result<W>
where
    C: Codec + ?Sized,
    W: Write,
{
    if let Some(header) = header {
        write_header(&mut output, header)?;
    }

    let algorithm = handle.algorithm();
    let mut cipher = handle.into_writer(output)?;

    let encoded = {
        let mut data = DataWriter::new(&mut cipher);
        codec.encode(&mut data).map(|()| data.bytes_written())
    };

    match encoded {
        Ok(plaintext_len) => {
            let output = cipher.finish()?;
            tracing::debug!(%algorithm, plaintext_len, "payload encrypted");
            Ok(output)
        }
        Err(e) => {
            if let Err(teardown) = cipher.finish() {
                tracing::warn!(error = %teardown, "cipher teardown failed after encode error");
            }
            Err(e)
        }
    }
}
