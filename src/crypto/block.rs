//! src/crypto/block.rs
//! Single-block DES / AES engines shared by the CBC stream layers

use crate::crypto::algorithm::BlockCipherKind;
use crate::error::{PbeError, Result};

use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes128, Aes256};
use des::Des;

/// A keyed block cipher. Blocks passed in must be exactly [`block_size`](Self::block_size) long.
pub(crate) enum BlockEngine {
    Des(Des),
    Aes128(Aes128),
    Aes256(Aes256),
}

impl BlockEngine {
    pub(crate) fn new(kind: BlockCipherKind, key: &[u8]) -> Result<Self> {
        let invalid = |_| {
            PbeError::InvalidCipherParameters(format!(
                "{kind:?} expects a {}-byte key, got {}",
                kind.key_len(),
                key.len()
            ))
        };

        Ok(match kind {
            BlockCipherKind::Des => Self::Des(Des::new_from_slice(key).map_err(invalid)?),
            BlockCipherKind::Aes128 => Self::Aes128(Aes128::new_from_slice(key).map_err(invalid)?),
            BlockCipherKind::Aes256 => Self::Aes256(Aes256::new_from_slice(key).map_err(invalid)?),
        })
    }

    #[inline(always)]
    pub(crate) const fn block_size(&self) -> usize {
        match self {
            Self::Des(_) => 8,
            Self::Aes128(_) | Self::Aes256(_) => 16,
        }
    }

    #[inline(always)]
    pub(crate) fn encrypt_block(&self, block: &mut [u8]) {
        match self {
            Self::Des(c) => c.encrypt_block(GenericArray::from_mut_slice(block)),
            Self::Aes128(c) => c.encrypt_block(GenericArray::from_mut_slice(block)),
            Self::Aes256(c) => c.encrypt_block(GenericArray::from_mut_slice(block)),
        }
    }

    #[inline(always)]
    pub(crate) fn decrypt_block(&self, block: &mut [u8]) {
        match self {
            Self::Des(c) => c.decrypt_block(GenericArray::from_mut_slice(block)),
            Self::Aes128(c) => c.decrypt_block(GenericArray::from_mut_slice(block)),
            Self::Aes256(c) => c.decrypt_block(GenericArray::from_mut_slice(block)),
        }
    }
}
