//! tests/file_ops_tests.rs
//! Filesystem behaviour: path boundaries, atomic replacement, wrong credentials
//! and determinism

mod common;
use common::{password, password_of, scratch, MD5_DES};

use pbecrypt_rs::{
    decrypt_file, encrypt_file, Codec, DataReader, DataWriter, ErrorStage, PbeError,
    SessionOptions, StreamSession, StringListCodec, VersionCodec, VersionTuple,
};
use std::path::Path;

/// Writes a few fields, then refuses.
struct HalfWritten;

impl Codec for HalfWritten {
    fn encode(&self, writer: &mut DataWriter<'_>) -> Result<(), PbeError> {
        writer.write_utf("partial")?;
        writer.write_u64(u64::MAX)?;
        Err(PbeError::Encode("value out of range".into()))
    }

    fn decode(&mut self, _reader: &mut DataReader<'_>) -> Result<(), PbeError> {
        Ok(())
    }
}

fn entries(dir: &Path) -> usize {
    std::fs::read_dir(dir).unwrap().count()
}

// —————————————————————————————————————————————————————————————————————————————
// 1. Path boundaries
// —————————————————————————————————————————————————————————————————————————————
#[test]
fn empty_path_is_file_not_found() {
    let codec = VersionCodec::default();
    let err = encrypt_file(1, &codec, MD5_DES, "", &password()).unwrap_err();
    assert!(matches!(err, PbeError::FileNotFound(_)));
    assert_eq!(err.stage(), ErrorStage::Io);

    let mut codec = VersionCodec::default();
    let err = decrypt_file(1, &mut codec, MD5_DES, "", &password()).unwrap_err();
    assert!(matches!(err, PbeError::FileNotFound(_)));
}

#[test]
fn missing_file_is_file_not_found_and_not_created() {
    let (dir, path) = scratch("absent.bin");
    let mut codec = VersionCodec::default();

    let err = decrypt_file(1, &mut codec, MD5_DES, &path, &password()).unwrap_err();
    assert!(matches!(err, PbeError::FileNotFound(ref p) if p == &path));
    assert!(!err.is_retryable());
    assert!(!path.exists());
    assert_eq!(entries(dir.path()), 0);
}

#[test]
fn directory_is_not_a_file() {
    let (dir, _) = scratch("unused");
    let mut codec = VersionCodec::default();
    let err = decrypt_file(1, &mut codec, MD5_DES, dir.path(), &password()).unwrap_err();
    assert!(matches!(err, PbeError::FileNotFound(_)));
}

#[test]
fn missing_parent_directory_is_file_not_found() {
    let (dir, _) = scratch("unused");
    let path = dir.path().join("nested").join("out.bin");
    let err = encrypt_file(1, &VersionCodec::default(), MD5_DES, &path, &password()).unwrap_err();
    assert!(matches!(err, PbeError::FileNotFound(_)));
    assert_eq!(entries(dir.path()), 0);
}

// —————————————————————————————————————————————————————————————————————————————
// 2. Failure during encode
// —————————————————————————————————————————————————————————————————————————————
#[test]
fn atomic_write_keeps_previous_file_on_codec_error() {
    let (dir, path) = scratch("keep.bin");
    let codec = VersionCodec::new(VersionTuple::new(1, 2, 3, 4));
    encrypt_file(7, &codec, MD5_DES, &path, &password()).unwrap();
    let before = std::fs::read(&path).unwrap();

    let err = encrypt_file(7, &HalfWritten, MD5_DES, &path, &password()).unwrap_err();
    assert!(matches!(err, PbeError::Encode(ref m) if m == "value out of range"));
    assert_eq!(err.stage(), ErrorStage::Codec);

    assert_eq!(std::fs::read(&path).unwrap(), before);
    assert_eq!(entries(dir.path()), 1, "temp file must be cleaned up");
}

#[test]
fn non_atomic_write_leaves_partial_file_on_codec_error() {
    let (_dir, path) = scratch("partial.bin");
    let session = StreamSession::with_options(
        7,
        MD5_DES,
        SessionOptions::new().with_atomic_writes(false),
    )
    .unwrap();

    let err = session
        .perform_encrypting(&HalfWritten, &path, &password())
        .unwrap_err();
    assert!(matches!(err, PbeError::Encode(_)));

    // "partial" utf (9 bytes) + u64 (8 bytes), padded to 24
    assert_eq!(std::fs::metadata(&path).unwrap().len(), 24);
}

#[cfg(unix)]
#[test]
fn atomic_write_keeps_target_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let (_dir, path) = scratch("mode.bin");
    let codec = VersionCodec::new(VersionTuple::new(1, 2, 3, 4));
    encrypt_file(7, &codec, MD5_DES, &path, &password()).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

    encrypt_file(7, &codec, MD5_DES, &path, &password()).unwrap();
    let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o644);
}

#[cfg(unix)]
#[test]
fn atomic_write_through_symlink_updates_linked_file() {
    let (dir, real) = scratch("real.bin");
    let link = dir.path().join("link.bin");
    std::fs::write(&real, b"x").unwrap();
    std::os::unix::fs::symlink(&real, &link).unwrap();

    let codec = VersionCodec::new(VersionTuple::new(1, 2, 3, 4));
    encrypt_file(7, &codec, MD5_DES, &link, &password()).unwrap();

    assert!(std::fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(
        hex::encode(std::fs::read(&real).unwrap()),
        common::VERSION_1234_SEED7_HEX
    );
    assert_eq!(entries(dir.path()), 2, "temp file must be cleaned up");
}

#[cfg(unix)]
#[test]
fn dangling_symlink_is_written_through() {
    let (dir, real) = scratch("later.bin");
    let link = dir.path().join("link.bin");
    std::os::unix::fs::symlink(&real, &link).unwrap();

    let codec = VersionCodec::new(VersionTuple::new(1, 2, 3, 4));
    encrypt_file(7, &codec, MD5_DES, &link, &password()).unwrap();

    assert!(std::fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    let mut decoded = VersionCodec::default();
    decrypt_file(7, &mut decoded, MD5_DES, &real, &password()).unwrap();
    assert_eq!(decoded, codec);
}

// —————————————————————————————————————————————————————————————————————————————
// 3. Wrong credentials
// —————————————————————————————————————————————————————————————————————————————
#[test]
fn wrong_seed_does_not_yield_payload() {
    let (_dir, path) = scratch("v.bin");
    let original = VersionTuple::new(1, 2, 3, 4);
    encrypt_file(7, &VersionCodec::new(original), MD5_DES, &path, &password()).unwrap();

    let mut decoded = VersionCodec::default();
    match decrypt_file(8, &mut decoded, MD5_DES, &path, &password()) {
        Err(e) => assert!(matches!(e, PbeError::Decode(_)), "{e}"),
        Ok(()) => assert_ne!(decoded.version(), original),
    }
}

#[test]
fn wrong_password_does_not_yield_payload() {
    let (_dir, path) = scratch("l.bin");
    let codec: StringListCodec = ["alpha", "beta"].into_iter().collect();
    encrypt_file(42, &codec, MD5_DES, &path, &password()).unwrap();

    for wrong in ["S3cr3t", "s3cr3t ", "x"] {
        let mut decoded = StringListCodec::default();
        match decrypt_file(42, &mut decoded, MD5_DES, &path, &password_of(wrong)) {
            Err(e) => assert!(matches!(e, PbeError::Decode(_)), "{wrong:?}: {e}"),
            Ok(()) => assert_ne!(decoded, codec, "{wrong:?}"),
        }
    }
}

#[test]
fn wrong_algorithm_does_not_yield_payload() {
    let (_dir, path) = scratch("a.bin");
    let codec: StringListCodec = ["alpha", "beta"].into_iter().collect();
    encrypt_file(42, &codec, "PBEWithHmacSHA256AndAES_256", &path, &password()).unwrap();

    let mut decoded = StringListCodec::default();
    match decrypt_file(42, &mut decoded, "PBEWithHmacSHA512AndAES_256", &path, &password()) {
        Err(e) => assert!(matches!(e, PbeError::Decode(_)), "{e}"),
        Ok(()) => assert_ne!(decoded, codec),
    }
}

#[test]
fn truncated_file_is_decode_error() {
    let (_dir, path) = scratch("t.bin");
    let codec: StringListCodec = ["alpha", "beta"].into_iter().collect();
    encrypt_file(42, &codec, MD5_DES, &path, &password()).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    for cut in [1, 8, 9] {
        std::fs::write(&path, &bytes[..bytes.len() - cut]).unwrap();
        let mut decoded = StringListCodec::default();
        let err = decrypt_file(42, &mut decoded, MD5_DES, &path, &password()).unwrap_err();
        assert!(matches!(err, PbeError::Decode(_)), "cut {cut}: {err}");
    }
}

// —————————————————————————————————————————————————————————————————————————————
// 4. Determinism
// —————————————————————————————————————————————————————————————————————————————
#[test]
fn same_inputs_same_bytes_different_seed_different_bytes() {
    let (dir, first) = scratch("first.bin");
    let second = dir.path().join("second.bin");
    let third = dir.path().join("third.bin");
    let codec: StringListCodec = ["one", "two", "three"].into_iter().collect();

    encrypt_file(5, &codec, MD5_DES, &first, &password()).unwrap();
    encrypt_file(5, &codec, MD5_DES, &second, &password()).unwrap();
    encrypt_file(6, &codec, MD5_DES, &third, &password()).unwrap();

    let first = std::fs::read(first).unwrap();
    assert_eq!(first, std::fs::read(second).unwrap());
    assert_ne!(first, std::fs::read(third).unwrap());
}

#[test]
fn overwrite_replaces_previous_content() {
    let (_dir, path) = scratch("over.bin");
    encrypt_file(
        1,
        &VersionCodec::new(VersionTuple::new(1, 1, 1, 1)),
        MD5_DES,
        &path,
        &password(),
    )
    .unwrap();
    encrypt_file(
        1,
        &VersionCodec::new(VersionTuple::new(2, 2, 2, 2)),
        MD5_DES,
        &path,
        &password(),
    )
    .unwrap();

    let mut decoded = VersionCodec::default();
    decrypt_file(1, &mut decoded, MD5_DES, &path, &password()).unwrap();
    assert_eq!(decoded.version(), VersionTuple::new(2, 2, 2, 2));
}
