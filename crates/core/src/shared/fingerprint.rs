use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::shared::constants::{FINGERPRINT_BLOCK_SIZE, FINGERPRINT_LEN};

/// Derive a short, stable identifier from a file's bytes.
///
/// SHA-256 over the content in fixed-size blocks, hex-encoded and truncated
/// to [`FINGERPRINT_LEN`] characters. Depends only on content, never on the
/// file's name or location. I/O errors propagate unchanged.
pub fn file_fingerprint(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut block = vec![0u8; FINGERPRINT_BLOCK_SIZE];

    loop {
        let read = file.read(&mut block)?;
        if read == 0 {
            break;
        }
        hasher.update(&block[..read]);
    }

    let digest = hasher.finalize();
    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest {
        let _ = write!(hex, "{byte:02x}");
    }
    hex.truncate(FINGERPRINT_LEN);
    Ok(hex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_fingerprint_is_deterministic_across_names_and_paths() {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("first.bin");
        let b = tmp.path().join("nested").join("second.bin");
        fs::create_dir_all(b.parent().unwrap()).unwrap();
        fs::write(&a, b"identical content").unwrap();
        fs::write(&b, b"identical content").unwrap();

        assert_eq!(
            file_fingerprint(&a).unwrap(),
            file_fingerprint(&b).unwrap()
        );
    }

    #[test]
    fn test_fingerprint_changes_on_single_byte_difference() {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("a.bin");
        let b = tmp.path().join("b.bin");
        fs::write(&a, b"identical content").unwrap();
        fs::write(&b, b"identical contenu").unwrap();

        assert_ne!(
            file_fingerprint(&a).unwrap(),
            file_fingerprint(&b).unwrap()
        );
    }

    #[test]
    fn test_fingerprint_is_short_lowercase_hex() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("audio.mp3");
        fs::write(&path, b"some audio bytes").unwrap();

        let fp = file_fingerprint(&path).unwrap();
        assert_eq!(fp.len(), FINGERPRINT_LEN);
        assert!(fp.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_fingerprint_handles_content_larger_than_one_block() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("large.bin");
        fs::write(&path, vec![0xabu8; FINGERPRINT_BLOCK_SIZE * 2 + 17]).unwrap();

        let first = file_fingerprint(&path).unwrap();
        let second = file_fingerprint(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_fingerprint_missing_file_returns_error() {
        let result = file_fingerprint(Path::new("/nonexistent/audio.mp3"));
        assert!(result.is_err());
    }
}
