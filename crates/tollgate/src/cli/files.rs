//! File helper handlers.

use std::path::Path;
use tollgate::{ArtifactScanner, TollgateResult, encode_image};

/// Print the newest settled file per extension.
pub fn show_latest(dir: &Path, extensions: &[String]) -> TollgateResult<()> {
    let scanner = if extensions.is_empty() {
        ArtifactScanner::default()
    } else {
        ArtifactScanner::new(extensions.iter().cloned())
    };

    for (ext, path) in scanner.latest(dir) {
        match path {
            Some(path) => println!("{}: {}", ext, path.display()),
            None => println!("{}: (none)", ext),
        }
    }
    Ok(())
}

/// Print a file base64-encoded.
pub fn show_encoded(path: &Path) -> TollgateResult<()> {
    if let Some(encoded) = encode_image(Some(path))? {
        println!("{}", encoded);
    }
    Ok(())
}
