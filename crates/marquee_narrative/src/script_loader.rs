//! Reading scripts from disk.

use marquee_core::Script;
use marquee_error::{LoadError, LoadErrorKind, MarqueeResult};
use std::path::Path;
use tracing::{debug, instrument};

const PLAIN_TEXT_EXTENSIONS: [&str; 4] = ["txt", "fountain", "md", "text"];

/// Load a plain-text script.
///
/// Files ending in `.txt`, `.text`, `.fountain` or `.md`, or with no extension, are
/// read as UTF-8.
///
/// # Errors
///
/// Fails for other extensions (PDF extraction is not supported), for unreadable
/// files, and for contents that are not valid UTF-8.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_script(path: impl AsRef<Path>) -> MarqueeResult<Script> {
    let path = path.as_ref();

    if let Some(ext) = path.extension() {
        let ext = ext.to_string_lossy().to_lowercase();
        if !PLAIN_TEXT_EXTENSIONS.contains(&ext.as_str()) {
            return Err(LoadError::new(LoadErrorKind::UnsupportedFormat(ext)).into());
        }
    }

    let bytes = std::fs::read(path).map_err(|e| {
        LoadError::new(LoadErrorKind::FileRead(format!("{}: {}", path.display(), e)))
    })?;
    let text = String::from_utf8(bytes).map_err(|e| {
        LoadError::new(LoadErrorKind::InvalidEncoding(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;

    debug!(bytes = text.len(), "Loaded script");
    Ok(Script::new(text))
}
