//! Writing a split result to disk as EJS views.
//!
//! Layout:
//!
//! ```text
//! <dir>/index.ejs
//! <dir>/<partials_dir>/<name>.ejs
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::options::Options;
use crate::patterns::SLUG;
use crate::result::SplitResult;

/// File name of the main template.
pub const INDEX_FILE: &str = "index.ejs";

/// Extension of every written view.
pub const VIEW_EXTENSION: &str = "ejs";

/// Write views using the default partials directory.
///
/// # Errors
///
/// See [`write_views_with_options`].
pub fn write_views(result: &SplitResult, dir: &Path) -> Result<Vec<PathBuf>> {
    write_views_with_options(result, dir, &Options::default())
}

/// Write `index.ejs` and one file per partial below `dir`, creating
/// directories as needed. Returns the written paths, index first.
///
/// Partial names are validated before anything is written.
///
/// # Errors
///
/// Returns [`Error::InvalidPartialName`] for a name that is not a
/// `[a-z0-9-]` slug, and [`Error::Io`] if a directory or file cannot be
/// written.
pub fn write_views_with_options(
    result: &SplitResult,
    dir: &Path,
    options: &Options,
) -> Result<Vec<PathBuf>> {
    if let Some(bad) = result.partials.keys().find(|name| !SLUG.is_match(name)) {
        return Err(Error::InvalidPartialName(bad.clone()));
    }

    fs::create_dir_all(dir)?;
    let index = dir.join(INDEX_FILE);
    fs::write(&index, &result.main_html)?;
    let mut written = vec![index];

    if result.has_partials() {
        let partials_dir = dir.join(&options.partials_dir);
        fs::create_dir_all(&partials_dir)?;
        for (name, body) in &result.partials {
            let path = partials_dir.join(name).with_extension(VIEW_EXTENSION);
            fs::write(&path, body)?;
            written.push(path);
        }
    }

    tracing::debug!(files = written.len(), dir = %dir.display(), "wrote views");
    Ok(written)
}
