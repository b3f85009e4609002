//! Companion-file path derivation.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

pub const CONSTANT_SUFFIX: &str = ".constant.data";
pub const TEMPORAL_SUFFIX: &str = ".temporal.data";

/// The two file paths a recording lives under, derived from one base path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub constant: PathBuf,
    pub temporal: PathBuf,
}

impl DatasetPaths {
    /// Append the fixed suffixes to `base`.
    ///
    /// Pure concatenation: no separator handling, no normalization, no
    /// existence checks. The base is taken as an `OsStr` so the bytes the
    /// caller supplied reach the filesystem untouched.
    #[must_use]
    pub fn derive(base: impl AsRef<OsStr>) -> Self {
        let with_suffix = |suffix: &str| {
            let mut s = OsString::from(base.as_ref());
            s.push(suffix);
            PathBuf::from(s)
        };
        Self {
            constant: with_suffix(CONSTANT_SUFFIX),
            temporal: with_suffix(TEMPORAL_SUFFIX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffixes_are_appended_verbatim() {
        let p = DatasetPaths::derive("runs/demo");
        assert_eq!(p.constant, PathBuf::from("runs/demo.constant.data"));
        assert_eq!(p.temporal, PathBuf::from("runs/demo.temporal.data"));
    }

    #[test]
    fn no_normalization_of_odd_bases() {
        // dots and trailing separators pass through untouched
        let p = DatasetPaths::derive("out/run.3/");
        assert_eq!(p.constant, PathBuf::from("out/run.3/.constant.data"));
        let p = DatasetPaths::derive("");
        assert_eq!(p.temporal, PathBuf::from(".temporal.data"));
    }
}
