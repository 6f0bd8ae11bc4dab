// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Filename decomposition.
//!
//! Frame files are named `<prefix>_<user_notes>_<id>.<extension>`, where
//! every part except the id is optional. The prefix and the id are
//! single tokens; user notes are free text and may contain `_`.
//!
//! | File name                   | prefix  | user notes   | extension |
//! |-----------------------------|---------|--------------|-----------|
//! | `001.png`                   | -       | -            | `png`     |
//! | `frame_001.png`             | `frame` | -            | `png`     |
//! | `frame_user-notes_001.png`  | `frame` | `user-notes` | `png`     |
//! | `frame_user_notes_001`      | `frame` | `user_notes` | -         |
//!
//! All functions take the file name only, never a full path.
//!
//! The stem and the extension always split at the same `.`, so a
//! dotfile such as `.bashrc` has an empty stem and the extension
//! `bashrc`. This differs from `Path::file_stem`, which keeps `.bashrc`
//! whole.

/// File name without its final `.extension`.
pub fn filestem(filename: &str) -> &str {
    filename
        .rsplit_once('.')
        .map_or(filename, |(stem, _)| stem)
}

/// Text after the last `.`, or `None` if there is no `.`.
pub fn extension(filename: &str) -> Option<&str> {
    filename.rsplit_once('.').map(|(_, ext)| ext)
}

/// Text before the first `_`, or `None` if there is no `_`.
pub fn prefix(filename: &str) -> Option<&str> {
    filename.split_once('_').map(|(prefix, _)| prefix)
}

/// Text between the first and the last `_`.
///
/// `None` when the name has fewer than two underscores, i.e. it is just
/// `<prefix>_<id>` or has no prefix at all.
pub fn user_notes(filename: &str) -> Option<&str> {
    if filename.split('_').count() <= 2 {
        return None;
    }
    let (_, rest) = filename.split_once('_')?;
    rest.rsplit_once('_').map(|(notes, _)| notes)
}
