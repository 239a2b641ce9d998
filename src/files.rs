// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::path::Path;

/// Trait that the file-resolution collaborator must implement.
///
/// The resource validator only needs to know whether a path an option
/// named resolves to an existing file; how paths are resolved (working
/// directory, search paths, virtual filesystems) is the collaborator's
/// concern.
pub trait FileResolver {
    /// Returns `true` if `path` resolves to an existing file.
    fn exists(&self, path: &str) -> bool;
}

/// A [FileResolver] backed by the process filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdFileResolver;

impl FileResolver for StdFileResolver {
    fn exists(&self, path: &str) -> bool {
        Path::new(path).exists()
    }
}
