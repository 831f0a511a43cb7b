// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::Path;
use std::path::PathBuf;

use crate::Error;
use crate::append::file::target::FileTarget;

/// Options of a [`FileAppender`](super::FileAppender) that take effect on the next activation.
///
/// Setting options performs no I/O; the pair of path and append mode is only meaningful once
/// both are known, which is why it is applied as a whole by
/// [`FileAppender::activate_options`](super::FileAppender::activate_options).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileConfig {
    path: Option<PathBuf>,
    append: bool,
}

impl FileConfig {
    /// Create a config with no path and append mode off.
    pub fn new() -> Self {
        Self::default()
    }

    /// The path of the file that log records are written to, if any.
    pub fn file_name(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether the file is opened in append mode.
    ///
    /// `true` keeps the existing content and writes at its end; `false` truncates the file when
    /// it is opened.
    pub fn is_append(&self) -> bool {
        self.append
    }

    /// Set the path of the file.
    pub fn set_file_name(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }

    /// Unset the path of the file.
    pub fn clear_file_name(&mut self) {
        self.path = None;
    }

    /// Set the append mode.
    pub fn set_append(&mut self, append: bool) {
        self.append = append;
    }

    /// Set both the path and the append mode.
    pub fn set_file(&mut self, path: impl Into<PathBuf>, append: bool) {
        self.path = Some(path.into());
        self.append = append;
    }

    /// Open the target described by this config, or return `None` if no path is set.
    pub(crate) fn open_target(&self) -> Result<Option<FileTarget>, Error> {
        match self.path.as_ref() {
            None => Ok(None),
            Some(path) => FileTarget::open(path, self.append).map(Some),
        }
    }
}
