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

use std::fs;
use std::fs::File;
use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use crate::Error;
use crate::ErrorKind;
use crate::append::Sink;
use crate::append::sink::closed_error;

/// An open log file bound to a path and an open mode.
#[derive(Debug)]
pub struct FileTarget {
    path: PathBuf,
    append: bool,
    file: Option<File>,
}

impl FileTarget {
    /// Open the file at `path` for writing, creating it and its parent directories if missing.
    ///
    /// In append mode, the existing content is kept and records are written at the end of the
    /// file. Otherwise the file is truncated.
    ///
    /// # Errors
    ///
    /// Return an [`ErrorKind::TargetUnavailable`] error if the file cannot be created or opened.
    pub fn open(path: impl Into<PathBuf>, append: bool) -> Result<Self, Error> {
        let path = path.into();
        let unavailable = |message: &str, err: io::Error| {
            Error::with_kind(ErrorKind::TargetUnavailable, message)
                .with_context("path", path.display())
                .with_source(err)
        };

        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)
                    .map_err(|err| unavailable("failed to create log directory", err))?;
            }
        }

        let mut options = OpenOptions::new();
        options.create(true);
        if append {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }
        let file = options
            .open(&path)
            .map_err(|err| unavailable("failed to open log file", err))?;

        Ok(Self {
            path,
            append,
            file: Some(file),
        })
    }

    /// The path this target was opened at.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether this target was opened in append mode.
    pub fn is_append(&self) -> bool {
        self.append
    }

    /// Whether this target has been closed.
    pub fn is_closed(&self) -> bool {
        self.file.is_none()
    }
}

impl Sink for FileTarget {
    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.write_all(bytes),
            None => Err(closed_error()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }

    fn close(&mut self) -> io::Result<()> {
        match self.file.take() {
            Some(mut file) => file.flush(),
            None => Ok(()),
        }
    }
}
