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

use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::Error;
use crate::Layout;
use crate::Trap;
use crate::append::Append;
use crate::append::Sink;
use crate::append::WriterAppender;
use crate::append::file::FileConfig;
use crate::layout::PlainTextLayout;

/// A builder to configure and create a [`FileAppender`].
#[derive(Debug)]
pub struct FileAppenderBuilder {
    config: FileConfig,
    layout: Box<dyn Layout>,
    trap: Option<Box<dyn Trap>>,
}

impl FileAppenderBuilder {
    /// Create a new builder writing to `path`.
    ///
    /// The file is truncated on activation unless [`append`](Self::append) is set.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let mut config = FileConfig::new();
        config.set_file_name(path);
        Self {
            config,
            layout: Box::new(PlainTextLayout::default()),
            trap: None,
        }
    }

    /// Build the [`FileAppender`] and activate its options.
    ///
    /// # Errors
    ///
    /// Return an [`ErrorKind::TargetUnavailable`](crate::ErrorKind::TargetUnavailable) error if
    /// the log file cannot be created or opened.
    pub fn build(self) -> Result<FileAppender, Error> {
        let FileAppenderBuilder {
            config,
            layout,
            trap,
        } = self;

        let mut writer = WriterAppender::new(layout);
        if let Some(trap) = trap {
            writer = writer.with_trap(trap);
        }
        let append = FileAppender::from_parts(writer, config);
        append.activate_options()?;
        Ok(append)
    }

    /// Set whether to keep the existing content of the file.
    ///
    /// Default to `false`.
    pub fn append(mut self, append: bool) -> Self {
        self.config.set_append(append);
        self
    }

    /// Set the layout for the logs.
    ///
    /// Default to [`PlainTextLayout`].
    ///
    /// # Examples
    ///
    /// ```
    /// use logappend::append::FileAppenderBuilder;
    /// use logappend::layout::PlainTextLayout;
    ///
    /// let builder = FileAppenderBuilder::new("my_service.log");
    /// builder.layout(PlainTextLayout::default());
    /// ```
    pub fn layout(mut self, layout: impl Into<Box<dyn Layout>>) -> Self {
        self.layout = layout.into();
        self
    }

    /// Set the trap for errors raised while closing the log file.
    ///
    /// Default to [`DefaultTrap`](crate::trap::DefaultTrap).
    pub fn trap(mut self, trap: impl Into<Box<dyn Trap>>) -> Self {
        self.trap = Some(trap.into());
        self
    }
}

/// An appender that writes log records to a file.
///
/// Options are set independently and in any order with the setters; none of them has an effect
/// until [`activate_options`](Self::activate_options) is called. Activation closes the file
/// currently open, if any, and opens the configured one.
///
/// While no file is open, either because no path is configured, activation failed, or the
/// appender was closed, log records are silently dropped.
///
/// # Examples
///
/// ```no_run
/// use logappend::append::FileAppender;
/// use logappend::layout::PlainTextLayout;
///
/// let append = FileAppender::new(PlainTextLayout::default());
/// append.set_append(true);
/// append.set_file_name("logs/my_service.log");
/// append.activate_options().unwrap();
/// ```
#[derive(Debug)]
pub struct FileAppender {
    writer: WriterAppender,
    config: Mutex<FileConfig>,
}

impl FileAppender {
    /// Create a new appender with no file configured.
    pub fn new(layout: impl Into<Box<dyn Layout>>) -> Self {
        Self::from_parts(WriterAppender::new(layout), FileConfig::new())
    }

    /// Create a new appender that truncates and writes to `path`.
    ///
    /// # Errors
    ///
    /// Return an error if the log file cannot be created or opened.
    pub fn open(
        layout: impl Into<Box<dyn Layout>>,
        path: impl Into<PathBuf>,
    ) -> Result<Self, Error> {
        Self::open_with_append(layout, path, false)
    }

    /// Create a new appender that writes to `path`, keeping its content if `append` is `true`.
    ///
    /// # Errors
    ///
    /// Return an error if the log file cannot be created or opened.
    pub fn open_with_append(
        layout: impl Into<Box<dyn Layout>>,
        path: impl Into<PathBuf>,
        append: bool,
    ) -> Result<Self, Error> {
        FileAppenderBuilder::new(path)
            .append(append)
            .layout(layout)
            .build()
    }

    fn from_parts(writer: WriterAppender, config: FileConfig) -> Self {
        Self {
            writer,
            config: Mutex::new(config),
        }
    }

    fn config_lock(&self) -> MutexGuard<'_, FileConfig> {
        self.config.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// A snapshot of the pending options.
    pub fn config(&self) -> FileConfig {
        self.config_lock().clone()
    }

    /// The configured path of the log file.
    pub fn file_name(&self) -> Option<PathBuf> {
        self.config_lock().file_name().map(PathBuf::from)
    }

    /// Whether the log file is opened in append mode.
    pub fn is_append(&self) -> bool {
        self.config_lock().is_append()
    }

    /// Set the path of the log file.
    ///
    /// Call [`activate_options`](Self::activate_options) to make it take effect.
    pub fn set_file_name(&self, path: impl Into<PathBuf>) {
        self.config_lock().set_file_name(path);
    }

    /// Unset the path of the log file.
    ///
    /// Call [`activate_options`](Self::activate_options) to make it take effect.
    pub fn clear_file_name(&self) {
        self.config_lock().clear_file_name();
    }

    /// Set whether to keep the existing content of the log file when it is opened.
    ///
    /// Call [`activate_options`](Self::activate_options) to make it take effect.
    pub fn set_append(&self, append: bool) {
        self.config_lock().set_append(append);
    }

    /// Set the path and the append mode of the log file together.
    ///
    /// Call [`activate_options`](Self::activate_options) to make it take effect.
    pub fn set_file(&self, path: impl Into<PathBuf>, append: bool) {
        self.config_lock().set_file(path, append);
    }

    /// Apply the pending options.
    ///
    /// The currently open file is closed first. If no path is configured, the appender is left
    /// not ready and `Ok(())` is returned. Activating with unchanged options reopens the same
    /// file; in append mode nothing written before is lost.
    ///
    /// # Errors
    ///
    /// Return an [`ErrorKind::TargetUnavailable`](crate::ErrorKind::TargetUnavailable) error if
    /// the log file cannot be created or opened. The appender is then not ready until a later
    /// activation succeeds.
    pub fn activate_options(&self) -> Result<(), Error> {
        // held until the new target is installed
        let config = self.config_lock();
        self.writer.replace_sink(|| {
            let target = config.open_target()?;
            Ok(target.map(|target| Box::new(target) as Box<dyn Sink>))
        })
    }

    /// Whether a log file is open and records will be written.
    pub fn is_ready(&self) -> bool {
        self.writer.is_ready()
    }

    /// Close the log file, if open.
    ///
    /// Closing an appender that is not ready is a no-op.
    pub fn close(&self) {
        self.writer.close();
    }
}

impl Append for FileAppender {
    fn append(&self, record: &log::Record) -> Result<(), Error> {
        self.writer.append(record)
    }

    fn flush(&self) -> Result<(), Error> {
        self.writer.flush()
    }
}
