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

use std::fmt;
use std::io;
use std::io::Write;

/// A place where formatted log records are written to.
///
/// A sink is exclusively owned by one appender. Once [`Sink::close`] has been called, the sink
/// must refuse further writes, and closing it again must be a no-op.
pub trait Sink: fmt::Debug + Send + 'static {
    /// Write all the given bytes to the sink.
    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()>;

    /// Flush any buffered bytes.
    fn flush(&mut self) -> io::Result<()>;

    /// Release the underlying resource.
    fn close(&mut self) -> io::Result<()>;
}

impl<T: Sink> From<T> for Box<dyn Sink> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}

/// A [`Sink`] that adapts any [`Write`] implementation, such as stdout or an in-memory buffer.
///
/// # Examples
///
/// ```
/// use logappend::append::WriterSink;
///
/// let sink = WriterSink::new(std::io::stderr());
/// ```
pub struct WriterSink<W> {
    writer: Option<W>,
}

impl<W> fmt::Debug for WriterSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterSink")
            .field("closed", &self.writer.is_none())
            .finish()
    }
}

impl<W: Write + Send + 'static> WriterSink<W> {
    /// Create a new sink writing into `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Some(writer),
        }
    }

    /// Release the sink and return the wrapped writer, if it has not been closed.
    pub fn into_inner(self) -> Option<W> {
        self.writer
    }
}

impl<W: Write + Send + 'static> Sink for WriterSink<W> {
    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        match self.writer.as_mut() {
            Some(writer) => writer.write_all(bytes),
            None => Err(closed_error()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.writer.as_mut() {
            Some(writer) => writer.flush(),
            None => Ok(()),
        }
    }

    fn close(&mut self) -> io::Result<()> {
        match self.writer.take() {
            Some(mut writer) => writer.flush(),
            None => Ok(()),
        }
    }
}

pub(crate) fn closed_error() -> io::Error {
    io::Error::other("sink has been closed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_sink_refuses_writes_after_close() {
        let mut sink = WriterSink::new(Vec::<u8>::new());
        sink.write_all(b"before").unwrap();
        sink.close().unwrap();
        sink.close().unwrap();

        assert!(sink.write_all(b"after").is_err());
        assert!(sink.flush().is_ok());
        assert!(sink.into_inner().is_none());
    }

    #[test]
    fn test_writer_sink_into_inner() {
        let mut sink = WriterSink::new(Vec::<u8>::new());
        sink.write_all(b"hello").unwrap();
        assert_eq!(sink.into_inner().unwrap(), b"hello");
    }
}
