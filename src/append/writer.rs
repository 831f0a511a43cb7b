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

use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::Error;
use crate::Layout;
use crate::Trap;
use crate::append::Append;
use crate::append::Sink;
use crate::layout::PlainTextLayout;
use crate::trap::DefaultTrap;

type SinkSlot = Option<Box<dyn Sink>>;

/// An appender that formats log records with a [`Layout`] and writes them into a [`Sink`].
///
/// The appender owns at most one sink at any time. While it has no sink, it is not ready and
/// every record is silently dropped.
///
/// # Examples
///
/// ```
/// use logappend::append::WriterAppender;
/// use logappend::append::WriterSink;
/// use logappend::layout::PlainTextLayout;
///
/// let append = WriterAppender::new(PlainTextLayout::default())
///     .with_sink(WriterSink::new(std::io::stderr()));
/// assert!(append.is_ready());
/// ```
#[derive(Debug)]
pub struct WriterAppender {
    layout: Box<dyn Layout>,
    trap: Box<dyn Trap>,
    sink: Mutex<SinkSlot>,
}

impl Default for WriterAppender {
    fn default() -> Self {
        Self::new(PlainTextLayout::default())
    }
}

impl WriterAppender {
    /// Create a new appender with no sink bound.
    pub fn new(layout: impl Into<Box<dyn Layout>>) -> Self {
        Self {
            layout: layout.into(),
            trap: Box::new(DefaultTrap::default()),
            sink: Mutex::new(None),
        }
    }

    /// Bind the given sink, closing the one previously bound, if any.
    pub fn with_sink(mut self, sink: impl Into<Box<dyn Sink>>) -> Self {
        let slot = self.sink.get_mut().unwrap_or_else(|e| e.into_inner());
        close_slot(slot, self.trap.as_ref());
        *slot = Some(sink.into());
        self
    }

    /// Set the trap for errors that cannot be returned to the caller.
    ///
    /// Default to [`DefaultTrap`].
    pub fn with_trap(mut self, trap: impl Into<Box<dyn Trap>>) -> Self {
        self.trap = trap.into();
        self
    }

    /// Whether a sink is bound and records will be written.
    pub fn is_ready(&self) -> bool {
        self.sink().is_some()
    }

    /// Replace the bound sink with the one produced by `open`.
    ///
    /// The current sink is closed before `open` runs, and the whole exchange happens under the
    /// sink lock, so two sinks are never open at the same time and no write observes a sink
    /// being closed. If `open` returns `Ok(None)` or an error, the appender stays not ready.
    pub fn replace_sink<F>(&self, open: F) -> Result<(), Error>
    where
        F: FnOnce() -> Result<Option<Box<dyn Sink>>, Error>,
    {
        let mut slot = self.sink();
        close_slot(&mut slot, self.trap.as_ref());
        *slot = open()?;
        Ok(())
    }

    /// Close the bound sink, if any.
    ///
    /// Closing a not ready appender is a no-op. Errors raised while closing are reported to the
    /// trap.
    pub fn close(&self) {
        let mut slot = self.sink();
        close_slot(&mut slot, self.trap.as_ref());
    }

    fn sink(&self) -> MutexGuard<'_, SinkSlot> {
        self.sink.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn close_slot(slot: &mut SinkSlot, trap: &dyn Trap) {
    if let Some(mut sink) = slot.take() {
        if let Err(err) = sink.close() {
            let err = Error::new("failed to close sink").with_source(err);
            trap.trap(&err);
        }
    }
}

impl Append for WriterAppender {
    fn append(&self, record: &log::Record) -> Result<(), Error> {
        // format outside the lock; a layout may log recursively
        let mut bytes = self.layout.format(record)?;
        bytes.push(b'\n');

        let mut slot = self.sink();
        let Some(sink) = slot.as_mut() else {
            return Ok(());
        };
        sink.write_all(&bytes).map_err(Error::from_io_error)
    }

    fn flush(&self) -> Result<(), Error> {
        let mut slot = self.sink();
        match slot.as_mut() {
            Some(sink) => sink.flush().map_err(Error::from_io_error),
            None => Ok(()),
        }
    }
}

impl Drop for WriterAppender {
    fn drop(&mut self) {
        let slot = self.sink.get_mut().unwrap_or_else(|e| e.into_inner());
        close_slot(slot, self.trap.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Arc;
    use std::sync::Mutex;

    use super::*;
    use crate::layout::CustomLayout;

    #[derive(Debug, Default, Clone)]
    struct Events(Arc<Mutex<Vec<String>>>);

    impl Events {
        fn push(&self, event: impl Into<String>) {
            self.0.lock().unwrap().push(event.into());
        }

        fn take(&self) -> Vec<String> {
            std::mem::take(&mut *self.0.lock().unwrap())
        }
    }

    #[derive(Debug)]
    struct RecordingSink {
        name: &'static str,
        events: Events,
        closed: bool,
    }

    impl RecordingSink {
        fn open(name: &'static str, events: &Events) -> Self {
            events.push(format!("open {name}"));
            Self {
                name,
                events: events.clone(),
                closed: false,
            }
        }
    }

    impl Sink for RecordingSink {
        fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
            let text = String::from_utf8_lossy(bytes);
            self.events
                .push(format!("write {} {}", self.name, text.trim_end()));
            Ok(())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }

        fn close(&mut self) -> io::Result<()> {
            if !self.closed {
                self.closed = true;
                self.events.push(format!("close {}", self.name));
            }
            Ok(())
        }
    }

    fn message_layout() -> CustomLayout {
        CustomLayout::new(|record| Ok(record.args().to_string().into_bytes()))
    }

    fn append_message(append: &WriterAppender, message: &str) {
        append
            .append(
                &log::Record::builder()
                    .args(format_args!("{message}"))
                    .build(),
            )
            .unwrap();
    }

    #[test]
    fn test_not_ready_drops_records() {
        let append = WriterAppender::new(message_layout());
        assert!(!append.is_ready());
        append_message(&append, "dropped");
        append.flush().unwrap();
        append.close();
        append.close();
    }

    #[test]
    fn test_replace_sink_closes_before_open() {
        let events = Events::default();
        let append = WriterAppender::new(message_layout());

        append
            .replace_sink(|| Ok(Some(RecordingSink::open("first", &events).into())))
            .unwrap();
        append_message(&append, "one");
        append
            .replace_sink(|| Ok(Some(RecordingSink::open("second", &events).into())))
            .unwrap();
        append_message(&append, "two");
        drop(append);

        assert_eq!(
            events.take(),
            vec![
                "open first",
                "write first one",
                "close first",
                "open second",
                "write second two",
                "close second",
            ]
        );
    }

    #[test]
    fn test_failed_replace_leaves_not_ready() {
        let events = Events::default();
        let append = WriterAppender::new(message_layout())
            .with_sink(RecordingSink::open("first", &events));
        assert!(append.is_ready());

        let result = append.replace_sink(|| Err(Error::new("cannot open")));
        assert!(result.is_err());
        assert!(!append.is_ready());

        append_message(&append, "dropped");
        assert_eq!(events.take(), vec!["open first", "close first"]);
    }

    #[test]
    fn test_with_sink_closes_previous_sink() {
        let events = Events::default();
        let append = WriterAppender::new(message_layout())
            .with_sink(RecordingSink::open("first", &events))
            .with_sink(RecordingSink::open("second", &events));
        append_message(&append, "hello");
        drop(append);

        assert_eq!(
            events.take(),
            vec![
                "open first",
                "open second",
                "close first",
                "write second hello",
                "close second",
            ]
        );
    }

    #[test]
    fn test_close_is_idempotent() {
        let events = Events::default();
        let append = WriterAppender::new(message_layout())
            .with_sink(RecordingSink::open("only", &events));

        append.close();
        append.close();
        assert!(!append.is_ready());
        drop(append);

        assert_eq!(events.take(), vec!["open only", "close only"]);
    }
}
