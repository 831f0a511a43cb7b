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

use log::Metadata;
use log::Record;

use crate::Append;
use crate::Error;
use crate::Filter;
use crate::Trap;
use crate::filter::FilterResult;

/// A logger facade that dispatches log records to one or more dispatches.
///
/// Each dispatch contains a set of filters and appenders. Errors raised by appenders are
/// reported to the logger's trap and never abort the caller.
#[derive(Debug)]
pub struct Logger {
    dispatches: Vec<Dispatch>,
    trap: Box<dyn Trap>,
}

impl Logger {
    pub(super) fn new(dispatches: Vec<Dispatch>, trap: Box<dyn Trap>) -> Self {
        Self { dispatches, trap }
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.dispatches
            .iter()
            .any(|dispatch| dispatch.enabled(metadata))
    }

    fn log(&self, record: &Record) {
        for dispatch in &self.dispatches {
            if let Err(err) = dispatch.log(record) {
                let err = Error::new("failed to append record")
                    .with_context("target", record.target())
                    .with_context("args", record.args())
                    .with_source(err);
                self.trap.trap(&err);
            }
        }
    }

    fn flush(&self) {
        for dispatch in &self.dispatches {
            if let Err(err) = dispatch.flush() {
                self.trap.trap(&err);
            }
        }
    }
}

#[derive(Debug)]
pub(super) struct Dispatch {
    filters: Vec<Box<dyn Filter>>,
    appends: Vec<Box<dyn Append>>,
}

impl Dispatch {
    pub(super) fn new(filters: Vec<Box<dyn Filter>>, appends: Vec<Box<dyn Append>>) -> Self {
        debug_assert!(
            !appends.is_empty(),
            "A Dispatch must have at least one appender"
        );

        Self { filters, appends }
    }

    fn enabled(&self, metadata: &Metadata) -> bool {
        for filter in &self.filters {
            match filter.enabled(metadata) {
                FilterResult::Reject => return false,
                FilterResult::Accept => return true,
                FilterResult::Neutral => {}
            }
        }

        true
    }

    fn log(&self, record: &Record) -> Result<(), Error> {
        for filter in &self.filters {
            match filter.matches(record) {
                FilterResult::Reject => return Ok(()),
                FilterResult::Accept => break,
                FilterResult::Neutral => {}
            }
        }

        for append in &self.appends {
            append.append(record)?;
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), Error> {
        for append in &self.appends {
            append.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::Mutex;

    use log::Level;
    use log::LevelFilter;
    use log::Log;

    use super::*;
    use crate::append::Append;

    #[derive(Debug, Default)]
    struct Collect(Mutex<Vec<String>>);

    impl Append for Collect {
        fn append(&self, record: &Record) -> Result<(), Error> {
            self.0.lock().unwrap().push(record.args().to_string());
            Ok(())
        }
    }

    #[derive(Debug)]
    struct Failing;

    impl Append for Failing {
        fn append(&self, _: &Record) -> Result<(), Error> {
            Err(Error::new("broken appender"))
        }
    }

    #[derive(Debug, Default)]
    struct CountTrap(Arc<Mutex<Vec<String>>>);

    impl Trap for CountTrap {
        fn trap(&self, err: &Error) {
            self.0.lock().unwrap().push(err.message().to_string());
        }
    }

    #[test]
    fn test_dispatch_filters_records() {
        let collect = Arc::new(Collect::default());
        let logger = crate::builder()
            .dispatch(|d| d.filter(LevelFilter::Warn).append(collect.clone()))
            .build();

        for (level, message) in [(Level::Error, "kept"), (Level::Info, "filtered")] {
            logger.log(
                &Record::builder()
                    .level(level)
                    .args(format_args!("{message}"))
                    .build(),
            );
        }

        assert_eq!(*collect.0.lock().unwrap(), vec!["kept"]);
    }

    #[test]
    fn test_append_errors_are_trapped() {
        let trapped = Arc::new(Mutex::new(vec![]));
        let collect = Arc::new(Collect::default());
        let logger = crate::builder()
            .trap(CountTrap(trapped.clone()))
            .dispatch(|d| d.append(Failing))
            .dispatch(|d| d.append(collect.clone()))
            .build();

        logger.log(
            &Record::builder()
                .level(Level::Info)
                .args(format_args!("still delivered"))
                .build(),
        );
        logger.flush();

        assert_eq!(*trapped.lock().unwrap(), vec!["failed to append record"]);
        assert_eq!(*collect.0.lock().unwrap(), vec!["still delivered"]);
    }
}
