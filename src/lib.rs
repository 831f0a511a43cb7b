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

//! Logappend provides appenders whose output target can be reconfigured at runtime, with options
//! that are set independently and applied together on activation.
//!
//! # Overview
//!
//! A [`FileAppender`](append::FileAppender) accumulates its options, the path of the log file and
//! whether to append to it, through setters that perform no I/O. Calling
//! [`activate_options`](append::FileAppender::activate_options) closes the file currently open
//! and opens the configured one. Records logged while no file is open are silently dropped, so a
//! misconfigured appender never brings its host down.
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use logappend::append::FileAppender;
//! use logappend::layout::PlainTextLayout;
//!
//! let file = Arc::new(FileAppender::open(PlainTextLayout::default(), "logs/app.log").unwrap());
//!
//! logappend::builder()
//!     .dispatch(|d| d.filter(log::LevelFilter::Info).append(file.clone()))
//!     .apply();
//!
//! log::info!("written to logs/app.log");
//!
//! // switch to another file, keeping its content
//! file.set_file("logs/app-2.log", true);
//! file.activate_options().unwrap();
//!
//! log::info!("written to logs/app-2.log");
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod append;
pub mod filter;
pub mod layout;
pub mod trap;

mod error;
mod logger;

pub use append::Append;
pub use error::Error;
pub use error::ErrorKind;
pub use filter::Filter;
pub use layout::Layout;
pub use logger::*;
pub use trap::Trap;
