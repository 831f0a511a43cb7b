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

//! Appender for writing log records to a file.
//!
//! # Example
//!
//!```no_run
//! use logappend::append::file::FileAppenderBuilder;
//! use logappend::layout::PlainTextLayout;
//!
//! let file = FileAppenderBuilder::new("/path/to/file.log")
//!     .append(true)
//!     .layout(PlainTextLayout::default())
//!     .build()
//!     .unwrap();
//!
//! logappend::builder()
//!     .dispatch(|d| d.filter(log::LevelFilter::Trace).append(file))
//!     .apply();
//!
//! log::info!("This log will be written to a file.");
//! ```

pub use self::append::FileAppender;
pub use self::append::FileAppenderBuilder;
pub use self::config::FileConfig;
pub use self::target::FileTarget;

mod append;
mod config;
mod target;
