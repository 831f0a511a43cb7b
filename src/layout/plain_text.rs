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

use jiff::Zoned;
use jiff::tz::TimeZone;

use crate::Error;
use crate::layout::Layout;
use crate::layout::filename;

/// A layout that formats log record as plain text.
///
/// Output format:
///
/// ```text
/// 2024-08-11T22:44:57.172105+08:00 ERROR simple: simple.rs:21 Hello error!
/// 2024-08-11T22:44:57.172219+08:00  WARN simple: simple.rs:22 Hello warn!
/// 2024-08-11T22:44:57.172276+08:00  INFO simple: simple.rs:23 Hello info!
/// ```
///
/// By default, the system time zone is used for timestamps.
///
/// # Examples
///
/// ```
/// use logappend::layout::PlainTextLayout;
///
/// let plain_text_layout = PlainTextLayout::default();
/// ```
#[derive(Debug, Clone, Default)]
pub struct PlainTextLayout {
    tz: Option<TimeZone>,
}

impl PlainTextLayout {
    /// Set the time zone used to render timestamps.
    ///
    /// # Examples
    ///
    /// ```
    /// use jiff::tz::TimeZone;
    /// use logappend::layout::PlainTextLayout;
    ///
    /// let layout = PlainTextLayout::default().timezone(TimeZone::UTC);
    /// ```
    pub fn timezone(mut self, tz: TimeZone) -> Self {
        self.tz = Some(tz);
        self
    }
}

impl Layout for PlainTextLayout {
    fn format(&self, record: &log::Record) -> Result<Vec<u8>, Error> {
        let time = match self.tz.clone() {
            Some(tz) => Zoned::now().with_time_zone(tz),
            None => Zoned::now(),
        }
        .strftime("%Y-%m-%dT%H:%M:%S.%6f%:z");
        let level = record.level().as_str();
        let target = record.target();
        let file = filename(record);
        let line = record.line().unwrap_or_default();
        let message = record.args();

        let text = format!("{time} {level:>5} {target}: {file}:{line} {message}");
        Ok(text.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use log::Level;

    use super::*;

    #[test]
    fn test_plain_text_format() {
        let layout = PlainTextLayout::default().timezone(TimeZone::UTC);
        let bytes = layout
            .format(
                &log::Record::builder()
                    .args(format_args!("Hello plain text!"))
                    .level(Level::Warn)
                    .target("app::db")
                    .file(Some("src/db/pool.rs"))
                    .line(Some(42))
                    .build(),
            )
            .unwrap();

        let text = String::from_utf8(bytes).unwrap();
        assert!(
            text.ends_with("  WARN app::db: pool.rs:42 Hello plain text!"),
            "unexpected output: {text}"
        );
        assert!(text.contains("+00:00"), "unexpected timestamp: {text}");
    }
}
