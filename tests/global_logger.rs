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
use std::fs;
use std::sync::Arc;

use log::LevelFilter;
use logappend::append::FileAppender;
use logappend::layout::CustomLayout;
use tempfile::TempDir;

struct Thing<'a>(&'a str);

impl fmt::Display for Thing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        log::warn!("formatting wrapping ({})", self.0);
        f.write_str(self.0)
    }
}

#[test]
fn test_global_logger_with_reactivation() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let first = temp_dir.path().join("first.log");
    let second = temp_dir.path().join("second.log");

    let layout = CustomLayout::new(|record| {
        Ok(format!("{} {}", record.level(), record.args()).into_bytes())
    });
    let file = Arc::new(FileAppender::open(layout, &first).unwrap());

    logappend::builder()
        .dispatch(|d| d.filter(LevelFilter::Info).append(file.clone()))
        .apply();

    log::info!("before reactivation");
    log::debug!("filtered out");

    file.set_file(&second, true);
    log::info!("still the first file");
    file.activate_options().unwrap();

    log::error!("I'm logging {}!", Thing("aha"));

    file.clear_file_name();
    file.activate_options().unwrap();
    log::info!("dropped while not ready");

    assert_eq!(
        fs::read_to_string(&first).unwrap(),
        "INFO before reactivation\nINFO still the first file\n"
    );
    assert_eq!(
        fs::read_to_string(&second).unwrap(),
        "WARN formatting wrapping (aha)\nERROR I'm logging aha!\n"
    );
}
