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

use log::LevelFilter;
use logappend::append::WriterAppender;

#[test]
fn test_try_apply_only_once() {
    logappend::builder()
        .max_level(LevelFilter::Warn)
        .dispatch(|d| d.append(WriterAppender::default()))
        .try_apply()
        .unwrap();
    assert_eq!(log::max_level(), LevelFilter::Warn);

    let err = logappend::builder()
        .max_level(LevelFilter::Trace)
        .dispatch(|d| d.append(WriterAppender::default()))
        .try_apply()
        .unwrap_err();
    assert_eq!(err.message(), "failed to set global logger");
    assert_eq!(log::max_level(), LevelFilter::Warn);
}
