// Copyright (C) 2025 Kashin Vladislav
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::borrow::Cow;

/// Strips prefix of given string Cow once. The returned flag tells
/// whether the prefix was found and removed.
///
/// Calls `drain` if string is owned and reslices if string is borrowed,
/// so no allocation happens in either case.
pub fn strip_cow_prefix<'a>(cow: Cow<'a, str>, prefix: &str) -> (Cow<'a, str>, bool) {
    match cow {
        Cow::Borrowed(s) => match s.strip_prefix(prefix) {
            Some(stripped) => (Cow::Borrowed(stripped), true),
            None => (Cow::Borrowed(s), false),
        },
        Cow::Owned(mut s) => {
            if s.starts_with(prefix) {
                s.drain(0..prefix.len());
                return (Cow::Owned(s), true);
            }
            (Cow::Owned(s), false)
        }
    }
}

/// Truncates trailing whitespace in place.
pub fn truncate_trailing_whitespace(s: &mut String) {
    let trimmed_len = s.trim_end().len();
    s.truncate(trimmed_len);
}
