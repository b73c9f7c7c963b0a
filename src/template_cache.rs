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

use std::sync::Arc;

use dashmap::DashMap;
use log::trace;

use crate::phoneformat::FormatTemplate;

/// Parsed templates keyed by their source pattern. Safe to share between
/// threads; entries are never evicted.
pub struct TemplateCache {
    cache: DashMap<String, Arc<FormatTemplate>>,
}

impl TemplateCache {
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    pub fn get_template(&self, pattern: &str) -> Arc<FormatTemplate> {
        if let Some(template) = self.cache.get(pattern) {
            return template.value().clone();
        }
        let entry = self
            .cache
            .entry(pattern.to_string())
            .or_insert_with(|| {
                trace!("Parsing format template {:?}", pattern);
                Arc::new(FormatTemplate::parse(pattern))
            });
        entry.value().clone()
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Default for TemplateCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::TemplateCache;

    #[test]
    fn same_pattern_is_parsed_once() {
        let cache = TemplateCache::with_capacity(4);
        assert!(cache.is_empty());

        let first = cache.get_template("###-####");
        let second = cache.get_template("###-####");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.digit_slots(), 7);

        cache.get_template("## ##");
        assert_eq!(cache.len(), 2);
    }
}
