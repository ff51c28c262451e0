// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

use crate::constants::DEFAULT_EXCLUDE;
use crate::ParameterSet;

/// Template decides how a [`ParameterSet`] is rendered into a canonical string.
///
/// The canonical string is `header`, then every retained `key + kv_sep + value`
/// (or only `value` when `has_key` is false) joined by `join_sep`, then
/// `appendix`. Names listed in `exclude` never take part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Template {
    /// Written before the first entry.
    pub header: String,
    /// Whether entries render as `key + kv_sep + value` or as `value` alone.
    pub has_key: bool,
    /// Written between two entries.
    pub join_sep: String,
    /// Written between a key and its value.
    pub kv_sep: String,
    /// Written after the last entry.
    pub appendix: String,
    /// Names that never take part, compared case-sensitively.
    pub exclude: BTreeSet<String>,
}

impl Default for Template {
    fn default() -> Self {
        Self {
            header: String::new(),
            has_key: true,
            join_sep: "&".to_string(),
            kv_sep: "=".to_string(),
            appendix: String::new(),
            exclude: BTreeSet::new(),
        }
    }
}

impl Template {
    /// Template of the MD5 form signature: `k1=v1&k2=v2:app_key`, without
    /// `sign`, `Sign`, `act` and `Act`.
    pub fn form_md5(app_key: &str) -> Self {
        Self::default()
            .with_appendix(format!(":{app_key}"))
            .with_exclude(DEFAULT_EXCLUDE)
    }

    /// Set the header.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    /// Set whether keys are rendered.
    pub fn with_has_key(mut self, has_key: bool) -> Self {
        self.has_key = has_key;
        self
    }

    /// Set the separator between entries.
    pub fn with_join_sep(mut self, join_sep: impl Into<String>) -> Self {
        self.join_sep = join_sep.into();
        self
    }

    /// Set the separator between key and value.
    pub fn with_kv_sep(mut self, kv_sep: impl Into<String>) -> Self {
        self.kv_sep = kv_sep.into();
        self
    }

    /// Set the appendix.
    pub fn with_appendix(mut self, appendix: impl Into<String>) -> Self {
        self.appendix = appendix.into();
        self
    }

    /// Replace the exclusion set.
    pub fn with_exclude<I, S>(mut self, exclude: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = exclude.into_iter().map(Into::into).collect();
        self
    }

    /// Render `params` into the canonical string.
    ///
    /// Names are visited in ascending byte order. A name whose value list is
    /// empty is skipped without leaving a separator behind.
    pub fn canonicalize(&self, params: &ParameterSet) -> String {
        let mut s = String::with_capacity(self.header.len() + self.appendix.len());
        s.push_str(&self.header);

        let entries = params
            .iter()
            .filter(|(k, _)| !self.exclude.contains(k.as_str()))
            .filter_map(|(k, vs)| vs.first().map(|v| (k, v)));
        for (i, (k, v)) in entries.enumerate() {
            if i > 0 {
                s.push_str(&self.join_sep);
            }
            if self.has_key {
                s.push_str(k);
                s.push_str(&self.kv_sep);
            }
            s.push_str(v);
        }

        s.push_str(&self.appendix);
        s
    }
}

/// Render `params` with `template`. An absent parameter set renders as the
/// empty string.
pub fn canonicalize(params: Option<&ParameterSet>, template: &Template) -> String {
    params
        .map(|p| template.canonicalize(p))
        .unwrap_or_default()
}
