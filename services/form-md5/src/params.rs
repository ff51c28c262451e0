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

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::collections::HashMap;

use formsign_core::Error;
use formsign_core::Result;
use http::header::CONTENT_TYPE;
use http::request::Parts;
use http::Method;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// ParameterSet holds the request parameters that take part in signing.
///
/// Every name maps to an ordered list of values. Only the first value of a
/// name is signed, the rest are kept so a parsed request round-trips.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    values: BTreeMap<String, Vec<String>>,
}

impl ParameterSet {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `application/x-www-form-urlencoded` data from a query string.
    ///
    /// A leading `?` is ignored. Repeated names append values in order.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_form(query.as_bytes())
    }

    /// Parse an `application/x-www-form-urlencoded` body.
    pub fn from_form(body: &[u8]) -> Self {
        let mut params = Self::new();
        params.extend_form(body);
        params
    }

    /// Collect the parameters of an incoming request.
    ///
    /// Query parameters are always read. A `POST`, `PUT` or `PATCH` request
    /// with a form content type contributes its body as well, and body values
    /// come before query values of the same name.
    pub fn from_request(parts: &Parts, body: &[u8]) -> Self {
        let mut params = Self::new();
        if has_form_body(parts) {
            params.extend_form(body);
        }
        if let Some(query) = parts.uri.query() {
            params.extend_form(query.as_bytes());
        }
        params
    }

    fn extend_form(&mut self, input: &[u8]) {
        for (k, v) in form_urlencoded::parse(input) {
            self.append(k.into_owned(), v.into_owned());
        }
    }

    /// Set `key` to exactly one value, replacing whatever was there.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), vec![value.into()]);
    }

    /// Append a value to `key`.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.entry(key.into()).or_default().push(value.into());
    }

    /// Set all values of `key`. An empty list keeps the key but it will be
    /// skipped when signing.
    pub fn insert_all(&mut self, key: impl Into<String>, values: Vec<String>) {
        self.values.insert(key.into(), values);
    }

    /// First value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .and_then(|v| v.first())
            .map(String::as_str)
    }

    /// All values of `key`.
    pub fn get_all(&self, key: &str) -> &[String] {
        self.values.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Remove `key`, returning its values.
    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.values.remove(key)
    }

    /// Returns true if `key` is present, even with no values.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if there are no names.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate names with their values, sorted ascending by the bytes of the name.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Vec<String>> {
        self.values.iter()
    }

    /// Encode as `application/x-www-form-urlencoded`.
    pub fn to_form(&self) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        for (k, vs) in &self.values {
            for v in vs {
                ser.append_pair(k, v);
            }
        }
        ser.finish()
    }
}

impl<'a> IntoIterator for &'a ParameterSet {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = btree_map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParameterSet {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.append(k, v);
        }
        params
    }
}

impl From<HashMap<String, Vec<String>>> for ParameterSet {
    fn from(values: HashMap<String, Vec<String>>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }
}

fn has_form_body(parts: &Parts) -> bool {
    if !matches!(parts.method, Method::POST | Method::PUT | Method::PATCH) {
        return false;
    }
    parts
        .headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|v| v.trim().eq_ignore_ascii_case(FORM_CONTENT_TYPE))
}

/// Check that every name in `names` carries a non-blank value.
///
/// `GET` requests are checked against the query string, `POST` requests
/// against a form-encoded body only. Other methods are rejected.
pub fn check_not_empty(parts: &Parts, body: &[u8], names: &[&str]) -> Result<()> {
    if names.is_empty() {
        return Ok(());
    }

    let params = match parts.method {
        Method::GET => ParameterSet::from_query(parts.uri.query().unwrap_or_default()),
        Method::POST if has_form_body(parts) => ParameterSet::from_form(body),
        Method::POST => ParameterSet::new(),
        _ => {
            return Err(Error::request_invalid(format!(
                "method {} is not GET or POST",
                parts.method
            )))
        }
    };

    for name in names {
        if params.get(name).unwrap_or_default().trim().is_empty() {
            return Err(Error::request_invalid(format!("param({name}) is invalid")));
        }
    }
    Ok(())
}

/// Returns true if any value is empty or reads as `null` / `(null)`.
pub fn is_blank_value<S: AsRef<str>>(values: &[S]) -> bool {
    values.iter().any(|v| {
        let v = v.as_ref();
        let trimmed = v.trim();
        v.is_empty()
            || trimmed.eq_ignore_ascii_case("null")
            || trimmed.eq_ignore_ascii_case("(null)")
    })
}
