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

use std::fmt::{Debug, Formatter};

use formsign_core::hash::hex_md5;
use formsign_core::time::{now_unix, parse_unix};
use formsign_core::utils::Redact;
use formsign_core::{Error, Result};
use log::debug;

use crate::constants::*;
use crate::{Config, ParameterSet, Template};

/// Signer produces and validates MD5 form signatures.
///
/// The string to sign is every parameter except the excluded ones, sorted by
/// name and rendered as `k1=v1&k2=v2`, followed by `:` and the app key. Spaces
/// are replaced with `+` before hashing so that a `+` decoded as space on the
/// way still verifies. The signature is the lowercase hex MD5 of that string.
///
/// ```
/// use formsign_form_md5::{ParameterSet, Signer};
///
/// let signer = Signer::new("app-key");
/// let mut params = ParameterSet::from_query("uid=7&act=login");
/// let sign = signer.sign(&mut params);
/// params.insert("Sign", sign);
///
/// assert!(signer.verify(&params).is_ok());
/// ```
#[derive(Clone)]
pub struct Signer {
    app_key: String,
    freshness_window: u64,
    template: Template,
}

impl Debug for Signer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signer")
            .field("app_key", &Redact::from(&self.app_key))
            .field("freshness_window", &self.freshness_window)
            .field("exclude", &self.template.exclude)
            .finish()
    }
}

impl Signer {
    /// Create a signer with the default exclusions and freshness window.
    pub fn new(app_key: &str) -> Self {
        Self {
            app_key: app_key.to_string(),
            freshness_window: DEFAULT_FRESHNESS_WINDOW,
            template: Template::form_md5(app_key),
        }
    }

    /// Build a signer from config. `app_key` is required.
    pub fn from_config(cfg: &Config) -> Result<Self> {
        let app_key = cfg
            .app_key
            .as_deref()
            .ok_or_else(|| Error::config_invalid("app_key is required"))?;

        Ok(Self::new(app_key)
            .with_freshness_window(cfg.freshness_window)
            .with_template(cfg.template.clone()))
    }

    /// Replace the template. Its appendix is overwritten with `:` and the
    /// app key.
    pub fn with_template(mut self, template: Template) -> Self {
        self.template = template.with_appendix(format!(":{}", self.app_key));
        self
    }

    /// Set the maximum age in seconds of the `Time` parameter.
    pub fn with_freshness_window(mut self, secs: u64) -> Self {
        self.freshness_window = secs;
        self
    }

    /// Replace the names excluded from the string to sign.
    pub fn with_exclude<I, S>(mut self, exclude: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.template = self.template.with_exclude(exclude);
        self
    }

    /// Build the string to sign for `params`.
    pub fn string_to_sign(&self, params: &ParameterSet) -> String {
        self.template.canonicalize(params).replace(' ', "+")
    }

    /// Compute the hex MD5 signature of `params` as they are.
    pub fn signature(&self, params: &ParameterSet) -> String {
        let string_to_sign = self.string_to_sign(params);
        debug!("string to sign: {}", self.redact_app_key(&string_to_sign));
        hex_md5(string_to_sign.as_bytes())
    }

    /// Stamp `params` with the current `Time` and return the signature.
    pub fn sign(&self, params: &mut ParameterSet) -> String {
        self.sign_at(params, now_unix())
    }

    /// Stamp `params` with `time` (Unix seconds) and return the signature.
    pub fn sign_at(&self, params: &mut ParameterSet, time: i64) -> String {
        params.insert(TIME, time.to_string());
        self.signature(params)
    }

    /// Validate the `Sign` parameter of `params` against the current time.
    pub fn verify(&self, params: &ParameterSet) -> Result<()> {
        self.verify_at(params, now_unix())
    }

    /// Validate the `Sign` parameter of `params` as if the time were `now`.
    ///
    /// A missing `Time` skips the freshness check. A `Time` in the future is
    /// accepted.
    pub fn verify_at(&self, params: &ParameterSet, now: i64) -> Result<()> {
        if let Some(t) = params.get(TIME).filter(|v| !v.is_empty()) {
            let signed_at = parse_unix(t)?;
            let age = now.saturating_sub(signed_at);
            if age > i64::try_from(self.freshness_window).unwrap_or(i64::MAX) {
                debug!("reject signature signed {age}s ago");
                return Err(Error::expired_signature(format!(
                    "signature is {age}s old, window is {}s",
                    self.freshness_window
                )));
            }
        }

        let string_to_sign = self.string_to_sign(params);
        let expected = hex_md5(string_to_sign.as_bytes());
        let actual = params
            .get(SIGN)
            .filter(|v| !v.is_empty())
            .or_else(|| params.get(SIGN_LOWER))
            .unwrap_or_default();

        if !expected.eq_ignore_ascii_case(actual) {
            debug!(
                "reject signature, string to sign: {}, expected: {expected}",
                self.redact_app_key(&string_to_sign)
            );
            return Err(Error::signature_mismatch(&string_to_sign, &expected));
        }
        Ok(())
    }

    fn redact_app_key(&self, string_to_sign: &str) -> String {
        let appendix = self.template.appendix.replace(' ', "+");
        match string_to_sign.strip_suffix(&appendix) {
            Some(head) => format!("{head}:{:?}", Redact::from(&self.app_key)),
            None => string_to_sign.to_string(),
        }
    }
}

/// Stamp `params` with the current `Time` and return the MD5 form signature.
pub fn produce_sign(params: &mut ParameterSet, app_key: &str) -> String {
    Signer::new(app_key).sign(params)
}

/// Validate the `Sign` (or `sign`) parameter of `params` with `app_key`.
pub fn validate_sign(params: &ParameterSet, app_key: &str) -> Result<()> {
    Signer::new(app_key).verify(params)
}
