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
use std::path::Path;

use formsign_core::config::load_json_config;
use formsign_core::utils::Redact;
use formsign_core::Env;
use formsign_core::Result;
use log::warn;
use serde::Deserialize;
use serde::Serialize;

use crate::constants::*;
use crate::Template;

/// Config for the MD5 form signature.
///
/// Every field has a default, so a JSON file only needs the fields it changes:
///
/// ```json
/// {
///   "app_key": "secret",
///   "freshness_window": 120,
///   "template": { "join_sep": ";", "exclude": ["Sign"] }
/// }
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Shared secret appended to the canonical string.
    pub app_key: Option<String>,
    /// Maximum age in seconds of the `Time` parameter.
    pub freshness_window: u64,
    /// How parameters are rendered into the string to sign.
    ///
    /// The appendix is always `:` followed by `app_key`, any configured
    /// appendix is replaced when the signer is built.
    pub template: Template,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_key: None,
            freshness_window: DEFAULT_FRESHNESS_WINDOW,
            template: Template::default().with_exclude(DEFAULT_EXCLUDE),
        }
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("app_key", &Redact::from(&self.app_key))
            .field("freshness_window", &self.freshness_window)
            .field("template", &self.template)
            .finish()
    }
}

impl Config {
    /// Load config from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        load_json_config(path)
    }

    /// Override fields with environment variables.
    ///
    /// An unparsable `FORMSIGN_FRESHNESS_WINDOW` is ignored with a warning.
    pub fn with_env(mut self, env: &dyn Env) -> Self {
        if let Some(v) = env.var(FORMSIGN_APP_KEY) {
            self.app_key = Some(v);
        }
        if let Some(v) = env.var(FORMSIGN_FRESHNESS_WINDOW) {
            match v.parse() {
                Ok(secs) => self.freshness_window = secs,
                Err(e) => warn!("ignore invalid {FORMSIGN_FRESHNESS_WINDOW} {v:?}: {e}"),
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formsign_core::{ErrorKind, StaticEnv};
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_default() {
        let cfg = Config::default();
        assert_eq!(cfg.app_key, None);
        assert_eq!(cfg.freshness_window, 60);
        assert_eq!(
            cfg.template.exclude.iter().collect::<Vec<_>>(),
            vec!["Act", "Sign", "act", "sign"]
        );
        assert_eq!(cfg.template.join_sep, "&");
    }

    #[test]
    fn test_with_env() {
        let env = StaticEnv::from_iter([
            (FORMSIGN_APP_KEY, "secret"),
            (FORMSIGN_FRESHNESS_WINDOW, "300"),
        ]);
        let cfg = Config::default().with_env(&env);
        assert_eq!(cfg.app_key.as_deref(), Some("secret"));
        assert_eq!(cfg.freshness_window, 300);
    }

    #[test]
    fn test_with_env_keeps_window_on_invalid_value() {
        let env = StaticEnv::from_iter([(FORMSIGN_FRESHNESS_WINDOW, "soon")]);
        let cfg = Config::default().with_env(&env);
        assert_eq!(cfg.freshness_window, 60);
        assert_eq!(cfg.app_key, None);
    }

    #[test]
    fn test_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        let content = r#"{"app_key": "secret", "template": {"kv_sep": ":", "exclude": ["sig"]}}"#;
        f.write_all(content.as_bytes()).unwrap();

        let cfg = Config::from_file(f.path()).unwrap();
        assert_eq!(cfg.app_key.as_deref(), Some("secret"));
        assert_eq!(cfg.freshness_window, 60);
        assert_eq!(
            cfg.template,
            Template::default().with_kv_sep(":").with_exclude(["sig"])
        );
    }

    #[test]
    fn test_from_file_malformed() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(br#"{"freshness_window": "soon"}"#).unwrap();

        let err = Config::from_file(f.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }

    #[test]
    fn test_debug_redacts_app_key() {
        let cfg = Config {
            app_key: Some("a-long-shared-secret".to_string()),
            ..Default::default()
        };
        let printed = format!("{cfg:?}");
        assert!(!printed.contains("a-long-shared-secret"));
        assert!(printed.contains("a-l***ret"));
    }
}
