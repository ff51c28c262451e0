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

//! JSON configuration loading.

use crate::Error;
use log::debug;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Read the file at `path` and deserialize it from JSON.
///
/// ```no_run
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct AppConfig {
///     app_key: String,
/// }
///
/// # fn example() -> formsign_core::Result<()> {
/// let cfg: AppConfig = formsign_core::config::load_json_config("config.json")?;
/// # Ok(())
/// # }
/// ```
pub fn load_json_config<T: DeserializeOwned>(path: impl AsRef<Path>) -> crate::Result<T> {
    let path = path.as_ref();
    debug!("loading json config from {}", path.display());

    let content = std::fs::read(path).map_err(|e| {
        Error::config_invalid(format!("failed to read config {}", path.display())).with_source(e)
    })?;
    parse_json_config(&content).map_err(|e| {
        Error::config_invalid(format!("failed to parse config {}", path.display()))
            .with_source(e)
    })
}

/// Deserialize JSON configuration from bytes already in memory.
pub fn parse_json_config<T: DeserializeOwned>(content: &[u8]) -> crate::Result<T> {
    serde_json::from_slice(content)
        .map_err(|e| Error::config_invalid("config is not valid json").with_source(e))
}
