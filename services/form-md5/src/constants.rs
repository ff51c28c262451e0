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

// Reserved parameter names.
pub const TIME: &str = "Time";
pub const SIGN: &str = "Sign";
pub const SIGN_LOWER: &str = "sign";
pub const ACT: &str = "Act";
pub const ACT_LOWER: &str = "act";

/// Keys excluded from the canonical string by default.
pub const DEFAULT_EXCLUDE: [&str; 4] = [SIGN_LOWER, SIGN, ACT_LOWER, ACT];

/// Maximum age in seconds of a signed `Time` parameter.
pub const DEFAULT_FRESHNESS_WINDOW: u64 = 60;

// Env values used in formsign.
pub const FORMSIGN_APP_KEY: &str = "FORMSIGN_APP_KEY";
pub const FORMSIGN_FRESHNESS_WINDOW: &str = "FORMSIGN_FRESHNESS_WINDOW";
