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

//! MD5 form signature.
//!
//! Request parameters are sorted, rendered as `k1=v1&k2=v2`, suffixed with
//! `:` and a shared app key, then hashed with MD5. A `Time` parameter limits
//! how long a signature stays valid.
//!
//! ```
//! use formsign_form_md5::{produce_sign, validate_sign, ParameterSet};
//!
//! let mut params = ParameterSet::from_query("uid=7&name=alice");
//! let sign = produce_sign(&mut params, "app-key");
//! params.insert("Sign", sign);
//!
//! validate_sign(&params, "app-key").expect("fresh signature must verify");
//! ```

mod constants;

mod config;
pub use config::Config;

mod params;
pub use params::{check_not_empty, is_blank_value, ParameterSet};

mod template;
pub use template::{canonicalize, Template};

mod sign_request;
pub use sign_request::{produce_sign, validate_sign, Signer};
