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

//! Core components for signing and verifying request parameters.
//!
//! This crate provides the foundational types shared by the formsign ecosystem.
//!
//! ## Overview
//!
//! - **Error**: A single error type carrying an [`ErrorKind`] that callers can match on
//! - **Hashing**: Digest, HMAC and encoding helpers, plus the [`DigestAlgorithm`] selector
//! - **Env**: An abstraction over environment variable access
//! - **Config**: JSON configuration loading
//!
//! ## Example
//!
//! ```
//! use formsign_core::hash::hex_digest;
//! use formsign_core::DigestAlgorithm;
//!
//! # fn example() -> formsign_core::Result<()> {
//! let alg: DigestAlgorithm = "sha256".parse()?;
//! let digest = hex_digest(alg, b"hello");
//! assert_eq!(digest.len(), 64);
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time manipulation utilities
//! - [`config`]: JSON configuration loading
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod config;
pub mod hash;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};
mod env;
pub use env::{Env, OsEnv, StaticEnv};
pub use hash::DigestAlgorithm;
