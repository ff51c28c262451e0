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

//! RSA PKCS#1 v1.5 signatures over MD5, SHA1 and SHA256 digests.
//!
//! Keys and signatures are exchanged as base64: private keys wrap PKCS#1 or
//! PKCS#8 DER, public keys wrap PKIX DER.
//!
//! ```no_run
//! use formsign_core::DigestAlgorithm;
//! use formsign_rsa::{sign_base64, verify_base64};
//!
//! # fn example(private_key: &str, public_key: &str) -> formsign_core::Result<()> {
//! let alg: DigestAlgorithm = "sha256".parse()?;
//! let signature = sign_base64(alg, private_key, "amount=100")?;
//! verify_base64(alg, public_key, "amount=100", &signature)?;
//! # Ok(())
//! # }
//! ```

mod key;
pub use key::{
    parse_private_key, parse_private_key_der, parse_public_key, parse_public_key_der,
    public_key_from_components, MAX_MODULUS_BITS,
};

mod sign_request;
pub use sign_request::{sign, sign_base64, verify, verify_base64};

pub use rsa::{RsaPrivateKey, RsaPublicKey};
