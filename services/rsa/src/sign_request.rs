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

use formsign_core::hash::{base64_decode, base64_encode, digest};
use formsign_core::{DigestAlgorithm, Error, Result};
use log::debug;
use md5::Md5;
use rsa::{Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use sha1::Sha1;
use sha2::Sha256;

use crate::{parse_private_key, parse_public_key};

/// PKCS#1 v1.5 padding carrying the DigestInfo prefix of `alg`.
fn padding(alg: DigestAlgorithm) -> Pkcs1v15Sign {
    match alg {
        DigestAlgorithm::Md5 => Pkcs1v15Sign::new::<Md5>(),
        DigestAlgorithm::Sha1 => Pkcs1v15Sign::new::<Sha1>(),
        DigestAlgorithm::Sha256 => Pkcs1v15Sign::new::<Sha256>(),
    }
}

/// Sign `message` with RSA PKCS#1 v1.5 over its `alg` digest.
pub fn sign(alg: DigestAlgorithm, key: &RsaPrivateKey, message: &[u8]) -> Result<Vec<u8>> {
    let hashed = digest(alg, message);
    key.sign(padding(alg), &hashed)
        .map_err(|e| Error::unexpected(format!("failed to sign with rsa-{alg}: {e}")))
}

/// Verify an RSA PKCS#1 v1.5 `signature` of `message` over its `alg` digest.
pub fn verify(
    alg: DigestAlgorithm,
    key: &RsaPublicKey,
    message: &[u8],
    signature: &[u8],
) -> Result<()> {
    let hashed = digest(alg, message);
    key.verify(padding(alg), &hashed, signature).map_err(|e| {
        debug!("rsa-{alg} verification failed: {e}");
        Error::verification(format!("rsa-{alg} signature does not match: {e}"))
    })
}

/// Sign `message` with a base64 encoded private key and return the
/// signature base64 encoded.
pub fn sign_base64(alg: DigestAlgorithm, private_key: &str, message: &str) -> Result<String> {
    let key = parse_private_key(private_key)?;
    let signature = sign(alg, &key, message.as_bytes())?;
    Ok(base64_encode(&signature))
}

/// Verify a base64 encoded `signature` of `message` with a base64 encoded
/// PKIX public key.
pub fn verify_base64(
    alg: DigestAlgorithm,
    public_key: &str,
    message: &str,
    signature: &str,
) -> Result<()> {
    let key = parse_public_key(public_key)?;
    let signature = base64_decode(signature.trim())
        .map_err(|e| Error::verification("signature is not valid base64").with_source(e))?;
    verify(alg, &key, message.as_bytes(), &signature)
}
