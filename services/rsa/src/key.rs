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

use formsign_core::hash::base64_decode;
use formsign_core::{Error, Result};
use log::debug;
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::{PrivateKeyInfo, SubjectPublicKeyInfoRef};
use rsa::{BigUint, RsaPrivateKey, RsaPublicKey};

/// Largest accepted public modulus, in bits.
pub const MAX_MODULUS_BITS: usize = 16384;

/// Parse a base64 encoded RSA private key.
///
/// The decoded bytes are tried as PKCS#1 `RSAPrivateKey` first, then as a
/// PKCS#8 `PrivateKeyInfo` whose algorithm must be `rsaEncryption`.
pub fn parse_private_key(encoded: &str) -> Result<RsaPrivateKey> {
    let der = base64_decode(encoded.trim())
        .map_err(|e| Error::key_format("private key is not valid base64").with_source(e))?;
    parse_private_key_der(&der)
}

/// Parse a DER encoded RSA private key in PKCS#1 or PKCS#8 form.
pub fn parse_private_key_der(der: &[u8]) -> Result<RsaPrivateKey> {
    match RsaPrivateKey::from_pkcs1_der(der) {
        Ok(key) => return Ok(key),
        Err(e) => debug!("private key is not PKCS#1, try PKCS#8: {e}"),
    }

    let info = PrivateKeyInfo::try_from(der).map_err(|e| {
        Error::key_format(format!("private key is neither PKCS#1 nor PKCS#8: {e}"))
    })?;
    if info.algorithm.oid != rsa::pkcs1::ALGORITHM_OID {
        return Err(Error::key_format(format!(
            "PKCS#8 private key is not an RSA key: {}",
            info.algorithm.oid
        )));
    }
    RsaPrivateKey::try_from(info)
        .map_err(|e| Error::key_format(format!("invalid RSA private key: {e}")))
}

/// Parse a base64 encoded PKIX `SubjectPublicKeyInfo` RSA public key.
///
/// Moduli up to [`MAX_MODULUS_BITS`] are accepted.
pub fn parse_public_key(encoded: &str) -> Result<RsaPublicKey> {
    let der = base64_decode(encoded.trim())
        .map_err(|e| Error::key_format("public key is not valid base64").with_source(e))?;
    parse_public_key_der(&der)
}

/// Parse a DER encoded PKIX `SubjectPublicKeyInfo` RSA public key.
pub fn parse_public_key_der(der: &[u8]) -> Result<RsaPublicKey> {
    let spki = SubjectPublicKeyInfoRef::try_from(der)
        .map_err(|e| Error::key_format(format!("invalid RSA public key: {e}")))?;
    if spki.algorithm.oid != rsa::pkcs1::ALGORITHM_OID {
        return Err(Error::key_format(format!(
            "public key is not an RSA key: {}",
            spki.algorithm.oid
        )));
    }

    let bits = spki
        .subject_public_key
        .as_bytes()
        .ok_or_else(|| Error::key_format("public key bit string is not octet aligned"))?;
    let key = rsa::pkcs1::RsaPublicKey::try_from(bits)
        .map_err(|e| Error::key_format(format!("invalid RSA public key: {e}")))?;

    new_public_key(
        BigUint::from_bytes_be(key.modulus.as_bytes()),
        BigUint::from_bytes_be(key.public_exponent.as_bytes()),
    )
}

/// Build an RSA public key from its components.
///
/// `exponent` is the public exponent written as decimal ASCII, for example
/// `b"65537"`. `modulus` is the big-endian unsigned modulus.
pub fn public_key_from_components(exponent: &[u8], modulus: &[u8]) -> Result<RsaPublicKey> {
    let e: u64 = std::str::from_utf8(exponent)
        .ok()
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| {
            Error::key_format(format!(
                "exponent {:?} is not an integer",
                String::from_utf8_lossy(exponent)
            ))
        })?;

    new_public_key(BigUint::from_bytes_be(modulus), BigUint::from(e))
}

fn new_public_key(n: BigUint, e: BigUint) -> Result<RsaPublicKey> {
    RsaPublicKey::new_with_max_size(n, e, MAX_MODULUS_BITS)
        .map_err(|e| Error::key_format(format!("invalid RSA public key components: {e}")))
}
