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
use formsign_core::{DigestAlgorithm, ErrorKind};
use formsign_rsa::{
    parse_private_key, parse_public_key, public_key_from_components, sign, sign_base64, verify,
    verify_base64,
};
use log::debug;
use pretty_assertions::assert_eq;
use test_case::test_case;

const PKCS1: &str = include_str!("testdata/private_pkcs1.b64");
const PKCS8: &str = include_str!("testdata/private_pkcs8.b64");
const PKIX: &str = include_str!("testdata/public_pkix.b64");
const MODULUS: &str = include_str!("testdata/modulus.b64");

// Signatures of MESSAGE produced by `openssl dgst -<alg> -sign`.
const MESSAGE: &str = "hello formsign";
const SIGNATURE_MD5: &str = include_str!("testdata/signature_md5.b64");
const SIGNATURE_SHA1: &str = include_str!("testdata/signature_sha1.b64");
const SIGNATURE_SHA256: &str = include_str!("testdata/signature_sha256.b64");

// 8192-bit key, signed with `openssl dgst -sha256 -sign`.
const PKIX_8192: &str = include_str!("testdata/public_pkix_8192.b64");
const MODULUS_8192: &str = include_str!("testdata/modulus_8192.b64");
const SIGNATURE_SHA256_8192: &str = include_str!("testdata/signature_sha256_8192.b64");

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test_case("md5", SIGNATURE_MD5)]
#[test_case("sha1", SIGNATURE_SHA1)]
#[test_case("sha256", SIGNATURE_SHA256)]
fn test_sign_matches_openssl(alg: &str, expected: &str) {
    init();
    let alg: DigestAlgorithm = alg.parse().expect("algorithm must be supported");

    for private_key in [PKCS1, PKCS8] {
        let signature = sign_base64(alg, private_key, MESSAGE).expect("sign must succeed");
        debug!("rsa-{alg} signature: {signature}");
        assert_eq!(signature, expected.trim());
    }
}

#[test_case("md5", SIGNATURE_MD5)]
#[test_case("sha1", SIGNATURE_SHA1)]
#[test_case("sha256", SIGNATURE_SHA256)]
fn test_verify_openssl_signature(alg: &str, signature: &str) {
    init();
    let alg: DigestAlgorithm = alg.parse().expect("algorithm must be supported");

    verify_base64(alg, PKIX, MESSAGE, signature).expect("verify must succeed");
    assert_eq!(
        verify_base64(alg, PKIX, "hello formsigns", signature)
            .unwrap_err()
            .kind(),
        ErrorKind::Verification
    );
}

#[test]
fn test_verify_with_key_from_components() {
    init();
    let modulus = base64_decode(MODULUS.trim()).expect("modulus must be base64");
    let public_key = public_key_from_components(b"65537", &modulus).expect("key must build");
    let signature = base64_decode(SIGNATURE_SHA1.trim()).expect("signature must be base64");

    verify(
        DigestAlgorithm::Sha1,
        &public_key,
        MESSAGE.as_bytes(),
        &signature,
    )
    .expect("verify must succeed");
}

#[test]
fn test_verify_8192_bit_key() {
    init();
    verify_base64(
        DigestAlgorithm::Sha256,
        PKIX_8192,
        MESSAGE,
        SIGNATURE_SHA256_8192,
    )
    .expect("verify with PKIX key must succeed");

    let modulus = base64_decode(MODULUS_8192.trim()).expect("modulus must be base64");
    let public_key = public_key_from_components(b"65537", &modulus).expect("key must build");
    let signature = base64_decode(SIGNATURE_SHA256_8192.trim()).expect("signature must be base64");
    verify(
        DigestAlgorithm::Sha256,
        &public_key,
        MESSAGE.as_bytes(),
        &signature,
    )
    .expect("verify with component key must succeed");

    assert_eq!(
        verify_base64(DigestAlgorithm::Sha256, PKIX_8192, MESSAGE, SIGNATURE_SHA256)
            .unwrap_err()
            .kind(),
        ErrorKind::Verification
    );
}

#[test]
fn test_flip_every_message_byte() {
    init();
    let private_key = parse_private_key(PKCS8).expect("private key must parse");
    let public_key = parse_public_key(PKIX).expect("public key must parse");
    let signature =
        sign(DigestAlgorithm::Md5, &private_key, MESSAGE.as_bytes()).expect("sign must succeed");

    for i in 0..MESSAGE.len() {
        let mut tampered = MESSAGE.as_bytes().to_vec();
        tampered[i] ^= 0x20;
        assert!(
            verify(DigestAlgorithm::Md5, &public_key, &tampered, &signature).is_err(),
            "flipped byte {i}"
        );
    }
}

#[test]
fn test_unsupported_digest() {
    let err = "sha512".parse::<DigestAlgorithm>().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedDigest);
}
