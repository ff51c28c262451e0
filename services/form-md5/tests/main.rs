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

use std::io::Write;

use formsign_core::{ErrorKind, StaticEnv};
use formsign_form_md5::{produce_sign, validate_sign, Config, ParameterSet, Signer};
use log::debug;
use pretty_assertions::assert_eq;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn request(method: &str, uri: &str) -> http::request::Parts {
    http::Request::builder()
        .method(method)
        .uri(uri)
        .header(
            http::header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        )
        .body(())
        .expect("request must be valid")
        .into_parts()
        .0
}

#[test]
fn test_sign_and_validate_over_the_wire() {
    init();

    // Client side.
    let mut params = ParameterSet::from_iter([("uid", "42"), ("note", "a b+c"), ("Act", "pay")]);
    let sign = produce_sign(&mut params, "app-key");
    params.insert("Sign", sign);
    let body = params.to_form();
    debug!("form body: {body}");

    // Server side.
    let parts = request("POST", "http://example.com/pay");
    let received = ParameterSet::from_request(&parts, body.as_bytes());
    assert_eq!(received, params);
    validate_sign(&received, "app-key").expect("signature must verify");
}

#[test]
fn test_plus_decoded_as_space_still_verifies() {
    init();

    let signer = Signer::new("app-key");
    let mut params = ParameterSet::from_iter([("q", "a+b")]);
    let sign = signer.sign(&mut params);

    // Intermediaries that decode an unescaped `+` as space.
    let mut received = ParameterSet::from_query(&format!(
        "q=a+b&Time={}&Sign={sign}",
        params.get("Time").expect("time must be stamped")
    ));
    assert_eq!(received.get("q"), Some("a b"));
    signer.verify(&received).expect("signature must verify");

    received.insert("q", "a-b");
    assert_eq!(
        signer.verify(&received).unwrap_err().kind(),
        ErrorKind::SignatureMismatch
    );
}

#[test]
fn test_expired_and_unknown_time() {
    init();

    let signer = Signer::new("k");
    let now = formsign_core::time::now_unix();

    let mut stale = ParameterSet::from_iter([("a", "1")]);
    let sign = signer.sign_at(&mut stale, now - 61);
    stale.insert("Sign", sign);
    assert_eq!(
        validate_sign(&stale, "k").unwrap_err().kind(),
        ErrorKind::ExpiredSignature
    );

    let mut fresh = ParameterSet::from_iter([("a", "1")]);
    let sign = signer.sign_at(&mut fresh, now - 59);
    fresh.insert("Sign", sign);
    validate_sign(&fresh, "k").expect("signature within window must verify");
}

#[test]
fn test_signer_from_env_and_file() {
    init();

    let mut f = tempfile::NamedTempFile::new().expect("tempfile must be created");
    f.write_all(br#"{"app_key": "from-file", "freshness_window": 5}"#)
        .expect("config must be written");

    let env = StaticEnv::from_iter([("FORMSIGN_APP_KEY", "from-env")]);
    let cfg = Config::from_file(f.path())
        .expect("config must load")
        .with_env(&env);
    assert_eq!(cfg.app_key.as_deref(), Some("from-env"));
    assert_eq!(cfg.freshness_window, 5);

    let signer = Signer::from_config(&cfg).expect("signer must build");
    let mut params = ParameterSet::from_iter([("a", "1")]);
    let sign = signer.sign_at(&mut params, 1_700_000_000);
    params.insert("Sign", sign);

    assert!(signer.verify_at(&params, 1_700_000_005).is_ok());
    assert_eq!(
        signer.verify_at(&params, 1_700_000_006).unwrap_err().kind(),
        ErrorKind::ExpiredSignature
    );
    assert!(validate_sign(&params, "from-file").is_err());
}

#[test]
fn test_signer_with_template_from_file() {
    init();

    let mut f = tempfile::NamedTempFile::new().expect("tempfile must be created");
    f.write_all(br#"{"app_key": "k", "template": {"join_sep": ";", "exclude": ["Sign"]}}"#)
        .expect("config must be written");

    let cfg = Config::from_file(f.path()).expect("config must load");
    let signer = Signer::from_config(&cfg).expect("signer must build");

    let mut params = ParameterSet::from_iter([("b", "2"), ("a", "1"), ("act", "kept")]);
    assert_eq!(signer.string_to_sign(&params), "a=1;act=kept;b=2:k");

    let sign = signer.sign_at(&mut params, 1_700_000_000);
    params.insert("Sign", sign);
    assert!(signer.verify_at(&params, 1_700_000_000).is_ok());
    assert!(validate_sign(&params, "k").is_err());
}
