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

//! Time related utils.

use crate::Error;

/// DateTime is the alias for `chrono::DateTime<chrono::Utc>`.
pub type DateTime = chrono::DateTime<chrono::Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    chrono::Utc::now()
}

/// Seconds since the Unix epoch of now.
pub fn now_unix() -> i64 {
    now().timestamp()
}

/// Parse a base-10 Unix timestamp in seconds.
pub fn parse_unix(s: &str) -> crate::Result<i64> {
    s.parse::<i64>().map_err(|e| {
        Error::malformed_time(format!("time {s:?} is not a unix timestamp")).with_source(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_parse_unix() {
        assert_eq!(parse_unix("1700000000").unwrap(), 1_700_000_000);
        assert_eq!(parse_unix("-5").unwrap(), -5);

        for input in ["", "12a", "1.5", " 12"] {
            assert_eq!(
                parse_unix(input).unwrap_err().kind(),
                ErrorKind::MalformedTime,
                "input: {input:?}"
            );
        }
    }

    #[test]
    fn test_now_unix() {
        let secs = now_unix();
        assert!(secs > 1_700_000_000);
        assert!((now().timestamp() - secs).abs() <= 1);
    }
}
