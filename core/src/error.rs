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

use std::fmt;
use thiserror::Error;

/// The error type for formsign operations
#[derive(Error, Debug)]
#[error("{kind}: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The `Time` parameter is not a base-10 integer
    MalformedTime,

    /// The signature is older than the freshness window allows
    ExpiredSignature,

    /// The recomputed signature differs from the supplied one
    SignatureMismatch,

    /// Key material cannot be decoded or parsed as the expected type
    KeyFormat,

    /// The requested digest algorithm is not supported
    UnsupportedDigest,

    /// RSA signature verification failed
    Verification,

    /// Request parameters are missing or invalid
    RequestInvalid,

    /// Configuration error (missing fields, invalid values)
    ConfigInvalid,

    /// Unexpected errors (I/O, encoding, etc.)
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the error message without the kind prefix
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check if this error means the supplied signature must be rejected
    pub fn is_signature_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::MalformedTime
                | ErrorKind::ExpiredSignature
                | ErrorKind::SignatureMismatch
                | ErrorKind::Verification
        )
    }
}

// Convenience constructors
impl Error {
    /// Create a malformed time error
    pub fn malformed_time(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedTime, message)
    }

    /// Create an expired signature error
    pub fn expired_signature(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ExpiredSignature, message)
    }

    /// Create a signature mismatch error carrying the recomputed canonical string and digest
    pub fn signature_mismatch(canonical: &str, digest: &str) -> Self {
        Self::new(
            ErrorKind::SignatureMismatch,
            format!("check sign failed: {canonical}, {digest}"),
        )
    }

    /// Create a key format error
    pub fn key_format(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::KeyFormat, message)
    }

    /// Create an unsupported digest error
    pub fn unsupported_digest(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedDigest, message)
    }

    /// Create a verification error
    pub fn verification(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Verification, message)
    }

    /// Create a request invalid error
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::MalformedTime => write!(f, "malformed time"),
            ErrorKind::ExpiredSignature => write!(f, "expired signature"),
            ErrorKind::SignatureMismatch => write!(f, "signature mismatch"),
            ErrorKind::KeyFormat => write!(f, "invalid key format"),
            ErrorKind::UnsupportedDigest => write!(f, "unsupported digest"),
            ErrorKind::Verification => write!(f, "verification failed"),
            ErrorKind::RequestInvalid => write!(f, "invalid request"),
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;
