/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use thiserror::Error;

/// Error conditions that can be returned
///
/// The model constructors and accessors never fail. Only the helpers that parse
/// raw text (JSON payloads, website urls) return these.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Deserialization error")]
    Deserialization(#[from] serde_json::Error),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    #[error("Response is malformed: {0}")]
    ResponseMalformed(String),
}
