/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use serde::Serialize;
use strum_macros::{EnumString, IntoStaticStr};

/// Well known keys of the [`crate::models::Photo`] `urls` map.
///
/// The service may return other keys as well, those are still reachable through
/// [`crate::models::Photo::photo_url`] with a plain string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PhotoSize {
    Raw,
    Full,
    Regular,
    Small,
    Thumb,
}

impl PhotoSize {
    /// Size used when no size is requested and as the lookup fallback
    pub const DEFAULT: PhotoSize = PhotoSize::Regular;

    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}
