/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::models::errors::ModelError;
use crate::models::parsers::{
    from_lenient_id, from_lenient_str, from_lenient_urls, id_from_value, str_from_value,
    urls_from_value,
};
use crate::models::PhotoSize;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::BTreeMap;

/// Holds information returned for a photo by the photo service.
///
/// Parsing is lenient: fields missing from the response are left unset rather
/// than failing the whole photo.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Photo {
    #[serde(default, deserialize_with = "from_lenient_id")]
    pub id: String,

    #[serde(default, deserialize_with = "from_lenient_str")]
    pub description: Option<String>,

    /// Size name (`regular`, `small`, `full`, ...) to url
    #[serde(default, deserialize_with = "from_lenient_urls")]
    pub urls: BTreeMap<String, String>,

    /// Owning user as returned by the service, kept as is
    #[serde(default)]
    pub user: Value,
}

impl Photo {
    pub fn new(
        id: &str,
        description: Option<&str>,
        urls: BTreeMap<String, String>,
        user: Value,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.map(Into::into),
            urls,
            user,
        }
    }

    /// Builds a photo from an API response payload
    pub fn from_api_response(data: &Value) -> Self {
        let field = |name: &str| {
            let v = data.get(name);
            if v.is_none() {
                log::debug!("Photo response is missing field: {name}");
            }
            v
        };

        let id = field("id");
        let description = field("description");
        let urls = field("urls");
        let user = field("user");

        Self {
            id: id_from_value("id", id).unwrap_or_default(),
            description: str_from_value("description", description),
            urls: urls_from_value("urls", urls).unwrap_or_default(),
            user: user.cloned().unwrap_or(Value::Null),
        }
    }

    /// Builds a photo from the raw text of an API response
    pub fn from_json_str(body: &str) -> Result<Self, ModelError> {
        let data: Value = serde_json::from_str(body)?;
        if !data.is_object() {
            return Err(ModelError::ResponseMalformed(
                "Photo response is not a JSON object".to_string(),
            ));
        }
        Ok(Self::from_api_response(&data))
    }

    /// Returns the url for the given size, `regular` when no size is given.
    ///
    /// Falls back to the `regular` url when the size is missing or empty and returns
    /// `None` when there is no `regular` entry either.
    pub fn photo_url(&self, size: Option<&str>) -> Option<&str> {
        let regular = PhotoSize::DEFAULT.as_str();
        let lookup = |key: &str| {
            self.urls
                .get(key)
                .map(String::as_str)
                .filter(|u| !u.is_empty())
        };
        lookup(size.unwrap_or(regular))
            .or_else(|| self.urls.get(regular).map(String::as_str))
    }

    /// Flat mapping of the photo fields
    pub fn to_json(&self) -> Value {
        json!({
            "id": self.id,
            "description": self.description,
            "urls": self.urls,
            "user": self.user,
        })
    }
}

impl From<&Value> for Photo {
    fn from(data: &Value) -> Self {
        Self::from_api_response(data)
    }
}
