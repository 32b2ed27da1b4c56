/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::models::errors::ModelError;
use crate::models::parsers::{from_lenient_id, from_null_to_empty_str};
use serde::{Deserialize, Serialize};

/// Profile information for a user of the photo service.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct UserProfile {
    #[serde(rename = "userId", deserialize_with = "from_lenient_id")]
    pub user_id: String,

    #[serde(default, deserialize_with = "from_null_to_empty_str")]
    pub bio: String,

    #[serde(default, deserialize_with = "from_null_to_empty_str")]
    pub location: String,

    #[serde(default, deserialize_with = "from_null_to_empty_str")]
    pub website: String,

    #[serde(default, rename = "firstName", deserialize_with = "from_null_to_empty_str")]
    pub first_name: String,

    #[serde(default, rename = "lastName", deserialize_with = "from_null_to_empty_str")]
    pub last_name: String,

    #[serde(default, deserialize_with = "from_null_to_empty_str")]
    pub email: String,
}

impl UserProfile {
    const BASIC_BIO: &'static str = "A photography enthusiast";
    const BASIC_LOCATION: &'static str = "Vietnam";
    const BASIC_WEBSITE: &'static str = "https://example.com";

    /// Creates a profile. Missing name and email fields are stored as ""
    pub fn new(
        user_id: &str,
        bio: &str,
        location: &str,
        website: &str,
        first_name: Option<&str>,
        last_name: Option<&str>,
        email: Option<&str>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            bio: bio.into(),
            location: location.into(),
            website: website.into(),
            first_name: first_name.unwrap_or_default().into(),
            last_name: last_name.unwrap_or_default().into(),
            email: email.unwrap_or_default().into(),
        }
    }

    /// Creates a profile with the default bio, location and website
    pub fn create_basic_profile(user_id: &str) -> Self {
        Self::new(
            user_id,
            Self::BASIC_BIO,
            Self::BASIC_LOCATION,
            Self::BASIC_WEBSITE,
            None,
            None,
            None,
        )
    }

    /// First and last name separated by a space, without surrounding whitespace
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Overwrites the fields that are set in `updates` and returns this profile
    pub fn update_info(&mut self, updates: ProfileUpdate) -> &mut Self {
        if updates.is_empty() {
            log::debug!("Empty profile update for user: {}", self.user_id);
            return self;
        }

        let ProfileUpdate {
            user_id,
            bio,
            location,
            website,
            first_name,
            last_name,
            email,
        } = updates;

        if let Some(v) = user_id {
            self.user_id = v;
        }
        if let Some(v) = bio {
            self.bio = v;
        }
        if let Some(v) = location {
            self.location = v;
        }
        if let Some(v) = website {
            self.website = v;
        }
        if let Some(v) = first_name {
            self.first_name = v;
        }
        if let Some(v) = last_name {
            self.last_name = v;
        }
        if let Some(v) = email {
            self.email = v;
        }
        self
    }

    /// Parses the website field
    pub fn website_url(&self) -> Result<url::Url, ModelError> {
        Ok(url::Url::parse(&self.website)?)
    }
}

/// Partial set of profile fields for [`UserProfile::update_info`].
///
/// Unknown keys are ignored when deserializing.
#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    #[serde(default, rename = "userId")]
    pub user_id: Option<String>,

    #[serde(default)]
    pub bio: Option<String>,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub website: Option<String>,

    #[serde(default, rename = "firstName")]
    pub first_name: Option<String>,

    #[serde(default, rename = "lastName")]
    pub last_name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,
}

impl ProfileUpdate {
    /// Returns true when no field would be changed
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
