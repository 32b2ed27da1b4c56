/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Photo Models
//!
//! Plain data models used alongside a photo service API client.
//!
//! ## Features
//!
//! - Account credentials
//!     - Flat JSON mapping for API requests
//!     - Fixed test account for fixtures
//! - Photo information
//!     - Lenient parsing of API responses
//!     - Size keyed url lookup with fallback to the `regular` size
//! - User profile information
//!     - Basic profile with default values
//!     - Partial updates in place
//!
//! *No requests are made by this library. Sending the data and authenticating
//! is left up to the API client in use*
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! photo-models = "0.1.0"
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use photo_models::models::{Photo, PhotoSize, ProfileUpdate, UserProfile};
//! use serde_json::json;
//!
//! let photo = Photo::from_api_response(&json!({
//!     "id": "abc123",
//!     "description": null,
//!     "urls": { "regular": "https://img.example/r.jpg" },
//!     "user": { "username": "jdoe" }
//! }));
//!
//! // No "small" size so the regular url is returned
//! assert_eq!(
//!     photo.photo_url(Some(PhotoSize::Small.into())),
//!     Some("https://img.example/r.jpg")
//! );
//!
//! let mut profile = UserProfile::create_basic_profile("u1");
//! profile.update_info(ProfileUpdate {
//!     first_name: Some("Lan".into()),
//!     ..Default::default()
//! });
//! assert_eq!(profile.full_name(), "Lan");
//! ```
//!
pub mod models;
