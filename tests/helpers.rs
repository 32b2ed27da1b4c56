/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use photo_models::models::Account;
use serde_json::{Value, json};

#[allow(dead_code)]
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Account from the environment, or the fixed test account when not configured
#[allow(dead_code)]
pub(crate) fn get_account() -> anyhow::Result<Account> {
    dotenvy::dotenv().ok();
    let Ok(username) = std::env::var("PHOTO_API_USERNAME") else {
        return Ok(Account::create_test_account());
    };
    let password = std::env::var("PHOTO_API_PASSWORD")?;
    let user_id = std::env::var("PHOTO_API_USER_ID").ok();
    let token = std::env::var("PHOTO_API_KEY_ACCESS_TOKEN").ok();

    Ok(Account::new(
        &username,
        &password,
        user_id.as_deref(),
        token.as_deref(),
    ))
}

// Trimmed down photo as returned by the photo service
#[allow(dead_code)]
pub(crate) fn photo_response() -> Value {
    json!({
        "id": "Dwu85P9SOIk",
        "created_at": "2016-05-03T11:00:28-04:00",
        "description": "A man drinking a coffee.",
        "urls": {
            "raw": "https://images.example.com/photo-1?ixid=raw",
            "full": "https://images.example.com/photo-1?ixid=full",
            "regular": "https://images.example.com/photo-1?w=1080",
            "small": "https://images.example.com/photo-1?w=400",
            "thumb": "https://images.example.com/photo-1?w=200"
        },
        "user": {
            "id": "QPxL2MGqfrw",
            "username": "exampleuser",
            "name": "Example User"
        }
    })
}
