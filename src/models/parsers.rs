/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

// Present values of the wrong type are dropped, null is treated as missing
fn mistyped(name: &str, value: &Value) {
    if !value.is_null() {
        log::debug!("Ignoring mistyped value for {name}: {value}");
    }
}

// Identifiers may come back as either a string or a number
pub fn id_from_value(name: &str, value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        v => {
            mistyped(name, v);
            None
        }
    }
}

pub fn str_from_value(name: &str, value: Option<&Value>) -> Option<String> {
    let v = value?;
    let s = v.as_str().map(str::to_owned);
    if s.is_none() {
        mistyped(name, v);
    }
    s
}

// Keeps only the string entries of a size -> url object
pub fn urls_from_value(name: &str, value: Option<&Value>) -> Option<BTreeMap<String, String>> {
    let v = value?;
    let Some(obj) = v.as_object() else {
        mistyped(name, v);
        return None;
    };
    Some(
        obj.iter()
            .filter_map(|(size, url)| {
                let u = url.as_str();
                if u.is_none() {
                    mistyped(&format!("{name}.{size}"), url);
                }
                u.map(|u| (size.clone(), u.to_owned()))
            })
            .collect(),
    )
}

// Parses ids that may be a string, a number or missing
pub fn from_lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let v: Value = Deserialize::deserialize(deserializer)?;
    Ok(id_from_value("id", Some(&v)).unwrap_or_default())
}

// Parses a description that may be null or of the wrong type and sets to None
pub fn from_lenient_str<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let v: Value = Deserialize::deserialize(deserializer)?;
    Ok(str_from_value("description", Some(&v)))
}

// Parses the urls map, dropping anything that isn't a string url
pub fn from_lenient_urls<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let v: Value = Deserialize::deserialize(deserializer)?;
    Ok(urls_from_value("urls", Some(&v)).unwrap_or_default())
}

// Parses strings that may be null and sets to ""
pub fn from_null_to_empty_str<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(s.unwrap_or_default())
}
