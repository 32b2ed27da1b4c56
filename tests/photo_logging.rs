/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

// Runs in its own binary so the capturing logger is the only one installed.
#[cfg(test)]
mod test {
    use log::{Level, LevelFilter, Log, Metadata, Record};
    use photo_models::models::Photo;
    use serde_json::json;
    use std::sync::Mutex;

    static MESSAGES: Mutex<Vec<String>> = Mutex::new(Vec::new());

    struct CaptureLogger;

    impl Log for CaptureLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= Level::Debug
        }

        fn log(&self, record: &Record) {
            if self.enabled(record.metadata()) {
                MESSAGES.lock().unwrap().push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger;

    fn logged(fragment: &str) -> bool {
        MESSAGES.lock().unwrap().iter().any(|m| m.contains(fragment))
    }

    #[test]
    fn missing_and_mistyped_fields_are_logged() {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Debug);

        let photo = Photo::from_api_response(&json!({
            "id": true,
            "description": 7,
            "urls": { "regular": "https://img/r", "small": 12, "thumb": null }
        }));
        assert_eq!(photo.id, "");
        assert_eq!(photo.description, None);
        assert_eq!(photo.urls.len(), 1);

        assert!(logged("missing field: user"));
        assert!(logged("mistyped value for id: true"));
        assert!(logged("mistyped value for description: 7"));
        assert!(logged("mistyped value for urls.small: 12"));
        assert!(!logged("urls.thumb"));
        assert!(!logged("urls.regular"));

        let photo = Photo::from_api_response(&json!({ "id": "p1", "urls": "x" }));
        assert!(photo.urls.is_empty());
        assert!(logged("mistyped value for urls: \"x\""));
    }
}
