use std::time::Duration;

/// Base URL of the contact backend, set at build time through `BACKEND_URL`.
pub const BACKEND_URL: &str = env!("BACKEND_URL");

/// Year the site was built, used for the footer copyright line.
pub const BUILD_YEAR: &str = env!("BUILD_YEAR");

/// Vertical offset (in px) past which the navigation bar becomes opaque.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// How long a notification stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_millis(5000);

/// Maximum number of notifications kept at once.
pub const TOAST_LIMIT: usize = 3;

/// Local storage key holding the visitor's theme choice.
pub const THEME_STORAGE_KEY: &str = "theme";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_time_values() {
        assert!(!BACKEND_URL.is_empty());
        let year: i32 = BUILD_YEAR.parse().expect("build year should be numeric");
        assert!(year >= 2024);
    }
}
