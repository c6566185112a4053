use serde::{Deserialize, Serialize};

/// Page-wide display mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Favicon contrasting with the page background.
    pub fn favicon_href(self) -> &'static str {
        match self {
            Theme::Dark => "/favicon-light.svg",
            Theme::Light => "/favicon-dark.svg",
        }
    }

    /// Class set on the page root; tailwind `dark:` variants key off it.
    pub fn root_class(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips() {
        let theme = Theme::default();
        assert!(theme.is_dark());
        assert_eq!(theme.toggled(), Theme::Light);
        assert_eq!(theme.toggled().toggled(), theme);
    }

    #[test]
    fn test_favicon_follows_theme() {
        assert_eq!(Theme::Dark.favicon_href(), "/favicon-light.svg");
        assert_eq!(Theme::Light.favicon_href(), "/favicon-dark.svg");
    }

    #[test]
    fn test_storage_format() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        let theme: Theme = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(theme, Theme::Dark);
    }
}
