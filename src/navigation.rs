use crate::config::SCROLL_THRESHOLD_PX;

/// In-page anchor targets, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Projects,
    Cloud,
    Skills,
    Contact,
}

impl Section {
    /// Sections listed in the navigation bar.
    pub const NAV: [Section; 6] = [
        Section::Hero,
        Section::About,
        Section::Projects,
        Section::Cloud,
        Section::Skills,
        Section::Contact,
    ];

    /// Element id of the section's `<section>` tag.
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Cloud => "cloud",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Accueil",
            Section::About => "À propos",
            Section::Projects => "Projets",
            Section::Cloud => "Cloud & DevOps",
            Section::Skills => "Compétences",
            Section::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

pub fn is_scrolled(offset_y: f64) -> bool {
    offset_y > SCROLL_THRESHOLD_PX
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavBarStyle {
    Transparent,
    Solid,
}

impl NavBarStyle {
    pub fn for_offset(offset_y: f64) -> Self {
        if is_scrolled(offset_y) {
            NavBarStyle::Solid
        } else {
            NavBarStyle::Transparent
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            NavBarStyle::Transparent => "bg-transparent",
            NavBarStyle::Solid => {
                "bg-white/95 dark:bg-[#0a0e27]/95 backdrop-blur-md shadow-lg dark:shadow-cyan-500/5"
            }
        }
    }
}

/// Open/closed state of the small-screen navigation overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Called after a navigation click; the menu only closes when the
    /// target section was actually found on the page.
    pub fn after_navigation(&mut self, found: bool) {
        if found {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(1200.0));
    }

    #[test]
    fn test_nav_style_reverts() {
        let offsets = [0.0, 30.0, 51.0, 400.0, 49.0, 0.0];
        let styles: Vec<_> = offsets.iter().map(|&y| NavBarStyle::for_offset(y)).collect();
        assert_eq!(
            styles,
            vec![
                NavBarStyle::Transparent,
                NavBarStyle::Transparent,
                NavBarStyle::Solid,
                NavBarStyle::Solid,
                NavBarStyle::Transparent,
                NavBarStyle::Transparent,
            ]
        );
        assert!(NavBarStyle::Solid.class().contains("backdrop-blur-md"));
    }

    #[test]
    fn test_mobile_menu() {
        let mut menu = MobileMenu::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());

        // missing target keeps the overlay open
        menu.after_navigation(false);
        assert!(menu.is_open());

        menu.after_navigation(true);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_section_ids_unique() {
        let mut ids: Vec<_> = Section::NAV.iter().map(|s| s.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Section::NAV.len());
        assert_eq!(Section::Contact.href(), "#contact");
    }
}
