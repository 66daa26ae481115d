use crate::catalog::SectionId;

/// What a control inside the mobile overlay does once the overlay is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Follow the in-page anchor of a section.
    ScrollTo(SectionId),
    DownloadResume,
}

/// Open/closed state of the full-screen mobile navigation overlay.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NavigationMenu {
    open: bool,
}

impl NavigationMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Closes the overlay and hands back the action to carry out.
    pub fn select(&mut self, action: MenuAction) -> MenuAction {
        self.close();
        action
    }

    pub fn overlay_class(&self) -> &'static str {
        if self.open {
            "mobile-overlay open"
        } else {
            "mobile-overlay"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SECTIONS;

    #[test]
    fn test_starts_closed() {
        let menu = NavigationMenu::default();
        assert!(!menu.is_open());
        assert_eq!(menu.overlay_class(), "mobile-overlay");
    }

    #[test]
    fn test_toggle() {
        let mut menu = NavigationMenu::default();
        assert!(menu.toggle());
        assert_eq!(menu.overlay_class(), "mobile-overlay open");
        assert!(!menu.toggle());
        assert!(!menu.is_open());
    }

    #[test]
    fn test_selecting_link_closes_overlay() {
        for section in SECTIONS.iter() {
            let mut menu = NavigationMenu::default();
            menu.toggle();
            let action = menu.select(MenuAction::ScrollTo(section.id));
            assert!(!menu.is_open());
            assert_eq!(action, MenuAction::ScrollTo(section.id));
        }
    }

    #[test]
    fn test_resume_closes_overlay() {
        let mut menu = NavigationMenu::default();
        menu.toggle();
        assert_eq!(
            menu.select(MenuAction::DownloadResume),
            MenuAction::DownloadResume
        );
        assert!(!menu.is_open());
    }

    #[test]
    fn test_select_when_closed_stays_closed() {
        let mut menu = NavigationMenu::default();
        menu.select(MenuAction::ScrollTo(SectionId::About));
        assert!(!menu.is_open());
    }
}
