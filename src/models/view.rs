//! Screen and modal state.

use termfolio_core::config::modal::CONTACT_HEADER;
use termfolio_core::effects::{ModalEntry, find_modal};

/// Current screen mode of the application
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenMode {
    /// Boot log covers the page
    Booting,
    /// CRT turn-on animation plays on the revealed page
    PoweringOn,
    Ready,
}

/// Content of the single modal slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalView {
    Project(&'static ModalEntry),
    /// Fake encrypted contact form
    Contact,
}

impl ModalView {
    /// Resolve a project modal id. Unknown ids open nothing.
    pub fn project(id: &str) -> Option<Self> {
        find_modal(id).map(Self::Project)
    }

    pub fn header(&self) -> String {
        match self {
            Self::Project(entry) => entry.header(),
            Self::Contact => CONTACT_HEADER.to_string(),
        }
    }
}

/// Clear `slot` only if it still holds `which`. Returns whether it did.
pub fn dismiss(slot: &mut Option<ModalView>, which: ModalView) -> bool {
    slot.take_if(|current| *current == which).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_lookup() {
        let modal = ModalView::project("sec").unwrap();
        assert_eq!(modal.header(), "SECURE_CONNECTION: Security Research");
        assert_eq!(ModalView::project("missing"), None);
    }

    #[test]
    fn test_dismiss_only_matching_modal() {
        let project = ModalView::project("sec").unwrap();

        let mut slot = Some(project);
        assert!(!dismiss(&mut slot, ModalView::Contact));
        assert_eq!(slot, Some(project));

        let mut slot = Some(ModalView::Contact);
        assert!(dismiss(&mut slot, ModalView::Contact));
        assert_eq!(slot, None);

        let mut slot = None;
        assert!(!dismiss(&mut slot, ModalView::Contact));
    }

    #[test]
    fn test_contact_header() {
        assert_eq!(ModalView::Contact.header(), "ENCRYPTED_CHANNEL");
    }
}
