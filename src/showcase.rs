use crate::portfolio::ProjectRecord;

/// Which project, if any, the page is currently showing in full.
///
/// This is the only piece of UI state shared across sections: the project
/// list writes it, the app root reads it to swap between the list and the
/// detail page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Showcase {
    selected: Option<&'static ProjectRecord>,
}

impl Showcase {
    pub fn selected(&self) -> Option<&'static ProjectRecord> {
        self.selected
    }

    pub fn select(&mut self, project: &'static ProjectRecord) {
        self.selected = Some(project);
    }

    pub fn back(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::PROJECTS;

    #[test]
    fn test_select_then_back() {
        let before = PROJECTS.to_vec();
        let mut showcase = Showcase::default();
        assert_eq!(showcase.selected(), None);

        showcase.select(&PROJECTS[1]);
        assert_eq!(showcase.selected().map(|p| p.title), Some("Sow&Grow"));
        assert!(std::ptr::eq(
            showcase.selected().expect("project selected"),
            &PROJECTS[1]
        ));

        showcase.back();
        assert_eq!(showcase, Showcase::default());
        assert_eq!(showcase.selected(), None);
        assert_eq!(PROJECTS, before.as_slice());
    }

    #[test]
    fn test_reselect_replaces() {
        let mut showcase = Showcase::default();
        showcase.select(&PROJECTS[0]);
        showcase.select(&PROJECTS[2]);
        assert_eq!(showcase.selected(), Some(&PROJECTS[2]));
    }
}
