use std::{fmt, str::FromStr};

/// Page sections in the order they appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Projects,
    Skills,
    Experience,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Projects,
        Section::Skills,
        Section::Experience,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Experience => "Experience",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| format!("Unknown section: {}", s))
    }
}

/// Scroll offset past which the navbar switches to its solid style.
pub const SCROLLED_THRESHOLD: f64 = 20.0;

/// A section counts as reached once its top is within this distance below
/// the viewport top.
pub const ACTIVE_SECTION_OFFSET: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    scrolled: bool,
    active: Section,
    menu_open: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            scrolled: false,
            active: Section::Home,
            menu_open: false,
        }
    }
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// `section_top` yields each rendered section's top offset in page
    /// coordinates, or `None` when the section is not on the page.
    pub fn on_scroll<F>(&mut self, scroll_y: f64, section_top: F)
    where
        F: Fn(Section) -> Option<f64>,
    {
        self.scrolled = scroll_y > SCROLLED_THRESHOLD;
        let position = scroll_y + ACTIVE_SECTION_OFFSET;
        if let Some(section) = Section::ALL
            .into_iter()
            .rev()
            .find(|&section| section_top(section).is_some_and(|top| top <= position))
        {
            self.active = section;
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Closes the menu and hands back the section to scroll to.
    pub fn select(&mut self, section: Section) -> Section {
        self.menu_open = false;
        section
    }
}
