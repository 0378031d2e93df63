//! Navigation
//!
//! Exactly one panel is active at a time. Every activation, including a
//! click on the tab that is already active, asks that panel to reload.

/// Top-level views, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Panel {
    #[default]
    Dashboard,
    Products,
    Tasks,
    Settings,
}

impl Panel {
    pub const ALL: [Panel; 4] = [Panel::Dashboard, Panel::Products, Panel::Tasks, Panel::Settings];

    /// DOM id of the panel section
    pub fn id(&self) -> &'static str {
        match self {
            Panel::Dashboard => "dashboard",
            Panel::Products => "products",
            Panel::Tasks => "tasks",
            Panel::Settings => "settings",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Panel::Dashboard => "Dashboard",
            Panel::Products => "Products",
            Panel::Tasks => "Tasks",
            Panel::Settings => "Settings",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigation {
    active: Panel,
    /// Bumped on every activation so observers can tell a repeat click apart
    activations: u64,
}

impl Navigation {
    pub fn new(initial: Panel) -> Self {
        Self {
            active: initial,
            activations: 0,
        }
    }

    pub fn active(&self) -> Panel {
        self.active
    }

    pub fn is_active(&self, panel: Panel) -> bool {
        self.active == panel
    }

    pub fn activations(&self) -> u64 {
        self.activations
    }

    /// Make `panel` the only active panel; returns the panel to load.
    pub fn activate(&mut self, panel: Panel) -> Panel {
        self.active = panel;
        self.activations += 1;
        panel
    }

    /// Whether `panel` loads on this run of its observer: always on the first
    /// run (page load), afterwards only when `panel` is the one activated.
    pub fn should_load(&self, panel: Panel, first_run: bool) -> bool {
        first_run || self.is_active(panel)
    }

    /// CSS class for a tab marker
    pub fn tab_class(&self, panel: Panel) -> &'static str {
        if self.is_active(panel) {
            "nav-item active"
        } else {
            "nav-item"
        }
    }

    /// CSS class for a panel section
    pub fn section_class(&self, panel: Panel) -> &'static str {
        if self.is_active(panel) {
            "section active"
        } else {
            "section"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_active() {
        let mut nav = Navigation::default();
        assert_eq!(nav.active(), Panel::Dashboard);

        for panel in Panel::ALL {
            assert_eq!(nav.activate(panel), panel);
            let active: Vec<Panel> = Panel::ALL.into_iter().filter(|p| nav.is_active(*p)).collect();
            assert_eq!(active, vec![panel]);
            let markers = Panel::ALL
                .iter()
                .filter(|p| nav.tab_class(**p) == "nav-item active")
                .count();
            assert_eq!(markers, 1);
        }
    }

    fn loaded(nav: &Navigation, first_run: bool) -> Vec<Panel> {
        Panel::ALL
            .into_iter()
            .filter(|p| nav.should_load(*p, first_run))
            .collect()
    }

    #[test]
    fn test_every_panel_loads_on_page_load() {
        let nav = Navigation::default();
        assert_eq!(loaded(&nav, true), Panel::ALL.to_vec());
    }

    #[test]
    fn test_activation_reloads_only_that_panel() {
        let mut nav = Navigation::default();
        for target in [Panel::Products, Panel::Tasks, Panel::Tasks, Panel::Dashboard] {
            let before = nav;
            nav.activate(target);
            // a repeat click still changes the state observers watch
            assert_ne!(nav, before);
            assert_eq!(loaded(&nav, false), vec![target]);
        }
    }

    #[test]
    fn test_repeat_activation_counts() {
        let mut nav = Navigation::new(Panel::Tasks);
        nav.activate(Panel::Tasks);
        nav.activate(Panel::Tasks);
        assert_eq!(nav.activations(), 2);
        assert_eq!(nav.section_class(Panel::Tasks), "section active");
        assert_eq!(nav.section_class(Panel::Products), "section");
    }
}
