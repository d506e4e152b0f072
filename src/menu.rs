//! Navigation state: mobile nav, dropdown sub-menus, theme menu and the
//! dashboard overlay.
//!
//! Invariant: at most one sub-menu is open at any time.

/// Where a click landed, relative to the regions that keep menus open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickTarget {
    pub inside_header: bool,
    pub inside_nav_buttons: bool,
    pub inside_sub_menu: bool,
}

impl ClickTarget {
    /// A click on the page body, outside every menu region.
    pub fn outside() -> Self {
        Self::default()
    }

    pub fn header() -> Self {
        Self {
            inside_header: true,
            ..Self::default()
        }
    }

    pub fn nav_buttons() -> Self {
        Self {
            inside_header: true,
            inside_nav_buttons: true,
            ..Self::default()
        }
    }

    pub fn sub_menu() -> Self {
        Self {
            inside_header: true,
            inside_sub_menu: true,
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct SubMenu {
    id: String,
    open: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuController {
    nav_open: bool,
    theme_menu_open: bool,
    dashboard_open: bool,
    sub_menus: Vec<SubMenu>,
}

impl MenuController {
    pub fn new<I, S>(sub_menu_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sub_menus: sub_menu_ids
                .into_iter()
                .map(|id| SubMenu {
                    id: id.into(),
                    open: false,
                })
                .collect(),
            ..Self::default()
        }
    }

    pub fn toggle_nav(&mut self) {
        self.nav_open = !self.nav_open;
    }

    pub fn is_nav_open(&self) -> bool {
        self.nav_open
    }

    /// Close every other sub-menu, then flip `menu_id`. Returns the new
    /// state of the target; `false` for an unknown id.
    pub fn toggle(&mut self, menu_id: &str) -> bool {
        let mut found = false;
        let mut now_open = false;
        for menu in &mut self.sub_menus {
            if menu.id == menu_id {
                menu.open = !menu.open;
                found = true;
                now_open = menu.open;
            } else {
                menu.open = false;
            }
        }
        if !found {
            tracing::warn!(menu = %menu_id, "toggle on unknown sub-menu");
        }
        now_open
    }

    pub fn close_sub_menus(&mut self) {
        for menu in &mut self.sub_menus {
            menu.open = false;
        }
    }

    pub fn is_open(&self, menu_id: &str) -> bool {
        self.sub_menus.iter().any(|m| m.id == menu_id && m.open)
    }

    pub fn open_menu(&self) -> Option<&str> {
        self.sub_menus.iter().find(|m| m.open).map(|m| m.id.as_str())
    }

    pub fn sub_menu_ids(&self) -> impl Iterator<Item = &str> {
        self.sub_menus.iter().map(|m| m.id.as_str())
    }

    pub fn toggle_theme_menu(&mut self) {
        self.theme_menu_open = !self.theme_menu_open;
    }

    pub fn is_theme_menu_open(&self) -> bool {
        self.theme_menu_open
    }

    /// Document-level click: outside the header closes the nav, outside
    /// the nav buttons and sub-menus closes every sub-menu.
    pub fn click(&mut self, target: ClickTarget) {
        if !target.inside_header {
            self.nav_open = false;
        }
        if !target.inside_nav_buttons && !target.inside_sub_menu {
            self.close_sub_menus();
        }
    }

    pub fn open_dashboard(&mut self) {
        self.dashboard_open = true;
    }

    pub fn close_dashboard(&mut self) {
        self.dashboard_open = false;
    }

    pub fn is_dashboard_open(&self) -> bool {
        self.dashboard_open
    }

    /// Click on the overlay. Only a click on the backdrop itself (not on
    /// the panel content) closes it.
    pub fn dashboard_click(&mut self, on_backdrop: bool) {
        if on_backdrop {
            self.dashboard_open = false;
        }
    }

    /// Returns true when the key was handled.
    pub fn key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.dashboard_open {
            self.dashboard_open = false;
            return true;
        }
        false
    }
}
