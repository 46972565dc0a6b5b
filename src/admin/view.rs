/// Dashboard section shown while logged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Overview,
    Menu,
    Orders,
}

/// What the admin page renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminView {
    #[default]
    LoggedOut,
    LoggedIn(Section),
}

impl AdminView {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, AdminView::LoggedIn(_))
    }
}
