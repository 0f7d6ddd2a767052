//! Navigation Shell
//!
//! The currently selected dashboard view and the signed-in session.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const APP_TITLE: &str = "Joina Analytics Dashboard";
pub const DASHBOARD_TITLE: &str = "Joina City Analysis Dashboard";
pub const NO_NOTIFICATIONS: &str = "You have no notifications at the moment.";

/// View shown in the main content area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CurrentView {
    #[default]
    Dashboard,
    User,
    Notifications,
    Settings,
}

/// Side navigation order
pub const NAV_ITEMS: [CurrentView; 4] = [
    CurrentView::Dashboard,
    CurrentView::User,
    CurrentView::Notifications,
    CurrentView::Settings,
];

impl CurrentView {
    /// Map a navigation tag to a view. Unrecognized tags show the dashboard.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "dashboard" => CurrentView::Dashboard,
            "user" | "users" | "register" => CurrentView::User,
            "notifications" | "nofications" => CurrentView::Notifications,
            "settings" => CurrentView::Settings,
            _ => {
                tracing::debug!(tag, "unknown view tag, showing dashboard");
                CurrentView::Dashboard
            }
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            CurrentView::Dashboard => "dashboard",
            CurrentView::User => "user",
            CurrentView::Notifications => "notifications",
            CurrentView::Settings => "settings",
        }
    }

    /// Navigation label
    pub fn label(&self) -> &'static str {
        match self {
            CurrentView::Dashboard => "Dashboard",
            CurrentView::User => "User",
            CurrentView::Notifications => "Notifications",
            CurrentView::Settings => "Settings",
        }
    }

    /// Icon glyph shown in the collapsed side navigation
    pub fn icon(&self) -> &'static str {
        match self {
            CurrentView::Dashboard => "▦",
            CurrentView::User => "👤",
            CurrentView::Notifications => "🔔",
            CurrentView::Settings => "⚙",
        }
    }
}

impl std::fmt::Display for CurrentView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    #[serde(default)]
    pub email: String,
}

impl Session {
    /// Session from a successful login response body
    pub fn from_login(body: &Value) -> Option<Self> {
        let session: Session = serde_json::from_value(body.clone()).ok()?;
        if session.username.is_empty() {
            return None;
        }
        Some(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_tag() {
        assert_eq!(CurrentView::from_tag("Dashboard"), CurrentView::Dashboard);
        assert_eq!(CurrentView::from_tag("User"), CurrentView::User);
        assert_eq!(CurrentView::from_tag("Nofications"), CurrentView::Notifications);
        assert_eq!(CurrentView::from_tag("notifications"), CurrentView::Notifications);
        assert_eq!(CurrentView::from_tag(" SETTINGS "), CurrentView::Settings);
    }

    #[test]
    fn test_unknown_tag_falls_back() {
        assert_eq!(CurrentView::from_tag("Reports"), CurrentView::Dashboard);
        assert_eq!(CurrentView::from_tag(""), CurrentView::Dashboard);
    }

    #[test]
    fn test_tags_round_trip() {
        for view in NAV_ITEMS {
            assert_eq!(CurrentView::from_tag(view.tag()), view);
            assert_eq!(CurrentView::from_tag(view.label()), view);
        }
    }

    #[test]
    fn test_session_from_login() {
        let session = Session::from_login(&json!({"username": "alice", "email": "a@b.c", "_id": 1}));
        assert_eq!(
            session,
            Some(Session { username: "alice".into(), email: "a@b.c".into() })
        );
        assert_eq!(Session::from_login(&json!({"message": "ok"})), None);
        assert_eq!(Session::from_login(&Value::Null), None);
    }
}
