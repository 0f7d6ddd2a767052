//! Global Application State
//!
//! Session, saved settings and the toast notice, shared through context.

use leptos::*;

use joina::forms::Settings;
use joina::shell::Session;

use crate::api;

/// Message shown in the toast area
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    /// How long the toast stays up
    pub fn lifetime_ms(&self) -> u32 {
        match self {
            Notice::Success(_) => 3000,
            Notice::Error(_) => 5000,
        }
    }

    /// Successes respect the "Enable Notifications" setting; errors always show
    pub fn allowed(&self, settings: &Settings) -> bool {
        match self {
            Notice::Success(_) => settings.notifications,
            Notice::Error(_) => true,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Notice::Success(text) | Notice::Error(text) => text,
        }
    }
}

/// Toast shown after logging out
fn farewell(session: Option<&Session>) -> Notice {
    match session {
        Some(session) => Notice::Success(format!("Signed out {}", session.username)),
        None => Notice::Success("Signed out".to_string()),
    }
}

#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Signed-in user, set by the login form
    pub session: RwSignal<Option<Session>>,
    /// Last saved dashboard settings
    pub settings: RwSignal<Settings>,
    pub notice: RwSignal<Option<Notice>>,
}

pub fn provide_global_state() {
    let state = GlobalState {
        session: create_rw_signal(None),
        settings: create_rw_signal(api::load_settings().unwrap_or_default()),
        notice: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a toast. It clears itself unless a newer notice replaced it.
    pub fn notify(&self, notice: Notice) {
        if !notice.allowed(&self.settings.get_untracked()) {
            return;
        }

        let lifetime = notice.lifetime_ms();
        let shown = notice.clone();
        self.notice.set(Some(notice));

        let slot = self.notice;
        gloo_timers::callback::Timeout::new(lifetime, move || {
            slot.update(|current| {
                if current.as_ref() == Some(&shown) {
                    *current = None;
                }
            });
        })
        .forget();
    }

    pub fn show_success(&self, message: &str) {
        self.notify(Notice::Success(message.to_string()));
    }

    pub fn show_error(&self, message: &str) {
        self.notify(Notice::Error(message.to_string()));
    }

    pub fn sign_in(&self, session: Option<Session>, welcome: &str) {
        self.session.set(session);
        self.show_success(welcome);
    }

    pub fn sign_out(&self) {
        let previous = self.session.get_untracked();
        self.session.set(None);
        self.notice.set(None);
        self.notify(farewell(previous.as_ref()));
    }
}
