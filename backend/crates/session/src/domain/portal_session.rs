//! Portal Session Entity
//!
//! Navigation state of one browser: current screen, open overlay and staff
//! elevation. Every transition returns the side effects it asks for; the
//! caller runs them.

use certificate::RefreshMode;
use certificate::domain::value_object::text;
use chrono::{DateTime, Duration, Utc};
use kernel::id::SessionId;

use crate::domain::credentials::StaffCredentials;
use crate::domain::screen::{DeleteTarget, Overlay, Screen};

/// Side effect requested by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEffect {
    Refresh(RefreshMode),
    StartPolling,
    StopPolling,
}

/// Result of a login attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Elevated(Vec<SessionEffect>),
    Rejected,
}

#[derive(Debug, Clone)]
pub struct PortalSession {
    pub id: SessionId,
    screen: Screen,
    overlay: Option<Overlay>,
    elevated: bool,
    login_error: bool,
    track_query: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_seen_at: DateTime<Utc>,
}

impl Default for PortalSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PortalSession {
    /// Fresh session on the home screen, not elevated
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: SessionId::new(),
            screen: Screen::Home,
            overlay: None,
            elevated: false,
            login_error: false,
            track_query: None,
            created_at: now,
            last_seen_at: now,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    pub fn is_elevated(&self) -> bool {
        self.elevated
    }

    pub fn login_error(&self) -> bool {
        self.login_error
    }

    pub fn track_query(&self) -> Option<&str> {
        self.track_query.as_deref()
    }

    /// Polling runs while an elevated session sits on a live screen
    pub fn wants_polling(&self) -> bool {
        self.elevated && self.screen.is_live()
    }

    pub fn pending_delete(&self) -> Option<&DeleteTarget> {
        match &self.overlay {
            Some(Overlay::DeleteConfirmation { target }) => Some(target),
            _ => None,
        }
    }

    pub fn touch(&mut self) {
        self.last_seen_at = Utc::now();
    }

    pub fn is_idle(&self, max_idle: Duration) -> bool {
        Utc::now() - self.last_seen_at > max_idle
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Go to `screen`. Staff screens open the login overlay instead when
    /// the session is not elevated.
    pub fn navigate(&mut self, screen: Screen, track_query: Option<&str>) -> Vec<SessionEffect> {
        self.with_polling(|s| s.enter(screen, track_query))
    }

    /// Staff button: sign out when elevated, otherwise show the login form
    pub fn toggle_staff(&mut self) -> Vec<SessionEffect> {
        self.with_polling(|s| {
            if s.elevated {
                s.elevated = false;
                s.enter(Screen::Home, None)
            } else {
                s.login_error = false;
                s.open_login();
                Vec::new()
            }
        })
    }

    pub fn close_login(&mut self) {
        if self.overlay == Some(Overlay::StaffLogin) {
            self.overlay = None;
        }
    }

    /// Check the submitted pair against `credentials`
    pub fn submit_login(
        &mut self,
        credentials: &StaffCredentials,
        username: &str,
        password: &str,
    ) -> LoginOutcome {
        if !credentials.verify(username, password) {
            self.login_error = true;
            return LoginOutcome::Rejected;
        }

        LoginOutcome::Elevated(self.with_polling(|s| {
            s.elevated = true;
            s.login_error = false;
            s.overlay = None;
            s.enter(Screen::AdminList, None)
        }))
    }

    /// Window regained focus
    pub fn focus(&self) -> Vec<SessionEffect> {
        vec![SessionEffect::Refresh(RefreshMode::Silent)]
    }

    pub fn request_delete(&mut self, target: DeleteTarget) {
        self.overlay = Some(Overlay::DeleteConfirmation { target });
    }

    pub fn cancel_delete(&mut self) {
        if self.pending_delete().is_some() {
            self.overlay = None;
        }
    }

    /// Close the confirmation after the deletion went through
    pub fn finish_delete(&mut self) {
        self.cancel_delete();
    }

    fn open_login(&mut self) {
        self.overlay = Some(Overlay::StaffLogin);
    }

    fn enter(&mut self, screen: Screen, track_query: Option<&str>) -> Vec<SessionEffect> {
        if screen.requires_elevation() && !self.elevated {
            self.open_login();
            return Vec::new();
        }

        self.screen = screen;
        self.track_query = track_query.and_then(text::non_blank);

        if screen.refreshes_on_entry() {
            vec![SessionEffect::Refresh(RefreshMode::Silent)]
        } else {
            Vec::new()
        }
    }

    /// Run `f` and append a polling effect if it changed `wants_polling`
    fn with_polling<F>(&mut self, f: F) -> Vec<SessionEffect>
    where
        F: FnOnce(&mut Self) -> Vec<SessionEffect>,
    {
        let before = self.wants_polling();
        let mut effects = f(self);
        match (before, self.wants_polling()) {
            (false, true) => effects.push(SessionEffect::StartPolling),
            (true, false) => effects.push(SessionEffect::StopPolling),
            _ => {}
        }
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use certificate::domain::RequestId;

    const SILENT: SessionEffect = SessionEffect::Refresh(RefreshMode::Silent);

    fn creds() -> StaffCredentials {
        StaffCredentials::new("hr", "secret")
    }

    fn elevated() -> PortalSession {
        let mut session = PortalSession::new();
        session.submit_login(&creds(), "hr", "secret");
        session
    }

    #[test]
    fn test_new_session() {
        let session = PortalSession::new();
        assert_eq!(session.screen(), Screen::Home);
        assert!(session.overlay().is_none());
        assert!(!session.is_elevated());
        assert!(!session.wants_polling());
    }

    #[test]
    fn test_public_navigation_refreshes() {
        let mut session = PortalSession::new();

        assert_eq!(session.navigate(Screen::Tracking, Some(" 1004 ")), vec![SILENT]);
        assert_eq!(session.screen(), Screen::Tracking);
        assert_eq!(session.track_query(), Some("1004"));

        assert!(session.navigate(Screen::Form, None).is_empty());
        assert_eq!(session.track_query(), None);
    }

    #[test]
    fn test_staff_screen_without_elevation_opens_login() {
        let mut session = PortalSession::new();
        session.navigate(Screen::Tracking, Some("Somchai"));

        assert!(session.navigate(Screen::Report, None).is_empty());
        assert_eq!(session.screen(), Screen::Tracking);
        assert_eq!(session.track_query(), Some("Somchai"));
        assert_eq!(session.overlay(), Some(&Overlay::StaffLogin));
    }

    #[test]
    fn test_login_success_lands_on_list_and_polls() {
        let mut session = PortalSession::new();
        session.toggle_staff();
        assert_eq!(session.overlay(), Some(&Overlay::StaffLogin));

        let outcome = session.submit_login(&creds(), "hr", "secret");
        assert_eq!(
            outcome,
            LoginOutcome::Elevated(vec![SILENT, SessionEffect::StartPolling])
        );
        assert!(session.is_elevated());
        assert!(session.overlay().is_none());
        assert_eq!(session.screen(), Screen::AdminList);
    }

    #[test]
    fn test_login_failure_keeps_overlay() {
        let mut session = PortalSession::new();
        session.toggle_staff();

        assert_eq!(
            session.submit_login(&creds(), "hr", "wrong"),
            LoginOutcome::Rejected
        );
        assert!(session.login_error());
        assert!(!session.is_elevated());
        assert_eq!(session.overlay(), Some(&Overlay::StaffLogin));

        // Reopening clears the previous error
        session.close_login();
        session.toggle_staff();
        assert!(!session.login_error());
    }

    #[test]
    fn test_staff_screen_redirect_keeps_login_error() {
        let mut session = PortalSession::new();
        session.toggle_staff();
        session.submit_login(&creds(), "hr", "wrong");
        session.close_login();

        assert!(session.navigate(Screen::Report, None).is_empty());
        assert_eq!(session.overlay(), Some(&Overlay::StaffLogin));
        assert_eq!(session.screen(), Screen::Home);
        assert!(session.login_error());
    }

    #[test]
    fn test_polling_follows_screen() {
        let mut session = elevated();
        assert!(session.wants_polling());

        assert_eq!(session.navigate(Screen::Report, None), vec![SILENT]);
        assert_eq!(
            session.navigate(Screen::Form, None),
            vec![SessionEffect::StopPolling]
        );
        assert_eq!(
            session.navigate(Screen::AdminList, None),
            vec![SILENT, SessionEffect::StartPolling]
        );
    }

    #[test]
    fn test_toggle_signs_out_to_home() {
        let mut session = elevated();

        assert_eq!(
            session.toggle_staff(),
            vec![SILENT, SessionEffect::StopPolling]
        );
        assert!(!session.is_elevated());
        assert_eq!(session.screen(), Screen::Home);
        assert!(session.overlay().is_none());
    }

    #[test]
    fn test_delete_confirmation() {
        let mut session = elevated();
        let target = DeleteTarget::Request(RequestId::new(1001));

        session.request_delete(target.clone());
        assert_eq!(session.pending_delete(), Some(&target));

        session.close_login();
        assert_eq!(session.pending_delete(), Some(&target));

        session.cancel_delete();
        assert!(session.pending_delete().is_none());
    }

    #[test]
    fn test_focus_refreshes_silently() {
        assert_eq!(PortalSession::new().focus(), vec![SILENT]);
    }

    #[test]
    fn test_idle() {
        let mut session = PortalSession::new();
        assert!(!session.is_idle(Duration::minutes(5)));
        session.last_seen_at = Utc::now() - Duration::hours(2);
        assert!(session.is_idle(Duration::hours(1)));
        session.touch();
        assert!(!session.is_idle(Duration::hours(1)));
    }
}
