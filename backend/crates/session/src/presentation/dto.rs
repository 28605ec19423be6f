//! Data Transfer Objects

use certificate::domain::RequestId;
use serde::{Deserialize, Serialize};

use crate::domain::portal_session::PortalSession;
use crate::domain::screen::{DeleteTarget, Overlay, Screen};

/// What the UI renders from
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub screen: Screen,
    pub overlay: Option<Overlay>,
    pub elevated: bool,
    pub login_error: bool,
    pub track_query: Option<String>,
    pub polling: bool,
}

impl From<&PortalSession> for SessionView {
    fn from(session: &PortalSession) -> Self {
        Self {
            screen: session.screen(),
            overlay: session.overlay().cloned(),
            elevated: session.is_elevated(),
            login_error: session.login_error(),
            track_query: session.track_query().map(str::to_string),
            polling: session.wants_polling(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigateBody {
    pub screen: Screen,
    #[serde(default, alias = "trackId")]
    pub track_query: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteBody {
    pub target: DeleteTarget,
}

#[derive(Debug, Serialize)]
pub struct DeleteConfirmedResponse {
    pub session: SessionView,
    pub deleted: Vec<RequestId>,
}
