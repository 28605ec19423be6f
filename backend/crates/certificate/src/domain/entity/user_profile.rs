//! User Profile Entity
//!
//! Contact details remembered between submissions to prefill the form.

use serde::{Deserialize, Serialize};

use super::submission::NewCertificateRequest;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub full_name: String,
    pub email: String,
    pub internal_phone: String,
    pub mobile_phone: String,
}

impl UserProfile {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_empty()
            && self.email.is_empty()
            && self.internal_phone.is_empty()
            && self.mobile_phone.is_empty()
    }
}

impl From<&NewCertificateRequest> for UserProfile {
    fn from(req: &NewCertificateRequest) -> Self {
        Self {
            full_name: req.full_name.clone(),
            email: req.email.as_str().to_string(),
            internal_phone: req.internal_phone.clone(),
            mobile_phone: req.mobile_phone.clone(),
        }
    }
}
