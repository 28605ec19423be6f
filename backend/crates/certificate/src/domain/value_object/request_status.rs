//! Request Status Value Object
//!
//! Six states of the processing pipeline. The spreadsheet stores the Thai
//! label; API clients may also send the uppercase code.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Where a certificate request currently is
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RequestStatus {
    /// Still with the HR team
    #[default]
    #[display("อยู่ทีงานทรัพยากรบุคคล")]
    #[serde(rename = "อยู่ทีงานทรัพยากรบุคคล", alias = "AT_HR")]
    AtHr,

    #[display("ส่งกองการบริหารงานบุคคลแล้ว")]
    #[serde(rename = "ส่งกองการบริหารงานบุคคลแล้ว", alias = "SENT_HR_ADMIN")]
    SentHrAdmin,

    #[display("ส่งกองต่างประเทศแล้ว")]
    #[serde(rename = "ส่งกองต่างประเทศแล้ว", alias = "SENT_INTERNATIONAL")]
    SentInternational,

    #[display("กลับจากกองการบริหารงานบุคคลแล้ว")]
    #[serde(rename = "กลับจากกองการบริหารงานบุคคลแล้ว", alias = "RETURNED_HR_ADMIN")]
    ReturnedHrAdmin,

    #[display("กลับจากกองต่างประเทศแล้ว")]
    #[serde(rename = "กลับจากกองต่างประเทศแล้ว", alias = "RETURNED_INTERNATIONAL")]
    ReturnedInternational,

    /// Finished, waiting for the requester to collect
    #[display("ดำเนินการเรียบร้อยแล้ว")]
    #[serde(rename = "ดำเนินการเรียบร้อยแล้ว", alias = "RETURNED")]
    Returned,
}

impl RequestStatus {
    /// Pipeline order
    pub const PIPELINE: [RequestStatus; 6] = [
        Self::AtHr,
        Self::SentHrAdmin,
        Self::SentInternational,
        Self::ReturnedHrAdmin,
        Self::ReturnedInternational,
        Self::Returned,
    ];

    /// Uppercase code
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::AtHr => "AT_HR",
            Self::SentHrAdmin => "SENT_HR_ADMIN",
            Self::SentInternational => "SENT_INTERNATIONAL",
            Self::ReturnedHrAdmin => "RETURNED_HR_ADMIN",
            Self::ReturnedInternational => "RETURNED_INTERNATIONAL",
            Self::Returned => "RETURNED",
        }
    }

    /// Create from uppercase code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::PIPELINE.into_iter().find(|s| s.code() == code)
    }

    /// Zero-based index in `PIPELINE`
    #[inline]
    pub const fn position(&self) -> usize {
        *self as usize
    }

    /// Coarse stage: 0 at HR, 1 sent out, 2 back from a division, 3 done
    #[inline]
    pub const fn stage(&self) -> u8 {
        match self {
            Self::AtHr => 0,
            Self::SentHrAdmin | Self::SentInternational => 1,
            Self::ReturnedHrAdmin | Self::ReturnedInternational => 2,
            Self::Returned => 3,
        }
    }

    /// Counted as returned on the board and in statistics
    #[inline]
    pub const fn is_returned(&self) -> bool {
        matches!(self, Self::Returned | Self::ReturnedInternational)
    }

    /// A receipt may be recorded in this state
    #[inline]
    pub const fn accepts_receipt(&self) -> bool {
        matches!(
            self,
            Self::ReturnedHrAdmin | Self::ReturnedInternational | Self::Returned
        )
    }
}
