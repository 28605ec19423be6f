//! Certificate Type Value Object
//!
//! The fixed catalogue of documents HR issues. Wire and display labels are
//! the Thai labels used by the spreadsheet.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Form grouping of the catalogue
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CertificateGroup {
    #[display("general")]
    General,
    #[display("bank")]
    Bank,
    #[display("idCard")]
    IdCard,
    #[display("english")]
    English,
}

/// A requestable document
#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum CertificateType {
    #[display("รับรองเงินเดือน")]
    #[serde(rename = "รับรองเงินเดือน")]
    SalaryCertificate,

    #[display("รับรองปฏิบัติงาน")]
    #[serde(rename = "รับรองปฏิบัติงาน")]
    EmploymentCertificate,

    #[display("ออมสิน")]
    #[serde(rename = "ออมสิน")]
    GovernmentSavingsBank,

    #[display("ธอส.")]
    #[serde(rename = "ธอส.")]
    GovernmentHousingBank,

    #[display("กรุงไทย")]
    #[serde(rename = "กรุงไทย")]
    KrungThaiBank,

    #[display("อิสลาม")]
    #[serde(rename = "อิสลาม")]
    IslamicBank,

    #[display("บัตรพนักงานมหาวิทยาลัย")]
    #[serde(rename = "บัตรพนักงานมหาวิทยาลัย")]
    UniversityStaffCard,

    #[display("บัตรพนักงานราชการ")]
    #[serde(rename = "บัตรพนักงานราชการ")]
    GovernmentEmployeeCard,

    #[display("บัตรข้าราชการ")]
    #[serde(rename = "บัตรข้าราชการ")]
    CivilServantCard,

    #[display("หนังสือรับรองภาษาอังกฤษ (เงินเดือน/ปฏิบัติงาน)")]
    #[serde(rename = "หนังสือรับรองภาษาอังกฤษ (เงินเดือน/ปฏิบัติงาน)")]
    EnglishCertificate,

    #[display("รับรองภาษาอังกฤษเพื่อขอวีซ่า")]
    #[serde(rename = "รับรองภาษาอังกฤษเพื่อขอวีซ่า")]
    EnglishVisaCertificate,
}

impl CertificateType {
    /// Catalogue in form order
    pub const ALL: [CertificateType; 11] = [
        Self::SalaryCertificate,
        Self::EmploymentCertificate,
        Self::GovernmentSavingsBank,
        Self::GovernmentHousingBank,
        Self::KrungThaiBank,
        Self::IslamicBank,
        Self::UniversityStaffCard,
        Self::GovernmentEmployeeCard,
        Self::CivilServantCard,
        Self::EnglishCertificate,
        Self::EnglishVisaCertificate,
    ];

    #[inline]
    pub const fn group(&self) -> CertificateGroup {
        match self {
            Self::SalaryCertificate | Self::EmploymentCertificate => CertificateGroup::General,
            Self::GovernmentSavingsBank
            | Self::GovernmentHousingBank
            | Self::KrungThaiBank
            | Self::IslamicBank => CertificateGroup::Bank,
            Self::UniversityStaffCard | Self::GovernmentEmployeeCard | Self::CivilServantCard => {
                CertificateGroup::IdCard
            }
            Self::EnglishCertificate | Self::EnglishVisaCertificate => CertificateGroup::English,
        }
    }

    /// Visa letters must name the destination country
    #[inline]
    pub const fn is_visa(&self) -> bool {
        matches!(self, Self::EnglishVisaCertificate)
    }

    /// Look up a wire label
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|t| t.to_string() == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip_through_lookup() {
        for t in CertificateType::ALL {
            assert_eq!(CertificateType::from_label(&t.to_string()), Some(t));
        }
        assert_eq!(CertificateType::from_label("passport"), None);
    }

    #[test]
    fn test_serde_uses_thai_label() {
        let json = serde_json::to_string(&CertificateType::GovernmentHousingBank).unwrap();
        assert_eq!(json, "\"ธอส.\"");
        let t: CertificateType = serde_json::from_str("\"รับรองภาษาอังกฤษเพื่อขอวีซ่า\"").unwrap();
        assert!(t.is_visa());
    }

    #[test]
    fn test_groups() {
        assert_eq!(CertificateType::IslamicBank.group(), CertificateGroup::Bank);
        assert_eq!(CertificateType::CivilServantCard.group(), CertificateGroup::IdCard);
        let english = CertificateType::ALL
            .iter()
            .filter(|t| t.group() == CertificateGroup::English)
            .count();
        assert_eq!(english, 2);
    }
}
