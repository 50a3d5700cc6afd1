//! Screen identifiers for every screen the kiosk can show.
//!
//! The set is closed: anything that does not parse to a known tag falls back
//! to the entry screen instead of producing an undefined view.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every screen the kiosk flow can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScreenId {
    /// Entry screen. Login method choice.
    Welcome,
    ReadingId,
    Verification,
    IdentityVerified,
    EligibilityWallet,
    StudentDetail,
    B40Detail,
    RegionalDetail,
    EligibleServices,
    StudentGrantCategory,
    FlysiswaDetail,
    PtptnDetail,
    JpaDetail,
    StrDetail,
    ServiceDetails,
    Confirmation,
    Processing,
    Success,
    CheckApplicationInput,
    ApplicationDetails,
    HealthcareCoverage,
    PublicHealthcareDetail,
    UniversityGpaDetail,
    MadaniDetail,
    MysalamDetail,
    PekaB40Detail,
    ApplicationHistoryDashboard,
    SocialServicesHistory,
    TransportationHistory,
    EducationHistory,
    HealthcareCoverageStatus,
}

impl ScreenId {
    /// The screen every session starts on and returns to on logout.
    pub const ENTRY: ScreenId = ScreenId::Welcome;

    /// All registered screens, in flow order.
    pub const ALL: [ScreenId; 31] = [
        ScreenId::Welcome,
        ScreenId::ReadingId,
        ScreenId::Verification,
        ScreenId::IdentityVerified,
        ScreenId::EligibilityWallet,
        ScreenId::StudentDetail,
        ScreenId::B40Detail,
        ScreenId::RegionalDetail,
        ScreenId::EligibleServices,
        ScreenId::StudentGrantCategory,
        ScreenId::FlysiswaDetail,
        ScreenId::PtptnDetail,
        ScreenId::JpaDetail,
        ScreenId::StrDetail,
        ScreenId::ServiceDetails,
        ScreenId::Confirmation,
        ScreenId::Processing,
        ScreenId::Success,
        ScreenId::CheckApplicationInput,
        ScreenId::ApplicationDetails,
        ScreenId::HealthcareCoverage,
        ScreenId::PublicHealthcareDetail,
        ScreenId::UniversityGpaDetail,
        ScreenId::MadaniDetail,
        ScreenId::MysalamDetail,
        ScreenId::PekaB40Detail,
        ScreenId::ApplicationHistoryDashboard,
        ScreenId::SocialServicesHistory,
        ScreenId::TransportationHistory,
        ScreenId::EducationHistory,
        ScreenId::HealthcareCoverageStatus,
    ];

    /// Stable kebab-case tag for this screen.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenId::Welcome => "welcome",
            ScreenId::ReadingId => "reading-id",
            ScreenId::Verification => "verification",
            ScreenId::IdentityVerified => "identity-verified",
            ScreenId::EligibilityWallet => "eligibility-wallet",
            ScreenId::StudentDetail => "student-detail",
            ScreenId::B40Detail => "b40-detail",
            ScreenId::RegionalDetail => "regional-detail",
            ScreenId::EligibleServices => "eligible-services",
            ScreenId::StudentGrantCategory => "student-grant-category",
            ScreenId::FlysiswaDetail => "flysiswa-detail",
            ScreenId::PtptnDetail => "ptptn-detail",
            ScreenId::JpaDetail => "jpa-detail",
            ScreenId::StrDetail => "str-detail",
            ScreenId::ServiceDetails => "service-details",
            ScreenId::Confirmation => "confirmation",
            ScreenId::Processing => "processing",
            ScreenId::Success => "success",
            ScreenId::CheckApplicationInput => "check-application-input",
            ScreenId::ApplicationDetails => "application-details",
            ScreenId::HealthcareCoverage => "healthcare-coverage",
            ScreenId::PublicHealthcareDetail => "public-healthcare-detail",
            ScreenId::UniversityGpaDetail => "university-gpa-detail",
            ScreenId::MadaniDetail => "madani-detail",
            ScreenId::MysalamDetail => "mysalam-detail",
            ScreenId::PekaB40Detail => "peka-b40-detail",
            ScreenId::ApplicationHistoryDashboard => "application-history-dashboard",
            ScreenId::SocialServicesHistory => "social-services-history",
            ScreenId::TransportationHistory => "transportation-history",
            ScreenId::EducationHistory => "education-history",
            ScreenId::HealthcareCoverageStatus => "healthcare-coverage-status",
        }
    }

    /// Parse a tag, falling back to the entry screen for anything unknown.
    pub fn parse_or_entry(tag: &str) -> ScreenId {
        tag.parse().unwrap_or(ScreenId::ENTRY)
    }

    pub fn is_entry(&self) -> bool {
        *self == ScreenId::ENTRY
    }

    /// Screens that only signal completion after a delay (no user choices).
    pub fn is_timed(&self) -> bool {
        matches!(
            self,
            ScreenId::ReadingId | ScreenId::Verification | ScreenId::Processing
        )
    }

    /// Screens that render a selected service and cannot be shown without one.
    pub fn requires_service(&self) -> bool {
        matches!(
            self,
            ScreenId::ServiceDetails | ScreenId::Confirmation | ScreenId::Success
        )
    }

    /// Screens belonging to the service-application sub-flow.
    pub fn in_service_flow(&self) -> bool {
        self.requires_service() || *self == ScreenId::Processing
    }

    /// Screens belonging to the reference lookup sub-flow.
    pub fn in_reference_flow(&self) -> bool {
        matches!(
            self,
            ScreenId::CheckApplicationInput | ScreenId::ApplicationDetails
        )
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScreenId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScreenId::ALL
            .iter()
            .copied()
            .find(|screen| screen.as_str() == s)
            .ok_or_else(|| format!("Unknown screen: {}", s))
    }
}
