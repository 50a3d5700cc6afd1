//! Static kiosk content: screen copy, the eligible services and the options
//! each screen offers.
//!
//! Data only. Whether an option actually leads anywhere is decided by the
//! screen graph when it is chosen.

use crate::navigation::{Intent, Payload, ScreenId};
use crate::state::{LoginMethod, SelectedService, SessionState};
use crate::widgets::MenuItem;
use indoc::indoc;

/// Title and body text for one screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenCopy {
    pub title: &'static str,
    pub body: &'static str,
}

/// A selectable option: what the card shows and the intent it sends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    pub item: MenuItem,
    pub intent: Intent,
    pub payload: Option<Payload>,
}

impl MenuOption {
    fn new(icon: &str, text: &str, intent: Intent) -> Self {
        Self {
            item: MenuItem::new(icon, text),
            intent,
            payload: None,
        }
    }

    fn info(mut self, info: &str) -> Self {
        self.item = self.item.info(info);
        self
    }

    fn with(mut self, payload: Payload) -> Self {
        self.payload = Some(payload);
        self
    }

    fn choice(icon: &str, text: &str, intent: Intent, value: &str) -> Self {
        Self::new(icon, text, intent).with(Payload::choice(value))
    }
}

fn back() -> MenuOption {
    MenuOption::new("←", "Back", Intent::Back)
}

pub fn copy(screen: ScreenId) -> ScreenCopy {
    let (title, body) = match screen {
        ScreenId::Welcome => (
            "Welcome",
            indoc! {"
                Selamat datang. Access government services in one place.

                Choose how you want to identify yourself.
            "},
        ),
        ScreenId::ReadingId => ("Reading ID", "Reading your MyDigital ID..."),
        ScreenId::Verification => ("Verification", "Verifying your identity with the national registry..."),
        ScreenId::IdentityVerified => ("Identity Verified", "Your identity has been verified."),
        ScreenId::EligibilityWallet => (
            "Eligibility Wallet",
            "Your eligibility cards and the services they unlock.",
        ),
        ScreenId::StudentDetail => (
            "Student Card",
            indoc! {"
                Registered full-time student.
                Unlocks education grants, student loans and campus healthcare.
            "},
        ),
        ScreenId::B40Detail => (
            "B40 Household Card",
            indoc! {"
                Household income in the bottom 40% bracket.
                Unlocks cash aid, PeKa B40 screening and mySalam protection.
            "},
        ),
        ScreenId::RegionalDetail => (
            "Regional Card",
            indoc! {"
                Resident of a designated development region.
                Unlocks regional travel subsidies.
            "},
        ),
        ScreenId::EligibleServices => (
            "Eligible Services",
            "Services you can apply for today.",
        ),
        ScreenId::StudentGrantCategory => ("Student Grants", "Choose a grant programme."),
        ScreenId::FlysiswaDetail => (
            "FlySiswa",
            "Subsidised return flights between home and campus, once a year.",
        ),
        ScreenId::PtptnDetail => ("PTPTN", "National higher education study loan."),
        ScreenId::JpaDetail => ("JPA Scholarship", "Public Service Department scholarship."),
        ScreenId::StrDetail => ("STR", "Sumbangan Tunai Rahmah cash assistance for eligible students' families."),
        ScreenId::ServiceDetails => (
            "Service Details",
            "Review the service and its requirements before applying.",
        ),
        ScreenId::Confirmation => (
            "Confirm Application",
            "Your verified details will be submitted with this application.",
        ),
        ScreenId::Processing => ("Processing", "Submitting your application..."),
        ScreenId::Success => ("Application Submitted", "Your application has been received."),
        ScreenId::CheckApplicationInput => (
            "Check Application",
            "Enter the reference number printed on your application slip.",
        ),
        ScreenId::ApplicationDetails => ("Application Status", "Status of the application you looked up."),
        ScreenId::HealthcareCoverage => ("Healthcare Coverage", "Healthcare programmes you are covered by."),
        ScreenId::PublicHealthcareDetail => (
            "Public Healthcare",
            "Subsidised treatment at government clinics and hospitals.",
        ),
        ScreenId::UniversityGpaDetail => (
            "University Health",
            "Campus clinic coverage for registered students.",
        ),
        ScreenId::MadaniDetail => ("Madani Medical", "Free treatment at participating private clinics."),
        ScreenId::MysalamDetail => ("mySalam", "Critical illness takaful protection for B40 households."),
        ScreenId::PekaB40Detail => ("PeKa B40", "Free health screening for B40 adults aged 40 and above."),
        ScreenId::ApplicationHistoryDashboard => (
            "Application History",
            "Your past applications by category.",
        ),
        ScreenId::SocialServicesHistory => ("Social Services", "Cash aid and welfare applications."),
        ScreenId::TransportationHistory => ("Transportation", "Travel subsidy applications."),
        ScreenId::EducationHistory => ("Education", "Grant, loan and scholarship applications."),
        ScreenId::HealthcareCoverageStatus => ("Healthcare", "Coverage enrolment status."),
    };
    ScreenCopy { title, body }
}

/// The services offered on the eligible-services screen
pub fn services() -> Vec<SelectedService> {
    let service = |id: &str, title: &str, icon: &str, category: &str, description: &str, requirements: &[&str]| {
        SelectedService {
            id: id.to_string(),
            title: title.to_string(),
            icon: icon.to_string(),
            description: description.to_string(),
            eligibility_requirements: requirements.iter().map(|r| (*r).to_string()).collect(),
            category: category.to_string(),
        }
    };
    vec![
        service(
            "student-grant",
            "Student Grants",
            "🎓",
            "Education",
            "Grants, loans and scholarships for students.",
            &["Registered student"],
        ),
        service(
            "healthcare-benefit",
            "Healthcare Benefits",
            "✚",
            "Healthcare",
            "Healthcare programmes you are covered by.",
            &["Malaysian citizen"],
        ),
        service(
            "bantuan-tunai",
            "Cash Assistance",
            "💰",
            "Social Services",
            "Monthly cash aid for low-income households.",
            &["B40 household", "Malaysian citizen aged 18 and above"],
        ),
        service(
            "transit-pass",
            "Transit Pass",
            "🚌",
            "Transportation",
            "Unlimited monthly rail and bus travel at a subsidised rate.",
            &["Regional card or B40 household"],
        ),
        service(
            "skills-training",
            "Skills Training",
            "🛠",
            "Education",
            "Fully funded certified training courses.",
            &["Malaysian citizen aged 18 to 60"],
        ),
    ]
}

/// Options a screen offers, in display order
pub fn options(screen: ScreenId) -> Vec<MenuOption> {
    use Intent as I;
    match screen {
        ScreenId::Welcome => vec![
            MenuOption::new("▣", "Insert MyKad", I::StartLogin)
                .info("Place your card in the reader")
                .with(Payload::Login(LoginMethod::CredentialCard)),
            MenuOption::new("▦", "Scan MyDigital ID QR", I::StartLogin)
                .info("Open the MyDigital ID app")
                .with(Payload::Login(LoginMethod::QuickResponseCode)),
        ],
        ScreenId::ReadingId | ScreenId::Verification | ScreenId::Processing => Vec::new(),
        ScreenId::IdentityVerified => vec![MenuOption::new("→", "Continue", I::Continue)],
        ScreenId::EligibilityWallet => vec![
            MenuOption::new("★", "View eligible services", I::ViewServices),
            MenuOption::choice("🎓", "Student card", I::OpenCard, "student"),
            MenuOption::choice("🏠", "B40 household card", I::OpenCard, "b40"),
            MenuOption::choice("📍", "Regional card", I::OpenCard, "regional"),
            MenuOption::new("🔎", "Check application status", I::CheckApplication),
            MenuOption::new("🗂", "Application history", I::ApplicationHistory),
        ],
        ScreenId::EligibleServices => services()
            .into_iter()
            .map(|svc| MenuOption {
                item: MenuItem::new(svc.icon.clone(), svc.title.clone()).info(svc.category.clone()),
                intent: I::SelectService,
                payload: Some(Payload::Service(svc)),
            })
            .chain([back()])
            .collect(),
        ScreenId::StudentGrantCategory => vec![
            MenuOption::choice("✈", "FlySiswa", I::SelectGrant, "flysiswa"),
            MenuOption::choice("🏦", "PTPTN", I::SelectGrant, "ptptn"),
            MenuOption::choice("📜", "JPA Scholarship", I::SelectGrant, "jpa"),
            MenuOption::choice("💵", "STR", I::SelectGrant, "str"),
            back(),
        ],
        ScreenId::HealthcareCoverage => vec![
            MenuOption::choice("🏥", "Public Healthcare", I::OpenCoverage, "public-healthcare"),
            MenuOption::choice("🎓", "University Health", I::OpenCoverage, "university-gpa"),
            MenuOption::choice("✚", "Madani Medical", I::OpenCoverage, "madani"),
            MenuOption::choice("🛡", "mySalam", I::OpenCoverage, "mysalam"),
            MenuOption::choice("🩺", "PeKa B40", I::OpenCoverage, "peka-b40"),
            back(),
        ],
        ScreenId::ApplicationHistoryDashboard => vec![
            MenuOption::choice("🤝", "Social services", I::OpenHistory, "social-services"),
            MenuOption::choice("🚌", "Transportation", I::OpenHistory, "transportation"),
            MenuOption::choice("🎓", "Education", I::OpenHistory, "education"),
            MenuOption::choice("✚", "Healthcare", I::OpenHistory, "healthcare"),
            back(),
        ],
        ScreenId::TransportationHistory => vec![
            MenuOption::new("★", "Apply for more services", I::ViewServices),
            back(),
        ],
        ScreenId::ServiceDetails => vec![MenuOption::new("✔", "Apply for this service", I::Accept), back()],
        ScreenId::Confirmation => vec![MenuOption::new("✔", "Confirm and submit", I::Confirm), back()],
        ScreenId::Success => vec![
            MenuOption::new("⌂", "Back to my wallet", I::Finish),
            MenuOption::new("★", "Check other services", I::CheckOtherServices),
        ],
        ScreenId::CheckApplicationInput => {
            vec![MenuOption::new("🔎", "Check status", I::Submit), back()]
        }
        ScreenId::ApplicationDetails => vec![
            MenuOption::new("🔎", "Check another application", I::CheckAnother),
            back(),
        ],
        ScreenId::StudentDetail
        | ScreenId::B40Detail
        | ScreenId::RegionalDetail
        | ScreenId::FlysiswaDetail
        | ScreenId::PtptnDetail
        | ScreenId::JpaDetail
        | ScreenId::StrDetail
        | ScreenId::PublicHealthcareDetail
        | ScreenId::UniversityGpaDetail
        | ScreenId::MadaniDetail
        | ScreenId::MysalamDetail
        | ScreenId::PekaB40Detail
        | ScreenId::SocialServicesHistory
        | ScreenId::EducationHistory
        | ScreenId::HealthcareCoverageStatus => vec![back()],
    }
}

/// Extra line that depends on the live session, if the screen shows one
pub fn session_line(screen: ScreenId, state: &SessionState) -> Option<String> {
    match screen {
        ScreenId::IdentityVerified => Some(format!("Verified with {}", state.login_method.label())),
        ScreenId::ApplicationDetails => Some(format!("Reference: {}  ·  Status: Under review", state.reference_id)),
        _ => None,
    }
}
