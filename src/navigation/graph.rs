//! Screen graph registry.
//!
//! A static table of every legal `(screen, intent) -> screen` edge. Grouped
//! screens that fan out to several detail screens are modelled as a branch
//! keyed by the payload discriminator. An unknown discriminator resolves to
//! "no transition" rather than an error.
//!
//! The registry is pure: it knows nothing about the live session. Payload
//! preconditions that depend on session state (a selected service must exist
//! before service screens) are checked by the controller.

use super::intent::{Intent, Payload, PayloadKind};
use super::screen_id::ScreenId;
use serde::Serialize;
use std::collections::{HashSet, VecDeque};

use super::screen_id::ScreenId as S;

/// Where an edge leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Screen(ScreenId),
    /// Pick by discriminator; `fallback` is used for any other value.
    Branch {
        table: &'static [(&'static str, ScreenId)],
        fallback: Option<ScreenId>,
    },
}

/// A single declared edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: ScreenId,
    pub intent: Intent,
    pub requires: Option<PayloadKind>,
    pub target: Target,
}

impl Edge {
    const fn to(from: ScreenId, intent: Intent, target: ScreenId) -> Self {
        Self {
            from,
            intent,
            requires: None,
            target: Target::Screen(target),
        }
    }

    const fn carrying(from: ScreenId, intent: Intent, kind: PayloadKind, target: ScreenId) -> Self {
        Self {
            from,
            intent,
            requires: Some(kind),
            target: Target::Screen(target),
        }
    }

    const fn branch(
        from: ScreenId,
        intent: Intent,
        kind: PayloadKind,
        table: &'static [(&'static str, ScreenId)],
        fallback: Option<ScreenId>,
    ) -> Self {
        Self {
            from,
            intent,
            requires: Some(kind),
            target: Target::Branch { table, fallback },
        }
    }

    /// Every screen this edge can lead to.
    pub fn targets(&self) -> Vec<ScreenId> {
        match self.target {
            Target::Screen(screen) => vec![screen],
            Target::Branch { table, fallback } => table
                .iter()
                .map(|(_, screen)| *screen)
                .chain(fallback)
                .collect(),
        }
    }
}

/// Result of looking up an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Target(ScreenId),
    /// The current screen declares no edge for this intent.
    NoEdge,
    /// The edge needs a payload of a different shape (or none was given).
    MissingPayload,
    /// A branch edge did not recognise the discriminator.
    UnknownDiscriminator,
}

impl Resolution {
    pub fn screen(&self) -> Option<ScreenId> {
        match self {
            Resolution::Target(screen) => Some(*screen),
            _ => None,
        }
    }
}

const WALLET_CARDS: &[(&str, ScreenId)] = &[
    ("student", S::StudentDetail),
    ("b40", S::B40Detail),
    ("regional", S::RegionalDetail),
];

/// Grouped services open their own category screen; every other id is a
/// plain application and goes to the service details.
const SERVICE_GROUPS: &[(&str, ScreenId)] = &[
    ("student-grant", S::StudentGrantCategory),
    ("healthcare-benefit", S::HealthcareCoverage),
];

const STUDENT_GRANTS: &[(&str, ScreenId)] = &[
    ("flysiswa", S::FlysiswaDetail),
    ("ptptn", S::PtptnDetail),
    ("jpa", S::JpaDetail),
    ("str", S::StrDetail),
];

const COVERAGE_DETAILS: &[(&str, ScreenId)] = &[
    ("public-healthcare", S::PublicHealthcareDetail),
    ("university-gpa", S::UniversityGpaDetail),
    ("madani", S::MadaniDetail),
    ("mysalam", S::MysalamDetail),
    ("peka-b40", S::PekaB40Detail),
];

const HISTORY_CATEGORIES: &[(&str, ScreenId)] = &[
    ("social-services", S::SocialServicesHistory),
    ("transportation", S::TransportationHistory),
    ("education", S::EducationHistory),
    ("healthcare", S::HealthcareCoverageStatus),
];

static STANDARD_EDGES: &[Edge] = &[
    // Identification
    Edge::carrying(S::Welcome, Intent::StartLogin, PayloadKind::Login, S::ReadingId),
    Edge::to(S::ReadingId, Intent::Complete, S::Verification),
    Edge::to(S::Verification, Intent::Complete, S::IdentityVerified),
    Edge::to(S::IdentityVerified, Intent::Continue, S::EligibilityWallet),
    // Wallet
    Edge::to(S::EligibilityWallet, Intent::ViewServices, S::EligibleServices),
    Edge::branch(S::EligibilityWallet, Intent::OpenCard, PayloadKind::Choice, WALLET_CARDS, None),
    Edge::to(S::EligibilityWallet, Intent::CheckApplication, S::CheckApplicationInput),
    Edge::to(S::EligibilityWallet, Intent::ApplicationHistory, S::ApplicationHistoryDashboard),
    Edge::to(S::StudentDetail, Intent::Back, S::EligibilityWallet),
    Edge::to(S::B40Detail, Intent::Back, S::EligibilityWallet),
    Edge::to(S::RegionalDetail, Intent::Back, S::EligibilityWallet),
    // Eligible services
    Edge::branch(
        S::EligibleServices,
        Intent::SelectService,
        PayloadKind::Service,
        SERVICE_GROUPS,
        Some(S::ServiceDetails),
    ),
    Edge::to(S::EligibleServices, Intent::Back, S::EligibilityWallet),
    Edge::branch(S::StudentGrantCategory, Intent::SelectGrant, PayloadKind::Choice, STUDENT_GRANTS, None),
    Edge::to(S::StudentGrantCategory, Intent::Back, S::EligibleServices),
    Edge::to(S::FlysiswaDetail, Intent::Back, S::StudentGrantCategory),
    Edge::to(S::PtptnDetail, Intent::Back, S::StudentGrantCategory),
    Edge::to(S::JpaDetail, Intent::Back, S::StudentGrantCategory),
    Edge::to(S::StrDetail, Intent::Back, S::StudentGrantCategory),
    // Service application
    Edge::to(S::ServiceDetails, Intent::Accept, S::Confirmation),
    Edge::to(S::ServiceDetails, Intent::Back, S::EligibleServices),
    Edge::to(S::Confirmation, Intent::Confirm, S::Processing),
    Edge::to(S::Confirmation, Intent::Back, S::ServiceDetails),
    Edge::to(S::Processing, Intent::Complete, S::Success),
    Edge::to(S::Success, Intent::Finish, S::EligibilityWallet),
    Edge::to(S::Success, Intent::CheckOtherServices, S::EligibleServices),
    // Reference lookup
    Edge::carrying(S::CheckApplicationInput, Intent::Submit, PayloadKind::Reference, S::ApplicationDetails),
    Edge::to(S::CheckApplicationInput, Intent::Back, S::EligibilityWallet),
    Edge::to(S::ApplicationDetails, Intent::Back, S::EligibilityWallet),
    Edge::to(S::ApplicationDetails, Intent::CheckAnother, S::CheckApplicationInput),
    // Healthcare coverage
    Edge::branch(S::HealthcareCoverage, Intent::OpenCoverage, PayloadKind::Choice, COVERAGE_DETAILS, None),
    Edge::to(S::HealthcareCoverage, Intent::Back, S::EligibleServices),
    Edge::to(S::PublicHealthcareDetail, Intent::Back, S::HealthcareCoverage),
    Edge::to(S::UniversityGpaDetail, Intent::Back, S::HealthcareCoverage),
    Edge::to(S::MadaniDetail, Intent::Back, S::HealthcareCoverage),
    Edge::to(S::MysalamDetail, Intent::Back, S::HealthcareCoverage),
    Edge::to(S::PekaB40Detail, Intent::Back, S::HealthcareCoverage),
    // Application history
    Edge::branch(
        S::ApplicationHistoryDashboard,
        Intent::OpenHistory,
        PayloadKind::Choice,
        HISTORY_CATEGORIES,
        None,
    ),
    Edge::to(S::ApplicationHistoryDashboard, Intent::Back, S::EligibilityWallet),
    Edge::to(S::SocialServicesHistory, Intent::Back, S::ApplicationHistoryDashboard),
    Edge::to(S::TransportationHistory, Intent::Back, S::ApplicationHistoryDashboard),
    Edge::to(S::TransportationHistory, Intent::ViewServices, S::EligibleServices),
    Edge::to(S::EducationHistory, Intent::Back, S::ApplicationHistoryDashboard),
    Edge::to(S::HealthcareCoverageStatus, Intent::Back, S::ApplicationHistoryDashboard),
];

/// Flattened edge for listing (`kioskflow graph`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeRow {
    pub from: ScreenId,
    pub intent: Intent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires: Option<PayloadKind>,
    /// Discriminator value, `*` for a branch fallback, absent for plain edges.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choice: Option<&'static str>,
    pub to: ScreenId,
}

/// The declarative transition table.
#[derive(Debug, Clone, Copy)]
pub struct ScreenGraph {
    edges: &'static [Edge],
}

impl Default for ScreenGraph {
    fn default() -> Self {
        Self::standard()
    }
}

impl ScreenGraph {
    /// The kiosk's full screen graph.
    pub fn standard() -> Self {
        Self {
            edges: STANDARD_EDGES,
        }
    }

    pub fn edges(&self) -> &'static [Edge] {
        self.edges
    }

    fn edge(&self, from: ScreenId, intent: Intent) -> Option<&'static Edge> {
        self.edges
            .iter()
            .find(|edge| edge.from == from && edge.intent == intent)
    }

    /// Look up where `intent` leads from `current`.
    pub fn resolve(&self, current: ScreenId, intent: Intent, payload: Option<&Payload>) -> Resolution {
        let Some(edge) = self.edge(current, intent) else {
            return Resolution::NoEdge;
        };

        if let Some(kind) = edge.requires {
            if payload.map(Payload::kind) != Some(kind) {
                return Resolution::MissingPayload;
            }
        }

        match edge.target {
            Target::Screen(screen) => Resolution::Target(screen),
            Target::Branch { table, fallback } => {
                let discriminator = payload.and_then(Payload::discriminator);
                let matched = discriminator.and_then(|value| {
                    table
                        .iter()
                        .find(|(key, _)| *key == value)
                        .map(|(_, screen)| *screen)
                });
                match matched.or(fallback) {
                    Some(screen) => Resolution::Target(screen),
                    None => Resolution::UnknownDiscriminator,
                }
            }
        }
    }

    /// Intents declared from `screen`, in table order.
    pub fn intents_from(&self, screen: ScreenId) -> Vec<Intent> {
        self.edges
            .iter()
            .filter(|edge| edge.from == screen)
            .map(|edge| edge.intent)
            .collect()
    }

    /// Discriminator values accepted by a branch edge, if it is one.
    pub fn choices(&self, screen: ScreenId, intent: Intent) -> Vec<&'static str> {
        match self.edge(screen, intent).map(|edge| edge.target) {
            Some(Target::Branch { table, .. }) => table.iter().map(|(key, _)| *key).collect(),
            _ => Vec::new(),
        }
    }

    /// Screens reachable from the entry screen through table edges. Logout is
    /// handled by the controller and never appears here.
    pub fn reachable(&self) -> HashSet<ScreenId> {
        let mut seen = HashSet::from([ScreenId::ENTRY]);
        let mut queue = VecDeque::from([ScreenId::ENTRY]);
        while let Some(screen) = queue.pop_front() {
            for edge in self.edges.iter().filter(|edge| edge.from == screen) {
                for target in edge.targets() {
                    if seen.insert(target) {
                        queue.push_back(target);
                    }
                }
            }
        }
        seen
    }

    /// One row per concrete `(screen, intent, choice) -> screen` mapping.
    pub fn rows(&self) -> Vec<EdgeRow> {
        let mut rows = Vec::new();
        for edge in self.edges {
            match edge.target {
                Target::Screen(to) => rows.push(EdgeRow {
                    from: edge.from,
                    intent: edge.intent,
                    requires: edge.requires,
                    choice: None,
                    to,
                }),
                Target::Branch { table, fallback } => {
                    for &(choice, to) in table {
                        rows.push(EdgeRow {
                            from: edge.from,
                            intent: edge.intent,
                            requires: edge.requires,
                            choice: Some(choice),
                            to,
                        });
                    }
                    if let Some(to) = fallback {
                        rows.push(EdgeRow {
                            from: edge.from,
                            intent: edge.intent,
                            requires: edge.requires,
                            choice: Some("*"),
                            to,
                        });
                    }
                }
            }
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{LoginMethod, SelectedService};

    fn graph() -> ScreenGraph {
        ScreenGraph::standard()
    }

    #[test]
    fn test_no_duplicate_edges() {
        let mut seen = HashSet::new();
        for edge in graph().edges() {
            assert!(
                seen.insert((edge.from, edge.intent)),
                "duplicate edge {} --{}-->",
                edge.from,
                edge.intent
            );
        }
    }

    #[test]
    fn test_every_screen_is_reachable() {
        let reachable = graph().reachable();
        for screen in ScreenId::ALL {
            assert!(reachable.contains(&screen), "{} is unreachable", screen);
        }
    }

    #[test]
    fn test_every_non_entry_screen_has_a_way_forward_or_back() {
        for screen in ScreenId::ALL {
            assert!(
                !graph().intents_from(screen).is_empty(),
                "{} has no outgoing edges",
                screen
            );
        }
    }

    #[test]
    fn test_no_edge_declares_logout() {
        assert!(graph().edges().iter().all(|edge| edge.intent != Intent::Logout));
    }

    #[test]
    fn test_resolve_plain_edge() {
        assert_eq!(
            graph().resolve(S::Success, Intent::Finish, None),
            Resolution::Target(S::EligibilityWallet)
        );
    }

    #[test]
    fn test_resolve_missing_edge() {
        assert_eq!(graph().resolve(S::Welcome, Intent::Back, None), Resolution::NoEdge);
        assert_eq!(graph().resolve(S::Success, Intent::Accept, None), Resolution::NoEdge);
    }

    #[test]
    fn test_resolve_requires_payload_shape() {
        assert_eq!(
            graph().resolve(S::Welcome, Intent::StartLogin, None),
            Resolution::MissingPayload
        );
        assert_eq!(
            graph().resolve(S::Welcome, Intent::StartLogin, Some(&Payload::choice("mykad"))),
            Resolution::MissingPayload
        );
        assert_eq!(
            graph().resolve(
                S::Welcome,
                Intent::StartLogin,
                Some(&Payload::Login(LoginMethod::CredentialCard))
            ),
            Resolution::Target(S::ReadingId)
        );
    }

    #[test]
    fn test_branch_unknown_discriminator_stays_put() {
        assert_eq!(
            graph().resolve(S::StudentGrantCategory, Intent::SelectGrant, Some(&Payload::choice("mara"))),
            Resolution::UnknownDiscriminator
        );
        assert_eq!(Resolution::UnknownDiscriminator.screen(), None);
    }

    #[test]
    fn test_branch_fans_out_by_discriminator() {
        let g = graph();
        assert_eq!(
            g.resolve(S::StudentGrantCategory, Intent::SelectGrant, Some(&Payload::choice("jpa")))
                .screen(),
            Some(S::JpaDetail)
        );
        assert_eq!(
            g.resolve(S::HealthcareCoverage, Intent::OpenCoverage, Some(&Payload::choice("peka-b40")))
                .screen(),
            Some(S::PekaB40Detail)
        );
        assert_eq!(
            g.resolve(
                S::ApplicationHistoryDashboard,
                Intent::OpenHistory,
                Some(&Payload::choice("healthcare"))
            )
            .screen(),
            Some(S::HealthcareCoverageStatus)
        );
        assert_eq!(
            g.resolve(S::EligibilityWallet, Intent::OpenCard, Some(&Payload::choice("b40")))
                .screen(),
            Some(S::B40Detail)
        );
    }

    #[test]
    fn test_select_service_groups_and_fallback() {
        let g = graph();
        let grant = Payload::Service(SelectedService::new("student-grant", "Student Grant"));
        let health = Payload::Service(SelectedService::new("healthcare-benefit", "Healthcare"));
        let plain = Payload::Service(SelectedService::new("x", "X"));
        assert_eq!(
            g.resolve(S::EligibleServices, Intent::SelectService, Some(&grant)).screen(),
            Some(S::StudentGrantCategory)
        );
        assert_eq!(
            g.resolve(S::EligibleServices, Intent::SelectService, Some(&health)).screen(),
            Some(S::HealthcareCoverage)
        );
        assert_eq!(
            g.resolve(S::EligibleServices, Intent::SelectService, Some(&plain)).screen(),
            Some(S::ServiceDetails)
        );
    }

    #[test]
    fn test_rows_cover_every_branch_value() {
        let rows = graph().rows();
        let grants: Vec<_> = rows
            .iter()
            .filter(|row| row.intent == Intent::SelectGrant)
            .collect();
        assert_eq!(grants.len(), STUDENT_GRANTS.len());
        assert!(rows
            .iter()
            .any(|row| row.choice == Some("*") && row.to == S::ServiceDetails));
    }

    #[test]
    fn test_choices_lists_branch_keys() {
        assert_eq!(
            graph().choices(S::EligibilityWallet, Intent::OpenCard),
            vec!["student", "b40", "regional"]
        );
        assert!(graph().choices(S::Success, Intent::Finish).is_empty());
    }
}
