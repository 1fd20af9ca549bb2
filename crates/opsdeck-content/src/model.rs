// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

/// A top-level collapsible knowledge block. Identity is the `id` key;
/// two sections are equal iff their identifiers are equal.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub sub_sections: Option<&'static [SubSection]>,
}

impl PartialEq for Section {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Section {}

/// A named, ordered group of detail bullets nested within a section.
/// Bullet order is presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubSection {
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Success,
    Pending,
    Failed,
}

impl StageStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Pending => "pending",
            Self::Failed => "failed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "success" => Some(Self::Success),
            "pending" => Some(Self::Pending),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineStage {
    pub name: &'static str,
    pub status: StageStatus,
    pub duration: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStatus {
    Deployed,
    Building,
    Failed,
}

impl ImageStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Deployed => "deployed",
            Self::Building => "building",
            Self::Failed => "failed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "deployed" => Some(Self::Deployed),
            "building" => Some(Self::Building),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRecord {
    pub name: &'static str,
    pub version: &'static str,
    pub size: &'static str,
    pub layers: u32,
    pub status: ImageStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Deployment,
    StatefulSet,
}

impl ResourceKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Deployment => "Deployment",
            Self::StatefulSet => "StatefulSet",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Deployment" => Some(Self::Deployment),
            "StatefulSet" => Some(Self::StatefulSet),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterResource {
    pub name: &'static str,
    pub kind: ResourceKind,
    pub status: &'static str,
    pub replicas: &'static str,
    pub cpu: &'static str,
    pub memory: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickStat {
    pub label: &'static str,
    pub value: &'static str,
}

/// A theory topic rendered as a sequence of titled prose blocks. Topics
/// share the expansion set with sections, so `id` must not collide with
/// any section identifier.
#[derive(Debug, Clone, Copy)]
pub struct TheoryTopic {
    pub id: &'static str,
    pub title: &'static str,
    pub blocks: &'static [TheoryBlock],
}

impl PartialEq for TheoryTopic {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TheoryTopic {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TheoryBlock {
    pub heading: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvancedTopic {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyCard {
    pub name: &'static str,
    pub description: &'static str,
    pub benefits: &'static [&'static str],
    pub risks: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChallengeCard {
    pub challenge: &'static str,
    pub causes: &'static str,
    pub solutions: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::{ImageStatus, ResourceKind, Section, StageStatus};

    #[test]
    fn section_equality_is_identifier_equality() {
        let left = Section {
            id: "jenkins",
            title: "Jenkins",
            summary: "one",
            sub_sections: None,
        };
        let right = Section {
            id: "jenkins",
            title: "Jenkins CI",
            summary: "another",
            sub_sections: None,
        };
        assert_eq!(left, right);

        let other = Section { id: "docker", ..left };
        assert_ne!(left, other);
    }

    #[test]
    fn stage_status_round_trips() {
        for status in [StageStatus::Success, StageStatus::Pending, StageStatus::Failed] {
            assert_eq!(StageStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(StageStatus::parse("running"), None);
    }

    #[test]
    fn image_status_round_trips() {
        for status in [ImageStatus::Deployed, ImageStatus::Building, ImageStatus::Failed] {
            assert_eq!(ImageStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(ImageStatus::parse(""), None);
    }

    #[test]
    fn resource_kind_round_trips() {
        for kind in [ResourceKind::Deployment, ResourceKind::StatefulSet] {
            assert_eq!(ResourceKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(ResourceKind::parse("DaemonSet"), None);
    }
}
