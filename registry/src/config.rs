//! Configuration for the registry.

use serde::{Deserialize, Serialize};

use lifecycle::{EntityKind, LifecycleState};

/// Configuration for a [`crate::TransitionService`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Collection name map
    pub collections: Collections,
    /// Whether transitions append audit entries
    pub audit_enabled: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            collections: Collections::default(),
            audit_enabled: true,
        }
    }
}

impl RegistryConfig {
    /// Load config from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

/// Document-store collection names, one entity collection and one
/// timeline (audit) collection per kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collections {
    pub users: String,
    pub research: String,
    pub research_timeline: String,
    pub ipr: String,
    pub ipr_timeline: String,
    pub innovations: String,
    pub innovation_timeline: String,
    pub startups: String,
    pub startup_timeline: String,
    pub collaboration_requests: String,
}

impl Default for Collections {
    fn default() -> Self {
        Self {
            users: "users".to_string(),
            research: "research".to_string(),
            research_timeline: "research_timeline".to_string(),
            ipr: "ipr".to_string(),
            ipr_timeline: "ipr_timeline".to_string(),
            innovations: "innovations".to_string(),
            innovation_timeline: "innovation_timeline".to_string(),
            startups: "startups".to_string(),
            startup_timeline: "startup_timeline".to_string(),
            collaboration_requests: "collaboration_requests".to_string(),
        }
    }
}

impl Collections {
    /// The entity collection for a state machine.
    pub fn entities<S: LifecycleState>(&self) -> &str {
        match S::KIND {
            EntityKind::ResearchProject => &self.research,
            EntityKind::IprApplication => &self.ipr,
            EntityKind::InnovationIdea => &self.innovations,
            EntityKind::Startup => &self.startups,
        }
    }

    /// The timeline collection for a state machine.
    pub fn timeline<S: LifecycleState>(&self) -> &str {
        match S::KIND {
            EntityKind::ResearchProject => &self.research_timeline,
            EntityKind::IprApplication => &self.ipr_timeline,
            EntityKind::InnovationIdea => &self.innovation_timeline,
            EntityKind::Startup => &self.startup_timeline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifecycle::{FundingStage, IprStatus, StartupStage};

    #[test]
    fn test_default_config() {
        let config = RegistryConfig::default();
        assert!(config.audit_enabled);
        assert_eq!(config.collections.ipr, "ipr");
        assert_eq!(config.collections.innovations, "innovations");
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = RegistryConfig::default();
        let yaml = config.to_yaml().unwrap();
        let parsed = RegistryConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed.collections.startup_timeline, "startup_timeline");
    }

    #[test]
    fn test_both_startup_machines_share_collections() {
        let collections = Collections::default();
        assert_eq!(
            collections.entities::<StartupStage>(),
            collections.entities::<FundingStage>()
        );
        assert_eq!(collections.timeline::<IprStatus>(), "ipr_timeline");
    }
}
