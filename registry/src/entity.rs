//! Concrete entity documents.
//!
//! Wire shape matches the backing document store (camelCase fields,
//! snake_case state tokens). Every entity is created by its owner in the
//! kind's initial state; the status fields change only through
//! [`crate::TransitionService`], via the [`StatusSlot`] seam.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lifecycle::{FundingStage, InnovationStage, IprStatus, LifecycleState, ResearchStatus, StartupStage};

/// Mutable access to one state machine on an entity.
///
/// A startup implements this twice — once per machine.
pub trait StatusSlot<S: LifecycleState> {
    fn id(&self) -> &str;
    fn owner_uid(&self) -> &str;
    fn is_public(&self) -> bool;
    fn status(&self) -> S;
    /// Set the new state and bump `updated_at`. Called only by the
    /// transition service after the store write succeeds.
    fn set_status(&mut self, next: S, at: DateTime<Utc>);
}

/// A research project tracked by its owning researcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct ResearchProject {
    pub id: String,
    /// Owning identity
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub institution: String,
    pub status: ResearchStatus,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ResearchProject {
    pub fn new(
        owner_uid: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: owner_uid.into(),
            title: title.into(),
            description: description.into(),
            category: String::new(),
            institution: String::new(),
            status: ResearchStatus::initial(),
            is_public: false,
            created_at: now,
            updated_at: now,
        }
    }
}

impl StatusSlot<ResearchStatus> for ResearchProject {
    fn id(&self) -> &str {
        &self.id
    }
    fn owner_uid(&self) -> &str {
        &self.user_id
    }
    fn is_public(&self) -> bool {
        self.is_public
    }
    fn status(&self) -> ResearchStatus {
        self.status
    }
    fn set_status(&mut self, next: ResearchStatus, at: DateTime<Utc>) {
        self.status = next;
        self.updated_at = at;
    }
}

/// An intellectual-property application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct IprApplication {
    pub id: String,
    /// Owning identity
    pub user_id: String,
    pub title: String,
    pub description: String,
    /// patent, trademark, copyright, design
    pub ipr_type: String,
    pub application_number: Option<String>,
    pub status: IprStatus,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl IprApplication {
    pub fn new(
        owner_uid: impl Into<String>,
        title: impl Into<String>,
        ipr_type: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: owner_uid.into(),
            title: title.into(),
            description: String::new(),
            ipr_type: ipr_type.into(),
            application_number: None,
            status: IprStatus::initial(),
            is_public: false,
            created_at: now,
            updated_at: now,
        }
    }
}

impl StatusSlot<IprStatus> for IprApplication {
    fn id(&self) -> &str {
        &self.id
    }
    fn owner_uid(&self) -> &str {
        &self.user_id
    }
    fn is_public(&self) -> bool {
        self.is_public
    }
    fn status(&self) -> IprStatus {
        self.status
    }
    fn set_status(&mut self, next: IprStatus, at: DateTime<Utc>) {
        self.status = next;
        self.updated_at = at;
    }
}

/// An innovation idea in the incubation pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct InnovationIdea {
    pub id: String,
    /// Owning identity
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub stage: InnovationStage,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InnovationIdea {
    pub fn new(
        owner_uid: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: owner_uid.into(),
            title: title.into(),
            description: description.into(),
            category: String::new(),
            stage: InnovationStage::initial(),
            is_public: false,
            created_at: now,
            updated_at: now,
        }
    }
}

impl StatusSlot<InnovationStage> for InnovationIdea {
    fn id(&self) -> &str {
        &self.id
    }
    fn owner_uid(&self) -> &str {
        &self.user_id
    }
    fn is_public(&self) -> bool {
        self.is_public
    }
    fn status(&self) -> InnovationStage {
        self.stage
    }
    fn set_status(&mut self, next: InnovationStage, at: DateTime<Utc>) {
        self.stage = next;
        self.updated_at = at;
    }
}

/// A registered startup, carrying two independent machines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Startup {
    pub id: String,
    /// Owning identity
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub sector: String,
    pub website: Option<String>,
    pub stage: StartupStage,
    pub funding_stage: FundingStage,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Startup {
    pub fn new(
        owner_uid: impl Into<String>,
        name: impl Into<String>,
        sector: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: owner_uid.into(),
            name: name.into(),
            description: String::new(),
            sector: sector.into(),
            website: None,
            stage: StartupStage::initial(),
            funding_stage: FundingStage::initial(),
            is_public: false,
            created_at: now,
            updated_at: now,
        }
    }
}

impl StatusSlot<StartupStage> for Startup {
    fn id(&self) -> &str {
        &self.id
    }
    fn owner_uid(&self) -> &str {
        &self.user_id
    }
    fn is_public(&self) -> bool {
        self.is_public
    }
    fn status(&self) -> StartupStage {
        self.stage
    }
    fn set_status(&mut self, next: StartupStage, at: DateTime<Utc>) {
        self.stage = next;
        self.updated_at = at;
    }
}

impl StatusSlot<FundingStage> for Startup {
    fn id(&self) -> &str {
        &self.id
    }
    fn owner_uid(&self) -> &str {
        &self.user_id
    }
    fn is_public(&self) -> bool {
        self.is_public
    }
    fn status(&self) -> FundingStage {
        self.funding_stage
    }
    fn set_status(&mut self, next: FundingStage, at: DateTime<Utc>) {
        self.funding_stage = next;
        self.updated_at = at;
    }
}
