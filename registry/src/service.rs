//! The transition service.
//!
//! Orchestrates the access and lifecycle models over the document store:
//! permission-gated entity creation, visibility rules, and the
//! compare-and-swap transition that pairs every status change with
//! exactly one audit entry.

use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

use access::{Permission, Session};
use lifecycle::{AuditEntry, EntityKind, LifecycleError, LifecycleState};

use crate::collaboration::{CollaborationKind, CollaborationRequest};
use crate::config::RegistryConfig;
use crate::entity::{InnovationIdea, IprApplication, ResearchProject, Startup, StatusSlot};
use crate::error::{RegistryError, Result};
use crate::store::DocumentStore;

/// Permission-gated entity operations over a document store.
pub struct TransitionService<S: DocumentStore> {
    store: Arc<S>,
    config: RegistryConfig,
}

impl<S: DocumentStore> TransitionService<S> {
    /// Create a service over a store with the given configuration.
    pub fn new(store: S, config: RegistryConfig) -> Self {
        Self {
            store: Arc::new(store),
            config,
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    // ── Visibility rules ────────────────────────────────────────────

    /// Whether a session may see an entity: overseers see everything,
    /// owners see their own, everyone sees public entities.
    pub fn can_view(&self, session: &Session, owner_uid: &str, is_public: bool) -> bool {
        session.has_permission(Permission::ViewAllData)
            || session.uid() == Some(owner_uid)
            || is_public
    }

    /// Whether a session may edit an entity's metadata (not its state):
    /// the kind's reviewers, or the owner.
    pub fn can_edit(&self, session: &Session, kind: EntityKind, owner_uid: &str) -> bool {
        session.has_permission(kind.required_permission()) || session.uid() == Some(owner_uid)
    }

    /// Whether a session may invoke transitions on a kind. Ownership
    /// alone never qualifies.
    pub fn can_update_stage(&self, session: &Session, kind: EntityKind) -> bool {
        session.has_permission(kind.required_permission())
    }

    // ── Entity creation ─────────────────────────────────────────────

    /// File a research project owned by the calling session.
    pub async fn create_research(
        &self,
        session: &Session,
        project: &ResearchProject,
    ) -> Result<()> {
        self.create(
            session,
            &[Permission::SubmitResearch],
            &project.user_id,
            &self.config.collections.research,
            &project.id,
            project,
        )
        .await
    }

    /// File an IPR application owned by the calling session.
    pub async fn create_ipr(&self, session: &Session, ipr: &IprApplication) -> Result<()> {
        self.create(
            session,
            &[Permission::SubmitIpr],
            &ipr.user_id,
            &self.config.collections.ipr,
            &ipr.id,
            ipr,
        )
        .await
    }

    /// Submit an innovation idea owned by the calling session.
    pub async fn create_innovation(&self, session: &Session, idea: &InnovationIdea) -> Result<()> {
        self.create(
            session,
            &[Permission::SubmitInnovation, Permission::ManageInnovations],
            &idea.user_id,
            &self.config.collections.innovations,
            &idea.id,
            idea,
        )
        .await
    }

    /// Register a startup owned by the calling session.
    pub async fn register_startup(&self, session: &Session, startup: &Startup) -> Result<()> {
        self.create(
            session,
            &[Permission::RegisterStartup, Permission::ManageStartups],
            &startup.user_id,
            &self.config.collections.startups,
            &startup.id,
            startup,
        )
        .await
    }

    async fn create<E: serde::Serialize>(
        &self,
        session: &Session,
        any_of: &[Permission],
        owner_uid: &str,
        collection: &str,
        id: &str,
        entity: &E,
    ) -> Result<()> {
        if !any_of.iter().any(|p| session.has_permission(*p)) {
            return Err(RegistryError::PermissionDenied { required: any_of[0] });
        }
        // Entities are always created on behalf of the caller.
        if session.uid() != Some(owner_uid) {
            return Err(RegistryError::PermissionDenied { required: any_of[0] });
        }
        let doc = serde_json::to_value(entity)
            .map_err(|e| RegistryError::StoreUnavailable(e.to_string()))?;
        self.store.put(collection, id, doc).await?;
        info!(collection, id, owner = owner_uid, "entity created");
        Ok(())
    }

    // ── Transitions ─────────────────────────────────────────────────

    /// Whether a session may move a machine from `current` to `target`.
    ///
    /// Strict machines require the edge to exist; the advisory research
    /// machine requires only the permission.
    pub fn can_transition<M: LifecycleState>(
        &self,
        session: &Session,
        current: M,
        target: M,
    ) -> bool {
        if !session.has_permission(M::KIND.required_permission()) {
            return false;
        }
        if M::STRICT {
            current.can_reach(target)
        } else {
            true
        }
    }

    /// The transitions a session may offer for a machine. Empty when the
    /// session lacks the kind's permission or the state is terminal.
    pub fn available_transitions<M: LifecycleState>(
        &self,
        session: &Session,
        current: M,
    ) -> &'static [M] {
        if session.has_permission(M::KIND.required_permission()) {
            current.legal_transitions()
        } else {
            &[]
        }
    }

    /// Apply a transition: compare-and-swap the status field, append
    /// exactly one audit entry, then update the in-memory entity.
    ///
    /// Rejected synchronously with [`LifecycleError::IllegalTransition`]
    /// when the edge is illegal or the session lacks the kind's
    /// permission — nothing is written in that case. A lost
    /// compare-and-swap surfaces as retryable
    /// [`RegistryError::ConcurrentModification`] with no audit entry.
    pub async fn apply_transition<M, E>(
        &self,
        session: &Session,
        entity: &mut E,
        target: M,
        description: impl Into<String>,
    ) -> Result<AuditEntry>
    where
        M: LifecycleState,
        E: StatusSlot<M>,
    {
        let current = entity.status();
        let illegal = || {
            RegistryError::Lifecycle(LifecycleError::IllegalTransition {
                kind: M::KIND,
                from: current.as_str().to_string(),
                to: target.as_str().to_string(),
            })
        };

        // Permission-missing and unreachable-target are both illegal
        // transitions from the caller's perspective.
        let actor = match session.uid() {
            Some(uid) if session.has_permission(M::KIND.required_permission()) => uid.to_string(),
            _ => return Err(illegal()),
        };
        if !current.can_reach(target) {
            if M::STRICT {
                return Err(illegal());
            }
            warn!(
                kind = %M::KIND,
                from = %current,
                to = %target,
                "advisory machine moved outside its declared graph"
            );
        }

        let now = Utc::now();
        let collections = &self.config.collections;
        self.store
            .swap_status(
                collections.entities::<M>(),
                entity.id(),
                M::STATUS_FIELD,
                current.as_str(),
                target.as_str(),
                now,
            )
            .await?;

        let entry = AuditEntry::record(
            entity.id(),
            current,
            target,
            actor,
            description,
        );
        if self.config.audit_enabled {
            self.store
                .append_audit(collections.timeline::<M>(), &entry)
                .await?;
        }

        entity.set_status(target, now);
        info!(
            kind = %M::KIND,
            entity_id = %entity.id(),
            from = %current,
            to = %target,
            actor = %entry.actor_uid,
            "transition applied"
        );
        Ok(entry)
    }

    /// Timeline for one machine's entity, most recent first.
    pub async fn timeline<M: LifecycleState>(&self, entity_id: &str) -> Result<Vec<AuditEntry>> {
        self.store
            .audit_for(self.config.collections.timeline::<M>(), entity_id)
            .await
    }

    // ── Collaboration ───────────────────────────────────────────────

    /// Request collaboration on someone else's innovation idea.
    pub async fn request_collaboration(
        &self,
        session: &Session,
        idea: &InnovationIdea,
        kind: CollaborationKind,
    ) -> Result<CollaborationRequest> {
        if !session.has_permission(Permission::CollaborateInnovation) {
            return Err(RegistryError::PermissionDenied {
                required: Permission::CollaborateInnovation,
            });
        }
        let requester = session.uid().ok_or(RegistryError::PermissionDenied {
            required: Permission::CollaborateInnovation,
        })?;
        // Owners collaborate with themselves implicitly.
        if requester == idea.user_id {
            return Err(RegistryError::PermissionDenied {
                required: Permission::CollaborateInnovation,
            });
        }

        let request = CollaborationRequest::new(
            idea.id.clone(),
            idea.title.clone(),
            requester,
            idea.user_id.clone(),
            kind,
        );
        let doc = serde_json::to_value(&request)
            .map_err(|e| RegistryError::StoreUnavailable(e.to_string()))?;
        self.store
            .put(
                &self.config.collections.collaboration_requests,
                &request.id,
                doc,
            )
            .await?;
        info!(innovation_id = %request.innovation_id, requester = %request.requester_uid, "collaboration requested");
        Ok(request)
    }

    /// Read a stored document back as a typed entity.
    pub async fn load<E: serde::de::DeserializeOwned>(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<E> {
        let doc = self
            .store
            .get(collection, id)
            .await?
            .ok_or_else(|| RegistryError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;
        from_document(doc, collection, id)
    }
}

fn from_document<E: serde::de::DeserializeOwned>(
    doc: Value,
    collection: &str,
    id: &str,
) -> Result<E> {
    serde_json::from_value(doc).map_err(|e| {
        // A document that no longer parses is a data-integrity failure.
        warn!(collection, id, error = %e, "stored document failed to parse");
        RegistryError::StoreUnavailable(format!("corrupt document {collection}/{id}: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use access::{Profile, Role};
    use lifecycle::{FundingStage, InnovationStage, IprStatus, ResearchStatus, StartupStage};

    fn session(role: Role) -> Session {
        Session::resolved(Profile::new("uid-actor", "actor@example.gov", "Actor", role))
    }

    fn service() -> TransitionService<MemoryStore> {
        TransitionService::new(MemoryStore::new(), RegistryConfig::default())
    }

    async fn seeded_ipr(service: &TransitionService<MemoryStore>) -> IprApplication {
        let mut ipr = IprApplication::new("uid-owner", "Filter patent", "patent");
        ipr.status = IprStatus::Filed;
        let doc = serde_json::to_value(&ipr).unwrap();
        service.store().put("ipr", &ipr.id, doc).await.unwrap();
        ipr
    }

    // Scenario: a researcher holds no approval permission.
    #[test]
    fn test_researcher_cannot_approve_applications() {
        let session = session(Role::Researcher);
        assert!(!session.has_permission(Permission::ApproveApplications));
    }

    // Scenario: filed -> published by a reviewer, with exactly one entry.
    #[tokio::test]
    async fn test_legal_transition_updates_status_and_appends_one_entry() {
        let service = service();
        let reviewer = session(Role::GovernmentOfficial);
        let mut ipr = seeded_ipr(&service).await;

        let entry = service
            .apply_transition(&reviewer, &mut ipr, IprStatus::Published, "moved to publication")
            .await
            .unwrap();

        assert_eq!(ipr.status, IprStatus::Published);
        assert_eq!(entry.from_state, "filed");
        assert_eq!(entry.to_state, "published");
        assert_eq!(entry.actor_uid, "uid-actor");

        let timeline = service.timeline::<IprStatus>(&ipr.id).await.unwrap();
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline[0], entry);

        // The stored document observed the same status.
        let stored: IprApplication = service.load("ipr", &ipr.id).await.unwrap();
        assert_eq!(stored.status, IprStatus::Published);
    }

    // Scenario: published -> granted skips examination and must fail.
    #[tokio::test]
    async fn test_illegal_transition_leaves_entity_and_timeline_untouched() {
        let service = service();
        let reviewer = session(Role::GovernmentOfficial);
        let mut ipr = seeded_ipr(&service).await;
        service
            .apply_transition(&reviewer, &mut ipr, IprStatus::Published, "ok")
            .await
            .unwrap();

        let err = service
            .apply_transition(&reviewer, &mut ipr, IprStatus::Granted, "skip examination")
            .await
            .unwrap_err();

        assert_eq!(
            err,
            RegistryError::Lifecycle(LifecycleError::IllegalTransition {
                kind: EntityKind::IprApplication,
                from: "published".to_string(),
                to: "granted".to_string(),
            })
        );
        assert_eq!(ipr.status, IprStatus::Published);
        assert_eq!(service.timeline::<IprStatus>(&ipr.id).await.unwrap().len(), 1);
    }

    // A permitted edge without the permission is equally illegal.
    #[tokio::test]
    async fn test_missing_permission_is_an_illegal_transition() {
        let service = service();
        let owner = Session::resolved(Profile::new(
            "uid-owner",
            "owner@example.gov",
            "Owner",
            Role::Researcher,
        ));
        let mut ipr = seeded_ipr(&service).await;

        assert!(!service.can_transition(&owner, IprStatus::Filed, IprStatus::Published));
        let err = service
            .apply_transition(&owner, &mut ipr, IprStatus::Published, "owner push")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Lifecycle(LifecycleError::IllegalTransition { .. })
        ));
        assert_eq!(ipr.status, IprStatus::Filed);
        assert!(service.timeline::<IprStatus>(&ipr.id).await.unwrap().is_empty());
    }

    // Scenario: a rejected innovation idea re-enters review.
    #[tokio::test]
    async fn test_rejected_innovation_re_enters_review() {
        let service = service();
        let admin = session(Role::Admin);
        let mut idea = InnovationIdea::new("uid-owner", "Water purifier", "");
        idea.stage = InnovationStage::Rejected;
        let doc = serde_json::to_value(&idea).unwrap();
        service.store().put("innovations", &idea.id, doc).await.unwrap();

        let entry = service
            .apply_transition(&admin, &mut idea, InnovationStage::UnderReview, "reworked")
            .await
            .unwrap();
        assert_eq!(idea.stage, InnovationStage::UnderReview);
        assert_eq!(entry.from_state, "rejected");
    }

    // Scenario: a startup past exit offers nothing.
    #[test]
    fn test_exited_startup_has_no_transitions() {
        let service = service();
        let admin = session(Role::Admin);
        assert!(service
            .available_transitions(&admin, StartupStage::Exit)
            .is_empty());
    }

    #[test]
    fn test_available_transitions_require_permission() {
        let service = service();
        let investor = session(Role::Investor);
        // Investors see startups but do not manage their stages.
        assert!(service
            .available_transitions(&investor, StartupStage::Ideation)
            .is_empty());
        let admin = session(Role::Admin);
        assert_eq!(
            service.available_transitions(&admin, StartupStage::Ideation),
            &[StartupStage::Validation]
        );
    }

    #[tokio::test]
    async fn test_concurrent_reviewers_cannot_double_apply() {
        let service = service();
        let reviewer = session(Role::GovernmentOfficial);
        let ipr = seeded_ipr(&service).await;

        // Two stale copies of the same entity.
        let mut first = ipr.clone();
        let mut second = ipr.clone();

        service
            .apply_transition(&reviewer, &mut first, IprStatus::Published, "first")
            .await
            .unwrap();

        let err = service
            .apply_transition(&reviewer, &mut second, IprStatus::Rejected, "second")
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::ConcurrentModification { .. }));

        // The losing request appended nothing.
        assert_eq!(service.timeline::<IprStatus>(&ipr.id).await.unwrap().len(), 1);
        assert_eq!(second.status, IprStatus::Filed);
    }

    #[tokio::test]
    async fn test_store_outage_surfaces_without_mutating_entity() {
        let service = service();
        let reviewer = session(Role::GovernmentOfficial);
        let mut ipr = seeded_ipr(&service).await;

        service.store().set_unavailable(true);
        let err = service
            .apply_transition(&reviewer, &mut ipr, IprStatus::Published, "down")
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::StoreUnavailable(_)));
        assert_eq!(ipr.status, IprStatus::Filed);
    }

    #[tokio::test]
    async fn test_funding_and_growth_stages_are_independent_transitions() {
        let service = service();
        let admin = session(Role::Admin);
        let mut startup = Startup::new("uid-owner", "AgriTech", "agriculture");
        let doc = serde_json::to_value(&startup).unwrap();
        service.store().put("startups", &startup.id, doc).await.unwrap();

        service
            .apply_transition(&admin, &mut startup, FundingStage::PreSeed, "first cheque")
            .await
            .unwrap();
        assert_eq!(startup.funding_stage, FundingStage::PreSeed);
        assert_eq!(startup.stage, StartupStage::Ideation);

        service
            .apply_transition(&admin, &mut startup, StartupStage::Validation, "validated")
            .await
            .unwrap();
        assert_eq!(startup.stage, StartupStage::Validation);

        // Both machines share one timeline collection.
        let timeline = service.timeline::<StartupStage>(&startup.id).await.unwrap();
        assert_eq!(timeline.len(), 2);
    }

    #[tokio::test]
    async fn test_advisory_research_allows_out_of_graph_moves() {
        let service = service();
        let researcher = Session::resolved(Profile::new(
            "uid-owner",
            "owner@example.gov",
            "Owner",
            Role::Researcher,
        ));
        let mut project = ResearchProject::new("uid-owner", "Soil study", "");
        let doc = serde_json::to_value(&project).unwrap();
        service.store().put("research", &project.id, doc).await.unwrap();

        // planning -> completed is not a declared edge, but research is
        // advisory for a permitted owner.
        assert!(service.can_transition(&researcher, ResearchStatus::Planning, ResearchStatus::Completed));
        service
            .apply_transition(&researcher, &mut project, ResearchStatus::Completed, "wrapped up")
            .await
            .unwrap();
        assert_eq!(project.status, ResearchStatus::Completed);
    }

    #[tokio::test]
    async fn test_unresolved_session_cannot_transition_anything() {
        let service = service();
        let nobody = Session::unresolved();
        let mut ipr = seeded_ipr(&service).await;

        assert!(!service.can_transition(&nobody, IprStatus::Filed, IprStatus::Published));
        let err = service
            .apply_transition(&nobody, &mut ipr, IprStatus::Published, "anonymous")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Lifecycle(LifecycleError::IllegalTransition { .. })
        ));
    }

    #[tokio::test]
    async fn test_create_is_owner_scoped_and_permission_gated() {
        let service = service();
        let researcher = session(Role::Researcher);

        // Creating on behalf of someone else is refused.
        let foreign = ResearchProject::new("uid-other", "Not mine", "");
        let err = service.create_research(&researcher, &foreign).await.unwrap_err();
        assert!(matches!(err, RegistryError::PermissionDenied { .. }));

        // Creating your own with the right permission lands in the store.
        let own = ResearchProject::new("uid-actor", "Soil study", "");
        service.create_research(&researcher, &own).await.unwrap();
        let stored: ResearchProject = service.load("research", &own.id).await.unwrap();
        assert_eq!(stored.title, "Soil study");

        // A public user cannot file research at all.
        let public = session(Role::PublicUser);
        let theirs = ResearchProject::new("uid-actor", "Nope", "");
        assert!(service.create_research(&public, &theirs).await.is_err());
    }

    #[tokio::test]
    async fn test_collaboration_requires_permission_and_non_owner() {
        let service = service();
        let idea = InnovationIdea::new("uid-owner", "Water purifier", "");

        // uid-actor with the admin wildcard may request.
        let admin = session(Role::Admin);
        let request = service
            .request_collaboration(&admin, &idea, CollaborationKind::Mentorship)
            .await
            .unwrap();
        assert_eq!(request.status, "pending");
        assert_eq!(request.owner_uid, "uid-owner");

        // The owner cannot request collaboration with themselves.
        let owner = Session::resolved(Profile::new(
            "uid-owner",
            "owner@example.gov",
            "Owner",
            Role::Admin,
        ));
        assert!(service
            .request_collaboration(&owner, &idea, CollaborationKind::Funding)
            .await
            .is_err());

        // An investor holds no collaborate_innovation token.
        let investor = session(Role::Investor);
        assert!(service
            .request_collaboration(&investor, &idea, CollaborationKind::Funding)
            .await
            .is_err());
    }

    #[test]
    fn test_visibility_rules() {
        let service = service();
        let official = session(Role::GovernmentOfficial);
        let public_user = session(Role::PublicUser);
        let owner = Session::resolved(Profile::new(
            "uid-owner",
            "owner@example.gov",
            "Owner",
            Role::Entrepreneur,
        ));

        // view_all_data sees private entities of others.
        assert!(service.can_view(&official, "uid-owner", false));
        // Owners see their own private entities.
        assert!(service.can_view(&owner, "uid-owner", false));
        // Everyone sees public entities; nobody else sees private ones.
        assert!(service.can_view(&public_user, "uid-owner", true));
        assert!(!service.can_view(&public_user, "uid-owner", false));

        // Ownership grants metadata edit but never stage updates.
        assert!(service.can_edit(&owner, EntityKind::Startup, "uid-owner"));
        assert!(!service.can_update_stage(&owner, EntityKind::Startup));
        assert!(service.can_update_stage(&official, EntityKind::IprApplication));
    }
}
