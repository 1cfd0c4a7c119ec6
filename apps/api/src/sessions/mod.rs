//! In-memory session records.
//!
//! Each browser session owns one profile plus its template choices. The lock
//! guards the map only: handlers clone what they need out of a session,
//! release the lock, then run their operation.
//!
//! A session ends when the client deletes it or when it sits idle past the
//! store's TTL; idle sessions are swept whenever a new one is created.

pub mod handlers;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::profile::CandidateProfile;
use crate::templates::{PortfolioLayout, ResumeStyle};

#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub profile: CandidateProfile,
    pub resume_style: ResumeStyle,
    pub portfolio_layout: PortfolioLayout,
    pub created_at: DateTime<Utc>,
    /// Last time the profile or template choice changed.
    pub updated_at: DateTime<Utc>,
}

impl Session {
    fn new(id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id,
            profile: CandidateProfile::default(),
            resume_style: ResumeStyle::default(),
            portfolio_layout: PortfolioLayout::default(),
            created_at: now,
            updated_at: now,
        }
    }

    fn is_idle(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        // A clock step backwards yields a negative age: not idle.
        now.signed_duration_since(self.updated_at)
            .to_std()
            .is_ok_and(|age| age >= ttl)
    }
}

pub const DEFAULT_IDLE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    idle_ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self {
            sessions: Arc::default(),
            idle_ttl: DEFAULT_IDLE_TTL,
        }
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle_ttl(mut self, ttl: Duration) -> Self {
        self.idle_ttl = ttl;
        self
    }

    /// Starts a session with an empty profile and default templates,
    /// sweeping idle sessions first.
    pub async fn create(&self) -> Session {
        let session = Session::new(Uuid::new_v4());
        let mut sessions = self.sessions.write().await;
        let expired = sweep_idle(&mut sessions, session.created_at, self.idle_ttl);
        sessions.insert(session.id, session.clone());
        debug!(
            session_id = %session.id,
            active = sessions.len(),
            expired,
            "Session created"
        );
        session
    }

    /// Ends a session. `false` when it did not exist.
    pub async fn remove(&self, id: Uuid) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            debug!(session_id = %id, "Session removed");
        }
        removed
    }

    pub async fn get(&self, id: Uuid) -> Option<Session> {
        self.sessions.read().await.get(&id).cloned()
    }

    /// Replaces the profile wholesale. `None` when the session does not exist.
    pub async fn replace_profile(&self, id: Uuid, profile: CandidateProfile) -> Option<Session> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id)?;
        session.profile = profile;
        session.updated_at = Utc::now();
        Some(session.clone())
    }

    /// Updates whichever template choices are given.
    pub async fn select_templates(
        &self,
        id: Uuid,
        resume_style: Option<ResumeStyle>,
        portfolio_layout: Option<PortfolioLayout>,
    ) -> Option<Session> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id)?;
        if let Some(style) = resume_style {
            session.resume_style = style;
        }
        if let Some(layout) = portfolio_layout {
            session.portfolio_layout = layout;
        }
        session.updated_at = Utc::now();
        Some(session.clone())
    }
}

/// Drops every session idle for at least `ttl` as of `now`; returns how many.
fn sweep_idle(sessions: &mut HashMap<Uuid, Session>, now: DateTime<Utc>, ttl: Duration) -> usize {
    let before = sessions.len();
    sessions.retain(|_, session| !session.is_idle(now, ttl));
    before - sessions.len()
}
