// Ordered team roster and id allocation

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{MemberDraft, MemberId, TeamError, TeamMember};

/// How new member ids are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IdPolicy {
    /// Counter starting past the highest seeded id. Never reuses an id.
    #[default]
    Monotonic,
    /// `len + 1`. Collides with a live id once anything has been deleted;
    /// only for reproducing legacy behaviour.
    RosterLength,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    members: Vec<TeamMember>,
    policy: IdPolicy,
    /// `None` once the id range is used up.
    next_id: Option<MemberId>,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new(Vec::new(), IdPolicy::default())
    }
}

impl Roster {
    /// Builds a roster from seed members. Later members repeating an earlier
    /// id are dropped.
    pub fn new(seed: Vec<TeamMember>, policy: IdPolicy) -> Self {
        let mut members: Vec<TeamMember> = Vec::with_capacity(seed.len());
        for member in seed {
            if members.iter().any(|m| m.id == member.id) {
                warn!(id = member.id, name = %member.name, "dropping seed member with duplicate id");
                continue;
            }
            members.push(member);
        }

        let next_id = members.iter().map(|m| m.id).max().unwrap_or(0).checked_add(1);
        Self {
            members,
            policy,
            next_id,
        }
    }

    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn policy(&self) -> IdPolicy {
        self.policy
    }

    pub fn get(&self, id: MemberId) -> Option<&TeamMember> {
        self.members.iter().find(|m| m.id == id)
    }

    pub fn contains(&self, id: MemberId) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> Vec<MemberId> {
        self.members.iter().map(|m| m.id).collect()
    }

    fn allocate_id(&mut self) -> Result<MemberId, TeamError> {
        match self.policy {
            IdPolicy::Monotonic => {
                let id = self.next_id.ok_or(TeamError::IdsExhausted)?;
                self.next_id = id.checked_add(1);
                Ok(id)
            }
            IdPolicy::RosterLength => {
                let id = MemberId::try_from(self.members.len())
                    .ok()
                    .and_then(|len| len.checked_add(1))
                    .ok_or(TeamError::IdsExhausted)?;
                if self.contains(id) {
                    warn!(id, "roster-length id policy produced a duplicate id");
                }
                Ok(id)
            }
        }
    }

    /// Appends a new member built from `draft` and returns it.
    pub fn add(&mut self, draft: MemberDraft) -> Result<&TeamMember, TeamError> {
        let id = self.allocate_id()?;
        self.members.push(TeamMember::from_draft(id, draft));
        Ok(&self.members[self.members.len() - 1])
    }

    /// Replaces the member with the same id, keeping its position.
    pub fn update(&mut self, updated: TeamMember) -> Result<(), TeamError> {
        let slot = self
            .members
            .iter_mut()
            .find(|m| m.id == updated.id)
            .ok_or(TeamError::UnknownMember(updated.id))?;
        *slot = updated;
        Ok(())
    }

    pub fn remove(&mut self, id: MemberId) -> Result<TeamMember, TeamError> {
        let index = self
            .members
            .iter()
            .position(|m| m.id == id)
            .ok_or(TeamError::UnknownMember(id))?;
        Ok(self.members.remove(index))
    }
}
