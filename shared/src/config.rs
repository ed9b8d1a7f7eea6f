use serde::{Deserialize, Serialize};

use crate::{IdPolicy, MemberDraft, TeamMember};

/// Startup settings for the team container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamConfig {
    pub heading: String,
    pub team_title: String,
    pub id_policy: IdPolicy,
    pub seed: Vec<TeamMember>,
}

impl Default for TeamConfig {
    fn default() -> Self {
        Self {
            heading: "Team Management".to_string(),
            team_title: "Finance Team".to_string(),
            id_policy: IdPolicy::default(),
            seed: default_seed(),
        }
    }
}

impl TeamConfig {
    pub fn with_id_policy(mut self, policy: IdPolicy) -> Self {
        self.id_policy = policy;
        self
    }

    pub fn with_seed(mut self, seed: Vec<TeamMember>) -> Self {
        self.seed = seed;
        self
    }
}

pub fn default_seed() -> Vec<TeamMember> {
    vec![
        TeamMember::from_draft(
            1,
            MemberDraft::new("John Doe", "Financial Analyst", "john@example.com", "(555) 123-4567"),
        ),
        TeamMember::from_draft(
            2,
            MemberDraft::new("Jane Smith", "Accountant", "jane@example.com", "(555) 987-6543"),
        ),
        TeamMember::from_draft(
            3,
            MemberDraft::new("Mike Johnson", "Budget Manager", "mike@example.com", "(555) 456-7890"),
        ),
    ]
}
