pub mod config;
pub mod error;
pub mod member;
pub mod roster;
pub mod state;

pub use config::{TeamConfig, default_seed};
pub use error::TeamError;
pub use member::{MemberDraft, MemberField, MemberId, TeamMember};
pub use roster::{IdPolicy, Roster};
pub use state::{CardCommand, FormCommand, FormMode, TeamAction, TeamState};
