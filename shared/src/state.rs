// Team container state machine
//
// Cards and the form emit commands; only `TeamState::apply` mutates.

use tracing::{debug, warn};

use crate::{MemberDraft, MemberId, Roster, TeamConfig, TeamError, TeamMember};

/// Which form is open. Exclusive by construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Closed,
    Creating,
    Editing(TeamMember),
}

impl FormMode {
    pub fn is_open(&self) -> bool {
        !matches!(self, FormMode::Closed)
    }

    /// Initial draft for the form rendered in this mode.
    pub fn initial_draft(&self) -> Option<MemberDraft> {
        match self {
            FormMode::Closed => None,
            FormMode::Creating => Some(MemberDraft::default()),
            FormMode::Editing(member) => Some(member.draft()),
        }
    }

    /// Stable key so a mode change remounts the form with a fresh draft.
    pub fn key(&self) -> String {
        match self {
            FormMode::Closed => "closed".to_string(),
            FormMode::Creating => "create".to_string(),
            FormMode::Editing(member) => format!("edit-{}", member.id),
        }
    }
}

/// Emitted by a member card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardCommand {
    RequestEdit,
    RequestDelete(MemberId),
}

/// Emitted by the member form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    Submit(MemberDraft),
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamAction {
    OpenCreateForm,
    OpenEditForm(MemberId),
    CancelForm,
    /// Routed by the current form mode.
    Submit(MemberDraft),
    AddMember(MemberDraft),
    UpdateMember(TeamMember),
    DeleteMember(MemberId),
}

impl TeamAction {
    pub fn from_card(member_id: MemberId, command: CardCommand) -> Self {
        match command {
            CardCommand::RequestEdit => TeamAction::OpenEditForm(member_id),
            CardCommand::RequestDelete(id) => TeamAction::DeleteMember(id),
        }
    }
}

impl From<FormCommand> for TeamAction {
    fn from(command: FormCommand) -> Self {
        match command {
            FormCommand::Submit(draft) => TeamAction::Submit(draft),
            FormCommand::Cancel => TeamAction::CancelForm,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamState {
    heading: String,
    team_title: String,
    roster: Roster,
    form_mode: FormMode,
}

impl Default for TeamState {
    fn default() -> Self {
        Self::new(TeamConfig::default())
    }
}

impl TeamState {
    pub fn new(config: TeamConfig) -> Self {
        Self {
            heading: config.heading,
            team_title: config.team_title,
            roster: Roster::new(config.seed, config.id_policy),
            form_mode: FormMode::Closed,
        }
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn team_title(&self) -> &str {
        &self.team_title
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn members(&self) -> &[TeamMember] {
        self.roster.members()
    }

    pub fn member_count(&self) -> usize {
        self.roster.len()
    }

    pub fn form_mode(&self) -> &FormMode {
        &self.form_mode
    }

    pub fn form_title(&self) -> Option<&'static str> {
        match self.form_mode {
            FormMode::Closed => None,
            FormMode::Creating => Some("Add Team Member"),
            FormMode::Editing(_) => Some("Edit Team Member"),
        }
    }

    pub fn submit_label(&self) -> Option<&'static str> {
        match self.form_mode {
            FormMode::Closed => None,
            FormMode::Creating => Some("Add Member"),
            FormMode::Editing(_) => Some("Update Member"),
        }
    }

    pub fn open_create_form(&mut self) {
        self.form_mode = FormMode::Creating;
    }

    pub fn open_edit_form(&mut self, id: MemberId) -> Result<(), TeamError> {
        let member = self.roster.get(id).ok_or(TeamError::UnknownMember(id))?;
        self.form_mode = FormMode::Editing(member.clone());
        Ok(())
    }

    pub fn cancel_form(&mut self) {
        self.form_mode = FormMode::Closed;
    }

    /// Leaves the form open when no id can be allocated.
    pub fn add_member(&mut self, draft: MemberDraft) -> Result<MemberId, TeamError> {
        let id = self.roster.add(draft)?.id;
        self.form_mode = FormMode::Closed;
        Ok(id)
    }

    /// Closes the form even when no member matches.
    pub fn update_member(&mut self, updated: TeamMember) -> Result<(), TeamError> {
        self.form_mode = FormMode::Closed;
        self.roster.update(updated)
    }

    pub fn delete_member(&mut self, id: MemberId) -> Result<TeamMember, TeamError> {
        self.roster.remove(id)
    }

    /// Single mutation entry point. Errors are logged and swallowed so that
    /// the state is left unchanged.
    pub fn apply(&mut self, action: TeamAction) {
        debug!(?action, "applying team action");

        let result = match action {
            TeamAction::OpenCreateForm => {
                self.open_create_form();
                Ok(())
            }
            TeamAction::OpenEditForm(id) => self.open_edit_form(id),
            TeamAction::CancelForm => {
                self.cancel_form();
                Ok(())
            }
            TeamAction::Submit(draft) => self.submit(draft),
            TeamAction::AddMember(draft) => self.add_member(draft).map(|_| ()),
            TeamAction::UpdateMember(member) => self.update_member(member),
            TeamAction::DeleteMember(id) => self.delete_member(id).map(|_| ()),
        };

        if let Err(e) = result {
            warn!("team action ignored: {}", e);
        }
    }

    fn submit(&mut self, draft: MemberDraft) -> Result<(), TeamError> {
        match &self.form_mode {
            FormMode::Closed => {
                warn!("submit received with no form open");
                Ok(())
            }
            FormMode::Creating => self.add_member(draft).map(|_| ()),
            FormMode::Editing(member) => {
                let updated = TeamMember::from_draft(member.id, draft);
                self.update_member(updated)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> MemberDraft {
        MemberDraft::new("Ann", "Auditor", "a@x.com", "555")
    }

    #[test]
    fn test_open_create_then_cancel() {
        let mut state = TeamState::default();
        let before = state.members().to_vec();

        state.apply(TeamAction::OpenCreateForm);
        assert_eq!(state.form_mode(), &FormMode::Creating);
        assert_eq!(state.form_title(), Some("Add Team Member"));

        state.apply(TeamAction::CancelForm);
        assert_eq!(state.form_mode(), &FormMode::Closed);
        assert_eq!(state.members(), before.as_slice());
    }

    #[test]
    fn test_edit_form_prepopulates_draft() {
        let mut state = TeamState::default();
        state.apply(TeamAction::OpenEditForm(2));

        let draft = state.form_mode().initial_draft().unwrap();
        assert_eq!(draft, MemberDraft::new("Jane Smith", "Accountant", "jane@example.com", "(555) 987-6543"));
        assert_eq!(state.submit_label(), Some("Update Member"));
        assert_eq!(state.form_mode().key(), "edit-2");
    }

    #[test]
    fn test_open_edit_unknown_member_is_ignored() {
        let mut state = TeamState::default();
        state.apply(TeamAction::OpenCreateForm);
        state.apply(TeamAction::OpenEditForm(99));
        assert_eq!(state.form_mode(), &FormMode::Creating);
    }

    #[test]
    fn test_modes_are_exclusive() {
        let mut state = TeamState::default();
        state.apply(TeamAction::OpenCreateForm);
        state.apply(TeamAction::OpenEditForm(1));
        assert!(matches!(state.form_mode(), FormMode::Editing(m) if m.id == 1));

        state.apply(TeamAction::OpenCreateForm);
        assert_eq!(state.form_mode(), &FormMode::Creating);
    }

    #[test]
    fn test_submit_while_creating_adds() {
        let mut state = TeamState::default();
        state.apply(TeamAction::OpenCreateForm);
        state.apply(TeamAction::Submit(ann()));

        assert_eq!(state.member_count(), 4);
        assert_eq!(state.members()[3], TeamMember::from_draft(4, ann()));
        assert_eq!(state.form_mode(), &FormMode::Closed);
    }

    #[test]
    fn test_submit_while_editing_replaces_fields_keeps_id() {
        let mut state = TeamState::default();
        state.apply(TeamAction::OpenEditForm(1));
        state.apply(TeamAction::Submit(ann()));

        assert_eq!(state.member_count(), 3);
        assert_eq!(state.members()[0], TeamMember::from_draft(1, ann()));
        assert_eq!(state.form_mode(), &FormMode::Closed);
    }

    #[test]
    fn test_submit_while_closed_is_ignored() {
        let mut state = TeamState::default();
        let before = state.clone();
        state.apply(TeamAction::Submit(ann()));
        assert_eq!(state, before);
    }

    #[test]
    fn test_update_unknown_member_closes_form() {
        let mut state = TeamState::default();
        state.apply(TeamAction::OpenEditForm(3));
        let before = state.members().to_vec();

        state.apply(TeamAction::UpdateMember(TeamMember::from_draft(77, ann())));
        assert_eq!(state.members(), before.as_slice());
        assert_eq!(state.form_mode(), &FormMode::Closed);
    }

    #[test]
    fn test_delete_does_not_touch_form_mode() {
        let mut state = TeamState::default();
        state.apply(TeamAction::OpenCreateForm);
        state.apply(TeamAction::DeleteMember(1));
        assert_eq!(state.form_mode(), &FormMode::Creating);
        assert_eq!(state.roster().ids(), vec![2, 3]);
    }

    #[test]
    fn test_command_mapping() {
        assert_eq!(TeamAction::from_card(5, CardCommand::RequestEdit), TeamAction::OpenEditForm(5));
        assert_eq!(TeamAction::from_card(5, CardCommand::RequestDelete(5)), TeamAction::DeleteMember(5));
        assert_eq!(TeamAction::from(FormCommand::Cancel), TeamAction::CancelForm);
        assert_eq!(TeamAction::from(FormCommand::Submit(ann())), TeamAction::Submit(ann()));
    }

    #[test]
    fn test_duplicate_seed_ids_are_dropped() {
        let seed = vec![
            TeamMember::from_draft(1, MemberDraft::new("A", "Analyst", "a@x.com", "1")),
            TeamMember::from_draft(1, MemberDraft::new("B", "Analyst", "b@x.com", "2")),
        ];
        let mut state = TeamState::new(TeamConfig::default().with_seed(seed));
        assert_eq!(state.roster().ids(), vec![1]);

        state.apply(TeamAction::DeleteMember(1));
        assert!(state.members().is_empty());
    }

    #[test]
    fn test_add_past_last_id_is_ignored() {
        let seed = vec![TeamMember::from_draft(MemberId::MAX, ann())];
        let mut state = TeamState::new(TeamConfig::default().with_seed(seed));

        state.apply(TeamAction::OpenCreateForm);
        state.apply(TeamAction::Submit(ann()));
        assert_eq!(state.member_count(), 1);
        assert_eq!(state.form_mode(), &FormMode::Creating);

        state.apply(TeamAction::AddMember(ann()));
        assert_eq!(state.member_count(), 1);
    }
}
