use crate::{MemberField, MemberId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TeamError {
    #[error("Missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<MemberField>),
    #[error("No team member with id {0}")]
    UnknownMember(MemberId),
    #[error("No member ids left to assign")]
    IdsExhausted,
}

fn join_fields(fields: &[MemberField]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
