use serde::{Deserialize, Serialize};

use crate::TeamError;

pub type MemberId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: MemberId,
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
}

impl TeamMember {
    pub fn from_draft(id: MemberId, draft: MemberDraft) -> Self {
        Self {
            id,
            name: draft.name,
            role: draft.role,
            email: draft.email,
            phone: draft.phone,
        }
    }

    /// Copy of the editable fields, used to seed the edit form.
    pub fn draft(&self) -> MemberDraft {
        MemberDraft {
            name: self.name.clone(),
            role: self.role.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// The four editable fields of a member, without an id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDraft {
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
}

impl MemberDraft {
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    pub fn get(&self, field: MemberField) -> &str {
        match field {
            MemberField::Name => &self.name,
            MemberField::Role => &self.role,
            MemberField::Email => &self.email,
            MemberField::Phone => &self.phone,
        }
    }

    /// Keyed merge: replaces one field and leaves the others alone.
    pub fn set(&mut self, field: MemberField, value: impl Into<String>) {
        let slot = match field {
            MemberField::Name => &mut self.name,
            MemberField::Role => &mut self.role,
            MemberField::Email => &mut self.email,
            MemberField::Phone => &mut self.phone,
        };
        *slot = value.into();
    }

    pub fn with(mut self, field: MemberField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Empty fields, in form order.
    pub fn missing_fields(&self) -> Vec<MemberField> {
        MemberField::all()
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    pub fn validate(&self) -> Result<(), TeamError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(TeamError::MissingFields(missing))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberField {
    Name,
    Role,
    Email,
    Phone,
}

impl MemberField {
    pub fn all() -> [MemberField; 4] {
        [
            MemberField::Name,
            MemberField::Role,
            MemberField::Email,
            MemberField::Phone,
        ]
    }

    /// Value of the HTML `name` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberField::Name => "name",
            MemberField::Role => "role",
            MemberField::Email => "email",
            MemberField::Phone => "phone",
        }
    }

    pub fn from_str(s: &str) -> Option<MemberField> {
        match s {
            "name" => Some(MemberField::Name),
            "role" => Some(MemberField::Role),
            "email" => Some(MemberField::Email),
            "phone" => Some(MemberField::Phone),
            _ => None,
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            MemberField::Name | MemberField::Role => "text",
            MemberField::Email => "email",
            MemberField::Phone => "tel",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            MemberField::Name => "Name",
            MemberField::Role => "Role",
            MemberField::Email => "Email",
            MemberField::Phone => "Phone",
        }
    }
}

impl std::fmt::Display for MemberField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_touches_one_field() {
        let mut draft = MemberDraft::new("Ann", "Auditor", "a@x.com", "555");
        draft.set(MemberField::Role, "Controller");

        assert_eq!(draft.name, "Ann");
        assert_eq!(draft.role, "Controller");
        assert_eq!(draft.email, "a@x.com");
        assert_eq!(draft.phone, "555");
    }

    #[test]
    fn test_missing_fields_in_form_order() {
        let draft = MemberDraft::default().with(MemberField::Role, "Auditor");
        assert_eq!(
            draft.missing_fields(),
            vec![MemberField::Name, MemberField::Email, MemberField::Phone]
        );

        let complete = MemberDraft::new("Ann", "Auditor", "a@x.com", "555");
        assert!(complete.missing_fields().is_empty());
        assert!(complete.validate().is_ok());
    }

    #[test]
    fn test_validate_reports_missing() {
        let draft = MemberDraft::new("Ann", "", "a@x.com", "555");
        match draft.validate() {
            Err(TeamError::MissingFields(fields)) => assert_eq!(fields, vec![MemberField::Role]),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let draft = MemberDraft::new(" ", "Auditor", "a@x.com", "555");
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_field_names() {
        for field in MemberField::all() {
            assert_eq!(MemberField::from_str(field.as_str()), Some(field));
        }
        assert_eq!(MemberField::from_str("id"), None);
        assert_eq!(MemberField::Email.input_type(), "email");
        assert_eq!(MemberField::Phone.input_type(), "tel");
    }

    #[test]
    fn test_draft_round_trips_through_member() {
        let draft = MemberDraft::new("Ann", "Auditor", "a@x.com", "555");
        let member = TeamMember::from_draft(7, draft.clone());
        assert_eq!(member.id, 7);
        assert_eq!(member.draft(), draft);
    }

    #[test]
    fn test_member_json_shape() {
        let member = TeamMember::from_draft(1, MemberDraft::new("John Doe", "Financial Analyst", "john@example.com", "(555) 123-4567"));
        let value = serde_json::to_value(&member).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 1,
                "name": "John Doe",
                "role": "Financial Analyst",
                "email": "john@example.com",
                "phone": "(555) 123-4567"
            })
        );
    }
}
