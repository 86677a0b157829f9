use crate::shared::lenient;
use serde::{Deserialize, Serialize};

/// Which list of a workbasket's users a link edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Assignment {
    Workers,
    Reviewers,
}

impl Assignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Assignment::Workers => "workers",
            Assignment::Reviewers => "reviewers",
        }
    }

    /// Value of the `assignment_type` field.
    pub fn assignment_type(&self) -> &'static str {
        match self {
            Assignment::Workers => "WORKBASKET_WORKER",
            Assignment::Reviewers => "WORKBASKET_REVIEWER",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssignmentAction {
    Assign,
    Unassign,
}

impl AssignmentAction {
    pub fn label(&self) -> &'static str {
        match self {
            AssignmentAction::Assign => "Assign",
            AssignmentAction::Unassign => "Unassign",
        }
    }

    fn id_prefix(&self) -> &'static str {
        match self {
            AssignmentAction::Assign => "assign",
            AssignmentAction::Unassign => "unassign",
        }
    }
}

/// One of the assign/unassign links on the workbasket summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssignmentLink {
    pub action: AssignmentAction,
    pub assignment: Assignment,
}

impl AssignmentLink {
    pub const ALL: [AssignmentLink; 4] = [
        AssignmentLink::new(AssignmentAction::Assign, Assignment::Workers),
        AssignmentLink::new(AssignmentAction::Assign, Assignment::Reviewers),
        AssignmentLink::new(AssignmentAction::Unassign, Assignment::Workers),
        AssignmentLink::new(AssignmentAction::Unassign, Assignment::Reviewers),
    ];

    pub const fn new(action: AssignmentAction, assignment: Assignment) -> Self {
        Self { action, assignment }
    }

    /// Id of the element the link is mounted into, e.g. `assign-workers`.
    pub fn button_id(&self) -> String {
        format!("{}-{}", self.action.id_prefix(), self.assignment.as_str())
    }

    pub fn form_id(&self) -> String {
        format!("{}-form", self.button_id())
    }
}

/// A user offered by a link. For unassign links `pk` is the assignment's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignableUser {
    #[serde(deserialize_with = "lenient::required_int")]
    pub pk: i64,
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
}

impl AssignableUser {
    pub fn new(pk: i64, name: impl Into<String>) -> Self {
        Self {
            pk,
            name: name.into(),
        }
    }
}
