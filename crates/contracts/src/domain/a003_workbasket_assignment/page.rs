use super::aggregate::{AssignableUser, Assignment, AssignmentAction, AssignmentLink};

/// Page globals the workbasket summary renders for its assignment links.
pub mod globals {
    pub const ASSIGNABLE_USERS: &str = "assignableUsers";
    pub const ASSIGNED_WORKERS: &str = "assignedWorkers";
    pub const ASSIGNED_REVIEWERS: &str = "assignedReviewers";
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentPage {
    pub csrf_token: String,
    pub assignable_users: Vec<AssignableUser>,
    pub assigned_workers: Vec<AssignableUser>,
    pub assigned_reviewers: Vec<AssignableUser>,
}

impl AssignmentPage {
    /// Users a link's form offers: anyone assignable when assigning, the
    /// current assignees when unassigning.
    pub fn users_for(&self, link: AssignmentLink) -> &[AssignableUser] {
        match (link.action, link.assignment) {
            (AssignmentAction::Assign, _) => &self.assignable_users,
            (AssignmentAction::Unassign, Assignment::Workers) => &self.assigned_workers,
            (AssignmentAction::Unassign, Assignment::Reviewers) => &self.assigned_reviewers,
        }
    }
}
