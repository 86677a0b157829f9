use super::aggregate::{AssignmentAction, AssignmentLink};
use crate::shared::form_field::{FormField, CSRF_FIELD};

pub const USERS_FIELD: &str = "users";
pub const ASSIGNMENT_TYPE_FIELD: &str = "assignment_type";
pub const ASSIGNEES_FIELD: &str = "assignees";

/// Which link's form is open. At most one is shown at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopoverState {
    open: Option<AssignmentLink>,
}

impl PopoverState {
    pub fn open(&self) -> Option<AssignmentLink> {
        self.open
    }

    pub fn is_open(&self, link: AssignmentLink) -> bool {
        self.open == Some(link)
    }

    /// Clicking a link closes whatever is open; its own form opens unless
    /// it was the one just closed.
    pub fn toggle(&mut self, link: AssignmentLink) {
        self.open = match self.open {
            Some(current) if current == link => None,
            _ => Some(link),
        };
    }
}

/// Users ticked in one link's form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSelection {
    link: AssignmentLink,
    selected: Vec<i64>,
}

impl UserSelection {
    pub fn new(link: AssignmentLink) -> Self {
        Self {
            link,
            selected: Vec::new(),
        }
    }

    pub fn link(&self) -> AssignmentLink {
        self.link
    }

    pub fn is_selected(&self, pk: i64) -> bool {
        self.selected.contains(&pk)
    }

    pub fn selected(&self) -> &[i64] {
        &self.selected
    }

    pub fn toggle_user(&mut self, pk: i64) {
        match self.selected.iter().position(|p| *p == pk) {
            Some(i) => {
                self.selected.remove(i);
            }
            None => self.selected.push(pk),
        }
    }

    pub fn fields(&self, csrf_token: &str) -> Vec<FormField> {
        let mut out = vec![FormField::new(CSRF_FIELD, csrf_token)];
        let name = match self.link.action {
            AssignmentAction::Assign => USERS_FIELD,
            AssignmentAction::Unassign => ASSIGNEES_FIELD,
        };
        out.extend(self.selected.iter().map(|pk| FormField::new(name, pk.to_string())));
        if self.link.action == AssignmentAction::Assign {
            out.push(FormField::new(
                ASSIGNMENT_TYPE_FIELD,
                self.link.assignment.assignment_type(),
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_workbasket_assignment::Assignment;

    const ASSIGN_WORKERS: AssignmentLink =
        AssignmentLink::new(AssignmentAction::Assign, Assignment::Workers);
    const UNASSIGN_REVIEWERS: AssignmentLink =
        AssignmentLink::new(AssignmentAction::Unassign, Assignment::Reviewers);

    #[test]
    fn test_only_one_popover_open() {
        let mut popover = PopoverState::default();
        popover.toggle(ASSIGN_WORKERS);
        assert!(popover.is_open(ASSIGN_WORKERS));

        popover.toggle(UNASSIGN_REVIEWERS);
        assert!(!popover.is_open(ASSIGN_WORKERS));
        assert!(popover.is_open(UNASSIGN_REVIEWERS));

        popover.toggle(UNASSIGN_REVIEWERS);
        assert_eq!(popover.open(), None);
    }

    #[test]
    fn test_assign_fields() {
        let mut selection = UserSelection::new(ASSIGN_WORKERS);
        selection.toggle_user(3);
        selection.toggle_user(8);
        selection.toggle_user(3);
        selection.toggle_user(4);

        let fields = selection.fields("token");
        assert_eq!(
            fields,
            vec![
                FormField::new("csrfmiddlewaretoken", "token"),
                FormField::new("users", "8"),
                FormField::new("users", "4"),
                FormField::new("assignment_type", "WORKBASKET_WORKER"),
            ]
        );
    }

    #[test]
    fn test_unassign_fields() {
        let mut selection = UserSelection::new(UNASSIGN_REVIEWERS);
        selection.toggle_user(22);
        assert!(selection.is_selected(22));
        assert!(!selection.is_selected(21));

        let fields = selection.fields("token");
        assert_eq!(
            fields,
            vec![
                FormField::new("csrfmiddlewaretoken", "token"),
                FormField::new("assignees", "22"),
            ]
        );
    }
}
