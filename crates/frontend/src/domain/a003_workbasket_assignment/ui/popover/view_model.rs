use contracts::domain::a003_workbasket_assignment::{
    AssignableUser, AssignmentLink, PopoverState, UserSelection,
};
use contracts::shared::form_field::FormField;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct AssignmentPopoverViewModel {
    pub link: AssignmentLink,
    popover: RwSignal<PopoverState>,
    selection: RwSignal<UserSelection>,
    users: StoredValue<Vec<AssignableUser>>,
    csrf_token: StoredValue<String>,
}

impl AssignmentPopoverViewModel {
    pub fn new(
        link: AssignmentLink,
        popover: RwSignal<PopoverState>,
        users: Vec<AssignableUser>,
        csrf_token: String,
    ) -> Self {
        Self {
            link,
            popover,
            selection: RwSignal::new(UserSelection::new(link)),
            users: StoredValue::new(users),
            csrf_token: StoredValue::new(csrf_token),
        }
    }

    pub fn is_open(&self) -> bool {
        self.popover.with(|p| p.is_open(self.link))
    }

    /// Opening starts from an empty selection.
    pub fn toggle(&self) {
        let link = self.link;
        self.popover.update(|p| p.toggle(link));
        if self.popover.with_untracked(|p| p.is_open(link)) {
            self.selection.set(UserSelection::new(link));
        }
    }

    pub fn users(&self) -> Vec<AssignableUser> {
        self.users.get_value()
    }

    pub fn is_selected(&self, pk: i64) -> bool {
        self.selection.with(|s| s.is_selected(pk))
    }

    pub fn toggle_user(&self, pk: i64) {
        self.selection.update(|s| s.toggle_user(pk));
    }

    pub fn has_selection(&self) -> bool {
        self.selection.with(|s| !s.selected().is_empty())
    }

    pub fn fields(&self) -> Vec<FormField> {
        let csrf_token = self.csrf_token.get_value();
        self.selection.with(|s| s.fields(&csrf_token))
    }
}
