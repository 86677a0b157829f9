use super::view_model::AssignmentPopoverViewModel;
use contracts::domain::a003_workbasket_assignment::{
    AssignableUser, AssignmentAction, AssignmentLink, PopoverState,
};
use leptos::prelude::*;

#[component]
pub fn AssignmentPopover(
    link: AssignmentLink,
    popover: RwSignal<PopoverState>,
    users: Vec<AssignableUser>,
    csrf_token: String,
) -> impl IntoView {
    let vm = AssignmentPopoverViewModel::new(link, popover, users, csrf_token);
    let button_id = link.button_id();
    let title = match link.action {
        AssignmentAction::Assign => format!("Assign {}", link.assignment.as_str()),
        AssignmentAction::Unassign => format!("Unassign {}", link.assignment.as_str()),
    };

    view! {
        <button
            type="button"
            class="govuk-link fake-link"
            data-testid=button_id
            on:click=move |ev| {
                ev.prevent_default();
                vm.toggle();
            }
        >
            {link.action.label()}
            <span class="govuk-visually-hidden">" " {link.assignment.as_str()}</span>
        </button>
        <Show when=move || vm.is_open()>
            <div id=link.form_id() class="govuk-!-margin-top-4">
                <form method="post">
                    <For
                        each=move || vm.fields()
                        key=|field| (field.name.clone(), field.value.clone())
                        children=|field| view! { <input type="hidden" name=field.name value=field.value /> }
                    />
                    <fieldset class="govuk-fieldset">
                        <legend class="govuk-fieldset__legend govuk-fieldset__legend--s">{title.clone()}</legend>
                        {move || {
                            let users = vm.users();
                            if users.is_empty() {
                                view! { <p class="govuk-body">"There are no users to choose from."</p> }
                                    .into_any()
                            } else {
                                view! { <UserCheckboxes vm=vm users=users /> }.into_any()
                            }
                        }}
                    </fieldset>
                    <button
                        type="submit"
                        class="govuk-button"
                        data-prevent-double-click="true"
                        prop:disabled=move || !vm.has_selection()
                    >
                        {link.action.label()}
                    </button>
                </form>
            </div>
        </Show>
    }
}

#[component]
fn UserCheckboxes(vm: AssignmentPopoverViewModel, users: Vec<AssignableUser>) -> impl IntoView {
    let form_id = vm.link.form_id();
    view! {
        <div class="govuk-checkboxes govuk-checkboxes--small">
            {users
                .into_iter()
                .map(|user| {
                    let pk = user.pk;
                    let input_id = format!("{}-user-{}", form_id, pk);
                    view! {
                        <div class="govuk-checkboxes__item">
                            <input
                                class="govuk-checkboxes__input"
                                id=input_id.clone()
                                type="checkbox"
                                prop:checked=move || vm.is_selected(pk)
                                on:change=move |_| vm.toggle_user(pk)
                            />
                            <label class="govuk-label govuk-checkboxes__label" for=input_id>
                                {user.name}
                            </label>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
