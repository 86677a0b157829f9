pub mod popover;

use crate::shared::mount::{container, mount_into};
use crate::shared::page_context::{csrf_token, read_optional_global};
use contracts::domain::a003_workbasket_assignment::page::{globals, AssignmentPage};
use contracts::domain::a003_workbasket_assignment::{AssignmentLink, PopoverState};
use contracts::shared::page_context::PageContextError;
use leptos::prelude::*;
use popover::AssignmentPopover;

pub fn load_page() -> Result<AssignmentPage, PageContextError> {
    Ok(AssignmentPage {
        csrf_token: csrf_token()?,
        assignable_users: read_optional_global(globals::ASSIGNABLE_USERS)?,
        assigned_workers: read_optional_global(globals::ASSIGNED_WORKERS)?,
        assigned_reviewers: read_optional_global(globals::ASSIGNED_REVIEWERS)?,
    })
}

/// Mounts a popover into each assignment link present on the page. The
/// popovers share one [`PopoverState`].
pub fn mount() -> Result<(), PageContextError> {
    let links: Vec<_> = AssignmentLink::ALL
        .into_iter()
        .filter_map(|link| container(&link.button_id()).map(|el| (link, el)))
        .collect();
    if links.is_empty() {
        return Ok(());
    }

    let page = load_page()?;
    let popover = RwSignal::new(PopoverState::default());
    for (link, el) in links {
        let users = page.users_for(link).to_vec();
        let csrf_token = page.csrf_token.clone();
        mount_into(el, move || {
            view! { <AssignmentPopover link=link popover=popover users=users csrf_token=csrf_token /> }
        });
    }
    Ok(())
}
