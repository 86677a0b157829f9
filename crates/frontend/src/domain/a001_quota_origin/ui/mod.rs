pub mod formset;

use crate::shared::mount::mount_into;
use crate::shared::page_context::{read_global, read_optional_global};
use contracts::domain::a001_quota_origin::page::{globals, QuotaOriginsPage};
use contracts::shared::page_context::PageContextError;
use formset::QuotaOriginFormset;
use leptos::prelude::*;

pub fn load_page() -> Result<QuotaOriginsPage, PageContextError> {
    Ok(QuotaOriginsPage {
        origins: read_global(globals::ORIGINS)?,
        geo_area_options: read_global(globals::GEO_AREA_OPTIONS)?,
        exclusion_options: read_optional_global(globals::EXCLUSION_OPTIONS)?,
        groups_with_members: read_optional_global(globals::GROUPS_WITH_MEMBERS)?,
        errors: read_optional_global(globals::ERRORS)?,
    })
}

pub fn mount(container: web_sys::HtmlElement) -> Result<(), PageContextError> {
    let page = load_page()?;
    log::debug!("mounting quota origins with {} origin(s)", page.origins.len());
    mount_into(container, move || view! { <QuotaOriginFormset page=page /> });
    Ok(())
}
