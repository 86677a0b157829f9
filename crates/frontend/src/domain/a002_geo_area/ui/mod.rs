pub mod form;

use crate::shared::mount::mount_into;
use crate::shared::page_context::{csrf_token, element_html, read_global, read_optional_global};
use contracts::domain::a002_geo_area::page::{globals, GeoAreaPage};
use contracts::shared::page_context::PageContextError;
use form::GeoAreaWizardForm;
use leptos::prelude::*;

/// Server-rendered hint read before the container is replaced.
pub const HELP_TEXT_ID: &str = "id_geographical_area-geo_area_hint";

pub fn load_page() -> Result<GeoAreaPage, PageContextError> {
    Ok(GeoAreaPage {
        initial: read_global(globals::INITIAL)?,
        errors: read_optional_global(globals::ERRORS)?,
        csrf_token: csrf_token()?,
        help_text: element_html(HELP_TEXT_ID),
        groups_options: read_global(globals::GROUPS_OPTIONS)?,
        country_regions_options: read_global(globals::COUNTRY_REGIONS_OPTIONS)?,
        groups_with_members: read_optional_global(globals::GROUPS_WITH_MEMBERS)?,
    })
}

pub fn mount(container: web_sys::HtmlElement) -> Result<(), PageContextError> {
    let page = load_page()?;
    mount_into(container, move || view! { <GeoAreaWizardForm page=page /> });
    Ok(())
}
