use contracts::domain::a002_geo_area::{GeoAreaForm, GeoAreaPage, GeoAreaType};
use contracts::domain::common::{AreaId, AreaOption};
use contracts::shared::form_field::FormField;
use leptos::prelude::*;

/// ViewModel for the geographical area wizard step
#[derive(Clone, Copy)]
pub struct GeoAreaFormViewModel {
    pub form: RwSignal<GeoAreaForm>,
    pub help_text: StoredValue<Option<String>>,
}

impl GeoAreaFormViewModel {
    pub fn new(page: GeoAreaPage) -> Self {
        let help_text = page.help_text.clone();
        Self {
            form: RwSignal::new(GeoAreaForm::from_page(page)),
            help_text: StoredValue::new(help_text),
        }
    }

    pub fn is_type(&self, geo_area_type: GeoAreaType) -> bool {
        self.form.with(|f| f.geo_area_type() == Some(geo_area_type))
    }

    pub fn error_messages(&self) -> Vec<(String, String)> {
        self.form.with_untracked(|f| {
            f.errors()
                .entries()
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect()
        })
    }

    pub fn type_error(&self) -> Option<String> {
        self.form.with_untracked(|f| f.type_error().map(str::to_string))
    }

    pub fn groups_options(&self) -> Vec<AreaOption> {
        self.form.with_untracked(|f| f.lookups().groups_options.clone())
    }

    pub fn country_regions_options(&self) -> Vec<AreaOption> {
        self.form
            .with_untracked(|f| f.lookups().country_regions_options.clone())
    }

    pub fn group_exclusion_choices(&self) -> Vec<AreaOption> {
        self.form.with(GeoAreaForm::group_exclusion_choices)
    }

    pub fn fields(&self) -> Vec<FormField> {
        self.form.with(GeoAreaForm::fields)
    }

    pub fn set_type(&self, geo_area_type: GeoAreaType) {
        self.form.update(|f| f.set_geo_area_type(geo_area_type));
    }

    pub fn set_group(&self, raw: &str) {
        let group = AreaId::parse_choice(raw);
        self.form.update(|f| f.set_group(group));
    }

    pub fn set_erga_omnes_exclusions(&self, areas: Vec<AreaId>) {
        self.form.update(|f| f.set_erga_omnes_exclusions(&areas));
    }

    pub fn set_geo_group_exclusions(&self, areas: Vec<AreaId>) {
        self.form.update(|f| f.set_geo_group_exclusions(&areas));
    }

    pub fn set_country_regions(&self, areas: Vec<AreaId>) {
        self.form.update(|f| f.set_country_regions(&areas));
    }
}
