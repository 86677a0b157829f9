use super::aggregate::GeoAreaType;
use super::page::GeoAreaPage;
use crate::domain::common::{AreaId, AreaOption, GroupMembership};
use crate::shared::form_field::{formset_field, prefixed_field, ErrorMap, FormField, CSRF_FIELD};
use std::collections::HashSet;
use std::sync::Arc;

pub const FIELDS_PREFIX: &str = "geographical_area";
pub const WIZARD_STEP_FIELD: &str = "measure_create_wizard-current_step";
pub const WIZARD_STEP: &str = "geographical_area";

pub const ERGA_OMNES_EXCLUSIONS_PREFIX: &str = "erga_omnes_exclusions_formset";
pub const GEO_GROUP_EXCLUSIONS_PREFIX: &str = "geo_group_exclusions_formset";
pub const COUNTRY_REGIONS_PREFIX: &str = "country_region_formset";

/// Key of the error shown next to the area type radios.
pub const GEO_AREA_ERROR: &str = "geo_area";

/// `geographical_area-geo_area`, the radio group's name.
pub fn geo_area_field() -> String {
    prefixed_field(FIELDS_PREFIX, "geo_area")
}

pub fn geographical_area_group_field() -> String {
    prefixed_field(FIELDS_PREFIX, "geographical_area_group")
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeoAreaLookups {
    pub groups_options: Vec<AreaOption>,
    pub country_regions_options: Vec<AreaOption>,
    pub groups_with_members: GroupMembership,
}

/// Current state of the geographical area step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoAreaForm {
    geo_area_type: Option<GeoAreaType>,
    group: Option<AreaId>,
    erga_omnes_exclusions: Vec<AreaId>,
    geo_group_exclusions: Vec<AreaId>,
    country_regions: Vec<AreaId>,
    lookups: Arc<GeoAreaLookups>,
    errors: Arc<ErrorMap>,
    csrf_token: String,
}

fn known(options: &[AreaOption], selected: &[AreaId]) -> Vec<AreaId> {
    options
        .iter()
        .filter(|o| selected.contains(&o.value))
        .map(|o| o.value)
        .collect()
}

fn dedup(areas: &[AreaId]) -> Vec<AreaId> {
    let mut seen = HashSet::new();
    areas.iter().copied().filter(|a| seen.insert(*a)).collect()
}

impl GeoAreaForm {
    /// Initial selections are kept only when they are among the options.
    pub fn from_page(page: GeoAreaPage) -> Self {
        let lookups = GeoAreaLookups {
            groups_options: page.groups_options,
            country_regions_options: page.country_regions_options,
            groups_with_members: page.groups_with_members,
        };
        let initial = page.initial;
        let group = initial
            .geographical_area_group
            .map(AreaId)
            .filter(|g| lookups.groups_options.iter().any(|o| o.value == *g));

        let options = &lookups.country_regions_options;
        let erga_omnes_exclusions = known(options, &initial.erga_omnes_exclusions);
        let geo_group_exclusions = known(options, &initial.geo_group_exclusions);
        let country_regions = known(options, &initial.country_regions);

        Self {
            geo_area_type: initial.geo_area_type,
            group,
            erga_omnes_exclusions,
            geo_group_exclusions,
            country_regions,
            lookups: Arc::new(lookups),
            errors: Arc::new(page.errors),
            csrf_token: page.csrf_token,
        }
    }

    pub fn geo_area_type(&self) -> Option<GeoAreaType> {
        self.geo_area_type
    }

    pub fn group(&self) -> Option<AreaId> {
        self.group
    }

    pub fn erga_omnes_exclusions(&self) -> &[AreaId] {
        &self.erga_omnes_exclusions
    }

    pub fn geo_group_exclusions(&self) -> &[AreaId] {
        &self.geo_group_exclusions
    }

    pub fn country_regions(&self) -> &[AreaId] {
        &self.country_regions
    }

    pub fn lookups(&self) -> &GeoAreaLookups {
        &self.lookups
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn set_geo_area_type(&mut self, geo_area_type: GeoAreaType) {
        self.geo_area_type = Some(geo_area_type);
    }

    /// Changing the group drops exclusions picked for the previous one.
    pub fn set_group(&mut self, group: Option<AreaId>) {
        if self.group != group {
            self.geo_group_exclusions.clear();
        }
        self.group = group;
    }

    pub fn set_erga_omnes_exclusions(&mut self, areas: &[AreaId]) {
        self.erga_omnes_exclusions = dedup(areas);
    }

    /// Only members of the chosen group can be excluded from it.
    pub fn set_geo_group_exclusions(&mut self, areas: &[AreaId]) {
        let Some(group) = self.group else {
            log::debug!("geo group exclusions set without a group, ignoring");
            return;
        };
        let members = &self.lookups.groups_with_members;
        self.geo_group_exclusions = dedup(areas)
            .into_iter()
            .filter(|a| members.is_member(group, *a))
            .collect();
    }

    pub fn set_country_regions(&mut self, areas: &[AreaId]) {
        self.country_regions = dedup(areas);
    }

    /// Country/region options restricted to the chosen group's members.
    pub fn group_exclusion_choices(&self) -> Vec<AreaOption> {
        self.group
            .and_then(|g| {
                self.lookups
                    .groups_with_members
                    .filter_members(g, &self.lookups.country_regions_options)
            })
            .unwrap_or_default()
    }

    pub fn type_error(&self) -> Option<&str> {
        self.errors.get(GEO_AREA_ERROR)
    }

    /// Hidden fields of the wizard step POST.
    pub fn fields(&self) -> Vec<FormField> {
        let mut out = vec![
            FormField::new(CSRF_FIELD, self.csrf_token.as_str()),
            FormField::new(WIZARD_STEP_FIELD, WIZARD_STEP),
            FormField::new(
                geo_area_field(),
                self.geo_area_type.map(|t| t.as_str()).unwrap_or_default(),
            ),
            FormField::new(
                geographical_area_group_field(),
                self.group.map(|g| g.to_string()).unwrap_or_default(),
            ),
        ];
        let lists: [(&str, &str, &[AreaId]); 3] = [
            (
                ERGA_OMNES_EXCLUSIONS_PREFIX,
                "erga_omnes_exclusion",
                &self.erga_omnes_exclusions,
            ),
            (
                GEO_GROUP_EXCLUSIONS_PREFIX,
                "geo_group_exclusion",
                &self.geo_group_exclusions,
            ),
            (
                COUNTRY_REGIONS_PREFIX,
                "geographical_area_country_or_region",
                &self.country_regions,
            ),
        ];
        for (prefix, field, areas) in lists {
            for (i, area) in areas.iter().enumerate() {
                out.push(FormField::new(formset_field(prefix, i, field), area.to_string()));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_geo_area::GeoAreaInitial;

    fn page(initial: GeoAreaInitial) -> GeoAreaPage {
        GeoAreaPage {
            initial,
            errors: ErrorMap::new(),
            csrf_token: "token".into(),
            help_text: None,
            groups_options: vec![AreaOption::new(11, "1013 - European Union"), AreaOption::new(12, "2005 - GSP")],
            country_regions_options: vec![
                AreaOption::new(5, "FR - France"),
                AreaOption::new(6, "DE - Germany"),
                AreaOption::new(7, "CL - Chile"),
            ],
            groups_with_members: GroupMembership::new().with_group(11, &[5, 6]).with_group(12, &[7]),
        }
    }

    fn value<'a>(fields: &'a [FormField], name: &str) -> Option<&'a str> {
        fields.iter().find(|f| f.name == name).map(|f| f.value.as_str())
    }

    #[test]
    fn test_initial_selection_filtered_to_options() {
        let form = GeoAreaForm::from_page(page(GeoAreaInitial {
            geo_area_type: Some(GeoAreaType::Country),
            geographical_area_group: Some(99),
            country_regions: vec![AreaId(7), AreaId(42), AreaId(5)],
            ..Default::default()
        }));
        assert_eq!(form.group(), None);
        assert_eq!(form.country_regions(), &[AreaId(5), AreaId(7)]);
    }

    #[test]
    fn test_changing_group_clears_group_exclusions() {
        let mut form = GeoAreaForm::from_page(page(GeoAreaInitial {
            geo_area_type: Some(GeoAreaType::Group),
            geographical_area_group: Some(11),
            geo_group_exclusions: vec![AreaId(5)],
            ..Default::default()
        }));
        assert_eq!(form.geo_group_exclusions(), &[AreaId(5)]);

        form.set_group(Some(AreaId(11)));
        assert_eq!(form.geo_group_exclusions(), &[AreaId(5)]);

        form.set_group(Some(AreaId(12)));
        assert!(form.geo_group_exclusions().is_empty());
        let choices: Vec<_> = form.group_exclusion_choices().into_iter().map(|o| o.value).collect();
        assert_eq!(choices, vec![AreaId(7)]);
    }

    #[test]
    fn test_group_exclusions_limited_to_members() {
        let mut form = GeoAreaForm::from_page(page(GeoAreaInitial::default()));
        form.set_geo_group_exclusions(&[AreaId(5)]);
        assert!(form.geo_group_exclusions().is_empty());

        form.set_group(Some(AreaId(11)));
        form.set_geo_group_exclusions(&[AreaId(5), AreaId(7), AreaId(5)]);
        assert_eq!(form.geo_group_exclusions(), &[AreaId(5)]);
    }

    #[test]
    fn test_fields() {
        let mut form = GeoAreaForm::from_page(page(GeoAreaInitial::default()));
        form.set_geo_area_type(GeoAreaType::ErgaOmnes);
        form.set_erga_omnes_exclusions(&[AreaId(6), AreaId(5)]);
        form.set_country_regions(&[AreaId(7)]);

        let fields = form.fields();
        assert_eq!(value(&fields, "csrfmiddlewaretoken"), Some("token"));
        assert_eq!(value(&fields, "measure_create_wizard-current_step"), Some("geographical_area"));
        assert_eq!(value(&fields, "geographical_area-geo_area"), Some("ERGA_OMNES"));
        assert_eq!(value(&fields, "geographical_area-geographical_area_group"), Some(""));
        assert_eq!(
            value(&fields, "erga_omnes_exclusions_formset-0-erga_omnes_exclusion"),
            Some("6")
        );
        assert_eq!(
            value(&fields, "erga_omnes_exclusions_formset-1-erga_omnes_exclusion"),
            Some("5")
        );
        assert_eq!(
            value(&fields, "country_region_formset-0-geographical_area_country_or_region"),
            Some("7")
        );
        assert_eq!(value(&fields, "geo_group_exclusions_formset-0-geo_group_exclusion"), None);
    }
}
