use contracts::domain::a001_quota_origin::view_model::{self, OriginView, RowKey};
use contracts::domain::a001_quota_origin::{
    serialize, DateField, DatePart, FormsetController, FormsetState, QuotaOriginsPage,
};
use contracts::domain::common::{AreaId, AreaOption, ClientId};
use contracts::shared::form_field::FormField;
use leptos::prelude::*;

/// ViewModel for the origins formset.
///
/// Rows are addressed by [`RowKey`]; the placeholder row (`None`) becomes a
/// real origin on its first edit.
#[derive(Clone, Copy)]
pub struct QuotaOriginFormsetViewModel {
    pub state: RwSignal<FormsetState>,
    controller: StoredValue<FormsetController>,
}

impl QuotaOriginFormsetViewModel {
    pub fn new(page: QuotaOriginsPage) -> Self {
        let mut controller = FormsetController::new();
        let state = controller.init(page);
        Self {
            state: RwSignal::new(state),
            controller: StoredValue::new(controller),
        }
    }

    fn apply(&self, op: impl FnOnce(&mut FormsetController, &FormsetState) -> Option<FormsetState>) {
        let current = self.state.get_untracked();
        let mut next = None;
        self.controller.update_value(|c| next = op(c, &current));
        if let Some(next) = next {
            self.state.set(next);
        }
    }

    fn apply_to_row(
        &self,
        key: &RowKey,
        op: impl FnOnce(&mut FormsetController, &FormsetState, &ClientId) -> Option<FormsetState>,
    ) {
        self.apply(|c, current| c.apply_to_row(current, key, op));
    }

    pub fn rows(&self) -> Vec<OriginView> {
        self.state.with(view_model::build)
    }

    pub fn row(&self, key: &RowKey) -> Option<OriginView> {
        self.state.with(|s| view_model::row(s, key))
    }

    /// Hidden inputs the surrounding form posts.
    pub fn hidden_fields(&self) -> Vec<FormField> {
        self.state.with(serialize)
    }

    pub fn geo_area_options(&self) -> Vec<AreaOption> {
        self.state
            .with_untracked(|s| s.lookups().geo_area_options.clone())
    }

    pub fn add_origin(&self) {
        self.apply(|c, s| Some(c.add_origin(s)));
    }

    pub fn remove_origin(&self, key: &RowKey) {
        if let Some(id) = key {
            self.apply(|c, s| c.remove_origin(s, id));
        }
    }

    pub fn set_origin_area(&self, key: &RowKey, raw: &str) {
        let area = AreaId::parse_choice(raw);
        self.apply_to_row(key, |c, s, id| c.set_origin_area(s, id, area));
    }

    pub fn set_date(&self, key: &RowKey, field: DateField, part: DatePart, value: &str) {
        self.apply_to_row(key, |c, s, id| c.set_date(s, id, field, part, value));
    }

    pub fn add_exclusion(&self, key: &RowKey) {
        self.apply_to_row(key, |c, s, id| c.add_exclusion(s, id));
    }

    pub fn remove_exclusion(&self, key: &RowKey, exclusion_id: &ClientId) {
        self.apply_to_row(key, |c, s, id| c.remove_exclusion(s, id, exclusion_id));
    }

    pub fn set_exclusions(&self, key: &RowKey, areas: &[AreaId]) {
        self.apply_to_row(key, |c, s, id| c.set_exclusions(s, id, areas));
    }

    pub fn set_exclusion_area(&self, key: &RowKey, exclusion_id: &ClientId, raw: &str) {
        let area = AreaId::parse_choice(raw);
        self.apply_to_row(key, |c, s, id| c.set_exclusion_area(s, id, exclusion_id, area));
    }
}
