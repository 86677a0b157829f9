use super::aggregate::Origin;
use crate::domain::common::{AreaId, AreaOption, ClientId, GroupMembership};
use crate::shared::form_field::ErrorMap;
use std::sync::Arc;

/// Option lists of the page; fixed for the lifetime of the widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormsetLookups {
    pub geo_area_options: Vec<AreaOption>,
    pub exclusion_options: Vec<AreaOption>,
    pub group_membership: GroupMembership,
}

/// One revision of the origins formset.
///
/// Revisions are never edited in place: every controller operation builds a
/// new value. Lookups and server errors are shared between revisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormsetState {
    origins: Vec<Origin>,
    lookups: Arc<FormsetLookups>,
    errors: Arc<ErrorMap>,
}

impl FormsetState {
    pub(crate) fn new(origins: Vec<Origin>, lookups: FormsetLookups, errors: ErrorMap) -> Self {
        Self {
            origins,
            lookups: Arc::new(lookups),
            errors: Arc::new(errors),
        }
    }

    /// Next revision with `origins` and the same lookups.
    pub(crate) fn with_origins(&self, origins: Vec<Origin>) -> Self {
        Self {
            origins,
            lookups: Arc::clone(&self.lookups),
            errors: Arc::clone(&self.errors),
        }
    }

    /// Next revision with the origin at `index` replaced.
    pub(crate) fn with_origin_at(&self, index: usize, origin: Origin) -> Self {
        let mut origins = self.origins.clone();
        origins[index] = origin;
        self.with_origins(origins)
    }

    pub fn origins(&self) -> &[Origin] {
        &self.origins
    }

    pub fn len(&self) -> usize {
        self.origins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }

    pub fn lookups(&self) -> &FormsetLookups {
        &self.lookups
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn position(&self, id: &ClientId) -> Option<usize> {
        self.origins.iter().position(|o| &o.id == id)
    }

    pub fn origin(&self, id: &ClientId) -> Option<&Origin> {
        self.origins.iter().find(|o| &o.id == id)
    }

    pub fn is_group(&self, area: Option<AreaId>) -> bool {
        area.is_some_and(|a| self.lookups.group_membership.is_group(a))
    }

    /// Whether `id` belongs to any live origin or exclusion.
    pub fn is_live_id(&self, id: &ClientId) -> bool {
        self.origins
            .iter()
            .any(|o| &o.id == id || o.exclusions.iter().any(|e| &e.id == id))
    }

    /// Exclusion choices for `origin`: the exclusion options restricted to
    /// the members of its group, or `None` when its area is not a group.
    ///
    /// Recomputed on every call so it cannot drift from the origin's area.
    pub fn available_exclusions(&self, origin: &Origin) -> Option<Vec<AreaOption>> {
        let group = origin.geographical_area?;
        self.lookups
            .group_membership
            .filter_members(group, &self.lookups.exclusion_options)
    }
}
