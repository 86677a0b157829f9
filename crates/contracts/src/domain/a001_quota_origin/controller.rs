use super::aggregate::{DateField, DatePart, Exclusion, Origin};
use super::page::QuotaOriginsPage;
use super::state::{FormsetLookups, FormsetState};
use super::view_model::RowKey;
use crate::domain::common::{unique_id, AreaId, ClientId, IdSource, UuidIds};
use std::collections::HashSet;

/// Operations over [`FormsetState`].
///
/// Each operation takes the current revision and returns the next one, or
/// `None` when nothing changes. Unknown origin or exclusion ids are no-ops:
/// a fast double click can legitimately target a row that is already gone.
#[derive(Debug, Clone, Default)]
pub struct FormsetController<I = UuidIds> {
    ids: I,
}

impl FormsetController<UuidIds> {
    pub fn new() -> Self {
        Self { ids: UuidIds }
    }
}

impl<I: IdSource> FormsetController<I> {
    pub fn with_ids(ids: I) -> Self {
        Self { ids }
    }

    /// First revision, built from the page snapshot.
    ///
    /// An empty origin list gets one empty origin so the form always shows
    /// a row. Exclusions are kept only under a group origin and only for
    /// members of that group.
    pub fn init(&mut self, page: QuotaOriginsPage) -> FormsetState {
        let lookups = FormsetLookups {
            geo_area_options: page.geo_area_options,
            exclusion_options: page.exclusion_options,
            group_membership: page.groups_with_members,
        };
        let seed = FormsetState::new(Vec::new(), lookups, page.errors);

        let mut taken: HashSet<ClientId> = HashSet::new();
        let mut origins = Vec::with_capacity(page.origins.len().max(1));
        for data in page.origins {
            let given = data
                .id
                .clone()
                .or_else(|| data.pk.map(|pk| pk.to_string()))
                .map(ClientId::new)
                .filter(|id| !taken.contains(id));
            let id = match given {
                Some(id) => id,
                None => unique_id(&mut self.ids, |c| taken.contains(c)),
            };
            taken.insert(id.clone());

            let area = data.geographical_area.map(AreaId);
            let group = area.filter(|a| seed.is_group(Some(*a)));
            if group.is_none() && !data.exclusions.is_empty() {
                log::debug!(
                    "init: origin {} is not a group origin, dropping {} exclusion(s)",
                    id,
                    data.exclusions.len()
                );
            }

            let mut exclusions = Vec::new();
            if let Some(group) = group {
                let membership = &seed.lookups().group_membership;
                for ex in &data.exclusions {
                    if let Some(excluded) = ex.geographical_area() {
                        if !membership.is_member(group, excluded) {
                            log::debug!("init: area {} is not a member of group {}", excluded, group);
                            continue;
                        }
                    }
                    let ex_id = unique_id(&mut self.ids, |c| taken.contains(c));
                    taken.insert(ex_id.clone());
                    exclusions.push(Exclusion {
                        id: ex_id,
                        pk: ex.pk(),
                        geographical_area: ex.geographical_area(),
                    });
                }
            }

            origins.push(Origin {
                id,
                pk: data.pk,
                geographical_area: area,
                start_date: data.start_date(),
                end_date: data.end_date(),
                exclusions,
            });
        }

        if origins.is_empty() {
            let id = unique_id(&mut self.ids, |_| false);
            origins.push(Origin::empty(id));
        }

        log::debug!("quota origins formset initialised with {} origin(s)", origins.len());
        seed.with_origins(origins)
    }

    fn fresh_id(&mut self, state: &FormsetState, pending: &[ClientId]) -> ClientId {
        unique_id(&mut self.ids, |c| state.is_live_id(c) || pending.contains(c))
    }

    /// Appends an empty origin. Always succeeds.
    pub fn add_origin(&mut self, state: &FormsetState) -> FormsetState {
        let id = self.fresh_id(state, &[]);
        let mut origins = state.origins().to_vec();
        origins.push(Origin::empty(id));
        state.with_origins(origins)
    }

    /// Id of the first origin, adding one when the list is empty.
    ///
    /// Backs the placeholder row shown after every origin was removed.
    pub fn ensure_origin(&mut self, state: &FormsetState) -> (FormsetState, ClientId) {
        match state.origins().first() {
            Some(origin) => (state.clone(), origin.id.clone()),
            None => {
                let next = self.add_origin(state);
                let id = next.origins()[0].id.clone();
                (next, id)
            }
        }
    }

    /// Runs `op` on the origin behind a rendered row.
    ///
    /// The placeholder row (`None`) is materialized first; the new origin is
    /// kept even when `op` itself changes nothing.
    pub fn apply_to_row<F>(&mut self, state: &FormsetState, key: &RowKey, op: F) -> Option<FormsetState>
    where
        F: FnOnce(&mut Self, &FormsetState, &ClientId) -> Option<FormsetState>,
    {
        match key {
            Some(id) => op(self, state, id),
            None => {
                let materialized = state.is_empty();
                let (base, id) = self.ensure_origin(state);
                op(self, &base, &id).or_else(|| materialized.then_some(base))
            }
        }
    }

    pub fn remove_origin(&self, state: &FormsetState, origin_id: &ClientId) -> Option<FormsetState> {
        let index = found(state.position(origin_id), "remove origin", origin_id)?;
        let mut origins = state.origins().to_vec();
        origins.remove(index);
        Some(state.with_origins(origins))
    }

    /// Sets the origin's area. Exclusions only make sense under a group, so
    /// they are dropped whenever the new area is not one.
    pub fn set_origin_area(
        &self,
        state: &FormsetState,
        origin_id: &ClientId,
        area: Option<AreaId>,
    ) -> Option<FormsetState> {
        let index = found(state.position(origin_id), "set origin area", origin_id)?;
        let current = &state.origins()[index];
        let mut next = current.clone();
        next.geographical_area = area;
        if !state.is_group(area) {
            next.exclusions.clear();
        }
        changed(state, index, current, next)
    }

    pub fn set_date(
        &self,
        state: &FormsetState,
        origin_id: &ClientId,
        field: DateField,
        part: DatePart,
        value: &str,
    ) -> Option<FormsetState> {
        let index = found(state.position(origin_id), "set date", origin_id)?;
        let current = &state.origins()[index];
        let mut next = current.clone();
        match field {
            DateField::Start => next.start_date = current.start_date.with(part, value),
            DateField::End => next.end_date = current.end_date.with(part, value),
        }
        changed(state, index, current, next)
    }

    /// Appends an empty exclusion. No-op unless the origin's area is a group.
    pub fn add_exclusion(&mut self, state: &FormsetState, origin_id: &ClientId) -> Option<FormsetState> {
        let index = found(state.position(origin_id), "add exclusion", origin_id)?;
        let current = &state.origins()[index];
        if !state.is_group(current.geographical_area) {
            log::debug!("add exclusion: origin {} is not a group origin", origin_id);
            return None;
        }
        let id = self.fresh_id(state, &[]);
        let mut next = current.clone();
        next.exclusions.push(Exclusion {
            id,
            pk: None,
            geographical_area: None,
        });
        Some(state.with_origin_at(index, next))
    }

    pub fn remove_exclusion(
        &self,
        state: &FormsetState,
        origin_id: &ClientId,
        exclusion_id: &ClientId,
    ) -> Option<FormsetState> {
        let index = found(state.position(origin_id), "remove exclusion", origin_id)?;
        let current = &state.origins()[index];
        let position = found(
            current.exclusions.iter().position(|e| &e.id == exclusion_id),
            "remove exclusion",
            exclusion_id,
        )?;
        let mut next = current.clone();
        next.exclusions.remove(position);
        Some(state.with_origin_at(index, next))
    }

    /// Replaces the whole exclusion list with `areas`, as committed by the
    /// multi-select.
    ///
    /// Every record gets a fresh id. Duplicates and areas outside the group
    /// are dropped; an area that was already excluded keeps its server pk.
    pub fn set_exclusions(
        &mut self,
        state: &FormsetState,
        origin_id: &ClientId,
        areas: &[AreaId],
    ) -> Option<FormsetState> {
        let index = found(state.position(origin_id), "set exclusions", origin_id)?;
        let current = &state.origins()[index];
        let group = match current.geographical_area {
            Some(group) if state.is_group(Some(group)) => group,
            _ => {
                log::debug!("set exclusions: origin {} is not a group origin", origin_id);
                return None;
            }
        };
        let membership = &state.lookups().group_membership;

        let mut seen = HashSet::new();
        let mut pending: Vec<ClientId> = Vec::with_capacity(areas.len());
        let mut exclusions = Vec::with_capacity(areas.len());
        for &area in areas {
            if !membership.is_member(group, area) {
                log::debug!("set exclusions: area {} is not a member of group {}", area, group);
                continue;
            }
            if !seen.insert(area) {
                continue;
            }
            let pk = current
                .exclusions
                .iter()
                .find(|e| e.geographical_area == Some(area))
                .and_then(|e| e.pk);
            let id = self.fresh_id(state, &pending);
            pending.push(id.clone());
            exclusions.push(Exclusion {
                id,
                pk,
                geographical_area: Some(area),
            });
        }

        let mut next = current.clone();
        next.exclusions = exclusions;
        Some(state.with_origin_at(index, next))
    }

    /// Changes a single exclusion's area; it must be a member of the
    /// origin's group (or `None` to clear the choice).
    pub fn set_exclusion_area(
        &self,
        state: &FormsetState,
        origin_id: &ClientId,
        exclusion_id: &ClientId,
        area: Option<AreaId>,
    ) -> Option<FormsetState> {
        let index = found(state.position(origin_id), "set exclusion area", origin_id)?;
        let current = &state.origins()[index];
        let position = found(
            current.exclusions.iter().position(|e| &e.id == exclusion_id),
            "set exclusion area",
            exclusion_id,
        )?;
        if let (Some(area), Some(group)) = (area, current.geographical_area) {
            if !state.lookups().group_membership.is_member(group, area) {
                log::debug!("set exclusion area: {} is not a member of group {}", area, group);
                return None;
            }
        }
        let mut next = current.clone();
        next.exclusions[position].geographical_area = area;
        changed(state, index, current, next)
    }
}

fn found<T>(value: Option<T>, op: &str, id: &ClientId) -> Option<T> {
    if value.is_none() {
        log::debug!("{}: {} not found, ignoring", op, id);
    }
    value
}

fn changed(state: &FormsetState, index: usize, current: &Origin, next: Origin) -> Option<FormsetState> {
    if &next == current {
        None
    } else {
        Some(state.with_origin_at(index, next))
    }
}
