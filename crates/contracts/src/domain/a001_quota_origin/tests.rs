use super::view_model;
use super::*;
use crate::domain::common::{AreaId, AreaOption, ClientId, GroupMembership, SequentialIds};
use crate::shared::form_field::{ErrorMap, FormField};
use serde_json::json;

const GROUP: i64 = 11;

fn page(origins: serde_json::Value) -> QuotaOriginsPage {
    QuotaOriginsPage {
        origins: serde_json::from_value(origins).unwrap(),
        geo_area_options: vec![
            AreaOption::new(1, "1011 - ERGA OMNES"),
            AreaOption::new(5, "FR - France"),
            AreaOption::new(6, "DE - Germany"),
            AreaOption::new(7, "CL - Chile"),
            AreaOption::new(9, "ES - Spain"),
            AreaOption::new(GROUP, "1013 - European Union"),
        ],
        exclusion_options: vec![
            AreaOption::new(5, "FR - France"),
            AreaOption::new(6, "DE - Germany"),
            AreaOption::new(7, "CL - Chile"),
            AreaOption::new(9, "ES - Spain"),
        ],
        groups_with_members: GroupMembership::new()
            .with_group(GROUP, &[5, 6, 9])
            .with_group(1, &[5, 6, 7, 9]),
        errors: ErrorMap::new(),
    }
}

fn controller() -> FormsetController<SequentialIds> {
    FormsetController::with_ids(SequentialIds::new("new"))
}

fn names(fields: &[FormField]) -> Vec<&str> {
    fields.iter().map(|f| f.name.as_str()).collect()
}

fn value<'a>(fields: &'a [FormField], name: &str) -> Option<&'a str> {
    fields
        .iter()
        .find(|f| f.name == name)
        .map(|f| f.value.as_str())
}

fn first_id(state: &FormsetState) -> ClientId {
    state.origins()[0].id.clone()
}

#[test]
fn test_empty_page_materialises_one_origin() {
    let mut ctl = controller();
    let state = ctl.init(page(json!([])));

    assert_eq!(state.len(), 1);
    let origin = &state.origins()[0];
    assert_eq!(origin.pk, None);
    assert_eq!(origin.geographical_area, None);
    assert!(origin.exclusions.is_empty());
    assert!(origin.start_date.is_empty());
}

#[test]
fn test_init_keeps_server_ids_and_exclusions() {
    let mut ctl = controller();
    let state = ctl.init(page(json!([
        {"id": 301, "pk": 301, "geographical_area": GROUP, "exclusions": [5, 9],
         "start_date_0": 1, "start_date_1": 1, "start_date_2": 2024,
         "end_date_0": "", "end_date_1": "", "end_date_2": ""},
        {"pk": 302, "geographical_area": 7, "exclusions": []},
    ])));

    assert_eq!(state.len(), 2);
    assert_eq!(state.origins()[0].id.as_str(), "301");
    assert_eq!(state.origins()[1].id.as_str(), "302");
    let areas: Vec<_> = state.origins()[0]
        .exclusions
        .iter()
        .map(|e| e.geographical_area)
        .collect();
    assert_eq!(areas, vec![Some(AreaId(5)), Some(AreaId(9))]);
}

#[test]
fn test_init_regenerates_duplicate_ids() {
    let mut ctl = controller();
    let state = ctl.init(page(json!([
        {"id": "a", "geographical_area": 7},
        {"id": "a", "geographical_area": 5},
    ])));

    assert_ne!(state.origins()[0].id, state.origins()[1].id);
}

#[test]
fn test_add_and_remove_counts() {
    let mut ctl = controller();
    let initial = ctl.init(page(json!([{"pk": 1, "geographical_area": 7}])));

    let mut state = initial.clone();
    let mut adds = 0;
    for _ in 0..4 {
        state = ctl.add_origin(&state);
        adds += 1;
    }
    let mut removes = 0;
    let victims: Vec<ClientId> = state.origins().iter().skip(1).step_by(2).map(|o| o.id.clone()).collect();
    for id in &victims {
        if let Some(next) = ctl.remove_origin(&state, id) {
            state = next;
            removes += 1;
        }
    }
    // a second removal of the same id is a no-op, not a success
    assert!(ctl.remove_origin(&state, &victims[0]).is_none());

    assert_eq!(state.len(), initial.len() + adds - removes);
}

#[test]
fn test_added_ids_are_unique_even_with_colliding_source() {
    // the source starts on an id the page already uses
    let mut ctl = FormsetController::with_ids(SequentialIds::new("o"));
    let state = ctl.init(page(json!([{"id": "o-2", "geographical_area": 7}])));
    let state = ctl.add_origin(&state);
    let state = ctl.add_origin(&state);

    let mut ids: Vec<_> = state.origins().iter().map(|o| o.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[test]
fn test_scenario_add_twice_then_remove_first() {
    let mut ctl = controller();
    let state = ctl.init(page(json!([])));
    let created_first = first_id(&state);

    let state = ctl.add_origin(&state);
    let state = ctl.add_origin(&state);
    assert_eq!(state.len(), 3);

    let state = ctl.remove_origin(&state, &created_first).unwrap();
    assert_eq!(state.len(), 2);

    let fields = serialize(&state);
    assert!(names(&fields).iter().all(|n| n.starts_with("origins-0-") || n.starts_with("origins-1-")));
    assert!(names(&fields).contains(&"origins-0-geographical_area"));
    assert!(names(&fields).contains(&"origins-1-geographical_area"));
}

#[test]
fn test_serialization_renumbers_after_removals() {
    let mut ctl = controller();
    let mut state = ctl.init(page(json!([
        {"pk": 10, "geographical_area": 5},
        {"pk": 20, "geographical_area": 6},
        {"pk": 30, "geographical_area": 7},
        {"pk": 40, "geographical_area": 9},
    ])));
    let second = state.origins()[1].id.clone();
    state = ctl.remove_origin(&state, &second).unwrap();
    state = ctl.add_origin(&state);
    let first = first_id(&state);
    state = ctl.remove_origin(&state, &first).unwrap();

    let fields = serialize(&state);
    assert_eq!(value(&fields, "origins-0-pk"), Some("30"));
    assert_eq!(value(&fields, "origins-1-pk"), Some("40"));
    assert_eq!(value(&fields, "origins-2-pk"), Some(""));
    assert_eq!(value(&fields, "origins-3-pk"), None);

    for i in 0..state.len() {
        assert!(value(&fields, &format!("origins-{}-start_date_0", i)).is_some());
        assert!(value(&fields, &format!("origins-{}-end_date_2", i)).is_some());
    }
}

#[test]
fn test_serialized_origin_fields() {
    let mut ctl = controller();
    let state = ctl.init(page(json!([
        {"pk": 301, "geographical_area": GROUP, "exclusions": [{"pk": 4, "geographical_area": 6}],
         "start_date_0": 1, "start_date_1": 2, "start_date_2": 2024},
    ])));

    let fields = serialize(&state);
    assert_eq!(
        names(&fields),
        vec![
            "origins-0-pk",
            "origins-0-geographical_area",
            "origins-0-start_date_0",
            "origins-0-start_date_1",
            "origins-0-start_date_2",
            "origins-0-end_date_0",
            "origins-0-end_date_1",
            "origins-0-end_date_2",
            "origins-0-exclusions-0-pk",
            "origins-0-exclusions-0-geographical_area",
        ]
    );
    assert_eq!(value(&fields, "origins-0-geographical_area"), Some("11"));
    assert_eq!(value(&fields, "origins-0-start_date_1"), Some("2"));
    assert_eq!(value(&fields, "origins-0-end_date_0"), Some(""));
    assert_eq!(value(&fields, "origins-0-exclusions-0-pk"), Some("4"));
    assert_eq!(value(&fields, "origins-0-exclusions-0-geographical_area"), Some("6"));
}

#[test]
fn test_group_then_non_group_clears_exclusions() {
    let mut ctl = controller();
    let state = ctl.init(page(json!([])));
    let id = first_id(&state);

    let state = ctl.set_origin_area(&state, &id, Some(AreaId(GROUP))).unwrap();
    let state = ctl.set_exclusions(&state, &id, &[AreaId(5), AreaId(6)]).unwrap();
    assert_eq!(state.origins()[0].exclusions.len(), 2);

    let state = ctl.set_origin_area(&state, &id, Some(AreaId(7))).unwrap();
    assert!(state.origins()[0].exclusions.is_empty());
    assert_eq!(state.origins()[0].geographical_area, Some(AreaId(7)));
}

#[test]
fn test_clearing_area_drops_exclusions() {
    let mut ctl = controller();
    let state = ctl.init(page(json!([{"geographical_area": GROUP, "exclusions": [5]}])));
    let id = first_id(&state);

    let state = ctl.set_origin_area(&state, &id, None).unwrap();
    assert!(state.origins()[0].exclusions.is_empty());
}

#[test]
fn test_group_to_group_keeps_exclusions() {
    let mut ctl = controller();
    let state = ctl.init(page(json!([{"geographical_area": GROUP, "exclusions": [5]}])));
    let id = first_id(&state);

    let state = ctl.set_origin_area(&state, &id, Some(AreaId(1))).unwrap();
    assert_eq!(state.origins()[0].exclusions.len(), 1);
}

#[test]
fn test_setting_same_non_group_area_is_a_no_op() {
    let mut ctl = controller();
    let state = ctl.init(page(json!([{"geographical_area": 7}])));
    let id = first_id(&state);

    assert!(ctl.set_origin_area(&state, &id, Some(AreaId(7))).is_none());
}

#[test]
fn test_available_exclusions_is_options_intersect_members() {
    let mut ctl = controller();
    let state = ctl.init(page(json!([{"geographical_area": GROUP}, {"geographical_area": 7}])));
    let expected = vec![
        AreaOption::new(5, "FR - France"),
        AreaOption::new(6, "DE - Germany"),
        AreaOption::new(9, "ES - Spain"),
    ];

    let group_origin = state.origins()[0].clone();
    assert_eq!(state.available_exclusions(&group_origin), Some(expected.clone()));
    assert_eq!(state.available_exclusions(&state.origins()[1]), None);

    // another revision containing the same origin computes the same answer
    let other = ctl.add_origin(&state);
    let other = ctl.remove_origin(&other, &state.origins()[1].id).unwrap();
    assert_eq!(other.available_exclusions(&group_origin), Some(expected));
}

#[test]
fn test_scenario_set_exclusions_on_group() {
    let mut ctl = controller();
    let state = ctl.init(page(json!([{"geographical_area": GROUP}])));
    let id = first_id(&state);

    let state = ctl.set_exclusions(&state, &id, &[AreaId(5), AreaId(9)]).unwrap();
    let origin = &state.origins()[0];
    let areas: Vec<_> = origin.exclusions.iter().map(|e| e.geographical_area).collect();
    assert_eq!(areas, vec![Some(AreaId(5)), Some(AreaId(9))]);
    assert_ne!(origin.exclusions[0].id, origin.exclusions[1].id);

    let choices: Vec<_> = state
        .available_exclusions(origin)
        .unwrap()
        .into_iter()
        .map(|o| o.value)
        .collect();
    assert_eq!(choices, vec![AreaId(5), AreaId(6), AreaId(9)]);
}

#[test]
fn test_set_exclusions_drops_non_members_and_duplicates() {
    let mut ctl = controller();
    let state = ctl.init(page(json!([{"geographical_area": GROUP}])));
    let id = first_id(&state);

    let state = ctl
        .set_exclusions(&state, &id, &[AreaId(6), AreaId(7), AreaId(6)])
        .unwrap();
    let areas: Vec<_> = state.origins()[0]
        .exclusions
        .iter()
        .map(|e| e.geographical_area)
        .collect();
    assert_eq!(areas, vec![Some(AreaId(6))]);
}

#[test]
fn test_set_exclusions_keeps_pk_of_surviving_areas() {
    let mut ctl = controller();
    let state = ctl.init(page(json!([
        {"pk": 1, "geographical_area": GROUP,
         "exclusions": [{"pk": 40, "geographical_area": 5}, {"pk": 41, "geographical_area": 6}]},
    ])));
    let id = first_id(&state);
    let old_ids: Vec<_> = state.origins()[0].exclusions.iter().map(|e| e.id.clone()).collect();

    let state = ctl.set_exclusions(&state, &id, &[AreaId(9), AreaId(5)]).unwrap();
    let exclusions = &state.origins()[0].exclusions;
    assert_eq!(exclusions[0].pk, None);
    assert_eq!(exclusions[1].pk, Some(40));
    assert!(exclusions.iter().all(|e| !old_ids.contains(&e.id)));
}

#[test]
fn test_set_exclusions_on_non_group_is_a_no_op() {
    let mut ctl = controller();
    let state = ctl.init(page(json!([{"geographical_area": 7}])));
    let id = first_id(&state);

    assert!(ctl.set_exclusions(&state, &id, &[AreaId(5)]).is_none());
}

#[test]
fn test_add_exclusion_requires_group_origin() {
    let mut ctl = controller();
    let state = ctl.init(page(json!([{"geographical_area": 7}, {"geographical_area": GROUP}])));
    let plain = state.origins()[0].id.clone();
    let group = state.origins()[1].id.clone();

    assert!(ctl.add_exclusion(&state, &plain).is_none());
    assert!(ctl.add_exclusion(&state, &ClientId::new("gone")).is_none());

    let state = ctl.add_exclusion(&state, &group).unwrap();
    let exclusion = &state.origins()[1].exclusions[0];
    assert_eq!(exclusion.pk, None);
    assert_eq!(exclusion.geographical_area, None);
    assert!(state.origins()[0].exclusions.is_empty());
}

#[test]
fn test_set_exclusion_area_must_be_member() {
    let mut ctl = controller();
    let state = ctl.init(page(json!([{"geographical_area": GROUP}])));
    let id = first_id(&state);
    let state = ctl.add_exclusion(&state, &id).unwrap();
    let ex = state.origins()[0].exclusions[0].id.clone();

    assert!(ctl.set_exclusion_area(&state, &id, &ex, Some(AreaId(7))).is_none());
    let state = ctl.set_exclusion_area(&state, &id, &ex, Some(AreaId(9))).unwrap();
    assert_eq!(state.origins()[0].exclusions[0].geographical_area, Some(AreaId(9)));
}

#[test]
fn test_scenario_remove_only_exclusion() {
    let mut ctl = controller();
    let state = ctl.init(page(json!([
        {"pk": 1, "geographical_area": GROUP, "exclusions": [6]},
        {"pk": 2, "geographical_area": GROUP, "exclusions": [5, 9]},
    ])));
    let origin = first_id(&state);
    let only = state.origins()[0].exclusions[0].id.clone();

    let next = ctl.remove_exclusion(&state, &origin, &only).unwrap();
    assert!(next.origins()[0].exclusions.is_empty());
    assert_eq!(next.origins()[1], state.origins()[1]);

    let fields = serialize(&next);
    assert_eq!(value(&fields, "origins-0-exclusions-0-pk"), None);
    assert_eq!(value(&fields, "origins-1-exclusions-0-geographical_area"), Some("5"));
    assert_eq!(value(&fields, "origins-1-exclusions-1-geographical_area"), Some("9"));

    assert!(ctl.remove_exclusion(&next, &origin, &only).is_none());
}

#[test]
fn test_exclusion_indices_renumber() {
    let mut ctl = controller();
    let state = ctl.init(page(json!([{"geographical_area": GROUP, "exclusions": [5, 6, 9]}])));
    let origin = first_id(&state);
    let middle = state.origins()[0].exclusions[1].id.clone();

    let state = ctl.remove_exclusion(&state, &origin, &middle).unwrap();
    let fields = serialize(&state);
    assert_eq!(value(&fields, "origins-0-exclusions-0-geographical_area"), Some("5"));
    assert_eq!(value(&fields, "origins-0-exclusions-1-geographical_area"), Some("9"));
    assert_eq!(value(&fields, "origins-0-exclusions-2-geographical_area"), None);
}

#[test]
fn test_operations_leave_previous_revision_untouched() {
    let mut ctl = controller();
    let state = ctl.init(page(json!([{"geographical_area": GROUP, "exclusions": [5]}])));
    let before = state.clone();
    let id = first_id(&state);

    let _ = ctl.set_origin_area(&state, &id, Some(AreaId(7)));
    let _ = ctl.add_origin(&state);
    let _ = ctl.remove_origin(&state, &id);
    assert_eq!(state, before);
}

#[test]
fn test_set_date_part() {
    let mut ctl = controller();
    let state = ctl.init(page(json!([])));
    let id = first_id(&state);

    let state = ctl
        .set_date(&state, &id, DateField::End, DatePart::Year, "2026")
        .unwrap();
    assert_eq!(state.origins()[0].end_date.year, "2026");
    assert_eq!(value(&serialize(&state), "origins-0-end_date_2"), Some("2026"));
    assert!(ctl
        .set_date(&state, &id, DateField::End, DatePart::Year, "2026")
        .is_none());
}

#[test]
fn test_removing_every_origin_leaves_a_placeholder_row() {
    let mut ctl = controller();
    let state = ctl.init(page(json!([])));
    let id = first_id(&state);
    let state = ctl.remove_origin(&state, &id).unwrap();

    assert!(state.is_empty());
    assert!(serialize(&state).is_empty());
    assert_eq!(view_model::row_keys(&state), vec![None]);
    let rows = view_model::build(&state);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].key, None);
    assert_eq!(rows[0].geographical_area.name, "origins-0-geographical_area");

    let (state, id) = ctl.ensure_origin(&state);
    assert_eq!(state.len(), 1);
    assert_eq!(first_id(&state), id);
    let (again, same) = ctl.ensure_origin(&state);
    assert_eq!(again, state);
    assert_eq!(same, id);
}

#[test]
fn test_view_model_errors_follow_positions() {
    let mut p = page(json!([
        {"pk": 1, "geographical_area": 7},
        {"pk": 2, "geographical_area": GROUP, "exclusions": [{"pk": 3, "geographical_area": ""}]},
    ]));
    p.errors = [
        ("origins-1-geographical_area", "Select a geographical area"),
        ("origins-1-exclusions-0-geographical_area", "Select an exclusion"),
        ("origins-1-end_date", "The end date must be the same as or after the start date"),
        ("origins-0-__all__", "Origin overlaps another origin"),
    ]
    .into_iter()
    .collect();
    let mut ctl = controller();
    let state = ctl.init(p);

    let rows = view_model::build(&state);
    assert_eq!(rows[0].error.as_deref(), Some("Origin overlaps another origin"));
    assert_eq!(rows[0].geographical_area.error, None);
    assert!(!rows[0].show_exclusions);
    assert_eq!(
        rows[1].geographical_area.error.as_deref(),
        Some("Select a geographical area")
    );
    assert!(rows[1].show_exclusions);
    assert_eq!(rows[1].exclusion_choices.len(), 3);
    assert_eq!(
        rows[1].exclusions[0].geographical_area.error.as_deref(),
        Some("Select an exclusion")
    );
    assert!(rows[1].end_date.has_error());
    assert!(!rows[1].start_date.has_error());

    let key = rows[1].key.clone();
    assert_eq!(view_model::row(&state, &key), Some(rows[1].clone()));
}

#[test]
fn test_init_drops_exclusions_of_non_group_origin() {
    let mut ctl = controller();
    let state = ctl.init(page(json!([
        {"pk": 1, "geographical_area": 7, "exclusions": [5]},
        {"pk": 2, "exclusions": [{"pk": 3, "geographical_area": 6}]},
    ])));

    assert!(state.origins()[0].exclusions.is_empty());
    assert!(state.origins()[1].exclusions.is_empty());
    let fields = serialize(&state);
    assert!(!names(&fields).iter().any(|n| n.contains("-exclusions-")));
}

#[test]
fn test_init_drops_non_member_exclusions() {
    let mut ctl = controller();
    let state = ctl.init(page(json!([
        {"pk": 1, "geographical_area": GROUP, "exclusions": [
            {"pk": 4, "geographical_area": 7},
            {"pk": 5, "geographical_area": 6},
        ]},
    ])));

    let exclusions = &state.origins()[0].exclusions;
    assert_eq!(exclusions.len(), 1);
    assert_eq!(exclusions[0].pk, Some(5));
    assert_eq!(exclusions[0].geographical_area, Some(AreaId(6)));
    let fields = serialize(&state);
    assert_eq!(value(&fields, "origins-0-exclusions-0-geographical_area"), Some("6"));
    assert_eq!(value(&fields, "origins-0-exclusions-1-geographical_area"), None);
}

#[test]
fn test_placeholder_row_edit_materialises_origin() {
    let mut ctl = controller();
    let state = ctl.init(page(json!([])));
    let state = ctl.remove_origin(&state, &first_id(&state)).unwrap();

    let state = ctl
        .apply_to_row(&state, &None, |c, s, id| c.set_origin_area(s, id, Some(AreaId(7))))
        .unwrap();
    assert_eq!(state.len(), 1);
    assert_eq!(state.origins()[0].geographical_area, Some(AreaId(7)));
    assert_eq!(value(&serialize(&state), "origins-0-geographical_area"), Some("7"));
}

#[test]
fn test_placeholder_row_no_op_edit_still_materialises_origin() {
    let mut ctl = controller();
    let state = ctl.init(page(json!([])));
    let state = ctl.remove_origin(&state, &first_id(&state)).unwrap();

    let state = ctl
        .apply_to_row(&state, &None, |c, s, id| c.add_exclusion(s, id))
        .unwrap();
    assert_eq!(state.len(), 1);
    assert_eq!(state.origins()[0].geographical_area, None);
    assert!(state.origins()[0].exclusions.is_empty());

    let key = Some(first_id(&state));
    assert!(ctl
        .apply_to_row(&state, &key, |c, s, id| c.add_exclusion(s, id))
        .is_none());
    assert!(ctl
        .apply_to_row(&state, &None, |c, s, id| c.add_exclusion(s, id))
        .is_none());
}
