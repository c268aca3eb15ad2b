//! End-to-end reducer scenarios.
//!
//! These drive `reduce` with sequences of actions the way an editor would
//! and check the cross-cutting invariants after every step.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use pretty_assertions::assert_eq;

use requestor_domain::content_type::current_content_type;
use requestor_domain::request::{DraftRow, enforce_terminal_draft};
use requestor_domain::{
    Action, BodyType, BodyVariant, FormDataParameter, HttpMethod, KeyValueParameter, PathParamValue,
    RequestConfiguration, RequestKind, RequestTab, Route, derive_content_type, extract_param_names,
    match_route, reduce, transition_body,
};

fn run(actions: Vec<Action>) -> RequestConfiguration {
    let mut state = RequestConfiguration::new();
    for action in actions {
        state = reduce(&state, action);
        assert_invariants(&state);
    }
    state
}

fn assert_invariants(state: &RequestConfiguration) {
    assert!(state.query_params.last().unwrap().is_draft());
    assert!(state.request_headers.last().unwrap().is_draft());
    if let BodyVariant::FormData { value, .. } = &state.body {
        assert!(value.last().unwrap().is_draft_row());
    }

    if let Some(route) = &state.selected_route {
        let path = state.match_path();
        let found = match_route(&state.routes, &path, state.method, state.request_kind)
            .expect("selected route must match");
        assert_eq!(found.route, route);
        let keys: Vec<_> = state.path_params.iter().map(|p| p.key.clone()).collect();
        assert_eq!(keys, extract_param_names(&route.path));
    }

    let content_type = current_content_type(&state.request_headers);
    if !state.method.can_have_body() {
        assert!(content_type.is_none());
        return;
    }
    let defers_to_transport = state.body.is_multipart()
        || matches!(state.body, BodyVariant::File { .. });
    if let (Some(header), false) = (content_type, defers_to_transport) {
        let expected = derive_content_type(&state.body);
        assert!(
            header.value.starts_with(expected),
            "Content-Type {:?} disagrees with body ({expected})",
            header.value
        );
    }
}

fn set_routes(routes: Vec<Route>) -> Action {
    Action::SetRoutes { routes }
}

fn update_path(path: &str) -> Action {
    Action::UpdatePath {
        path: path.to_string(),
    }
}

fn update_method(method: HttpMethod) -> Action {
    Action::UpdateMethod {
        method,
        request_kind: RequestKind::Http,
    }
}

#[test]
fn path_edit_selects_parameterized_route() {
    let state = run(vec![
        set_routes(vec![Route::new("GET", "/users/:id")]),
        update_path("/users/42"),
    ]);

    assert_eq!(state.selected_route.unwrap().path, "/users/:id");
    assert_eq!(state.path_params.len(), 1);
    assert_eq!(state.path_params[0].key, "id");
    assert_eq!(state.path_params[0].value, "42");
    assert!(state.path_params[0].enabled);
    assert_eq!(
        state.visible_request_tabs,
        vec![RequestTab::Params, RequestTab::Headers]
    );
}

#[test]
fn exact_route_beats_pattern_route() {
    let state = run(vec![
        set_routes(vec![
            Route::new("GET", "/users/:id"),
            Route::new("GET", "/users/me"),
        ]),
        update_path("/users/me"),
    ]);
    assert_eq!(state.selected_route.unwrap().path, "/users/me");
    assert!(state.path_params.is_empty());
}

#[test]
fn json_body_on_post_yields_single_content_type() {
    let state = run(vec![
        update_method(HttpMethod::Post),
        Action::SetBodyType {
            body_type: BodyType::Json,
            is_multipart: None,
        },
        Action::SetBody {
            body: BodyVariant::json(r#"{"a":1}"#),
        },
    ]);

    let content_types: Vec<_> = state
        .request_headers
        .iter()
        .filter(|h| h.key.eq_ignore_ascii_case("content-type"))
        .collect();
    assert_eq!(content_types.len(), 1);
    assert_eq!(content_types[0].value, "application/json");
}

#[test]
fn switching_to_get_drops_content_type() {
    let state = RequestConfiguration {
        method: HttpMethod::Post,
        body: BodyVariant::json(""),
        request_headers: enforce_terminal_draft(vec![KeyValueParameter::new(
            "Content-Type",
            "application/json",
        )]),
        ..RequestConfiguration::default()
    }
    .with_refreshed_tabs();

    let state = reduce(&state, update_method(HttpMethod::Get));
    assert!(current_content_type(&state.request_headers).is_none());
    assert_eq!(state.request_headers.len(), 1);
}

#[test]
fn body_type_round_trip_through_form_data() {
    let state = run(vec![
        update_method(HttpMethod::Post),
        Action::SetBody {
            body: BodyVariant::text("hello"),
        },
        Action::SetBodyType {
            body_type: BodyType::FormData,
            is_multipart: Some(false),
        },
    ]);
    assert_eq!(
        current_content_type(&state.request_headers).unwrap().value,
        "application/x-www-form-urlencoded"
    );

    let state = reduce(
        &state,
        Action::SetBody {
            body: BodyVariant::form_data(false, vec![FormDataParameter::text("name", "ada")]),
        },
    );
    let state = reduce(
        &state,
        Action::SetBodyType {
            body_type: BodyType::FormData,
            is_multipart: Some(true),
        },
    );
    assert!(current_content_type(&state.request_headers).is_none());

    let state = reduce(
        &state,
        Action::SetBodyType {
            body_type: BodyType::Text,
            is_multipart: None,
        },
    );
    assert_eq!(state.body, BodyVariant::text(""));
    assert_eq!(
        current_content_type(&state.request_headers).unwrap().value,
        "text/plain"
    );
}

#[test]
fn form_data_transition_clears_fields() {
    let body = BodyVariant::form_data(false, vec![FormDataParameter::text("a", "1")]);
    assert_eq!(
        transition_body(body, BodyType::Text, None),
        BodyVariant::text("")
    );
    assert_eq!(
        derive_content_type(&BodyVariant::form_data(true, Vec::new())),
        "multipart/form-data"
    );
}

#[test]
fn websocket_route_selection() {
    let route = Route::new("GET", "/ws/:room").with_kind(RequestKind::Websocket);
    let state = run(vec![
        set_routes(vec![route.clone(), Route::new("GET", "/ws/:room")]),
        Action::SelectRoute { route },
        Action::SetActiveRequestTab {
            tab: RequestTab::Messages,
        },
        Action::SetWebsocketMessage {
            message: "ping".to_string(),
        },
    ]);
    assert_eq!(state.request_kind, RequestKind::Websocket);
    assert_eq!(state.active_request_tab, RequestTab::Messages);
    assert_eq!(state.websocket_message, "ping");

    let state = reduce(&state, update_method(HttpMethod::Get));
    assert_eq!(state.request_kind, RequestKind::Http);
    assert_eq!(state.active_request_tab, RequestTab::Params);
    assert_eq!(state.selected_route.unwrap().request_kind, RequestKind::Http);
}

#[test]
fn unregistered_and_draft_routes_lose_to_registered() {
    let state = run(vec![
        set_routes(vec![
            Route::new("GET", "/things/:slug").as_draft(),
            Route::new("GET", "/things/special").unregistered(),
            Route::new("GET", "/things/:id"),
        ]),
        update_path("/things/special"),
    ]);
    assert_eq!(state.selected_route.unwrap().path, "/things/:id");
}

#[test]
fn path_parameter_editing_cycle() {
    let route = Route::new("GET", "/users/:id/comments/:commentId");
    let state = run(vec![
        set_routes(vec![route.clone()]),
        Action::SelectRoute { route },
        Action::ReplacePathParamValues {
            values: vec![
                requestor_domain::PathParamValue::new("id", "1"),
                requestor_domain::PathParamValue::new("commentId", "2"),
            ],
        },
    ]);
    assert_eq!(state.path, "/users/1/comments/2");

    let state = reduce(&state, Action::ClearPathParams);
    assert_eq!(state.path, "/users/:id/comments/:commentId");
    assert!(state.path_params.iter().all(|p| !p.enabled && p.value.is_empty()));
}

#[test]
fn any_method_route_survives_method_and_param_edits() {
    let route = Route::new("ALL", "/users/:id");
    let state = run(vec![
        set_routes(vec![route.clone()]),
        Action::SelectRoute {
            route: route.clone(),
        },
        update_method(HttpMethod::Post),
        Action::ReplacePathParamValues {
            values: vec![PathParamValue::new("id", "7")],
        },
        update_path("/users/9"),
    ]);

    assert_eq!(state.selected_route, Some(route));
    assert_eq!(state.method, HttpMethod::Post);
    assert_eq!(state.path, "/users/9");
    assert_eq!(state.path_params[0].value, "9");
}

#[test]
fn wildcard_route_matches_nested_paths() {
    let state = run(vec![
        set_routes(vec![Route::new("GET", "/static/*")]),
        update_path("/static/css/site.css"),
    ]);
    assert_eq!(
        state.selected_route.map(|route| route.path),
        Some("/static/*".to_string())
    );
    assert!(state.path_params.is_empty());
}

