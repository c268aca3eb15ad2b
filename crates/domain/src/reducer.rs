//! The request configuration reducer.
//!
//! `reduce` is a total, pure function from the previous snapshot and one
//! action to the next snapshot. Each arm updates the targeted fields; a
//! shared epilogue then refreshes tab visibility when the method or kind
//! moved and re-synchronizes Content-Type when the body or method moved.

use crate::action::{Action, PathParamValue};
use crate::body_transition::transition_body;
use crate::content_type::sync_content_type;
use crate::request::{KeyValueParameter, enforce_terminal_draft};
use crate::route::{
    Route, add_base_url, extract_param_names, has_valid_base_url, match_route, rehost,
    remove_base_url, resolve_path_params,
};
use crate::state::RequestConfiguration;
use crate::tabs::ResponseTab;

/// Applies one action to a snapshot, returning the next snapshot.
#[must_use]
pub fn reduce(state: &RequestConfiguration, action: Action) -> RequestConfiguration {
    let kind = action.kind();
    let mut next = state.clone();

    match action {
        Action::SetRoutes { routes } => {
            next.routes = routes;
            next = rematch(next);
        }
        Action::UpdatePath { path } => {
            next.path = path;
            next = rematch(next);
        }
        Action::UpdateMethod {
            method,
            request_kind,
        } => {
            next.method = method;
            next.request_kind = request_kind;
            next = rematch_keeping_rows(next);
        }
        Action::SelectRoute { route } => next = select_route(next, route),
        Action::SetPathParams { params } => next = set_path_params(next, params),
        Action::ReplacePathParamValues { values } => {
            let rows = replace_values(&next.path_params, &values);
            next = set_path_params(next, rows);
        }
        Action::ClearPathParams => {
            let rows = next
                .path_params
                .iter()
                .map(|row| KeyValueParameter {
                    value: String::new(),
                    enabled: false,
                    ..row.clone()
                })
                .collect();
            next = set_path_params(next, rows);
        }
        Action::SetQueryParams { params } => next.query_params = enforce_terminal_draft(params),
        Action::SetHeaders { headers } => next.request_headers = enforce_terminal_draft(headers),
        Action::SetBody { body } => next.body = body.normalized(),
        Action::ClearBody => next.body = next.body.cleared(),
        Action::SetBodyType {
            body_type,
            is_multipart,
        } => {
            let current = std::mem::take(&mut next.body);
            next.body = transition_body(current, body_type, is_multipart);
        }
        Action::SetWebsocketMessage { message } => next.websocket_message = message,
        Action::SetServiceBaseUrl { url } => next = set_service_base_url(next, url),
        Action::SetActiveRequestTab { tab } => {
            if next.visible_request_tabs.contains(&tab) {
                next.active_request_tab = tab;
            }
        }
        Action::SetActiveResponseTab { tab } => {
            if next.visible_response_tabs.contains(&tab) {
                next.active_response_tab = tab;
            }
        }
        Action::Unknown => {
            tracing::debug!("ignoring unknown action");
            return next;
        }
    }

    let method_changed = next.method != state.method;
    if method_changed || next.request_kind != state.request_kind {
        next = next.with_refreshed_tabs();
    }
    if method_changed || next.body != state.body {
        next = sync_content_type(next);
    }

    tracing::debug!(
        action = kind,
        path = %next.path,
        route = ?next.selected_route.as_ref().map(|route| route.path.as_str()),
        "applied action"
    );
    next
}

/// Re-runs the matcher and rebuilds path parameter rows from the result.
fn rematch(mut state: RequestConfiguration) -> RequestConfiguration {
    let (route, rows) = matched_route_and_rows(&state);
    state.selected_route = route;
    state.path_params = rows;
    state
}

/// Re-runs the matcher but keeps the current rows when the parameter
/// names did not change.
fn rematch_keeping_rows(mut state: RequestConfiguration) -> RequestConfiguration {
    let (route, rows) = matched_route_and_rows(&state);
    state.selected_route = route;
    if !same_keys(&state.path_params, &rows) {
        state.path_params = rows;
    }
    state
}

fn matched_route_and_rows(state: &RequestConfiguration) -> (Option<Route>, Vec<KeyValueParameter>) {
    let path = state.match_path();
    match match_route(&state.routes, &path, state.method, state.request_kind) {
        Some(found) => (Some(found.route.clone()), found.path_param_rows()),
        None => (
            None,
            extract_param_names(&path)
                .into_iter()
                .map(KeyValueParameter::path_param)
                .collect(),
        ),
    }
}

fn same_keys(left: &[KeyValueParameter], right: &[KeyValueParameter]) -> bool {
    left.len() == right.len() && left.iter().zip(right).all(|(l, r)| l.key == r.key)
}

fn with_base_url(state: &RequestConfiguration, path: &str) -> String {
    match &state.service_base_url {
        Some(base) => add_base_url(base, path, state.request_kind),
        None => path.to_string(),
    }
}

fn select_route(mut state: RequestConfiguration, route: Route) -> RequestConfiguration {
    let previous = state.selected_route.take();

    if !route.accepts_any_method() {
        state.method = route.input_method();
    }
    state.request_kind = route.request_kind;
    state.path = with_base_url(&state, &route.path);

    // The selection is whatever the matcher resolves the route's own path to.
    let (matched, rows) = matched_route_and_rows(&state);
    if matched.as_ref() != Some(&route) {
        tracing::debug!(
            route = %route.path,
            matched = ?matched.as_ref().map(|r| r.path.as_str()),
            "picked route is not the best match for its path"
        );
    }
    state.path_params = rows;
    state.selected_route = matched;

    if state.selected_route != previous && state.active_response_tab == ResponseTab::Debug {
        state.active_response_tab = ResponseTab::Body;
    }
    state
}

/// Rewrites the path from the given rows and reconciles the rows with the
/// route the new path resolves to.
///
/// While no route is selected and none matches afterwards, the supplied
/// rows are kept: they are the only record of values already written into
/// the path.
fn set_path_params(
    mut state: RequestConfiguration,
    rows: Vec<KeyValueParameter>,
) -> RequestConfiguration {
    let pattern = state
        .selected_route
        .as_ref()
        .map_or_else(|| state.match_path(), |route| route.path.clone());
    let resolved = resolve_path_params(&pattern, &rows);
    state.path = with_base_url(&state, &resolved);

    let previous = state.selected_route.take();
    let (route, matched_rows) = matched_route_and_rows(&state);

    state.path_params = match (&route, &previous) {
        (Some(_), Some(_)) if route == previous => reconcile_rows(&pattern, rows),
        (None, None) if extract_param_names(&pattern).is_empty() => rows,
        (None, None) => reconcile_rows(&pattern, rows),
        _ => matched_rows,
    };
    state.selected_route = route;
    state
}

/// Orders `rows` by the parameter names of `pattern`, filling gaps with
/// fresh rows and dropping rows for names the pattern lacks.
fn reconcile_rows(pattern: &str, mut rows: Vec<KeyValueParameter>) -> Vec<KeyValueParameter> {
    extract_param_names(pattern)
        .into_iter()
        .map(|name| {
            rows.iter()
                .position(|row| row.key == name)
                .map_or_else(|| KeyValueParameter::path_param(name), |index| rows.remove(index))
        })
        .collect()
}

fn replace_values(rows: &[KeyValueParameter], values: &[PathParamValue]) -> Vec<KeyValueParameter> {
    rows.iter()
        .map(|row| {
            values
                .iter()
                .find(|replacement| replacement.key == row.key)
                .map_or_else(
                    || row.clone(),
                    |replacement| KeyValueParameter {
                        value: replacement.value.clone(),
                        enabled: !replacement.value.is_empty(),
                        ..row.clone()
                    },
                )
        })
        .collect()
}

fn set_service_base_url(
    mut state: RequestConfiguration,
    url: Option<String>,
) -> RequestConfiguration {
    match url {
        Some(url) if !has_valid_base_url(&url) => {
            tracing::warn!(%url, "ignoring invalid service base URL");
            return state;
        }
        Some(url) => {
            state.path = rehost(&url, &state.path, state.request_kind);
            state.service_base_url = Some(url);
        }
        None => {
            if let Some(previous) = state.service_base_url.take() {
                state.path = remove_base_url(&previous, &state.path);
            }
        }
    }
    rematch(state)
}
