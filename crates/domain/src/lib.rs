//! Requestor Domain - the request configuration state machine
//!
//! This crate holds the pure core of the Requestor API client: the editable
//! request model, the route matcher, the Content-Type synchronizer, the body
//! transition engine, the tab policy, and the reducer that ties them
//! together. Nothing here performs I/O.

pub mod action;
pub mod body_transition;
pub mod content_type;
pub mod error;
pub mod id;
pub mod outgoing;
pub mod persistence;
pub mod reducer;
pub mod request;
pub mod route;
pub mod settings;
pub mod state;
pub mod tabs;

pub use action::{Action, PathParamValue};
pub use body_transition::transition_body;
pub use content_type::{HeaderUpdate, apply_header_update, derive_content_type, plan_header_update};
pub use error::{DomainError, DomainResult};
pub use id::generate_id;
pub use outgoing::OutgoingRequest;
pub use persistence::SavedRequestConfiguration;
pub use reducer::reduce;
pub use request::{
    BodyType, BodyVariant, FileBlob, FormDataParameter, FormDataValue, HttpMethod,
    KeyValueParameter, MethodInput, RequestKind,
};
pub use route::{HandlerType, Route, RouteMatch, extract_param_names, match_route};
pub use settings::RequestorSettings;
pub use state::RequestConfiguration;
pub use tabs::{RequestTab, ResponseTab, visible_request_tabs, visible_response_tabs};
