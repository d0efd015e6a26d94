// RHTMX Tags - HTML tag helpers for server-rendered templates
// Form fields, links and assets rendered as Maud markup, repopulated from
// submitted values and marked on validation errors

pub mod attrs;
pub mod tag;

// Field handling
pub mod field;
pub mod select;
pub mod validation;

// Specialized helpers
pub mod assets;
pub mod form;
pub mod helpers;
pub mod plugin;

// Collaborators
pub mod context;
pub mod request_context;
pub mod routes;

pub mod config;
pub mod error;

// Re-export core types
pub use attrs::Attrs;
pub use tag::{escape, tag, Content};

pub use assets::AssetSource;
pub use helpers::TagHelpers;
pub use plugin::{register, Helper, HelperArgs, HelperHost};
pub use select::{options, OptGroup, OptionEntry, SelectOption};

pub use config::{TagsConfig, FIELD_WITH_ERROR};
pub use context::{
    CsrfTokens, HelperContext, ParamStore, RouteLookup, UrlResolver, UrlTarget, ValidationState,
};
pub use error::TagsError;
pub use request_context::{Context, Params, RequestContext};
pub use routes::{Route, RouteTable};

// Re-export Maud for templates
pub use maud::{html as maud, Markup, PreEscaped, Render};
pub use axum::http::Method;
