//! # Laserbox Web
//!
//! Serves box drawings over HTTP. `GET /svg/{width}/{height}/{depth}/{material}/{teeth}/{lid}`
//! returns the SVG layout; any other path returns the configured index page.

pub mod response;
pub mod route;
pub mod server;

pub use response::{Response, Status};
pub use route::{parse_flag, parse_route, Route, RouteError, USAGE};
pub use server::{respond, Server};
