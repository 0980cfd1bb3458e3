//! Browser-facing form page.
//!
//! Uses Askama templates for server-side rendering; the page itself runs the
//! submit workflow in the browser against `/api/submit`.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
