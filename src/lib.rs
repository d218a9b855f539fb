// Module layout (Clean Architecture style)
// - bootstrap: configuration and startup
// - infrastructure: DB/crypto adapters
// - presentation: HTTP handlers, auth gateway and routing
// - application: ports, use cases and error types
// - domain: core models

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
