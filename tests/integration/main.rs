//! Router-level integration tests.

mod admin_test;
mod auth_test;
mod helpers;
mod identity_test;
mod routes_test;
