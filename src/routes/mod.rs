pub(crate) mod admin;
pub(crate) mod auth;
pub(crate) mod chirp;
pub(crate) mod router;
pub(crate) mod user;
pub(crate) mod webhook;
