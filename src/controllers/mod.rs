pub(crate) mod chirp;
pub(crate) mod session;
pub(crate) mod user;
