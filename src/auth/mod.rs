pub(crate) mod header;
pub(crate) mod jwt;
pub(crate) mod middleware;
pub(crate) mod password;
