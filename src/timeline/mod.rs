pub(crate) mod compose;
pub(crate) mod partition;
pub(crate) mod request;
