pub(crate) mod contact;
pub(crate) mod education;
pub(crate) mod footer;
pub(crate) mod hero;
pub(crate) mod skills;
