pub(crate) mod navigation;
