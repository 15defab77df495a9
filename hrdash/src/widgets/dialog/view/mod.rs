pub(crate) mod modal;
