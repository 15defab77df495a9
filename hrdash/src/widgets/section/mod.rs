mod event;
mod model;
pub(crate) mod view;

pub(crate) use event::SectionIntent;
pub(crate) use model::SectionViewModel;
