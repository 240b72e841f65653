mod studio;

pub use studio::{studio_root_handler, studio_tail_handler};
