// App layer: concrete catalog source plus the terminal front end.

pub mod catalog;
pub mod commands;
pub mod view;
