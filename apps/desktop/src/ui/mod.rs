mod main;
mod toolbar;

pub use main::main_view;
