mod display_descriptor;
mod display_rewrite;
mod display_skip;
mod find_pom_files;
mod get_relative_path;
mod load_config;

pub use display_descriptor::display_descriptor;
pub use display_rewrite::display_rewrite;
pub use display_skip::display_skip;
pub use find_pom_files::find_pom_files;
pub use get_relative_path::get_relative_path;
pub use load_config::load_config;
