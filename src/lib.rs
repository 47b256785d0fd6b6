pub mod config;
pub mod logger;
pub mod converter;
pub mod validator;
pub mod post;
pub mod post_list;
pub mod front_matter;
pub mod text_utils;
pub mod util;
mod test_data;
