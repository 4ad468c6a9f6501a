pub mod app_shell;
pub mod login;
pub mod root;
pub mod sso;
mod template;

pub use template::HtmlTemplate;
