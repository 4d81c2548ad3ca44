mod article;
mod home;
mod not_found;

pub use article::*;
pub use home::*;
pub use not_found::*;
