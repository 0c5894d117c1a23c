pub mod admin;
pub mod contact;
pub mod redirect;
pub mod shorten;

pub use admin::{AdminService, AppStartTime};
pub use contact::post_contact;
pub use redirect::{RedirectService, redirect_routes};
pub use shorten::{post_inspect, post_shorten};
