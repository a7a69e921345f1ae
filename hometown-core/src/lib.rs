pub mod catalog;
pub mod config;
pub mod content;
pub mod dropdown;
pub mod error;
pub mod navbar;
pub mod sitemap;

pub use catalog::{Breadcrumb, Catalog, Menu, MenuId, MenuItem, SubMenuItem};
pub use config::StorefrontConfig;
pub use dropdown::{ClickTarget, DropdownState};
pub use error::StorefrontError;
pub use navbar::Navbar;

pub fn banner() -> &'static str {
    r#"
  ██╗  ██╗ ██████╗ ███╗   ███╗███████╗████████╗ ██████╗ ██╗    ██╗███╗   ██╗
  ██║  ██║██╔═══██╗████╗ ████║██╔════╝╚══██╔══╝██╔═══██╗██║    ██║████╗  ██║
  ███████║██║   ██║██╔████╔██║█████╗     ██║   ██║   ██║██║ █╗ ██║██╔██╗ ██║
  ██╔══██║██║   ██║██║╚██╔╝██║██╔══╝     ██║   ██║   ██║██║███╗██║██║╚██╗██║
  ██║  ██║╚██████╔╝██║ ╚═╝ ██║███████╗   ██║   ╚██████╔╝╚███╔███╔╝██║ ╚████║
  ╚═╝  ╚═╝ ╚═════╝ ╚═╝     ╚═╝╚══════╝   ╚═╝    ╚═════╝  ╚══╝╚══╝ ╚═╝  ╚═══╝

              Furniture & home décor, one menu at a time
"#
}
