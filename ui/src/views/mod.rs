mod home;
mod product;

pub use home::Home;
pub use product::{CatalogUnavailable, ProductNotFound, ProductPage, ProductView};
