//! Custom widget components

mod header;
mod product_card;
mod product_details;
mod review_form;
mod review_list;

pub use header::MainHeader;
pub use product_card::ProductCardView;
pub use product_details::ProductDetailsList;
pub use review_form::ReviewFormView;
pub use review_list::ReviewList;
