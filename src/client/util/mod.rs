pub mod cart;
pub mod format;
pub mod join;
pub mod load;
pub mod navigation;
pub mod payment_form;
