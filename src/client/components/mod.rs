pub mod auth;
pub mod feedback;
pub mod image_upload;
pub mod navbar;
pub mod page;
pub mod payment_form;
pub mod title;

pub use feedback::{ConfirmModal, EmptyState, ErrorBanner, LoadError, Loading, SuccessModal};
pub use image_upload::ImageUpload;
pub use navbar::Navbar;
pub use page::{Page, PageHeader};
pub use payment_form::{PaymentFormCard, TextField};
pub use title::ChuflayTitleButton;
