pub mod aoi_info;
pub mod layout;
pub mod login_form;
pub mod map_view;
pub mod modal;
pub mod register_form;
pub mod search_dialog;
pub mod sidebar;
pub mod status_box;
pub mod toast;
pub mod tutorial_overlay;
pub mod upload_dialog;
pub mod utc_clock;

pub use aoi_info::AoiInfo;
pub use layout::Header;
pub use login_form::LoginForm;
pub use map_view::MapView;
pub use modal::Modal;
pub use register_form::RegisterForm;
pub use search_dialog::SearchDialog;
pub use sidebar::Sidebar;
pub use status_box::StatusBox;
pub use toast::ToastContainer;
pub use tutorial_overlay::TutorialOverlay;
pub use upload_dialog::UploadDialog;
pub use utc_clock::UtcClock;
