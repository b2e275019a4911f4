pub mod api_error;
pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod delayed_task;
pub mod export;
pub mod http_client;
pub mod icons;
pub mod list_utils;
pub mod modal_form;
pub mod modal_frame;
pub mod options;
pub mod screen_state;
pub mod toast;
