//! UI Components for the business card.

mod action_buttons;
mod call_modal;
mod chat_widget;
mod lazy_video;
mod services;
mod social_menu;

pub use action_buttons::ActionButtons;
pub use call_modal::CallModal;
pub use chat_widget::ChatWidget;
pub use lazy_video::LazyVideoPlayer;
pub use services::ServiceList;
pub use social_menu::SocialMenu;
