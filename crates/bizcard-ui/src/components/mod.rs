//! Reusable UI components for the card page

mod button;
mod live_region;
mod loading;
mod toast;

pub use button::*;
pub use live_region::*;
pub use loading::*;
pub use toast::*;
