//! Theme for the business card.

mod styles;

pub use styles::GLOBAL_STYLES;
