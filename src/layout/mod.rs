//! Layout module: Static regions recomputed on terminal resize.
//!
//! There is no layout tree; the dashboard has a fixed shape, so
//! [`DashboardLayout::compute`] returns every widget's bounds at once.

mod rect;
mod regions;

pub use rect::Rect;
pub use regions::DashboardLayout;
