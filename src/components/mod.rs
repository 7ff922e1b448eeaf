//! UI pieces mounted on the portfolio page.

pub mod page;
pub mod starfall;
