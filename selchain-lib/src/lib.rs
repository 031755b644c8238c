//! Small building blocks: an order-checked CSS selector builder, positional
//! JSON helpers and a rectangle record.

pub mod json;
pub mod rectangle;
pub mod selector;
