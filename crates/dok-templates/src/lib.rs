//! Template selection for DOK-aligned assessment items and classroom
//! activities.
//!
//! Every DOK level owns exactly two item templates and two activity
//! templates. Templates are static data: a sequence of [`Piece`]s that is
//! rendered against the level's verb list and the caller's standard text.

#![deny(unsafe_code)]

pub mod activities;
pub mod generate;
pub mod items;
pub mod piece;

pub use activities::{ACTIVITY_TEMPLATES, ActivityTemplate, activities_for, activity_templates};
pub use generate::{generate_activities, generate_bundle, generate_items};
pub use items::{ITEM_TEMPLATES, ItemTemplate, item_templates, items_for};
pub use piece::Piece;
