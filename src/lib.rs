//! easy-edit - Elm-style inline edit fields
//!
//! A field shows its value as plain content until clicked, then swaps in an
//! input with save/cancel controls. State lives in [`EasyEditModel`], changes
//! go through [`update`](update::update), and [`view::render`] turns the model
//! into a DOM-like tree. [`EasyEdit`] bundles the three with host callbacks.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod field;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod props;
pub mod tracing;
pub mod update;
pub mod view;
pub mod widget;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EasyEditConfig;
pub use field::{FieldKind, FieldOption, FieldValue};
pub use messages::Msg;
pub use model::{EasyEditModel, ViewState};
pub use props::{Attributes, ButtonsPosition, EasyEditProps};
pub use view::{Element, Node};
pub use widget::EasyEdit;
