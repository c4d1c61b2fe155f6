//! Command-line interface for the `easy-edit` binary
//!
//! Supports:
//! - Rendering a field from a props file
//! - Replaying a scripted event sequence and reporting the callbacks fired

use std::fmt;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::commands::Cmd;
use crate::editable::TextEditMsg;
use crate::field::FieldValue;
use crate::keymap::{keystroke_from_dom, parse_key_string, KeymapError, Keymap};
use crate::messages::Msg;
use crate::model::ViewState;
use crate::props::EasyEditProps;
use crate::widget::EasyEdit;

/// Render and replay inline edit fields
#[derive(Parser, Debug)]
#[command(
    name = "easy-edit",
    version,
    about = "Render and replay inline edit fields"
)]
pub struct CliArgs {
    /// Keymap file merged over the default bindings
    #[arg(long, global = true, value_name = "FILE")]
    pub keymap: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Print the HTML for a field
    Render {
        /// Props file (YAML or JSON)
        #[arg(long, value_name = "FILE")]
        props: PathBuf,

        /// Render the edit view instead of the display view
        #[arg(long)]
        edit: bool,
    },
    /// Replay a scripted event sequence
    Replay {
        /// Props file (YAML or JSON)
        #[arg(long, value_name = "FILE")]
        props: PathBuf,

        /// Event script (YAML)
        #[arg(long, value_name = "FILE")]
        script: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

impl CliArgs {
    /// Console log level for the verbosity count
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

// ============================================================================
// Script schema
// ============================================================================

/// A scripted sequence of user events
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

impl Script {
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }
}

/// A DOM `keydown` described by key code and modifier flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DomKey {
    pub code: u32,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub meta: bool,
}

/// One user event
///
/// In YAML, events without data are bare strings (`- click`) and events
/// with data are single-key maps (`- change: "abc"`, `- key: ctrl+enter`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptEvent {
    Click,
    /// Replace the draft with a value
    Change(FieldValue),
    /// Insert text at the caret
    Type(String),
    /// Key press in keymap notation (`ctrl+enter`, `escape`)
    Key(String),
    /// Key press as a DOM key code
    DomKey(DomKey),
    Save,
    Cancel,
    Delete,
    HoverIn,
    HoverOut,
    Focus,
    Blur,
}

impl ScriptEvent {
    /// The message this event dispatches, if the key is recognised
    pub fn to_msg(&self) -> Result<Option<Msg>, KeymapError> {
        let msg = match self {
            ScriptEvent::Click => Msg::Click,
            ScriptEvent::Change(value) => Msg::Change(value.clone()),
            ScriptEvent::Type(text) => Msg::Edit(TextEditMsg::InsertText(text.clone())),
            ScriptEvent::Key(key) => Msg::KeyDown(parse_key_string(key)?),
            ScriptEvent::DomKey(k) => {
                match keystroke_from_dom(k.code, k.ctrl, k.shift, k.alt, k.meta) {
                    Some(keystroke) => Msg::KeyDown(keystroke),
                    None => return Ok(None),
                }
            }
            ScriptEvent::Save => Msg::Save,
            ScriptEvent::Cancel => Msg::Cancel,
            ScriptEvent::Delete => Msg::Delete,
            ScriptEvent::HoverIn => Msg::HoverIn,
            ScriptEvent::HoverOut => Msg::HoverOut,
            ScriptEvent::Focus => Msg::Focus,
            ScriptEvent::Blur => Msg::Blur,
        };
        Ok(Some(msg))
    }

    /// Short label used in reports
    pub fn label(&self) -> String {
        match self {
            ScriptEvent::Click => "click".to_string(),
            ScriptEvent::Change(value) => format!("change {:?}", value.as_text()),
            ScriptEvent::Type(text) => format!("type {:?}", text),
            ScriptEvent::Key(key) => format!("key {}", key),
            ScriptEvent::DomKey(k) => format!("dom_key {}", k.code),
            ScriptEvent::Save => "save".to_string(),
            ScriptEvent::Cancel => "cancel".to_string(),
            ScriptEvent::Delete => "delete".to_string(),
            ScriptEvent::HoverIn => "hover_in".to_string(),
            ScriptEvent::HoverOut => "hover_out".to_string(),
            ScriptEvent::Focus => "focus".to_string(),
            ScriptEvent::Blur => "blur".to_string(),
        }
    }
}

// ============================================================================
// Replay
// ============================================================================

/// A callback invocation observed during replay
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallbackRecord {
    pub callback: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<FieldValue>,
}

impl CallbackRecord {
    fn from_cmd(cmd: &Cmd) -> Option<Self> {
        let callback = cmd.callback_name()?;
        let value = match cmd {
            Cmd::Change(v) | Cmd::Save(v) | Cmd::Focus(v) | Cmd::Blur(v) => Some(v.clone()),
            _ => None,
        };
        Some(Self { callback, value })
    }
}

impl fmt::Display for CallbackRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(ref v) => write!(f, "{}({:?})", self.callback, v.as_text()),
            None => write!(f, "{}()", self.callback),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayStep {
    pub event: String,
    pub callbacks: Vec<CallbackRecord>,
    pub view: ViewState,
}

/// Outcome of replaying a script
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    pub steps: Vec<ReplayStep>,
    pub view: ViewState,
    pub value: FieldValue,
    pub html: String,
}

impl fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            write!(f, "{}", step.event)?;
            for cb in &step.callbacks {
                write!(f, " -> {}", cb)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "value: {:?}", self.value.as_text())?;
        write!(f, "{}", self.html)
    }
}

/// Run every event of `script` against a fresh widget
pub fn replay(
    props: EasyEditProps,
    keymap: Keymap,
    script: &Script,
) -> Result<ReplayReport, KeymapError> {
    let mut widget = EasyEdit::with_keymap(props, keymap);
    let mut steps = Vec::with_capacity(script.events.len());

    for event in &script.events {
        let callbacks = match event.to_msg()? {
            Some(msg) => widget
                .dispatch(msg)
                .map(|cmd| {
                    cmd.flatten()
                        .iter()
                        .filter_map(CallbackRecord::from_cmd)
                        .collect()
                })
                .unwrap_or_default(),
            None => {
                tracing::warn!("Ignoring unmapped event: {}", event.label());
                Vec::new()
            }
        };
        steps.push(ReplayStep {
            event: event.label(),
            callbacks,
            view: widget.model().view,
        });
    }

    Ok(ReplayReport {
        steps,
        view: widget.model().view,
        value: widget.value().clone(),
        html: widget.render().to_html(),
    })
}
