//! Widget host: a model plus the parent's callbacks
//!
//! `EasyEdit` is what an application embeds. Every event goes through
//! `dispatch`, which runs `update` and hands each resulting command to the
//! matching callback.

use crate::commands::Cmd;
use crate::editable::TextEditMsg;
use crate::field::FieldValue;
use crate::keymap::{keystroke_from_dom, Keymap, Keystroke};
use crate::messages::Msg;
use crate::model::EasyEditModel;
use crate::props::EasyEditProps;
use crate::update::update;
use crate::view::{render, Node};

type ValueCallback = Box<dyn FnMut(&FieldValue)>;
type EventCallback = Box<dyn FnMut()>;

#[derive(Default)]
struct Callbacks {
    on_change: Option<ValueCallback>,
    on_save: Option<ValueCallback>,
    on_cancel: Option<EventCallback>,
    on_delete: Option<EventCallback>,
    on_focus: Option<ValueCallback>,
    on_blur: Option<ValueCallback>,
    on_hover_in: Option<EventCallback>,
    on_hover_out: Option<EventCallback>,
}

/// An inline-editable field with host callbacks
pub struct EasyEdit {
    model: EasyEditModel,
    callbacks: Callbacks,
}

impl EasyEdit {
    pub fn new(props: EasyEditProps) -> Self {
        Self {
            model: EasyEditModel::new(props),
            callbacks: Callbacks::default(),
        }
    }

    pub fn with_keymap(props: EasyEditProps, keymap: Keymap) -> Self {
        Self {
            model: EasyEditModel::with_keymap(props, keymap),
            callbacks: Callbacks::default(),
        }
    }

    // ========================================================================
    // Callback registration
    // ========================================================================

    pub fn on_change(mut self, f: impl FnMut(&FieldValue) + 'static) -> Self {
        self.callbacks.on_change = Some(Box::new(f));
        self
    }

    pub fn on_save(mut self, f: impl FnMut(&FieldValue) + 'static) -> Self {
        self.callbacks.on_save = Some(Box::new(f));
        self
    }

    pub fn on_cancel(mut self, f: impl FnMut() + 'static) -> Self {
        self.callbacks.on_cancel = Some(Box::new(f));
        self
    }

    pub fn on_delete(mut self, f: impl FnMut() + 'static) -> Self {
        self.callbacks.on_delete = Some(Box::new(f));
        self
    }

    pub fn on_focus(mut self, f: impl FnMut(&FieldValue) + 'static) -> Self {
        self.callbacks.on_focus = Some(Box::new(f));
        self
    }

    pub fn on_blur(mut self, f: impl FnMut(&FieldValue) + 'static) -> Self {
        self.callbacks.on_blur = Some(Box::new(f));
        self
    }

    pub fn on_hover_in(mut self, f: impl FnMut() + 'static) -> Self {
        self.callbacks.on_hover_in = Some(Box::new(f));
        self
    }

    pub fn on_hover_out(mut self, f: impl FnMut() + 'static) -> Self {
        self.callbacks.on_hover_out = Some(Box::new(f));
        self
    }

    /// Predicate a draft must pass before it is committed
    pub fn on_validate(mut self, f: impl Fn(&FieldValue) -> bool + 'static) -> Self {
        self.model.set_validator(f);
        self
    }

    // ========================================================================
    // Events
    // ========================================================================

    /// Run a message through `update` and fire the callbacks it produces
    pub fn dispatch(&mut self, msg: Msg) -> Option<Cmd> {
        let cmd = update(&mut self.model, msg)?;
        for leaf in cmd.clone().flatten() {
            self.run(&leaf);
        }
        Some(cmd)
    }

    fn run(&mut self, cmd: &Cmd) {
        let cb = &mut self.callbacks;
        match cmd {
            Cmd::Change(v) => call_with(&mut cb.on_change, v),
            Cmd::Save(v) => call_with(&mut cb.on_save, v),
            Cmd::Focus(v) => call_with(&mut cb.on_focus, v),
            Cmd::Blur(v) => call_with(&mut cb.on_blur, v),
            Cmd::Cancel => call(&mut cb.on_cancel),
            Cmd::Delete => call(&mut cb.on_delete),
            Cmd::HoverIn => call(&mut cb.on_hover_in),
            Cmd::HoverOut => call(&mut cb.on_hover_out),
            Cmd::None | Cmd::Redraw | Cmd::Batch(_) => {}
        }
    }

    pub fn click(&mut self) -> Option<Cmd> {
        self.dispatch(Msg::Click)
    }

    pub fn change(&mut self, value: impl Into<FieldValue>) -> Option<Cmd> {
        self.dispatch(Msg::Change(value.into()))
    }

    /// Type text into the draft as if entered at the caret
    pub fn type_text(&mut self, text: &str) -> Option<Cmd> {
        self.dispatch(Msg::Edit(TextEditMsg::InsertText(text.to_string())))
    }

    pub fn key_down(&mut self, keystroke: Keystroke) -> Option<Cmd> {
        self.dispatch(Msg::KeyDown(keystroke))
    }

    /// Key press described the way a DOM `keydown` event does
    pub fn key_down_dom(
        &mut self,
        key_code: u32,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
    ) -> Option<Cmd> {
        let keystroke = keystroke_from_dom(key_code, ctrl, shift, alt, meta)?;
        self.key_down(keystroke)
    }

    pub fn save(&mut self) -> Option<Cmd> {
        self.dispatch(Msg::Save)
    }

    pub fn cancel(&mut self) -> Option<Cmd> {
        self.dispatch(Msg::Cancel)
    }

    pub fn delete(&mut self) -> Option<Cmd> {
        self.dispatch(Msg::Delete)
    }

    pub fn hover(&mut self, inside: bool) -> Option<Cmd> {
        self.dispatch(if inside { Msg::HoverIn } else { Msg::HoverOut })
    }

    pub fn focus(&mut self) -> Option<Cmd> {
        self.dispatch(Msg::Focus)
    }

    pub fn blur(&mut self) -> Option<Cmd> {
        self.dispatch(Msg::Blur)
    }

    pub fn set_props(&mut self, props: EasyEditProps) -> Option<Cmd> {
        self.dispatch(Msg::SetProps(Box::new(props)))
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn render(&self) -> Node {
        render(&self.model)
    }

    pub fn model(&self) -> &EasyEditModel {
        &self.model
    }

    pub fn props(&self) -> &EasyEditProps {
        &self.model.props
    }

    /// Last committed value
    pub fn value(&self) -> &FieldValue {
        &self.model.committed
    }

    pub fn draft(&self) -> FieldValue {
        self.model.draft_value()
    }

    pub fn is_editing(&self) -> bool {
        self.model.is_editing()
    }
}

fn call_with(cb: &mut Option<ValueCallback>, value: &FieldValue) {
    if let Some(f) = cb.as_mut() {
        f(value);
    }
}

fn call(cb: &mut Option<EventCallback>) {
    if let Some(f) = cb.as_mut() {
        f();
    }
}
