//! The calculator view.
//!
//! A single GPUI entity owning the calculator state. Renders the display
//! (with an auxiliary line for the pending operation) above the keypad,
//! and feeds both button clicks and keystrokes into the state machine.

use crate::calculator::{
    CalculatorEvent, CalculatorState, copy_to_clipboard, format_display, render_value,
};
use crate::ui::keymap;
use crate::ui::keypad::{KEYPAD_LAYOUT, KeypadButton};
use crate::ui::theme::theme;
use gpui::{
    App, ClickEvent, Context, Div, ElementId, FocusHandle, Focusable, KeyDownEvent, SharedString,
    Stateful, Window, div, prelude::*,
};
use tracing::{debug, warn};

pub struct CalculatorView {
    state: CalculatorState,
    focus_handle: FocusHandle,
}

impl CalculatorView {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);

        Self {
            state: CalculatorState::new(),
            focus_handle,
        }
    }

    /// Feed one event into the state machine and repaint.
    fn dispatch(&mut self, event: CalculatorEvent, cx: &mut Context<Self>) {
        debug!(?event, "calculator event");
        self.state.apply(event);
        cx.notify();
    }

    fn handle_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let keystroke = &event.keystroke;

        // Ctrl+C copies the raw (ungrouped) display value.
        if keystroke.modifiers.control && keystroke.key == "c" {
            if let Err(error) = copy_to_clipboard(self.state.display()) {
                warn!(%error, "could not copy display value");
            }
            return;
        }

        if let Some(calc_event) = keymap::event_for_keystroke(keystroke) {
            cx.stop_propagation();
            self.dispatch(calc_event, cx);
        }
    }

    /// Render the display area: the pending operation line (left operand
    /// and operator symbol, when a binary operation is in progress) above
    /// the current operand.
    fn render_display(&self) -> Div {
        let t = theme();

        let pending_text = self
            .state
            .pending()
            .map(|(value, operation)| {
                format!(
                    "{} {}",
                    format_display(&render_value(value)),
                    operation.symbol()
                )
            })
            .unwrap_or_default();

        let pending_line = div()
            .w_full()
            .h_5()
            .text_sm()
            .text_color(t.pending_text_color)
            .text_right()
            .whitespace_nowrap()
            .overflow_hidden()
            .child(SharedString::from(pending_text));

        let display_line = div()
            .w_full()
            .text_3xl()
            .font_weight(gpui::FontWeight::SEMIBOLD)
            .text_color(t.display_text_color)
            .text_right()
            .whitespace_nowrap()
            .overflow_hidden()
            .text_ellipsis()
            .child(SharedString::from(format_display(self.state.display())));

        div()
            .w_full()
            .h(t.display_height)
            .flex()
            .flex_col()
            .justify_end()
            .gap_1()
            .child(pending_line)
            .child(display_line)
    }

    fn render_keypad(&self, cx: &mut Context<Self>) -> Div {
        let t = theme();

        let mut keypad = div().w_full().flex().flex_col().gap(t.keypad_gap);

        for (row_index, row) in KEYPAD_LAYOUT.iter().enumerate() {
            let mut row_element = div().w_full().flex().flex_row().gap(t.keypad_gap);

            for (col_index, button) in row.iter().enumerate() {
                let index = row_index * row.len() + col_index;
                row_element = row_element.child(self.render_key(button, index, cx));
            }

            keypad = keypad.child(row_element);
        }

        keypad
    }

    fn render_key(
        &self,
        button: &'static KeypadButton,
        index: usize,
        cx: &mut Context<Self>,
    ) -> Stateful<Div> {
        let t = theme();
        let event = button.event;

        div()
            .id(ElementId::NamedInteger("key".into(), index as u64))
            .flex_1()
            .h(t.button_height)
            .flex()
            .items_center()
            .justify_center()
            .bg(t.button_background(button.kind))
            .hover(|style| style.bg(t.button_hover(button.kind)))
            .rounded(t.button_border_radius)
            .cursor_pointer()
            .text_lg()
            .text_color(t.button_text(button.kind))
            .child(SharedString::from(button.label))
            .on_click(cx.listener(move |this, _: &ClickEvent, _window, cx| {
                this.dispatch(event, cx);
            }))
    }
}

impl Focusable for CalculatorView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for CalculatorView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let t = theme();

        div()
            .id("calculator")
            .key_context("Calculator")
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::handle_key_down))
            .size_full()
            .flex()
            .flex_col()
            .bg(t.window_background)
            .p(t.window_padding)
            .gap(t.keypad_gap)
            .child(self.render_display())
            .child(self.render_keypad(cx))
    }
}
