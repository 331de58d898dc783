use crate::constants::TOGGLE_BUTTON_ID;
use crate::dom::{self, Container, DomControls};
use crate::frame::{RafScheduler, SharedContext};
use crate::panel;
use instant::Instant;
use viewport_core::{
    click_canvas, format_value_display, hides_panel_on_canvas_click, parse_control_value,
    toggle_panel,
};
use web_sys as web;

pub fn wire_window_resize(ctx: SharedContext, container: Container) {
    let Some(window) = web::window() else {
        return;
    };
    dom::add_listener(&window, "resize", move |_| {
        ctx.borrow_mut()
            .on_window_resize(&container, dom::window_width());
    });
}

pub fn wire_panel_toggle(document: &web::Document, ctx: SharedContext, container: Container) {
    let doc = document.clone();
    dom::add_click_listener(document, TOGGLE_BUTTON_ID, move || {
        let visible = panel::toggle(&doc);
        toggle_panel(
            &ctx,
            &RafScheduler,
            container.clone(),
            visible,
            dom::window_width(),
            Instant::now(),
        );
    });
}

/// Narrow layouts: clicking the scene dismisses the panel. The class goes
/// first so the immediate re-sample already sees the slide start.
pub fn wire_canvas_click(document: &web::Document, ctx: SharedContext, container: Container) {
    let doc = document.clone();
    let target = container.0.clone();
    dom::add_listener(&target, "click", move |_| {
        let window_width = dom::window_width();
        let dismisses = {
            let c = ctx.borrow();
            c.panel_visible() && hides_panel_on_canvas_click(window_width, c.config())
        };
        if !dismisses {
            return;
        }
        panel::hide(&doc);
        click_canvas(
            &ctx,
            &RafScheduler,
            container.clone(),
            window_width,
            Instant::now(),
        );
    });
}

fn set_value_display(document: &web::Document, display_id: &str, raw: &str) {
    let Some(value) = parse_control_value(raw) else {
        return;
    };
    if let Some(label) = document.get_element_by_id(display_id) {
        label.set_text_content(Some(&format_value_display(value)));
    }
}

/// Mirror each input's value into its `<key>Value` label, now and on input.
pub fn wire_value_displays(document: &web::Document, controls: &DomControls) {
    for id in viewport_core::ControlId::ALL {
        let Some(input) = controls.input(id) else {
            continue;
        };
        let display_id = id.value_display_id();
        set_value_display(document, &display_id, &input.value());

        let doc = document.clone();
        let source = input.clone();
        dom::add_listener(input, "input", move |_| {
            set_value_display(&doc, &display_id, &source.value());
        });
    }
}
