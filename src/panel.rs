use crate::constants::{CONTROLS_PANEL_ID, PANEL_VISIBLE_CLASS};
use web_sys as web;

// The slide animation itself is CSS; these only flip the class.

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(CONTROLS_PANEL_ID) {
        _ = el.class_list().add_1(PANEL_VISIBLE_CLASS);
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(CONTROLS_PANEL_ID) {
        _ = el.class_list().remove_1(PANEL_VISIBLE_CLASS);
    }
}

#[inline]
pub fn is_visible(document: &web::Document) -> bool {
    document
        .get_element_by_id(CONTROLS_PANEL_ID)
        .map(|el| el.class_list().contains(PANEL_VISIBLE_CLASS))
        .unwrap_or(false)
}

/// Flip the panel and return whether it is now visible.
#[inline]
pub fn toggle(document: &web::Document) -> bool {
    if is_visible(document) {
        hide(document);
        false
    } else {
        show(document);
        true
    }
}
