/// DOM contract shared with `index.html`.
pub const CANVAS_CONTAINER_ID: &str = "canvas-container";
pub const CONTROLS_PANEL_ID: &str = "controls";
pub const TOGGLE_BUTTON_ID: &str = "toggle-controls";

// Class on the panel that slides it in; its CSS transition lasts as long as
// the transition poll window.
pub const PANEL_VISIBLE_CLASS: &str = "visible";

// Fills the container; backing size is set from the container in device pixels
pub const CANVAS_STYLE: &str = "display:block;width:100%;height:100%";

