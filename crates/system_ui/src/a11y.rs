//! Internal DOM focus helpers for calendar grids.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// Focuses cell `index` of the calendar rooted at `root_id` and reports whether a focusable cell
/// was found.
#[cfg(target_arch = "wasm32")]
pub(crate) fn focus_calendar_cell(root_id: &str, index: usize) -> bool {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return false;
    };
    let Some(root) = document.get_element_by_id(root_id) else {
        return false;
    };
    let Ok(Some(cell)) = root.query_selector(&format!(r#"[data-calendar-cell="{index}"]"#)) else {
        return false;
    };
    let Ok(cell) = cell.dyn_into::<web_sys::HtmlElement>() else {
        return false;
    };
    let _ = cell.focus();
    true
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn focus_calendar_cell(root_id: &str, index: usize) -> bool {
    let _ = (root_id, index);
    false
}
