//! Leptos DragDrop Utilities
//!
//! Row reordering for Leptos lists using mouse events.
//! Uses movement threshold to distinguish click from drag.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// A row taking part in a drag: its visual index and its id
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowRef {
    pub index: usize,
    pub id: u32,
}

impl RowRef {
    pub fn new(index: usize, id: u32) -> Self {
        Self { index, id }
    }
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_read: ReadSignal<Option<RowRef>>,
    pub dragging_write: WriteSignal<Option<RowRef>>,
    pub drop_target_read: ReadSignal<Option<RowRef>>,
    pub drop_target_write: WriteSignal<Option<RowRef>>,
    /// Pending row (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<RowRef>>,
    pub pending_write: WriteSignal<Option<RowRef>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// Whether the pointer moved far enough from `start` to turn a press into a drag
pub fn exceeds_threshold(start: (i32, i32), now: (i32, i32)) -> bool {
    let dx = (now.0 - start.0).abs();
    let dy = (now.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

/// Resolve a finished gesture into a `(source, target)` pair.
///
/// Returns `None` for plain clicks and for drops back onto the source row.
pub fn resolve_drop(dragging: Option<RowRef>, target: Option<RowRef>) -> Option<(RowRef, RowRef)> {
    match (dragging, target) {
        (Some(source), Some(target)) if source.index != target.index => Some((source, target)),
        _ => None,
    }
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<RowRef>);
    let (drop_target_read, drop_target_write) = signal(None::<RowRef>);
    let (pending_read, pending_write) = signal(None::<RowRef>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
}

/// Create mousedown handler for draggable rows
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, row: RowRef) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Checkbox and buttons keep their click behaviour
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            dnd.pending_write.set(Some(row));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Bind document mousemove - starts drag once the pointer moved enough
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_read.get_untracked();

        if pending.is_some() && dnd.dragging_read.get_untracked().is_none() {
            let start = (dnd.start_x_read.get_untracked(), dnd.start_y_read.get_untracked());
            if exceeds_threshold(start, (ev.client_x(), ev.client_y())) {
                log::debug!("[DND] drag started: {:?}", pending);
                dnd.dragging_write.set(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for rows (become drop target)
pub fn make_on_row_mouseenter(dnd: DndSignals, row: RowRef) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if let Some(dragging) = dnd.dragging_read.get_untracked() {
            // Don't allow dropping on self
            if dragging.index != row.index {
                dnd.drop_target_write.set(Some(row));
            }
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection
///
/// `on_drop` receives `(source, target)` only for real drags that ended over
/// another row.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(RowRef, RowRef) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();

        end_drag(&dnd);

        if let Some((source, target)) = resolve_drop(dragging, drop_target) {
            log::debug!("[DND] drop: {:?} -> {:?}", source, target);
            on_drop(source, target);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}
