use folio_model::{LayoutState, ViewportDimensions};

/// Fit policies whose zoom values are computed by the shared base layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomFit {
    Width,
    Height,
}

/// Zoom policy selected by the embedding viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomPolicy {
    /// Best fit for the layout mode; see `VerticalLayout::zoom_auto_value`.
    Auto,
    FitWidth,
    FitHeight,
    /// An explicit zoom fraction, applied as given.
    Manual(f32),
}

/// Resize notification delivered by the external event adapter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeEvent {
    pub viewport: ViewportDimensions,
}

/// Scroll notification delivered by the external event adapter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEvent {
    pub scroll_top: f32,
    pub scroll_left: f32,
}

/// Bookkeeping shared by every layout mode.
///
/// Layout modes delegate to these methods explicitly before adding their own
/// behavior; the ordering matters because mode-specific refinement reads the
/// geometry this updates.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseLayout;

impl BaseLayout {
    /// Zoom fraction that fits the document to one viewport dimension.
    ///
    /// Fit-width is bounded by the widest page, fit-height by the tallest.
    pub fn zoom_value(&self, state: &LayoutState, fit: ZoomFit) -> f32 {
        match fit {
            ZoomFit::Width => {
                state.viewport().client_width / state.widest_page().total_actual_width
            }
            ZoomFit::Height => {
                state.viewport().client_height / state.tallest_page().actual_height
            }
        }
    }

    pub fn handle_resize(&self, state: &mut LayoutState, event: &ResizeEvent) {
        state.set_viewport(event.viewport);
    }

    pub fn handle_scroll(&self, state: &mut LayoutState, event: &ScrollEvent) {
        state.set_scroll_position(event.scroll_top, event.scroll_left);
    }
}
