//! Folio Vertical Layout
//!
//! Layout engine for a paginated document viewer in vertical mode: resolves
//! the 'auto' zoom policy for the current content and viewport, maps scroll
//! offsets to the focused page, walks rows for next/previous navigation, and
//! sizes the container elements so zoomed content never induces an
//! unnecessary scrollbar.
//!
//! Geometry lives in an externally owned [`folio_model::LayoutState`]; the
//! platform probe and the container collaborator are injected.
//!
//! # Example
//!
//! ```
//! use folio_layout::{FormFactor, ScrollEvent, VerticalLayout};
//! use folio_model::{LayoutState, Page, Row, ViewportDimensions};
//!
//! let page = |index, y0, height| Page {
//!     index,
//!     row_index: index,
//!     y0,
//!     height,
//!     actual_width: 612.0,
//!     total_actual_width: 620.0,
//!     actual_height: height,
//! };
//! let pages = vec![page(0, 0.0, 100.0), page(1, 100.0, 200.0)];
//! let rows = vec![Row::new(vec![0]), Row::new(vec![1])];
//! let mut state = LayoutState::new(pages, rows, ViewportDimensions::default())
//!     .expect("valid geometry");
//!
//! let layout = VerticalLayout::new(FormFactor::DESKTOP);
//! layout.handle_scroll(&mut state, &ScrollEvent { scroll_top: 150.0, scroll_left: 0.0 });
//! assert_eq!(state.current_page(), 2);
//! ```

mod base;
mod platform;
mod search;
mod sizing;
mod vertical;

// Re-export public API
pub use base::{BaseLayout, ResizeEvent, ScrollEvent, ZoomFit, ZoomPolicy};
pub use platform::{FormFactor, PlatformProbe};
pub use search::bisect_right_by;
pub use sizing::{update_layout, CssSize, LayoutContainer};
pub use vertical::VerticalLayout;
