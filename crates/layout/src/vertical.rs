//! Vertical layout mode
//!
//! Pages are stacked top to bottom, possibly several per row in multi-column
//! documents. This module maps scroll offsets to the focused page, resolves
//! the "auto" zoom policy, and keeps the container elements sized to the
//! zoomed content.
//!
//! The focused page is the one at the top of the viewport (leftmost page of
//! its row when columns are present), where at least half of the page is
//! showing.

use std::ops::RangeInclusive;

use folio_model::LayoutState;
use tracing::{debug, trace};

use crate::base::{BaseLayout, ResizeEvent, ScrollEvent, ZoomFit, ZoomPolicy};
use crate::platform::PlatformProbe;
use crate::search::bisect_right_by;
use crate::sizing::{self, LayoutContainer};

/// The vertical layout mode.
///
/// Wraps [`BaseLayout`] by explicit delegation; base bookkeeping always runs
/// before the vertical-specific refinement so focus is never recomputed
/// against stale geometry.
#[derive(Debug, Clone)]
pub struct VerticalLayout<P: PlatformProbe> {
    base: BaseLayout,
    platform: P,
}

impl<P: PlatformProbe> VerticalLayout<P> {
    pub fn new(platform: P) -> Self {
        Self { base: BaseLayout, platform }
    }

    /// Numeric zoom fraction for the 'auto' policy in this layout mode.
    ///
    /// Landscape content is capped at 100% and must respect both viewport
    /// dimensions. Portrait content fits the width, capped at 100% except on
    /// mobile form factors where width-filling wins over the cap.
    pub fn zoom_auto_value(&self, state: &LayoutState) -> f32 {
        let fit_width = self.base.zoom_value(state, ZoomFit::Width);
        let fit_height = self.base.zoom_value(state, ZoomFit::Height);

        if state.widest_page().actual_width > state.tallest_page().actual_height {
            // landscape
            1.0_f32.min(fit_width).min(fit_height)
        } else if self.platform.is_mobile() {
            fit_width
        } else {
            // limit max zoom to 100% of the doc
            1.0_f32.min(fit_width)
        }
    }

    /// Zoom fraction for any policy; fit policies come from the base layout.
    pub fn resolve_zoom(&self, state: &LayoutState, policy: ZoomPolicy) -> f32 {
        match policy {
            ZoomPolicy::Auto => self.zoom_auto_value(state),
            ZoomPolicy::FitWidth => self.base.zoom_value(state, ZoomFit::Width),
            ZoomPolicy::FitHeight => self.base.zoom_value(state, ZoomFit::Height),
            ZoomPolicy::Manual(zoom) => zoom,
        }
    }

    /// 1-based number of the page currently focused at `scroll_top`.
    pub fn current_page(&self, state: &LayoutState) -> u32 {
        let pages = state.pages();

        let prev = bisect_right_by(pages, state.scroll_top(), |page| page.y0);
        if prev == 0 {
            // scrolled above the first page
            return 1;
        }

        // Probe half the previous page's height past the scroll offset: a
        // page is focused once at least half of it has scrolled into view.
        let offset = state.scroll_top() + pages[prev - 1].height / 2.0;
        let current_index = bisect_right_by(pages, offset, |page| page.y0) - 1;

        let row = state.row(pages[current_index].row_index);
        1 + row.first_page() as u32
    }

    /// Page number one row down, or the current page at the end of the
    /// document.
    pub fn next_page(&self, state: &LayoutState) -> u32 {
        let current = &state.pages()[(state.current_page() - 1) as usize];
        match state.rows().get(current.row_index + 1) {
            Some(next_row) => next_row.first_page() as u32 + 1,
            None => state.current_page(),
        }
    }

    /// Page number one row up, or the current page at the start of the
    /// document.
    pub fn previous_page(&self, state: &LayoutState) -> u32 {
        let current = &state.pages()[(state.current_page() - 1) as usize];
        match current.row_index.checked_sub(1) {
            Some(row_index) => state.row(row_index).first_page() as u32 + 1,
            None => state.current_page(),
        }
    }

    /// Rows intersecting the viewport at the current scroll position.
    pub fn visible_rows(&self, state: &LayoutState) -> RangeInclusive<usize> {
        let pages = state.pages();
        let top = state.scroll_top();
        let bottom = top + state.viewport().client_height;

        let first = bisect_right_by(pages, top, |page| page.y0).saturating_sub(1);
        let last = bisect_right_by(pages, bottom, |page| page.y0).saturating_sub(1);

        pages[first].row_index..=pages[last].row_index
    }

    /// Resize entry point: base bookkeeping, then focus recomputation.
    pub fn handle_resize(&self, state: &mut LayoutState, event: &ResizeEvent) {
        self.base.handle_resize(state, event);
        self.update_current_page(state);
        debug!(
            client_width = event.viewport.client_width,
            client_height = event.viewport.client_height,
            current_page = state.current_page(),
            "viewport resized"
        );
    }

    /// Scroll entry point: base bookkeeping, then focus recomputation.
    pub fn handle_scroll(&self, state: &mut LayoutState, event: &ScrollEvent) {
        self.base.handle_scroll(state, event);
        self.update_current_page(state);
        trace!(
            scroll_top = event.scroll_top,
            current_page = state.current_page(),
            "scroll position updated"
        );
    }

    /// Apply container sizing for the current zoom level.
    pub fn update_layout(&self, state: &LayoutState, container: &mut dyn LayoutContainer) {
        sizing::update_layout(state, container);
    }

    fn update_current_page(&self, state: &mut LayoutState) {
        let page = self.current_page(state);
        state.set_current_page(page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::FormFactor;
    use folio_model::{Page, Row, ViewportDimensions};

    fn page(index: usize, row_index: usize, y0: f32, height: f32, width: f32) -> Page {
        Page {
            index,
            row_index,
            y0,
            height,
            actual_width: width,
            total_actual_width: width + 8.0,
            actual_height: height,
        }
    }

    fn single_column(heights: &[f32]) -> LayoutState {
        let mut pages = Vec::new();
        let mut rows = Vec::new();
        let mut y0 = 0.0;
        for (index, &height) in heights.iter().enumerate() {
            pages.push(page(index, index, y0, height, 612.0));
            rows.push(Row::new(vec![index]));
            y0 += height;
        }
        LayoutState::new(pages, rows, ViewportDimensions::default()).expect("valid geometry")
    }

    fn two_column(row_heights: &[f32]) -> LayoutState {
        let mut pages = Vec::new();
        let mut rows = Vec::new();
        let mut y0 = 0.0;
        for (row_index, &height) in row_heights.iter().enumerate() {
            let left = row_index * 2;
            pages.push(page(left, row_index, y0, height, 400.0));
            pages.push(page(left + 1, row_index, y0, height, 400.0));
            rows.push(Row::new(vec![left, left + 1]));
            y0 += height;
        }
        LayoutState::new(pages, rows, ViewportDimensions::default()).expect("valid geometry")
    }

    fn desktop() -> VerticalLayout<FormFactor> {
        VerticalLayout::new(FormFactor::DESKTOP)
    }

    #[test]
    fn scrolled_above_the_first_page_focuses_page_one() {
        let mut state = single_column(&[100.0, 200.0, 150.0]);
        let layout = desktop();

        assert_eq!(layout.current_page(&state), 1);

        // first page starts below the document top
        let pages = vec![page(0, 0, 40.0, 100.0, 612.0)];
        state = LayoutState::new(pages, vec![Row::new(vec![0])], ViewportDimensions::default())
            .expect("valid geometry");
        state.set_scroll_top(20.0);
        assert_eq!(layout.current_page(&state), 1);
    }

    #[test]
    fn half_page_probe_focuses_the_second_page() {
        // heights [100, 200, 150]: scrollTop 150 sits inside page 2 (y0 100),
        // probe = 150 + 100/2 = 200 which is still within page 2's span
        let mut state = single_column(&[100.0, 200.0, 150.0]);
        state.set_scroll_top(150.0);

        assert_eq!(desktop().current_page(&state), 2);
    }

    #[test]
    fn offset_equal_to_a_page_top_counts_as_reached() {
        let mut state = single_column(&[100.0, 200.0, 150.0]);
        state.set_scroll_top(100.0);

        // bisect right: y0 == scrollTop sorts before the insertion point
        assert_eq!(desktop().current_page(&state), 2);
    }

    #[test]
    fn probe_uses_the_previous_page_height() {
        // Page 1 is short, page 2 tall. At scrollTop 90 the probe is
        // 90 + 100/2 = 140, inside page 2, so focus moves on even though
        // most of page 2 is still below the fold.
        let mut state = single_column(&[100.0, 1000.0, 100.0]);
        state.set_scroll_top(90.0);

        assert_eq!(desktop().current_page(&state), 2);
    }

    #[test]
    fn focus_resolves_to_the_leftmost_page_of_the_row() {
        let mut state = two_column(&[100.0, 100.0, 100.0]);
        state.set_scroll_top(120.0);

        // probe lands in row 1 (pages 2 and 3); the row's first page wins
        assert_eq!(desktop().current_page(&state), 3);
    }

    #[test]
    fn next_and_previous_walk_rows_and_clamp_at_the_ends() {
        let mut state = single_column(&[100.0, 200.0, 150.0]);
        let layout = desktop();

        assert_eq!(layout.previous_page(&state), 1);
        assert_eq!(layout.next_page(&state), 2);

        state.set_current_page(2);
        assert_eq!(layout.next_page(&state), 3);
        assert_eq!(layout.previous_page(&state), 1);

        state.set_current_page(3);
        assert_eq!(layout.next_page(&state), 3);
    }

    #[test]
    fn next_then_previous_returns_to_an_interior_row() {
        let mut state = single_column(&[100.0, 200.0, 150.0]);
        let layout = desktop();

        state.set_current_page(2);
        let next = layout.next_page(&state);
        state.set_current_page(next);
        let back = layout.previous_page(&state);
        assert_eq!(back, 2);
    }

    #[test]
    fn next_page_skips_to_the_following_rows_first_column() {
        let mut state = two_column(&[100.0, 100.0]);
        let layout = desktop();

        assert_eq!(layout.next_page(&state), 3);

        state.set_current_page(2);
        assert_eq!(layout.next_page(&state), 3);

        state.set_current_page(4);
        assert_eq!(layout.previous_page(&state), 1);
        assert_eq!(layout.next_page(&state), 4);
    }

    fn orientation_state(
        widest: (f32, f32),
        tallest: (f32, f32),
        viewport: ViewportDimensions,
    ) -> LayoutState {
        let (wide_w, wide_h) = widest;
        let (tall_w, tall_h) = tallest;
        let pages = vec![
            Page {
                index: 0,
                row_index: 0,
                y0: 0.0,
                height: wide_h,
                actual_width: wide_w,
                total_actual_width: wide_w,
                actual_height: wide_h,
            },
            Page {
                index: 1,
                row_index: 1,
                y0: wide_h,
                height: tall_h,
                actual_width: tall_w,
                total_actual_width: tall_w,
                actual_height: tall_h,
            },
        ];
        let rows = vec![Row::new(vec![0]), Row::new(vec![1])];
        LayoutState::new(pages, rows, viewport).expect("valid geometry")
    }

    #[test]
    fn landscape_auto_zoom_respects_both_fit_values_and_the_cap() {
        // widest page 1000x500, tallest 800x800; width > height = landscape
        let viewport = ViewportDimensions { client_width: 500.0, client_height: 600.0 };
        let state = orientation_state((1000.0, 500.0), (800.0, 800.0), viewport);

        // fitWidth = 0.5, fitHeight = 0.75
        assert_eq!(desktop().zoom_auto_value(&state), 0.5);

        // large viewport: both fits exceed 1, cap at 100%
        let roomy = ViewportDimensions { client_width: 4000.0, client_height: 4000.0 };
        let state = orientation_state((1000.0, 500.0), (800.0, 800.0), roomy);
        assert_eq!(desktop().zoom_auto_value(&state), 1.0);
    }

    #[test]
    fn portrait_auto_zoom_is_fit_width_capped_at_full_size_on_desktop() {
        // widest 600 wide, tallest 900 tall = portrait
        let viewport = ViewportDimensions { client_width: 300.0, client_height: 500.0 };
        let state = orientation_state((600.0, 700.0), (500.0, 900.0), viewport);
        assert_eq!(desktop().zoom_auto_value(&state), 0.5);

        let roomy = ViewportDimensions { client_width: 1200.0, client_height: 500.0 };
        let state = orientation_state((600.0, 700.0), (500.0, 900.0), roomy);
        assert_eq!(desktop().zoom_auto_value(&state), 1.0);
    }

    #[test]
    fn portrait_auto_zoom_fills_the_width_on_mobile() {
        let roomy = ViewportDimensions { client_width: 1200.0, client_height: 500.0 };
        let state = orientation_state((600.0, 700.0), (500.0, 900.0), roomy);

        let layout = VerticalLayout::new(FormFactor::MOBILE);
        assert_eq!(layout.zoom_auto_value(&state), 2.0);
    }

    #[test]
    fn resolve_zoom_dispatches_by_policy() {
        let viewport = ViewportDimensions { client_width: 300.0, client_height: 450.0 };
        let state = orientation_state((600.0, 700.0), (500.0, 900.0), viewport);
        let layout = desktop();

        assert_eq!(layout.resolve_zoom(&state, ZoomPolicy::FitWidth), 0.5);
        assert_eq!(layout.resolve_zoom(&state, ZoomPolicy::FitHeight), 0.5);
        assert_eq!(
            layout.resolve_zoom(&state, ZoomPolicy::Auto),
            layout.zoom_auto_value(&state)
        );
        assert_eq!(layout.resolve_zoom(&state, ZoomPolicy::Manual(1.5)), 1.5);
    }

    #[test]
    fn visible_rows_track_the_scroll_window() {
        let mut state = single_column(&[400.0, 400.0, 400.0, 400.0]);
        state.set_viewport(ViewportDimensions { client_width: 800.0, client_height: 500.0 });

        assert_eq!(desktop().visible_rows(&state), 0..=1);

        state.set_scroll_top(450.0);
        assert_eq!(desktop().visible_rows(&state), 1..=2);

        // viewport covering the whole document sees every row
        state.set_scroll_top(0.0);
        state.set_viewport(ViewportDimensions { client_width: 800.0, client_height: 2000.0 });
        assert_eq!(desktop().visible_rows(&state), 0..=3);
    }

    #[test]
    fn scroll_handler_updates_geometry_before_focus() {
        let mut state = single_column(&[100.0, 200.0, 150.0]);
        let layout = desktop();

        layout.handle_scroll(&mut state, &ScrollEvent { scroll_top: 150.0, scroll_left: 0.0 });

        assert_eq!(state.scroll_top(), 150.0);
        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn resize_handler_updates_viewport_then_recomputes_focus() {
        let mut state = single_column(&[100.0, 200.0, 150.0]);
        state.set_scroll_top(300.0);
        let layout = desktop();

        let viewport = ViewportDimensions { client_width: 640.0, client_height: 480.0 };
        layout.handle_resize(&mut state, &ResizeEvent { viewport });

        assert_eq!(state.viewport(), viewport);
        assert_eq!(state.current_page(), 3);
    }
}
