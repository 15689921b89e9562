use serde::{Deserialize, Serialize};

/// A single measured page in the document.
///
/// Pages are immutable once measured for a layout pass; zoom, resize, and
/// reflow rebuild the whole page list rather than patching entries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// 0-based position in document order.
    pub index: usize,
    /// Which visual row this page belongs to.
    pub row_index: usize,
    /// Top offset of the page in document coordinates.
    pub y0: f32,
    /// Height of the page element.
    pub height: f32,
    /// Intrinsic content width.
    pub actual_width: f32,
    /// Content width including padding and border.
    pub total_actual_width: f32,
    /// Intrinsic content height.
    pub actual_height: f32,
}

/// An ordered group of page indices sharing a vertical position.
///
/// Single-column documents have one page per row; multi-column vertical
/// layouts put several pages side by side in the same row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pages: Vec<usize>,
}

impl Row {
    pub fn new(pages: Vec<usize>) -> Self {
        Self { pages }
    }

    /// Index of the leftmost page in this row.
    ///
    /// Rows inside a validated [`LayoutState`] are never empty.
    pub fn first_page(&self) -> usize {
        self.pages[0]
    }

    pub fn pages(&self) -> &[usize] {
        &self.pages
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportDimensions {
    pub client_width: f32,
    pub client_height: f32,
}

impl Default for ViewportDimensions {
    fn default() -> Self {
        Self { client_width: 1280.0, client_height: 800.0 }
    }
}

/// Current zoom as a fraction (1.0 = 100% of true document size).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomState {
    pub zoom: f32,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self { zoom: 1.0 }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("page list is empty")]
    NoPages,
    #[error("row list is empty")]
    NoRows,
    #[error("row {0} is empty")]
    EmptyRow(usize),
    #[error("page {position} carries index {found}")]
    IndexMismatch { position: usize, found: usize },
    #[error("page {index} is out of document order (y0 {y0} above previous {previous})")]
    UnorderedPages { index: usize, y0: f32, previous: f32 },
    #[error("row {row} is out of order (starts at y0 {y0} above previous row's {previous})")]
    UnorderedRows { row: usize, y0: f32, previous: f32 },
    #[error("row {row} references page {page} which does not exist")]
    BadRowReference { row: usize, page: usize },
    #[error("page {page} claims row {claimed} but is listed in row {listed}")]
    RowMismatch { page: usize, claimed: usize, listed: usize },
    #[error("page {page} is listed in more than one row")]
    DuplicatePage { page: usize },
    #[error("page {page} is not listed in any row")]
    OrphanPage { page: usize },
    #[error("page {page} has non-finite or negative geometry")]
    InvalidDimensions { page: usize },
}

/// Geometry snapshot of a laid-out document plus the viewer's scroll, zoom,
/// and focus bookkeeping.
///
/// Constructed by the layout controller on load or structural change; the
/// layout engine reads geometry and updates `current_page` and the scroll
/// and viewport fields through the mutators below. All invariants are
/// checked once at construction so the read paths stay panic-free.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutState {
    pages: Vec<Page>,
    rows: Vec<Row>,
    widest_page: usize,
    tallest_page: usize,
    scroll_top: f32,
    scroll_left: f32,
    viewport: ViewportDimensions,
    zoom_state: ZoomState,
    current_page: u32,
}

impl LayoutState {
    pub fn new(
        pages: Vec<Page>,
        rows: Vec<Row>,
        viewport: ViewportDimensions,
    ) -> Result<Self, GeometryError> {
        validate_geometry(&pages, &rows)?;

        let widest_page = index_of_max(&pages, |page| page.actual_width);
        let tallest_page = index_of_max(&pages, |page| page.actual_height);

        Ok(Self {
            pages,
            rows,
            widest_page,
            tallest_page,
            scroll_top: 0.0,
            scroll_left: 0.0,
            viewport,
            zoom_state: ZoomState::default(),
            current_page: 1,
        })
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> &Row {
        &self.rows[index]
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// The page with the greatest `actual_width`.
    pub fn widest_page(&self) -> &Page {
        &self.pages[self.widest_page]
    }

    /// The page with the greatest `actual_height`.
    pub fn tallest_page(&self) -> &Page {
        &self.pages[self.tallest_page]
    }

    pub fn scroll_top(&self) -> f32 {
        self.scroll_top
    }

    pub fn scroll_left(&self) -> f32 {
        self.scroll_left
    }

    pub fn viewport(&self) -> ViewportDimensions {
        self.viewport
    }

    pub fn zoom(&self) -> f32 {
        self.zoom_state.zoom
    }

    /// 1-based number of the currently focused page.
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn set_scroll_top(&mut self, scroll_top: f32) {
        self.scroll_top = scroll_top.max(0.0);
    }

    pub fn set_scroll_position(&mut self, scroll_top: f32, scroll_left: f32) {
        self.scroll_top = scroll_top.max(0.0);
        self.scroll_left = scroll_left.max(0.0);
    }

    pub fn set_viewport(&mut self, viewport: ViewportDimensions) {
        self.viewport = viewport;
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom_state.zoom = zoom;
    }

    pub fn set_current_page(&mut self, page: u32) {
        self.current_page = page.max(1).min(self.pages.len() as u32);
    }
}

fn validate_geometry(pages: &[Page], rows: &[Row]) -> Result<(), GeometryError> {
    if pages.is_empty() {
        return Err(GeometryError::NoPages);
    }
    if rows.is_empty() {
        return Err(GeometryError::NoRows);
    }

    let mut previous_y0 = f32::NEG_INFINITY;
    for (position, page) in pages.iter().enumerate() {
        if page.index != position {
            return Err(GeometryError::IndexMismatch { position, found: page.index });
        }

        let dimensions = [
            page.y0,
            page.height,
            page.actual_width,
            page.total_actual_width,
            page.actual_height,
        ];
        if dimensions.iter().any(|value| !value.is_finite() || *value < 0.0) {
            return Err(GeometryError::InvalidDimensions { page: position });
        }

        if page.y0 < previous_y0 {
            return Err(GeometryError::UnorderedPages {
                index: position,
                y0: page.y0,
                previous: previous_y0,
            });
        }
        previous_y0 = page.y0;
    }

    let mut listed_row = vec![None; pages.len()];
    let mut previous_row_y0 = f32::NEG_INFINITY;
    for (row_index, row) in rows.iter().enumerate() {
        if row.is_empty() {
            return Err(GeometryError::EmptyRow(row_index));
        }

        for &page in row.pages() {
            if page >= pages.len() {
                return Err(GeometryError::BadRowReference { row: row_index, page });
            }
            if pages[page].row_index != row_index {
                return Err(GeometryError::RowMismatch {
                    page,
                    claimed: pages[page].row_index,
                    listed: row_index,
                });
            }
            if listed_row[page].replace(row_index).is_some() {
                return Err(GeometryError::DuplicatePage { page });
            }
        }

        let row_y0 = pages[row.first_page()].y0;
        if row_y0 < previous_row_y0 {
            return Err(GeometryError::UnorderedRows {
                row: row_index,
                y0: row_y0,
                previous: previous_row_y0,
            });
        }
        previous_row_y0 = row_y0;
    }

    if let Some(page) = listed_row.iter().position(Option::is_none) {
        return Err(GeometryError::OrphanPage { page });
    }

    Ok(())
}

fn index_of_max(pages: &[Page], key: impl Fn(&Page) -> f32) -> usize {
    let mut best = 0;
    for (index, page) in pages.iter().enumerate() {
        if key(page) > key(&pages[best]) {
            best = index;
        }
    }
    best
}
