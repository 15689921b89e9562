use folio_model::LayoutState;

/// A CSS sizing value the container collaborator can apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CssSize {
    Auto,
    Px(f32),
}

/// The two elements the sizer drives: the pages wrapper and the outer
/// document element. Implemented by the embedding viewer over whatever its
/// DOM (or scene graph) looks like.
pub trait LayoutContainer {
    fn apply_wrapper_size(&mut self, width: CssSize, height: CssSize);

    /// Height the wrapper settled at after the last applied size. Called
    /// after the wrapper height is set to `Auto` so content determines it.
    fn wrapper_height(&self) -> f32;

    fn apply_doc_size(&mut self, width: CssSize, height: CssSize);
}

/// Size the wrapper and document elements for the current zoom and viewport.
///
/// The wrapper is never narrower than the viewport, and the document keeps
/// `auto` width while the zoomed content fits so no horizontal scrollbar
/// appears. Wrapper height goes through a measure pass: apply `auto`, then
/// read back what the content resolved to.
pub fn update_layout(state: &LayoutState, container: &mut dyn LayoutContainer) {
    let zoomed_width = (state.widest_page().total_actual_width * state.zoom()).floor();
    let client_width = state.viewport().client_width;
    let wrap_width = zoomed_width.max(client_width);

    container.apply_wrapper_size(CssSize::Px(wrap_width), CssSize::Auto);
    let wrap_height = container.wrapper_height();

    let doc_width =
        if zoomed_width <= client_width { CssSize::Auto } else { CssSize::Px(zoomed_width) };

    container.apply_doc_size(doc_width, CssSize::Px(wrap_height));
}
