//! Measuring page elements for the tutorial highlight.

use drishti_core::tutorial::{ClientRect, HighlightTarget, RegionLocator};
use web_sys::Element;

/// Locates tutorial targets in the live document.
pub struct DomLocator;

impl RegionLocator for DomLocator {
    fn locate(&self, target: &HighlightTarget) -> Option<ClientRect> {
        let document = web_sys::window()?.document()?;
        let element = document.query_selector(target.selector).ok()??;
        let element: Element = if target.parent {
            element.parent_element()?
        } else {
            element
        };

        let rect = element.get_bounding_client_rect();
        Some(ClientRect {
            top: rect.top(),
            left: rect.left(),
            width: rect.width(),
            height: rect.height(),
        })
    }
}
