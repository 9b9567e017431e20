use crate::constants::{FLIPPED_CLASS, ROTATING_CLASS, TRANSFORM_PROPERTY};
use card_core::{CardRect, CardSurface, CardTransform};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing #{0}")]
    MissingElement(&'static str),
    #[error("#{0} is not an HTMLElement")]
    WrongElementType(&'static str),
}

#[inline]
pub fn window_document() -> Result<(web::Window, web::Document), DomError> {
    let window = web::window().ok_or(DomError::NoWindow)?;
    let document = window.document().ok_or(DomError::NoDocument)?;
    Ok((window, document))
}

pub fn html_element_by_id(
    document: &web::Document,
    id: &'static str,
) -> Result<web::HtmlElement, DomError> {
    document
        .get_element_by_id(id)
        .ok_or(DomError::MissingElement(id))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| DomError::WrongElementType(id))
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
pub fn add_listener<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// The card element as seen by the controller.
pub struct DomCard {
    element: web::HtmlElement,
}

impl DomCard {
    pub fn new(element: web::HtmlElement) -> Self {
        Self { element }
    }
}

impl CardSurface for DomCard {
    fn rect(&self) -> CardRect {
        let r = self.element.get_bounding_client_rect();
        CardRect::new(r.left(), r.top(), r.width(), r.height())
    }

    fn set_transform(&mut self, transform: &CardTransform) {
        _ = self
            .element
            .style()
            .set_property(TRANSFORM_PROPERTY, &transform.to_css());
    }

    fn set_flipped(&mut self, flipped: bool) {
        _ = self
            .element
            .class_list()
            .toggle_with_force(FLIPPED_CLASS, flipped);
    }

    fn set_rotating(&mut self, rotating: bool) {
        let cl = self.element.class_list();
        if rotating {
            _ = cl.add_1(ROTATING_CLASS);
        } else {
            _ = cl.remove_1(ROTATING_CLASS);
        }
    }
}
