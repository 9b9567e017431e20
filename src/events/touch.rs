use crate::dom;
use crate::frame::SharedCard;
use card_core::{InputSource, PointerSample};
use web_sys as web;

#[inline]
fn first_touch_sample(list: &web::TouchList) -> Option<PointerSample> {
    list.get(0).map(|t| {
        PointerSample::new(t.client_x() as f64, t.client_y() as f64, instant::now())
    })
}

pub fn wire_touch_handlers(card: &SharedCard, element: &web::HtmlElement) {
    wire_touchstart(card, element);
    wire_touchmove(card, element);
    wire_touchend(card, element);
    wire_touchcancel(card, element);
}

fn wire_touchstart(card: &SharedCard, element: &web::HtmlElement) {
    let card = card.clone();
    dom::add_listener(element, "touchstart", move |ev: web::TouchEvent| {
        if let Some(sample) = first_touch_sample(&ev.touches()) {
            card.borrow_mut().begin_gesture(InputSource::Touch, sample);
        }
    });
}

fn wire_touchmove(card: &SharedCard, element: &web::HtmlElement) {
    let card = card.clone();
    dom::add_listener(element, "touchmove", move |ev: web::TouchEvent| {
        // keep the page from scrolling under the finger
        ev.prevent_default();
        if let Some(sample) = first_touch_sample(&ev.touches()) {
            card.borrow_mut().update_gesture(InputSource::Touch, sample);
        }
    });
}

fn wire_touchend(card: &SharedCard, element: &web::HtmlElement) {
    let card = card.clone();
    dom::add_listener(element, "touchend", move |ev: web::TouchEvent| {
        // suppresses the compatibility mousedown/mouseup that would flip again
        ev.prevent_default();
        if let Some(sample) = first_touch_sample(&ev.changed_touches()) {
            card.borrow_mut().end_gesture(sample);
        }
    });
}

fn wire_touchcancel(card: &SharedCard, element: &web::HtmlElement) {
    let card = card.clone();
    dom::add_listener(element, "touchcancel", move |_ev: web::TouchEvent| {
        card.borrow_mut().cancel_gesture(instant::now());
    });
}
