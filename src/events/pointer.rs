use crate::dom;
use crate::frame::SharedCard;
use card_core::{InputSource, PointerSample};
use web_sys as web;

#[inline]
fn mouse_sample(ev: &web::MouseEvent) -> PointerSample {
    PointerSample::new(ev.client_x() as f64, ev.client_y() as f64, instant::now())
}

pub fn wire_mouse_handlers(card: &SharedCard, element: &web::HtmlElement) {
    wire_mousedown(card, element);
    wire_mousemove(card, element);
    wire_mouseup(card, element);
    wire_mouseleave(card, element);
    wire_contextmenu(element);
}

fn wire_mousedown(card: &SharedCard, element: &web::HtmlElement) {
    let card = card.clone();
    dom::add_listener(element, "mousedown", move |ev: web::MouseEvent| {
        card.borrow_mut().begin_gesture(InputSource::Mouse, mouse_sample(&ev));
        // no text selection while dragging
        ev.prevent_default();
    });
}

fn wire_mousemove(card: &SharedCard, element: &web::HtmlElement) {
    let card = card.clone();
    dom::add_listener(element, "mousemove", move |ev: web::MouseEvent| {
        card.borrow_mut().update_gesture(InputSource::Mouse, mouse_sample(&ev));
    });
}

fn wire_mouseup(card: &SharedCard, element: &web::HtmlElement) {
    let card = card.clone();
    dom::add_listener(element, "mouseup", move |ev: web::MouseEvent| {
        card.borrow_mut().end_gesture(mouse_sample(&ev));
    });
}

fn wire_mouseleave(card: &SharedCard, element: &web::HtmlElement) {
    let card = card.clone();
    dom::add_listener(element, "mouseleave", move |_ev: web::MouseEvent| {
        card.borrow_mut().pointer_leave(instant::now());
    });
}

fn wire_contextmenu(element: &web::HtmlElement) {
    dom::add_listener(element, "contextmenu", move |ev: web::Event| {
        ev.prevent_default();
    });
}
