use crate::constants::{
    FLIP_BUTTON_ID, RESET_BUTTON_ID, ROTATE_LEFT_BUTTON_ID, ROTATE_RIGHT_BUTTON_ID,
};
use crate::dom::{self, DomError};
use crate::frame::SharedCard;
use web_sys as web;

pub struct ControlButtons {
    pub flip: web::HtmlElement,
    pub reset: web::HtmlElement,
    pub rotate_left: web::HtmlElement,
    pub rotate_right: web::HtmlElement,
}

impl ControlButtons {
    pub fn lookup(document: &web::Document) -> Result<Self, DomError> {
        Ok(Self {
            flip: dom::html_element_by_id(document, FLIP_BUTTON_ID)?,
            reset: dom::html_element_by_id(document, RESET_BUTTON_ID)?,
            rotate_left: dom::html_element_by_id(document, ROTATE_LEFT_BUTTON_ID)?,
            rotate_right: dom::html_element_by_id(document, ROTATE_RIGHT_BUTTON_ID)?,
        })
    }
}

fn on_click(
    button: &web::HtmlElement,
    card: &SharedCard,
    mut action: impl FnMut(&SharedCard) + 'static,
) {
    let card = card.clone();
    dom::add_listener(button, "click", move |_ev: web::MouseEvent| action(&card));
}

pub fn wire_control_buttons(card: &SharedCard, buttons: &ControlButtons) {
    on_click(&buttons.flip, card, |card| {
        log::info!("flip button clicked");
        card.borrow_mut().flip();
    });
    on_click(&buttons.reset, card, |card| {
        log::info!("reset button clicked");
        card.borrow_mut().reset();
    });
    on_click(&buttons.rotate_left, card, |card| {
        log::info!("rotate left button clicked");
        card.borrow_mut().rotate_left();
    });
    on_click(&buttons.rotate_right, card, |card| {
        log::info!("rotate right button clicked");
        card.borrow_mut().rotate_right();
    });
}
