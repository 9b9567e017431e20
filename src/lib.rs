#![cfg(target_arch = "wasm32")]
use card_core::CardController;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod events;
mod frame;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("card-web starting");

    // Missing elements leave the page inert rather than aborting the module.
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let (window, document) = dom::window_document()?;

    // Resolve every element up front so a missing control fails before any wiring.
    let card_el = dom::html_element_by_id(&document, constants::CARD_ID)?;
    let buttons = events::ControlButtons::lookup(&document)?;

    let tick: frame::TickSlot = Rc::new(RefCell::new(None));
    let scheduler = frame::RafScheduler::new(window, tick.clone());
    let card: frame::SharedCard = Rc::new(RefCell::new(CardController::new(
        dom::DomCard::new(card_el.clone()),
        scheduler,
    )));
    frame::install_tick(&card, &tick);

    events::wire_touch_handlers(&card, &card_el);
    events::wire_mouse_handlers(&card, &card_el);
    events::wire_control_buttons(&card, &buttons);

    log::info!(
        "card wired: #{} with {} controls",
        constants::CARD_ID,
        constants::CONTROL_BUTTON_IDS.len()
    );
    Ok(())
}
