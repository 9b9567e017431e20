use crate::dom::DomCard;
use card_core::{AnimationHandle, CardController, FrameScheduler};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type WebCard = CardController<DomCard, RafScheduler>;
pub type SharedCard = Rc<RefCell<WebCard>>;

// Filled in by `install_tick` once the controller exists.
pub type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame`-backed scheduler for the inertia spin.
pub struct RafScheduler {
    window: web::Window,
    tick: TickSlot,
}

impl RafScheduler {
    pub fn new(window: web::Window, tick: TickSlot) -> Self {
        Self { window, tick }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> AnimationHandle {
        let id = match self.tick.borrow().as_ref() {
            Some(cb) => self
                .window
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .unwrap_or_else(|e| {
                    log::warn!("requestAnimationFrame failed: {:?}", e);
                    0
                }),
            None => {
                log::warn!("frame requested before tick was installed");
                0
            }
        };
        AnimationHandle(id)
    }

    fn cancel_frame(&mut self, handle: AnimationHandle) {
        _ = self.window.cancel_animation_frame(handle.0);
    }
}

/// Route animation frames into the controller. Timestamps come from the same
/// clock as the input handlers so inertia deltas line up with drag samples.
pub fn install_tick(card: &SharedCard, tick: &TickSlot) {
    let card = card.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        card.borrow_mut().on_animation_frame(instant::now());
    }) as Box<dyn FnMut()>));
}
