// Recording fakes for the controller seams, shared by the host tests.
#![allow(dead_code)]

use card_core::{
    AnimationHandle, CardController, CardRect, CardSurface, CardTransform, FrameScheduler,
};

#[derive(Default)]
pub struct RecordingSurface {
    pub rect: CardRect,
    pub transforms: Vec<String>,
    pub flipped: bool,
    pub flip_writes: usize,
    pub rotating: bool,
}

impl CardSurface for RecordingSurface {
    fn rect(&self) -> CardRect {
        self.rect
    }

    fn set_transform(&mut self, transform: &CardTransform) {
        self.transforms.push(transform.to_css());
    }

    fn set_flipped(&mut self, flipped: bool) {
        self.flipped = flipped;
        self.flip_writes += 1;
    }

    fn set_rotating(&mut self, rotating: bool) {
        self.rotating = rotating;
    }
}

#[derive(Default)]
pub struct FakeScheduler {
    next_id: i32,
    pub requested: Vec<AnimationHandle>,
    pub cancelled: Vec<AnimationHandle>,
}

impl FrameScheduler for FakeScheduler {
    fn request_frame(&mut self) -> AnimationHandle {
        self.next_id += 1;
        let handle = AnimationHandle(self.next_id);
        self.requested.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: AnimationHandle) {
        self.cancelled.push(handle);
    }
}

pub type TestCard = CardController<RecordingSurface, FakeScheduler>;

/// 200x200 card centred on (100, 100).
pub fn card() -> TestCard {
    card_with_rect(CardRect::new(0.0, 0.0, 200.0, 200.0))
}

pub fn card_with_rect(rect: CardRect) -> TestCard {
    CardController::new(
        RecordingSurface {
            rect,
            ..Default::default()
        },
        FakeScheduler::default(),
    )
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
