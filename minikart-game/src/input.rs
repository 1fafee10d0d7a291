use minikart_core::controls::{ControlEvent, ControlFrame, ControlSignal};

// Collapses device events into per-tick frames. Held signals report their
// level every sample; reset and use-item latch on the press edge and clear
// once a sample consumes them.
#[derive(Default)]
pub struct InputSampler {
    forward: bool,
    backward: bool,
    steer_left: bool,
    steer_right: bool,
    drift: bool,
    reset_held: bool,
    reset_pending: bool,
    item_held: bool,
    item_pending: bool,
}

impl InputSampler {
    pub fn apply(&mut self, event: ControlEvent) {
        match event.signal {
            ControlSignal::Forward => self.forward = event.pressed,
            ControlSignal::Backward => self.backward = event.pressed,
            ControlSignal::SteerLeft => self.steer_left = event.pressed,
            ControlSignal::SteerRight => self.steer_right = event.pressed,
            ControlSignal::Drift => self.drift = event.pressed,
            ControlSignal::Reset => {
                if event.pressed && !self.reset_held {
                    self.reset_pending = true;
                }
                self.reset_held = event.pressed;
            }
            ControlSignal::UseItem => {
                if event.pressed && !self.item_held {
                    self.item_pending = true;
                }
                self.item_held = event.pressed;
            }
        }
    }

    pub fn sample(&mut self) -> ControlFrame {
        let frame = ControlFrame {
            forward: self.forward,
            backward: self.backward,
            steer_left: self.steer_left,
            steer_right: self.steer_right,
            drift: self.drift,
            reset: self.reset_pending,
            use_item: self.item_pending,
        };
        self.reset_pending = false;
        self.item_pending = false;
        frame
    }
}
