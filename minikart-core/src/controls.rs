use serde::{Deserialize, Serialize};

// the named signals every input device gets reduced to before the simulation
// sees anything
#[derive(Copy, Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum ControlSignal {
    Forward,
    Backward,
    SteerLeft,
    SteerRight,
    Drift,
    Reset,
    UseItem,
}

// ControlEvent is what a device hands the sampler: a signal went down or up
#[derive(Copy, Clone, Serialize, Deserialize, Debug)]
pub struct ControlEvent {
    pub signal: ControlSignal,
    pub pressed: bool,
}

// one tick's worth of sampled signals; reset and use_item are edges that the
// sampler only raises for a single frame
#[derive(Copy, Clone, Default, Debug)]
pub struct ControlFrame {
    pub forward: bool,
    pub backward: bool,
    pub steer_left: bool,
    pub steer_right: bool,
    pub drift: bool,
    pub reset: bool,
    pub use_item: bool,
}
