use std::fmt;

// read-only snapshot of the sim for whatever surface draws the overlay
#[derive(Copy, Clone, Debug)]
pub struct HudState {
    pub speed: f64,
    pub drifting: bool,
    pub turbo_charge: f64,
    pub boost_ready: bool,
    pub smoke: usize,
    pub items_used: u32,
}

impl fmt::Display for HudState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "speed {:5.1} | drift {} | turbo {:.2}{} | smoke {:2} | items {}",
            self.speed,
            if self.drifting { "on " } else { "off" },
            self.turbo_charge,
            if self.boost_ready { " (ready)" } else { "" },
            self.smoke,
            self.items_used,
        )
    }
}
