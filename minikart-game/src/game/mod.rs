pub mod demo;

use glam::Vec3;

use minikart_core::controls::ControlEvent;
use minikart_core::pose::Pose;
use minikart_core::GLOBAL_CONFIG;

use crate::camera::{CameraRig, CameraTarget, CameraTuning};
use crate::hud::HudState;
use crate::input::InputSampler;
use crate::particles::{DriftSmoke, Particle, SmokeParams};
use crate::physics::{Cruiser, DriftState, Kart, KinematicBody, SteerSide};
use crate::util::Pcg32Rng;

use self::demo::DemoScript;

enum Ride {
    Kart(Kart),
    Cruiser(Cruiser),
}

pub struct Game {
    sampler: InputSampler,
    ride: Ride,
    body: KinematicBody,
    smoke: DriftSmoke,
    camera: CameraRig,
    camera_target: CameraTarget,
    items_used: u32,
}

impl Game {
    pub fn new() -> Self {
        Self::with_scene(&GLOBAL_CONFIG.scene)
    }

    pub fn with_scene(scene: &str) -> Self {
        let ride = match scene {
            "track" => Ride::Kart(Kart::default()),
            "showroom" => Ride::Cruiser(Cruiser::default()),
            other => {
                log::warn!("unknown scene {:?}, falling back to the track", other);
                Ride::Kart(Kart::default())
            }
        };
        let (tuning, boot) = match ride {
            Ride::Kart(_) => (CameraTuning::chase(), Vec3::new(0.0, 8.0, -15.0)),
            Ride::Cruiser(_) => (CameraTuning::trailing(), Vec3::ZERO),
        };
        Self {
            sampler: InputSampler::default(),
            ride,
            body: KinematicBody::default(),
            // fixed seed keeps repeated demo runs identical puff for puff
            smoke: DriftSmoke::with_rng(
                SmokeParams::default(),
                Pcg32Rng::seeded(0x3A8F_52C1_9B44_E07D, 0xDA3E_39CB_94B9_5BDB),
            ),
            camera: CameraRig::new(tuning, boot),
            camera_target: CameraTarget {
                position: boot,
                look_at: Vec3::ZERO,
            },
            items_used: 0,
        }
    }

    pub fn apply(&mut self, event: ControlEvent) {
        self.sampler.apply(event);
    }

    /* Advances the whole session one tick: samples the controls, steps the
     * active ride and its body, then drags the cosmetics (smoke, camera)
     * behind the new pose */
    pub fn tick(&mut self, dt: f64) {
        let frame = self.sampler.sample();
        if frame.use_item {
            self.items_used += 1;
            log::debug!("item used ({} so far)", self.items_used);
        }

        let (drift, side) = match &mut self.ride {
            Ride::Kart(kart) => {
                kart.advance(dt, &frame, &mut self.body);
                let state = kart.state();
                (state.drift, state.steer_side)
            }
            Ride::Cruiser(cruiser) => {
                cruiser.advance(dt, &frame, &mut self.body);
                (DriftState::Idle, SteerSide::None)
            }
        };
        self.body.integrate(dt);

        let position = self.body.pose.position.as_vec3();
        let speed = self.speed() as f32;
        self.smoke.update(dt as f32, drift, position, side);
        self.camera_target = self.camera.update(position, speed);
    }

    fn speed(&self) -> f64 {
        match &self.ride {
            Ride::Kart(kart) => kart.state().speed(),
            Ride::Cruiser(_) => self.body.linear_velocity.length(),
        }
    }

    pub fn hud(&self) -> HudState {
        let (drifting, turbo_charge) = match &self.ride {
            Ride::Kart(kart) => {
                let state = kart.state();
                (state.drift == DriftState::Drifting, state.turbo_charge)
            }
            Ride::Cruiser(_) => (false, 0.0),
        };
        HudState {
            speed: self.speed(),
            drifting,
            turbo_charge,
            boost_ready: turbo_charge > GLOBAL_CONFIG.turbo_release_threshold,
            smoke: self.smoke.particles().len(),
            items_used: self.items_used,
        }
    }

    pub fn camera_target(&self) -> CameraTarget {
        self.camera_target
    }

    pub fn pose(&self) -> Pose {
        self.body.pose
    }

    // live puffs for whatever draws them; position, size and fade only
    pub fn smoke(&self) -> &[Particle] {
        self.smoke.particles()
    }

    // WARNING: this never sleeps between ticks; the whole script runs as one
    // burst of simulation time and the closing hud comes back
    pub fn run(&mut self, script: &DemoScript) -> HudState {
        let dt = GLOBAL_CONFIG.tick_ms as f64 / 1000.0;
        let total = script.duration() + 1.0;
        let events = script.events();
        let mut cursor = 0;
        let mut clock = 0.0;
        let mut next_report = 0.0;

        while clock < total {
            while cursor < events.len() && events[cursor].at <= clock {
                self.apply(events[cursor].event());
                cursor += 1;
            }
            self.tick(dt);
            clock += dt;

            if clock >= next_report {
                log::info!("t={:5.2}s {}", clock, self.hud());
                let position = self.pose().position;
                let target = self.camera_target();
                log::debug!(
                    "ride at ({:.1}, {:.1}, {:.1}), camera at ({:.1}, {:.1}, {:.1}) looking at ({:.1}, {:.1}, {:.1})",
                    position.x,
                    position.y,
                    position.z,
                    target.position.x,
                    target.position.y,
                    target.position.z,
                    target.look_at.x,
                    target.look_at.y,
                    target.look_at.z,
                );
                if let Some(puff) = self.smoke().first() {
                    log::debug!("lead puff at opacity {:.2}", puff.opacity());
                }
                next_report += 0.25;
            }
        }
        self.hud()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minikart_core::controls::ControlSignal;

    fn press(signal: ControlSignal) -> ControlEvent {
        ControlEvent {
            signal,
            pressed: true,
        }
    }

    fn release(signal: ControlSignal) -> ControlEvent {
        ControlEvent {
            signal,
            pressed: false,
        }
    }

    #[test]
    fn item_edges_count_once() {
        let mut game = Game::with_scene("track");

        game.apply(press(ControlSignal::UseItem));
        game.tick(0.05);
        game.tick(0.05);
        // auto-repeat of a held key is not a second use
        game.apply(press(ControlSignal::UseItem));
        game.tick(0.05);
        assert_eq!(game.hud().items_used, 1);

        game.apply(release(ControlSignal::UseItem));
        game.apply(press(ControlSignal::UseItem));
        game.tick(0.05);
        assert_eq!(game.hud().items_used, 2);
    }

    #[test]
    fn reset_comes_back_to_spawn() {
        let mut game = Game::with_scene("track");

        game.apply(press(ControlSignal::Forward));
        for _ in 0..10 {
            game.tick(0.05);
        }
        assert!(game.hud().speed > 1.0);

        game.apply(press(ControlSignal::Reset));
        game.tick(0.05);

        // the respawn lands this very tick; only the fall has started again
        assert_eq!(game.body.pose.position.x, 0.0);
        assert_eq!(game.body.pose.position.z, 0.0);
        assert!(game.body.pose.position.y > 1.8);
        assert!(game.body.pose.position.y <= GLOBAL_CONFIG.spawn_height);
        assert_eq!(game.hud().speed, 0.0);
        assert!(!game.hud().drifting);
    }

    #[test]
    fn builtin_script_runs_to_a_reset() {
        let mut game = Game::with_scene("track");
        let hud = game.run(&DemoScript::builtin());

        assert_eq!(hud.items_used, 1);
        assert_eq!(hud.smoke, 0);
        assert!(hud.speed < 0.001);
        assert!(!hud.drifting);
    }

    #[test]
    fn showroom_scene_drives_the_cruiser() {
        let mut game = Game::with_scene("showroom");

        game.apply(press(ControlSignal::Forward));
        game.tick(0.05);

        assert!((game.body.linear_velocity.z - -5.0).abs() < 1e-6);
        assert!(!game.hud().drifting);
        // the trailing camera stares straight at the car
        let gap = game.camera_target().look_at - game.body.pose.position.as_vec3();
        assert!(gap.length() < 1e-6);
    }
}
