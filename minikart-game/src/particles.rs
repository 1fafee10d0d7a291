use glam::Vec3;

use crate::physics::{DriftState, SteerSide};
use crate::util::{Pcg32Rng, Rng};

#[derive(Copy, Clone, Debug)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    pub life: f32,
    pub size: f32,
}

impl Particle {
    // puffs render translucent and thin out as they die
    pub fn opacity(&self) -> f32 {
        self.life * 0.6
    }
}

pub struct SmokeParams {
    pub spawn_chance: f32,
    pub side_offset: f32,
    pub drop_offset: f32,
    pub back_offset: f32,
    pub lateral_jitter: f32,
    pub lift: f32,
    pub back_push: f32,
    pub min_size: f32,
    pub size_jitter: f32,
    pub fade: f32,
    pub gravity: f32,
    pub shrink: f32,
}

impl Default for SmokeParams {
    fn default() -> Self {
        Self {
            spawn_chance: 0.3,
            side_offset: 0.8,
            drop_offset: 0.3,
            back_offset: 1.5,
            lateral_jitter: 5.0,
            lift: 2.0,
            back_push: 3.0,
            min_size: 0.1,
            size_jitter: 0.1,
            fade: 2.0,
            gravity: 9.8,
            shrink: 0.98,
        }
    }
}

// Cosmetic smoke kicked up behind the inside rear wheel while drifting. The
// rng is injected so tests can pin the draws down.
pub struct DriftSmoke<R: Rng<f32> = Pcg32Rng> {
    params: SmokeParams,
    particles: Vec<Particle>,
    rng: R,
}

impl Default for DriftSmoke<Pcg32Rng> {
    fn default() -> Self {
        Self::with_rng(SmokeParams::default(), Pcg32Rng::default())
    }
}

impl<R: Rng<f32>> DriftSmoke<R> {
    pub fn with_rng(params: SmokeParams, rng: R) -> Self {
        Self {
            params,
            particles: Vec::new(),
            rng,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn update(&mut self, dt: f32, drift: DriftState, vehicle: Vec3, side: SteerSide) {
        if drift == DriftState::Drifting && self.rng.next() < self.params.spawn_chance {
            let puff = self.spawn_one(vehicle, side);
            self.particles.push(puff);
        }

        // a fresh puff starts aging on the tick that spawned it
        for particle in &mut self.particles {
            particle.life -= self.params.fade * dt;
            particle.position += particle.velocity * dt;
            particle.velocity.y -= self.params.gravity * dt;
            particle.size *= self.params.shrink;
        }
        self.particles.retain(|particle| particle.life > 0.0);
    }

    fn spawn_one(&mut self, vehicle: Vec3, side: SteerSide) -> Particle {
        let position = vehicle
            + Vec3::new(
                side.sign() * self.params.side_offset,
                -self.params.drop_offset,
                -self.params.back_offset,
            );
        let velocity = Vec3::new(
            (self.rng.next() - 0.5) * self.params.lateral_jitter,
            self.rng.next() * self.params.lift,
            -self.rng.next() * self.params.back_push,
        );
        Particle {
            position,
            velocity,
            life: 1.0,
            size: self.params.min_size + self.rng.next() * self.params.size_jitter,
        }
    }
}
