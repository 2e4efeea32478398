use std::collections::BTreeMap;

use log::{info, trace};
use rand::Rng;

use super::prelude::*;

/// Gameplay tuning for the target range.
#[derive(Debug, Clone, Copy)]
pub struct ShooterTuning {
    /// Field size in pixels.
    pub width: f32,
    pub height: f32,

    /// Collision radius of a standing target.
    pub target_radius: f32,

    /// Collision radius of a projectile.
    pub projectile_radius: f32,

    /// Vertical climb per frame, in pixels.
    pub projectile_speed: f32,

    /// Live targets at all times.
    pub target_count: usize,

    /// Targets spawn at least this far from every edge.
    pub spawn_inset: f32,
}

impl Default for ShooterTuning {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            target_radius: 30.0,
            projectile_radius: 8.0,
            projectile_speed: 20.0,
            target_count: 5,
            spawn_inset: 100.0,
        }
    }
}

pub struct Target {
    pub x: f32,
    pub y: f32,
}

pub struct Projectile {
    pub x: f32,
    pub y: f32,
}

pub type TargetID = ID<Target>;
pub type ProjectileID = ID<Projectile>;

/// Continuous-time engine: projectiles climb, targets stand, overlaps score.
pub struct ShooterGame {
    pub tuning: ShooterTuning,
    pub targets: BTreeMap<TargetID, Target>,
    pub projectiles: BTreeMap<ProjectileID, Projectile>,
    pub score: u32,

    target_ids: IDFactory<TargetID>,
    projectile_ids: IDFactory<ProjectileID>,
}

impl ShooterGame {
    pub fn new(tuning: ShooterTuning, rng: &mut impl Rng) -> Self {
        let mut game = Self {
            tuning,
            targets: BTreeMap::new(),
            projectiles: BTreeMap::new(),
            score: 0,
            target_ids: IDFactory::new(),
            projectile_ids: IDFactory::new(),
        };
        for _ in 0..tuning.target_count {
            game.spawn_target(rng);
        }
        game
    }

    pub fn bounds(&self) -> (f32, f32) {
        (self.tuning.width, self.tuning.height)
    }

    /// Register a shot fired from the aim point. No cooldown and no cap on
    /// simultaneous live projectiles.
    pub fn shoot(&mut self, x: f32, y: f32) {
        let id = self.projectile_ids.get_id();
        trace!("shooter: projectile {id:?} away from ({x:.0}, {y:.0})");
        self.projectiles.insert(id, Projectile { x, y });
    }

    /// One frame: advance projectiles, cull the escaped, resolve overlaps,
    /// refill the target line.
    pub fn tick(&mut self, rng: &mut impl Rng) {
        let speed = self.tuning.projectile_speed;
        for projectile in self.projectiles.values_mut() {
            projectile.y -= speed;
        }

        let radius = self.tuning.projectile_radius;
        self.projectiles.retain(|_, p| p.y + radius > 0.0);

        // Buffered removal: collect the hit pairs first, mutate after, so
        // the scan never removes from the maps it is walking.
        let reach = self.tuning.target_radius + self.tuning.projectile_radius;
        let mut hits: Vec<(ProjectileID, TargetID)> = Vec::new();
        let mut claimed: Vec<TargetID> = Vec::new();
        for (&pid, projectile) in &self.projectiles {
            for (&tid, target) in &self.targets {
                if claimed.contains(&tid) {
                    continue;
                }
                let dist = (projectile.x - target.x).hypot(projectile.y - target.y);
                if dist < reach {
                    hits.push((pid, tid));
                    claimed.push(tid);
                    // one kill per projectile per frame
                    break;
                }
            }
        }

        let downed = hits.len();
        for (pid, tid) in hits {
            self.projectiles.remove(&pid);
            self.targets.remove(&tid);
            self.score += 1;
        }
        if downed > 0 {
            info!("shooter: {downed} target(s) down, score {}", self.score);
        }
        // Respawn only after the removals so the live-target count holds at
        // the end of every frame.
        for _ in 0..downed {
            self.spawn_target(rng);
        }
    }

    fn spawn_target(&mut self, rng: &mut impl Rng) {
        let inset = self.tuning.spawn_inset;
        let x = rng.gen_range(inset..self.tuning.width - inset);
        let y = rng.gen_range(inset..self.tuning.height - inset);
        let id = self.target_ids.get_id();
        self.targets.insert(id, Target { x, y });
    }
}
