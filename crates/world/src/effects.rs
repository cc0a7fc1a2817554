//! Presentation of death-chest notifications.
//!
//! Effects are cosmetic only: nothing here feeds back into chest state.

use deathchest_core::BlockPos;
use serde::{Deserialize, Serialize};

use crate::events::ChestNotification;
use crate::world::WorldAccess;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Particle {
    Flame,
    EndRod,
    Smoke,
    Portal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sound {
    EnchantmentTableUse,
    ChestOpen,
    ChestClose,
    PlayerLevelUp,
    EndermanTeleport,
}

/// A particle burst around a block centre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleEffect {
    pub particle: Particle,
    pub count: u32,
    /// Random offset applied on each axis, in blocks.
    pub spread: f32,
    pub speed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoundEffect {
    pub sound: Sound,
    pub volume: f32,
    pub pitch: f32,
}

/// Everything played for one notification.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EffectPlan {
    pub particles: Vec<ParticleEffect>,
    pub sounds: Vec<SoundEffect>,
}

const fn particles(particle: Particle, count: u32, spread: f32, speed: f32) -> ParticleEffect {
    ParticleEffect {
        particle,
        count,
        spread,
        speed,
    }
}

const fn sound(sound: Sound, volume: f32, pitch: f32) -> SoundEffect {
    SoundEffect {
        sound,
        volume,
        pitch,
    }
}

/// Effect plan for `notification` and the block it plays at.
///
/// Failed placements have no chest to decorate and yield `None`.
pub fn plan_for(notification: &ChestNotification) -> Option<(BlockPos, EffectPlan)> {
    match notification {
        ChestNotification::ContainerCreated { position, .. } => Some((
            *position,
            EffectPlan {
                particles: vec![particles(Particle::Flame, 50, 0.5, 0.1)],
                sounds: vec![
                    sound(Sound::EnchantmentTableUse, 1.0, 1.0),
                    sound(Sound::ChestClose, 1.0, 0.5),
                ],
            },
        )),
        ChestNotification::ContainerDiscovered { position } => Some((
            *position,
            EffectPlan {
                particles: vec![particles(Particle::EndRod, 20, 0.2, 0.05)],
                sounds: vec![
                    sound(Sound::ChestOpen, 1.0, 1.0),
                    sound(Sound::PlayerLevelUp, 0.5, 1.0),
                ],
            },
        )),
        ChestNotification::ContainerReclaimed { position } => Some((
            *position,
            EffectPlan {
                particles: vec![
                    particles(Particle::Smoke, 30, 0.2, 0.05),
                    particles(Particle::Portal, 20, 0.2, 0.5),
                ],
                sounds: vec![sound(Sound::EndermanTeleport, 0.7, 1.2)],
            },
        )),
        ChestNotification::PlacementFailed { .. } => None,
    }
}

/// Play the effects for `notification` into `world`.
pub fn play_effects<W: WorldAccess + ?Sized>(world: &mut W, notification: &ChestNotification) {
    let Some((pos, plan)) = plan_for(notification) else {
        return;
    };
    for effect in &plan.particles {
        world.spawn_particles(pos, effect);
    }
    for effect in &plan.sounds {
        world.play_sound(pos, effect);
    }
}
