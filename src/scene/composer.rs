use crate::draw::primitives::{
    TREE_LAYERS, draw_canopy, draw_ground, draw_humanoid, draw_mist, draw_motion_trails,
    draw_particles, draw_quadruped, draw_sky, draw_tree_layer,
};
use crate::draw::surface::DrawSurface;
use crate::scene::state::{LEAD_ANCHOR, SceneState};

/// Ground scrolls slightly faster than the background it sits in front of.
pub const GROUND_PARALLAX: f64 = 1.2;
/// Wolves' legs cycle slightly faster than the boy's.
pub const PURSUER_STRIDE_SCALE: f64 = 1.1;

/// One step of the per-frame draw sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum DrawStage {
    /// Vertical sky gradient.
    Sky,
    /// Low haze.
    Mist,
    /// Slowest, darkest tree band.
    FarTrees,
    /// Middle tree band.
    MidTrees,
    /// Fastest, brightest tree band.
    NearTrees,
    /// Canopy silhouette.
    Canopy,
    /// Ground and ridges.
    Ground,
    /// Speed lines behind the lead actor.
    MotionTrails,
    /// The boy.
    LeadActor,
    /// The wolves.
    Pursuers,
    /// Fireflies.
    Particles,
}

/// Painter's order: each stage occludes everything before it.
pub const DRAW_ORDER: [DrawStage; 11] = [
    DrawStage::Sky,
    DrawStage::Mist,
    DrawStage::FarTrees,
    DrawStage::MidTrees,
    DrawStage::NearTrees,
    DrawStage::Canopy,
    DrawStage::Ground,
    DrawStage::MotionTrails,
    DrawStage::LeadActor,
    DrawStage::Pursuers,
    DrawStage::Particles,
];

impl DrawStage {
    /// Stable lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sky => "sky",
            Self::Mist => "mist",
            Self::FarTrees => "far-trees",
            Self::MidTrees => "mid-trees",
            Self::NearTrees => "near-trees",
            Self::Canopy => "canopy",
            Self::Ground => "ground",
            Self::MotionTrails => "motion-trails",
            Self::LeadActor => "lead-actor",
            Self::Pursuers => "pursuers",
            Self::Particles => "particles",
        }
    }

    /// Draw this stage for the given scene state.
    pub fn draw(self, surface: &mut dyn DrawSurface, scene: &SceneState) {
        let clock = &scene.clock;
        match self {
            Self::Sky => draw_sky(surface),
            Self::Mist => draw_mist(surface),
            Self::FarTrees | Self::MidTrees | Self::NearTrees => {
                let layer = &TREE_LAYERS[self.tree_layer_index()];
                draw_tree_layer(surface, clock.background_offset * layer.parallax, layer);
            }
            Self::Canopy => draw_canopy(surface, clock.canopy_offset),
            Self::Ground => draw_ground(surface, clock.background_offset * GROUND_PARALLAX),
            Self::MotionTrails => draw_motion_trails(surface, LEAD_ANCHOR, clock.stride),
            Self::LeadActor => draw_humanoid(surface, LEAD_ANCHOR, clock.stride),
            Self::Pursuers => {
                for (index, actor) in scene.pursuers.iter().enumerate() {
                    draw_quadruped(surface, actor, clock.stride * PURSUER_STRIDE_SCALE, index);
                }
            }
            Self::Particles => draw_particles(surface, &scene.particles, clock.time),
        }
    }

    fn tree_layer_index(self) -> usize {
        match self {
            Self::MidTrees => 1,
            Self::NearTrees => 2,
            _ => 0,
        }
    }
}

/// Draw one frame of `scene` in [`DRAW_ORDER`].
pub fn compose_frame(surface: &mut dyn DrawSurface, scene: &SceneState) {
    for stage in DRAW_ORDER {
        surface.mark_stage(stage);
        stage.draw(surface, scene);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/composer.rs"]
mod tests;
