use super::animation::{Animated, Easing, TweenEvent};
use super::config::SceneConfig;
use super::constants::*;
use super::picking::ray_sphere;
use super::sections::Section;
use super::state::SceneState;
use glam::{Mat4, Quat, Vec3};

/// Surface parameters handed to the sphere shader.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: [f32; 3],
    pub metalness: f32,
    pub roughness: f32,
    pub emissive_intensity: f32,
}

/// A fixed navigation marker: where it sits in the group and what it opens.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavigationNode {
    pub section: Section,
    pub position: Vec3,
}

impl NavigationNode {
    #[inline]
    pub fn label(&self) -> &'static str {
        self.section.label()
    }

    #[inline]
    pub fn content_html(&self) -> &'static str {
        self.section.content_html()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct OrbitalNode {
    pub node: NavigationNode,
    pub radius: f32,
    pub material: Material,
    scale: Animated,
}

impl OrbitalNode {
    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    /// Scale the node is currently tweening towards.
    #[inline]
    pub fn target_scale(&self) -> f32 {
        self.scale.target()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Hub {
    pub radius: f32,
    pub material: Material,
}

/// Hub sphere plus four orbital nodes, rotating together about +Y.
#[derive(Clone, Debug)]
pub struct OrbitalScene {
    hub: Hub,
    nodes: [OrbitalNode; 4],
    rotation_y: f32,
    rotation_per_frame: f32,
    hover_scale: f32,
    hover_tween_sec: f32,
    hovered: Option<Section>,
}

impl OrbitalScene {
    pub fn new(config: &SceneConfig) -> Self {
        let nodes = Section::ALL.map(|section| {
            let i = section.index();
            OrbitalNode {
                node: NavigationNode {
                    section,
                    position: Vec3::from_array(NODE_POSITIONS[i]),
                },
                radius: NODE_RADIUS,
                material: Material {
                    color: NODE_COLORS[i],
                    metalness: NODE_METALNESS,
                    roughness: NODE_ROUGHNESS,
                    emissive_intensity: NODE_EMISSIVE,
                },
                scale: Animated::new(REST_SCALE),
            }
        });
        Self {
            hub: Hub {
                radius: HUB_RADIUS,
                material: Material {
                    color: HUB_COLOR,
                    metalness: HUB_METALNESS,
                    roughness: HUB_ROUGHNESS,
                    emissive_intensity: HUB_EMISSIVE,
                },
            },
            nodes,
            rotation_y: 0.0,
            rotation_per_frame: config.orbit_rotation_per_frame,
            hover_scale: config.hover_scale,
            hover_tween_sec: config.hover_tween_sec,
            hovered: None,
        }
    }

    #[inline]
    pub fn hub(&self) -> &Hub {
        &self.hub
    }

    #[inline]
    pub fn nodes(&self) -> &[OrbitalNode; 4] {
        &self.nodes
    }

    #[inline]
    pub fn node(&self, section: Section) -> &OrbitalNode {
        &self.nodes[section.index()]
    }

    #[inline]
    pub fn rotation(&self) -> f32 {
        self.rotation_y
    }

    #[inline]
    pub fn hovered(&self) -> Option<Section> {
        self.hovered
    }

    pub fn group_matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.rotation_y)
    }

    pub fn world_position(&self, section: Section) -> Vec3 {
        self.group_matrix()
            .transform_point3(self.node(section).node.position)
    }

    /// Model matrix for a node's unit sphere: group rotation, placement, radius times hover scale.
    pub fn node_model(&self, section: Section) -> Mat4 {
        let n = self.node(section);
        self.group_matrix()
            * Mat4::from_scale_rotation_translation(
                Vec3::splat(n.radius * n.scale()),
                Quat::IDENTITY,
                n.node.position,
            )
    }

    pub fn hub_model(&self) -> Mat4 {
        self.group_matrix() * Mat4::from_scale(Vec3::splat(self.hub.radius))
    }

    pub fn hover_enter(&mut self, section: Section) {
        let (scale, dur) = (self.hover_scale, self.hover_tween_sec);
        self.nodes[section.index()]
            .scale
            .animate_to(scale, dur, Easing::QuadOut);
    }

    pub fn hover_exit(&mut self, section: Section) {
        let dur = self.hover_tween_sec;
        self.nodes[section.index()]
            .scale
            .animate_to(REST_SCALE, dur, Easing::QuadOut);
    }

    /// Move the hover to `next`, issuing only the needed exit and enter.
    /// Returns whether the hovered node changed.
    pub fn set_hovered(&mut self, next: Option<Section>) -> bool {
        if self.hovered == next {
            return false;
        }
        if let Some(prev) = self.hovered {
            self.hover_exit(prev);
        }
        if let Some(s) = next {
            self.hover_enter(s);
        }
        self.hovered = next;
        true
    }

    /// Hover from a pointer pick. An open modal covers the scene, so nothing is hovered
    /// while one is active.
    pub fn hover_pointer(&mut self, hit: Option<Section>, state: &SceneState) -> bool {
        let next = if state.active().is_some() { None } else { hit };
        self.set_hovered(next)
    }

    pub fn click(&self, section: Section, state: &mut SceneState) {
        state.open(section);
    }

    /// Nearest node hit by a world-space ray, using current rotation and scale.
    pub fn pick(&self, ray_origin: Vec3, ray_dir: Vec3) -> Option<Section> {
        let mut best = None::<(Section, f32)>;
        for n in &self.nodes {
            let center = self.world_position(n.node.section);
            if let Some(t) = ray_sphere(ray_origin, ray_dir, center, n.radius * n.scale()) {
                match best {
                    Some((_, bt)) if t >= bt => {}
                    _ => best = Some((n.node.section, t)),
                }
            }
        }
        let (section, t) = best?;
        // The hub is not clickable but hides whatever is behind it.
        match ray_sphere(ray_origin, ray_dir, Vec3::ZERO, self.hub.radius) {
            Some(hub_t) if hub_t < t => None,
            _ => Some(section),
        }
    }

    /// Per-frame step: fixed rotation increment plus hover tweens by `dt_sec`.
    pub fn advance_frame(&mut self, dt_sec: f32) {
        self.rotation_y = (self.rotation_y + self.rotation_per_frame) % std::f32::consts::TAU;
        for n in self.nodes.iter_mut() {
            if n.scale.advance(dt_sec) == TweenEvent::Completed {
                log::debug!("[scene] {} scale settled at {:.2}", n.node.label(), n.scale());
            }
        }
    }
}
