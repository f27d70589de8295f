//! Decorative spring trails.
//!
//! Each trail is a chain of nodes: the head is pulled toward a moving
//! attractor and every following node toward the node ahead of it, with the
//! pull weakening along the chain by `tension`. Random jitter is drawn once at
//! construction; `step` is deterministic afterwards.

use crate::config::{AttractorParams, HueParams, TrailParams};
use crate::constants::{STROKE_LIGHTNESS, STROKE_SATURATION};
use crate::host::Viewport;
use crate::surface::{Blend, PathSeg, StrokeStyle, Surface};
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::{FRAC_PI_4, TAU};

/// Sine oscillator used for the stroke hue.
#[derive(Clone, Debug, PartialEq)]
pub struct Oscillator {
    phase: f32,
    offset: f32,
    amplitude: f32,
    frequency: f32,
    value: f32,
}

impl Oscillator {
    pub fn new(params: &HueParams, phase: f32) -> Self {
        Self {
            phase,
            offset: params.offset,
            amplitude: params.amplitude,
            frequency: params.frequency,
            value: params.offset + phase.sin() * params.amplitude,
        }
    }

    pub fn update(&mut self) -> f32 {
        self.phase += self.frequency;
        self.value = self.offset + self.phase.sin() * self.amplitude;
        self.value
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }
}

/// Lissajous path around the viewport centre.
#[derive(Clone, Debug, PartialEq)]
pub struct Attractor {
    theta: f32,
    params: AttractorParams,
}

impl Attractor {
    pub fn new(params: &AttractorParams) -> Self {
        Self {
            theta: 0.0,
            params: params.clone(),
        }
    }

    pub fn position(&self, viewport: &Viewport) -> Vec2 {
        let size = viewport.size();
        let p = &self.params;
        viewport.center()
            + Vec2::new(
                p.radius_x * size.x * self.theta.sin(),
                p.radius_y * size.y * (p.ratio * self.theta + FRAC_PI_4).sin(),
            )
    }

    fn advance(&mut self, viewport: &Viewport) -> Vec2 {
        // Wrapped so long-running pages keep f32 precision.
        self.theta = (self.theta + self.params.speed) % (TAU * 10.0);
        self.position(viewport)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Node {
    pub pos: Vec2,
    pub vel: Vec2,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Trail {
    spring: f32,
    friction: f32,
    nodes: Vec<Node>,
    age: u32,
}

impl Trail {
    fn new(spring: f32, friction: f32, len: usize, origin: Vec2) -> Self {
        Self {
            spring,
            friction,
            nodes: vec![
                Node {
                    pos: origin,
                    vel: Vec2::ZERO
                };
                len
            ],
            age: 0,
        }
    }

    fn update(&mut self, target: Vec2, dampening: f32, tension: f32) {
        let mut e = self.spring;
        if let Some(head) = self.nodes.first_mut() {
            head.vel += (target - head.pos) * e;
        }
        for i in 0..self.nodes.len() {
            if i > 0 {
                let prev = self.nodes[i - 1];
                let node = &mut self.nodes[i];
                node.vel += (prev.pos - node.pos) * e;
                node.vel += prev.vel * dampening;
            }
            let node = &mut self.nodes[i];
            node.vel *= self.friction;
            node.pos += node.vel;
            e *= tension;
        }
        self.age = self.age.saturating_add(1);
    }

    /// Smooth stroke through the midpoints between consecutive nodes.
    fn path(&self, out: &mut Vec<PathSeg>) {
        out.clear();
        let n = self.nodes.len();
        if n < 2 {
            return;
        }
        out.push(PathSeg::MoveTo(self.nodes[0].pos));
        for i in 1..n - 2 {
            let a = self.nodes[i].pos;
            let b = self.nodes[i + 1].pos;
            out.push(PathSeg::QuadTo {
                ctrl: a,
                to: (a + b) * 0.5,
            });
        }
        out.push(PathSeg::QuadTo {
            ctrl: self.nodes[n - 2].pos,
            to: self.nodes[n - 1].pos,
        });
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn spring(&self) -> f32 {
        self.spring
    }

    pub fn friction(&self) -> f32 {
        self.friction
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// Fade-in factor in [0, 1].
    pub fn fade(&self, fade_in_frames: u32) -> f32 {
        if fade_in_frames == 0 {
            1.0
        } else {
            (self.age as f32 / fade_in_frames as f32).min(1.0)
        }
    }
}

/// All animation state owned by the canvas renderer.
#[derive(Clone, Debug)]
pub struct TrailField {
    params: TrailParams,
    trails: Vec<Trail>,
    hue: Oscillator,
    attractor: Attractor,
    viewport: Viewport,
    frame: u64,
    scratch: Vec<PathSeg>,
}

impl TrailField {
    pub fn new(params: &TrailParams, viewport: Viewport, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let attractor = Attractor::new(&params.attractor);
        let origin = attractor.position(&viewport);
        let hue = Oscillator::new(&params.hue, rng.gen::<f32>() * TAU);
        let count = params.trails.max(1) as f32;
        let trails = (0..params.trails)
            .map(|i| {
                let base = params.spring_base + (i as f32 / count) * params.spring_step;
                let spring = base + jitter(&mut rng, params.spring_jitter);
                let friction =
                    (params.friction + jitter(&mut rng, params.friction_jitter)).clamp(0.0, 1.0);
                Trail::new(spring, friction, params.nodes_per_trail, origin)
            })
            .collect();
        Self {
            params: params.clone(),
            trails,
            hue,
            attractor,
            viewport,
            frame: 0,
            scratch: Vec::with_capacity(params.nodes_per_trail),
        }
    }

    /// Advance one frame.
    pub fn step(&mut self) {
        self.frame += 1;
        self.hue.update();
        let target = self.attractor.advance(&self.viewport);
        let (dampening, tension) = (self.params.dampening, self.params.tension);
        for trail in &mut self.trails {
            trail.update(target, dampening, tension);
        }
    }

    /// Redraw the full scene from a cleared surface.
    pub fn draw<S: Surface>(&mut self, surface: &mut S) {
        surface.set_blend(Blend::SourceOver);
        surface.clear();
        surface.set_blend(Blend::Lighter);
        let hue = self.hue.value();
        for trail in &self.trails {
            surface.set_stroke(&StrokeStyle {
                hue,
                saturation: STROKE_SATURATION,
                lightness: STROKE_LIGHTNESS,
                alpha: self.params.stroke_alpha * trail.fade(self.params.fade_in_frames),
                width: self.params.stroke_width,
            });
            trail.path(&mut self.scratch);
            surface.stroke_path(&self.scratch);
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn trails(&self) -> &[Trail] {
        &self.trails
    }

    pub fn hue(&self) -> f32 {
        self.hue.value()
    }

    pub fn attractor_position(&self) -> Vec2 {
        self.attractor.position(&self.viewport)
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}

#[inline]
fn jitter(rng: &mut StdRng, spread: f32) -> f32 {
    rng.gen::<f32>() * spread - spread * 0.5
}
