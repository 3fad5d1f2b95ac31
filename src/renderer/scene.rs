//! Scene description
//!
//! Turns a `GameState` into draw commands in canvas pixels. Pure: no GPU,
//! no DOM, so the picture for any state can be checked in tests. Text lives in
//! the page HUD, not here.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{GamePhase, GameState, Gift, Rect};

/// One thing to draw
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: [f32; 4],
    },
    StrokeRect {
        rect: Rect,
        width: f32,
        color: [f32; 4],
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
    /// Convex only
    FillPolygon {
        points: Vec<Vec2>,
        color: [f32; 4],
    },
    Polyline {
        points: Vec<Vec2>,
        width: f32,
        color: [f32; 4],
    },
    DashedLine {
        from: Vec2,
        to: Vec2,
        width: f32,
        dash: f32,
        gap: f32,
        color: [f32; 4],
    },
}

impl DrawCommand {
    /// Triangles for this command
    pub fn tessellate(&self, circle_segments: u32) -> Vec<Vertex> {
        match self {
            DrawCommand::FillRect { rect, color } => shapes::rect(rect.x, rect.y, rect.w, rect.h, *color),
            DrawCommand::StrokeRect { rect, width, color } => {
                shapes::rect_outline(rect.x, rect.y, rect.w, rect.h, *width, *color)
            }
            DrawCommand::FillCircle { center, radius, color } => {
                shapes::circle(*center, *radius, *color, circle_segments)
            }
            DrawCommand::FillPolygon { points, color } => shapes::convex_polygon(points, *color),
            DrawCommand::Polyline { points, width, color } => shapes::polyline(points, *width, *color),
            DrawCommand::DashedLine {
                from,
                to,
                width,
                dash,
                gap,
                color,
            } => shapes::dashed_line(*from, *to, *width, *dash, *gap, *color),
        }
    }
}

/// Build the full frame, back to front
pub fn build_scene(state: &GameState, settings: &Settings) -> Vec<DrawCommand> {
    let mut scene = Vec::with_capacity(48);

    scene.push(DrawCommand::FillRect {
        rect: Rect::new(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT),
        color: colors::SKY,
    });

    if settings.quality.clouds_enabled() {
        push_clouds(&mut scene);
    }
    push_ground(&mut scene);
    push_sleigh(&mut scene, settings.quality.curve_segments());
    push_launch_area(&mut scene);

    if let Some(gift) = &state.gift {
        push_gift(&mut scene, gift);
    }

    if let (GamePhase::Aiming, Some(drag)) = (state.phase, state.drag) {
        if settings.show_aim_line {
            scene.push(DrawCommand::DashedLine {
                from: drag.origin,
                to: drag.current,
                width: 3.0,
                dash: 10.0,
                gap: 5.0,
                color: colors::AIM_LINE,
            });
        }
    }

    if state.is_game_over() {
        scene.push(DrawCommand::FillRect {
            rect: Rect::new(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT),
            color: colors::GAME_OVER_SHADE,
        });
    }

    scene
}

/// Tessellate a whole scene
pub fn scene_vertices(scene: &[DrawCommand], settings: &Settings) -> Vec<Vertex> {
    let segments = settings.quality.circle_segments();
    scene.iter().flat_map(|cmd| cmd.tessellate(segments)).collect()
}

fn push_clouds(scene: &mut Vec<DrawCommand>) {
    const PUFFS: [(f32, f32, f32); 6] = [
        (100.0, 80.0, 40.0),
        (140.0, 70.0, 50.0),
        (180.0, 80.0, 40.0),
        (500.0, 100.0, 50.0),
        (550.0, 90.0, 60.0),
        (610.0, 100.0, 50.0),
    ];
    for (x, y, radius) in PUFFS {
        scene.push(DrawCommand::FillCircle {
            center: Vec2::new(x, y),
            radius,
            color: colors::CLOUD,
        });
    }
}

fn push_ground(scene: &mut Vec<DrawCommand>) {
    scene.push(DrawCommand::FillRect {
        rect: Rect::new(0.0, GROUND_Y, CANVAS_WIDTH, CANVAS_HEIGHT - GROUND_Y),
        color: colors::GROUND,
    });
    for i in 0..10 {
        scene.push(DrawCommand::FillCircle {
            center: Vec2::new(i as f32 * 80.0 + 20.0, 560.0),
            radius: 15.0,
            color: colors::SNOW_MOUND,
        });
    }
}

fn push_sleigh(scene: &mut Vec<DrawCommand>, curve_segments: u32) {
    let s = SLEIGH;

    // Box with a tapered bottom
    scene.push(DrawCommand::FillPolygon {
        points: vec![
            Vec2::new(s.x, s.y + 40.0),
            Vec2::new(s.x + 20.0, s.bottom()),
            Vec2::new(s.right() - 20.0, s.bottom()),
            Vec2::new(s.right(), s.y + 40.0),
            Vec2::new(s.right(), s.y),
            Vec2::new(s.x, s.y),
        ],
        color: colors::SLEIGH_BODY,
    });

    // Runners curl outward at both ends
    let left = shapes::quadratic_curve(
        Vec2::new(s.x + 10.0, s.bottom()),
        Vec2::new(s.x - 10.0, s.bottom() + 10.0),
        Vec2::new(s.x - 20.0, s.bottom()),
        curve_segments,
    );
    let right = shapes::quadratic_curve(
        Vec2::new(s.right() - 10.0, s.bottom()),
        Vec2::new(s.right() + 10.0, s.bottom() + 10.0),
        Vec2::new(s.right() + 20.0, s.bottom()),
        curve_segments,
    );
    for points in [left, right] {
        scene.push(DrawCommand::Polyline {
            points,
            width: 4.0,
            color: colors::SLEIGH_RUNNER,
        });
    }

    scene.push(DrawCommand::FillRect {
        rect: Rect::new(s.x, s.y, s.w, 10.0),
        color: colors::SLEIGH_TRIM,
    });
}

fn push_launch_area(scene: &mut Vec<DrawCommand>) {
    scene.push(DrawCommand::FillRect {
        rect: LAUNCH_ZONE,
        color: colors::LAUNCH_FILL,
    });
    scene.push(DrawCommand::StrokeRect {
        rect: LAUNCH_ZONE,
        width: 2.0,
        color: colors::LAUNCH_OUTLINE,
    });
}

fn push_gift(scene: &mut Vec<DrawCommand>, gift: &Gift) {
    // Settled gifts sit faded in the sleigh
    let alpha = if gift.settled { 0.5 } else { 1.0 };
    let box_color = colors::with_alpha(colors::GIFT_BOX, alpha);
    let ribbon_color = colors::with_alpha(colors::GIFT_RIBBON, alpha);

    let (x, y) = (gift.pos.x, gift.pos.y);
    let half = gift.size / 2.0;

    scene.push(DrawCommand::FillRect {
        rect: Rect::new(x - half, y - half, gift.size, gift.size),
        color: box_color,
    });
    scene.push(DrawCommand::FillRect {
        rect: Rect::new(x - 3.0, y - half, 6.0, gift.size),
        color: ribbon_color,
    });
    scene.push(DrawCommand::FillRect {
        rect: Rect::new(x - half, y - 3.0, gift.size, 6.0),
        color: ribbon_color,
    });
    scene.push(DrawCommand::FillCircle {
        center: Vec2::new(x, y - half),
        radius: 5.0,
        color: ribbon_color,
    });
}
