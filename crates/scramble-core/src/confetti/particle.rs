//! A single confetto: kinematics and quad emission.

use glam::Vec2;

use super::color::ConfettiColor;

/// One piece of confetti. Positions are in normalized [0, 1] screen space
/// with y pointing down.
#[derive(Debug, Clone)]
pub struct Confetto {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Edge length of the rendered square.
    pub size: f32,
    pub rotation: f32,
    /// Radians per second.
    pub spin: f32,
    pub color: ConfettiColor,
    /// Seconds left to live.
    pub lifetime: f32,
}

impl Confetto {
    /// Advance kinematics. Returns false when expired.
    pub fn tick(&mut self, gravity: f32, drag: f32, dt: f32) -> bool {
        self.lifetime -= dt;
        if self.lifetime <= 0.0 {
            return false;
        }

        self.vel.y += gravity * dt;
        self.vel *= 1.0 - drag;
        self.pos += self.vel * dt;
        self.rotation += self.spin * dt;

        true
    }

    /// Append this confetto as two triangles (6 vertices x 5 floats:
    /// x, y, color index, u, v).
    pub fn append_vertices(&self, out: &mut Vec<f32>) {
        let half = self.size * 0.5;
        let (sin, cos) = self.rotation.sin_cos();
        let corner = |dx: f32, dy: f32| -> [f32; 2] {
            [
                self.pos.x + dx * cos - dy * sin,
                self.pos.y + dx * sin + dy * cos,
            ]
        };

        let color_z = self.color as u8 as f32;
        let corners = [
            corner(-half, -half),
            corner(half, -half),
            corner(half, half),
            corner(-half, half),
        ];
        let uvs = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

        for &i in &[0usize, 1, 2, 0, 2, 3] {
            out.extend_from_slice(&[corners[i][0], corners[i][1], color_z, uvs[i][0], uvs[i][1]]);
        }
    }
}
