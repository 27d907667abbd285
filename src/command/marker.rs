use egui::Pos2;

use super::CommandId;
use crate::surface::Surface;

/// Freehand marker line: the points of one gesture plus the thickness chosen
/// when it started.
#[derive(Debug)]
pub struct MarkerLine {
    id: CommandId,
    points: Vec<Pos2>,
    thickness: f32,
}

impl MarkerLine {
    pub fn new(start: Pos2, thickness: f32) -> Self {
        Self {
            id: CommandId::new(),
            points: vec![start],
            thickness,
        }
    }

    pub fn id(&self) -> CommandId {
        self.id
    }

    /// Points in the order they were recorded; never empty
    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn extend(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        // A tap leaves a single point; paint it as a zero-length segment so it stays visible.
        if let [only] = self.points.as_slice() {
            surface.draw_polyline(&[*only, *only], self.thickness);
        } else {
            surface.draw_polyline(&self.points, self.thickness);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCall, RecordingSurface};
    use egui::pos2;

    #[test]
    fn test_extend_appends_in_order() {
        let mut line = MarkerLine::new(pos2(10.0, 10.0), 2.0);
        line.extend(pos2(20.0, 10.0));
        line.extend(pos2(20.0, 20.0));

        assert_eq!(
            line.points(),
            &[pos2(10.0, 10.0), pos2(20.0, 10.0), pos2(20.0, 20.0)]
        );
        assert_eq!(line.thickness(), 2.0);
    }

    #[test]
    fn test_single_point_renders_as_dot() {
        let line = MarkerLine::new(pos2(7.0, 8.0), 6.0);
        let mut surface = RecordingSurface::new();
        line.render(&mut surface);

        assert_eq!(
            surface.last_frame(),
            &[DrawCall::Polyline {
                points: vec![pos2(7.0, 8.0), pos2(7.0, 8.0)],
                thickness: 6.0,
            }]
        );
    }

    #[test]
    fn test_render_is_repeatable() {
        let mut line = MarkerLine::new(pos2(0.0, 0.0), 2.0);
        line.extend(pos2(3.0, 4.0));

        let mut surface = RecordingSurface::new();
        surface.clear();
        line.render(&mut surface);
        surface.clear();
        line.render(&mut surface);

        assert_eq!(surface.frames()[0], surface.frames()[1]);
    }
}
