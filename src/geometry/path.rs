use crate::config::Measure;
use crate::geometry::{number, Coord, PathSegment, Vector};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    MoveTo(Coord),
    LineBy(Vector),
    QuadBy(Vector, Vector),
    ArcBy {
        radius: Measure,
        large_arc: bool,
        sweep: bool,
        to: Vector,
    },
    Close,
}

/// Builder for path data that needs more than straight relative moves.
/// Like [`PathSegment`] everything after the first move is relative.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathData {
    commands: Vec<Command>,
}

impl PathData {
    pub fn new() -> PathData {
        PathData::default()
    }

    pub fn move_to(mut self, at: Coord) -> Self {
        self.commands.push(Command::MoveTo(at));
        self
    }

    pub fn line_by(mut self, by: Vector) -> Self {
        self.commands.push(Command::LineBy(by));
        self
    }

    /// Quadratic curve with a control point relative to the current pen.
    pub fn quad_by(mut self, control: Vector, to: Vector) -> Self {
        self.commands.push(Command::QuadBy(control, to));
        self
    }

    /// Circular arc; radius and flags as in SVG `a`.
    pub fn arc_by(mut self, radius: Measure, large_arc: bool, sweep: bool, to: Vector) -> Self {
        self.commands.push(Command::ArcBy {
            radius,
            large_arc,
            sweep,
            to,
        });
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push(Command::Close);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Append a straight-line segment as its own subpath.
    pub fn segment(mut self, segment: &PathSegment) -> Self {
        self.commands.push(Command::MoveTo(segment.anchor));
        for step in &segment.moves {
            self.commands.push(Command::LineBy(*step));
        }
        self.commands.push(Command::Close);
        self
    }

    pub fn render(&self) -> String {
        self.commands
            .iter()
            .map(|cmd| match cmd {
                Command::MoveTo(c) => format!("M {} {}", number(c.x), number(c.y)),
                Command::LineBy(d) => format!("l {} {}", number(d.dx), number(d.dy)),
                Command::QuadBy(c, d) => format!(
                    "q {} {} {} {}",
                    number(c.dx),
                    number(c.dy),
                    number(d.dx),
                    number(d.dy)
                ),
                Command::ArcBy {
                    radius,
                    large_arc,
                    sweep,
                    to,
                } => format!(
                    "a {r} {r} 0 {} {} {} {}",
                    *large_arc as u8,
                    *sweep as u8,
                    number(to.dx),
                    number(to.dy),
                    r = number(*radius)
                ),
                Command::Close => "z".to_string(),
            })
            .collect::<Vec<String>>()
            .join(" ")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::v;

    fn m(n: i64) -> Measure {
        Measure::from_integer(n)
    }

    #[test]
    fn test_render_mixed() {
        let data = PathData::new()
            .move_to(Coord::new(m(10), m(20)))
            .line_by(v(m(5), m(0)))
            .quad_by(v(m(2), m(2)), v(m(0), m(4)))
            .arc_by(Measure::new(5, 2), false, true, v(m(-5), m(0)))
            .close();
        assert_eq!(
            data.render(),
            "M 10 20 l 5 0 q 2 2 0 4 a 2.5 2.5 0 0 1 -5 0 z"
        );
    }

    #[test]
    fn test_segment_matches_segment_data() {
        let seg = PathSegment::new(Coord::new(m(1), m(1)), vec![v(m(1), m(0)), v(m(-1), m(0))]);
        assert_eq!(PathData::new().segment(&seg).render(), seg.to_path_data());
    }
}
