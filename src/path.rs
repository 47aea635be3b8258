//! Polygon vertex to path command encoding
//!
//! Maps an ordered sequence of polygon vertices onto the SVG path `d`
//! string that draws the same outline: an absolute move to the first
//! vertex, one line command per following vertex, and a closing `Z`.

/// A single vertex parsed from a polygon `points` attribute.
///
/// Coordinates are kept as the source text tokens rather than parsed
/// numbers, so the emitted path never reformats or rounds a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point<'a> {
    pub x: &'a str,
    pub y: &'a str,
}

impl<'a> Point<'a> {
    pub fn new(x: &'a str, y: &'a str) -> Self {
        Self { x, y }
    }
}

/// One command of a path data string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathCommand<'a> {
    /// Absolute move to the first vertex: `M<x>,<y>`
    MoveTo { x: &'a str, y: &'a str },
    /// Vertical line for a segment that keeps its x coordinate: `V<y>`
    Vertical { y: &'a str },
    /// Horizontal line for a segment that keeps its y coordinate: `H<x>`
    Horizontal { x: &'a str },
    /// General line for everything else: `L<x>,<y>`
    LineTo { x: &'a str, y: &'a str },
    /// Close the outline back to the first vertex: `Z`
    Close,
}

impl PathCommand<'_> {
    /// Render the command as path data text.
    pub fn encode(&self) -> String {
        match self {
            PathCommand::MoveTo { x, y } => format!("M{},{}", x, y),
            PathCommand::Vertical { y } => format!("V{}", y),
            PathCommand::Horizontal { x } => format!("H{}", x),
            PathCommand::LineTo { x, y } => format!("L{},{}", x, y),
            PathCommand::Close => "Z".to_string(),
        }
    }
}

/// Pick the command for `point`, given the vertex that precedes it.
///
/// The x test runs before the y test, so a repeated vertex encodes as `V`.
/// Axis tests compare coordinate tokens textually: only a segment whose
/// endpoint repeats the exact source text of a coordinate collapses to
/// `V`/`H`. Near-equal literals such as `10` and `10.0` fall through to
/// `LineTo`, which draws the same geometry.
pub fn command_for<'a>(point: Point<'a>, prev: Option<Point<'a>>) -> PathCommand<'a> {
    match prev {
        None => PathCommand::MoveTo {
            x: point.x,
            y: point.y,
        },
        Some(last) if point.x == last.x => PathCommand::Vertical { y: point.y },
        Some(last) if point.y == last.y => PathCommand::Horizontal { x: point.x },
        Some(_) => PathCommand::LineTo {
            x: point.x,
            y: point.y,
        },
    }
}

/// Encode a vertex sequence as a complete path data string.
///
/// Emits one command per vertex in sequence order, appends the closing
/// `Z`, and joins everything with single spaces. A single vertex therefore
/// yields `M<x>,<y> Z`.
pub fn encode_points(points: &[Point<'_>]) -> String {
    let mut commands = Vec::with_capacity(points.len() + 1);
    let mut prev = None;

    for &point in points {
        commands.push(command_for(point, prev).encode());
        prev = Some(point);
    }
    commands.push(PathCommand::Close.encode());

    commands.join(" ")
}
