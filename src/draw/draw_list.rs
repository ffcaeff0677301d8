use super::{Color, DrawSurface, StrokeStyle};

/// A single recorded draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Line {
        from: (f64, f64),
        to: (f64, f64),
        color: Color,
        /// Effective width: the explicit override or the stroke width at record time.
        width: f64,
    },
    Circle {
        center: (f64, f64),
        color: Color,
        radius: f64,
    },
    Stroke(StrokeStyle),
}

/// A [`DrawSurface`] that records every call instead of rasterizing.
///
/// Useful for replaying a frame into another backend and for inspecting
/// what a render pass issued.
#[derive(Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    stroke: StrokeStyle,
}

impl DrawList {
    /// Creates an empty draw list with the default stroke style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded commands in issue order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Returns an iterator over recorded lines of the given color.
    pub fn lines(&self, color: Color) -> impl Iterator<Item = ((f64, f64), (f64, f64))> + '_ {
        self.commands.iter().filter_map(move |c| match c {
            DrawCommand::Line {
                from, to, color: c, ..
            } if *c == color => Some((*from, *to)),
            _ => None,
        })
    }

    /// Returns the number of recorded lines of the given color.
    #[must_use]
    pub fn line_count(&self, color: Color) -> usize {
        self.lines(color).count()
    }

    /// Returns the number of recorded circles of the given color.
    #[must_use]
    pub fn circle_count(&self, color: Color) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { color: c, .. } if *c == color))
            .count()
    }

    /// Drops all recorded commands, keeping the current stroke style.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DrawSurface for DrawList {
    fn draw_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Color, width: Option<f64>) {
        self.commands.push(DrawCommand::Line {
            from: (x0, y0),
            to: (x1, y1),
            color,
            width: width.unwrap_or(self.stroke.width()),
        });
    }

    fn draw_circle(&mut self, x: f64, y: f64, color: Color, radius: f64) {
        self.commands.push(DrawCommand::Circle {
            center: (x, y),
            color,
            radius,
        });
    }

    fn set_stroke_style(&mut self, style: StrokeStyle) {
        self.stroke = style;
        self.commands.push(DrawCommand::Stroke(style));
    }

    fn stroke_style(&self) -> StrokeStyle {
        self.stroke
    }
}
