//! Draw simple 2d pictures as svg files.
//!
//! ```
//! extern crate racetrack;
//! use racetrack::render_2d::{Bounded, PathStyle, SvgColor, SvgPath};
//! use racetrack::P2;
//!
//! # fn main() {
//! let path = SvgPath::new(vec![P2::new(0., 0.), P2::new(50., 50.), P2::new(100., 20.)])
//!     .style(PathStyle::LineWithDots)
//!     .stroke(SvgColor::Blue, 2.);
//! assert!(path.bound().is_some());
//! # }
//! ```

use failure::Error;

use svg::node::element::path::Data;
use svg::node::element::{Circle, Group, Path, Rectangle};
use svg::node::Value;
use svg::{self, Document, Node};

use util::{P2, V2};

#[derive(Clone, Copy, Debug)]
pub enum PathStyle {
    Dots,
    Line,
    LineWithDots,
}

pub struct SvgDoc {
    contents: Group,
    bound: Option<Bound>,
    margin: f32,
}

#[derive(Clone, Debug)]
pub struct SvgPath {
    points: Vec<P2>,
    stroke: Stroke,
    style: PathStyle,
    is_closed: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct SvgCircle {
    pos: P2,
    radius: f32,
    fill: Option<SvgColor>,
}

#[derive(Clone, Copy, Debug)]
pub struct SvgRect {
    pos: P2,
    size: V2,
    fill: Option<SvgColor>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bound {
    pub low: P2,
    pub high: P2,
}

#[derive(Clone, Copy, Debug)]
struct Stroke {
    color: SvgColor,
    width: f32,
}

#[derive(Clone, Copy, Debug)]
pub enum SvgColor {
    Red,
    Blue,
    Magenta,
    Black,
    White,
    DarkGrey,
}

pub trait Bounded {
    fn bound(&self) -> Option<Bound>;
}

pub trait ToSvg {
    type Output: Node + 'static;
    fn finalize(self) -> Self::Output;
}

impl SvgDoc {
    pub fn new() -> SvgDoc {
        SvgDoc {
            contents: Group::new(),
            bound: None,
            margin: 0.,
        }
    }

    /// Leave this much empty space around the contents.
    pub fn margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    pub fn append<T>(&mut self, thing: T)
    where
        T: ToSvg + Bounded,
    {
        self.bound = match self.bound {
            Some(current) => Some(current.union(thing.bound())),
            None => thing.bound(),
        };
        self.contents.append(thing.finalize());
    }

    pub fn append_vec<T>(&mut self, things: Vec<T>)
    where
        T: ToSvg + Bounded,
    {
        for thing in things {
            self.append(thing);
        }
    }

    pub fn save(self, filename: &str) -> Result<(), Error> {
        info!("Saving svg file {}.", filename);
        Ok(svg::save(filename, &self.finalize())?)
    }
}

impl ToSvg for SvgDoc {
    type Output = Document;

    fn finalize(self) -> Self::Output {
        let mut doc = Document::new();
        if let Some(bound) = self.bound() {
            let background =
                SvgRect::new(bound.low, bound.size()).fill(SvgColor::White);
            doc.append(background.finalize());
            doc.assign("viewBox", bound.view_box());
        }
        doc.append(self.contents);
        doc
    }
}

impl Bounded for SvgDoc {
    fn bound(&self) -> Option<Bound> {
        self.bound.map(|bound| bound.grow(self.margin))
    }
}

impl SvgPath {
    pub fn new(points: Vec<P2>) -> SvgPath {
        SvgPath {
            points,
            stroke: Stroke {
                color: SvgColor::Black,
                width: 1.,
            },
            style: PathStyle::Line,
            is_closed: false,
        }
    }

    pub fn stroke(mut self, color: SvgColor, width: f32) -> Self {
        self.stroke = Stroke { color, width };
        self
    }

    pub fn style(mut self, style: PathStyle) -> Self {
        self.style = style;
        self
    }

    pub fn close(mut self) -> Self {
        self.is_closed = true;
        self
    }

    fn dots(&self) -> Group {
        let radius = self.stroke.width;
        let color = self.stroke.color;

        let mut group = Group::new();
        for p in &self.points {
            group.append(SvgCircle::new(*p, radius).fill(color).finalize());
        }
        group
    }

    fn path_data(&self) -> Data {
        let mut data = Data::new();
        let mut points = self.points.iter();
        if let Some(first) = points.next() {
            data = data.move_to(to_tuple(first));
        }
        for p in points {
            data = data.line_to(to_tuple(p));
        }
        if self.is_closed {
            data = data.close();
        }
        data
    }
}

impl ToSvg for SvgPath {
    type Output = Group;

    fn finalize(self) -> Self::Output {
        let mut group = Group::new();
        if self.points.is_empty() {
            return group;
        }
        if self.style.has_line() {
            let mut path = Path::new();
            path.assign("d", self.path_data());
            path.assign("stroke", self.stroke.color);
            path.assign("stroke-width", self.stroke.width);
            path.assign("fill", "none");
            group.append(path);
        }

        if self.style.has_dots() {
            group.append(self.dots())
        }
        group
    }
}

impl Bounded for SvgPath {
    fn bound(&self) -> Option<Bound> {
        Bound::around(&self.points).map(|bound| bound.grow(self.stroke.width))
    }
}

impl PathStyle {
    fn has_line(&self) -> bool {
        match *self {
            PathStyle::Dots => false,
            PathStyle::Line => true,
            PathStyle::LineWithDots => true,
        }
    }

    fn has_dots(&self) -> bool {
        match *self {
            PathStyle::Dots => true,
            PathStyle::Line => false,
            PathStyle::LineWithDots => true,
        }
    }
}

impl SvgCircle {
    pub fn new(pos: P2, radius: f32) -> Self {
        Self {
            pos,
            radius,
            fill: None,
        }
    }

    pub fn fill(mut self, fill: SvgColor) -> Self {
        self.fill = Some(fill);
        self
    }
}

impl ToSvg for SvgCircle {
    type Output = Circle;

    fn finalize(self) -> Self::Output {
        let mut element = Circle::new()
            .set("cx", self.pos.x)
            .set("cy", self.pos.y)
            .set("r", self.radius);

        if let Some(color) = self.fill {
            element.assign("fill", color);
        } else {
            element.assign("fill", "none");
        }

        element
    }
}

impl Bounded for SvgCircle {
    fn bound(&self) -> Option<Bound> {
        let offset = V2::new(self.radius, self.radius);
        Some(Bound {
            low: self.pos - offset,
            high: self.pos + offset,
        })
    }
}

impl SvgRect {
    pub fn new(pos: P2, size: V2) -> Self {
        Self {
            pos,
            size,
            fill: None,
        }
    }

    pub fn fill(mut self, fill: SvgColor) -> Self {
        self.fill = Some(fill);
        self
    }
}

impl ToSvg for SvgRect {
    type Output = Rectangle;

    fn finalize(self) -> Self::Output {
        let mut element = Rectangle::new()
            .set("x", self.pos.x)
            .set("y", self.pos.y)
            .set("width", self.size.x)
            .set("height", self.size.y);

        if let Some(color) = self.fill {
            element.assign("fill", color);
        } else {
            element.assign("fill", "none");
        }
        element
    }
}

impl Bound {
    /// The smallest box holding all of the points, if there are any.
    pub fn around(points: &[P2]) -> Option<Bound> {
        let mut points = points.iter();
        let first = *points.next()?;
        let mut bound = Bound {
            low: first,
            high: first,
        };
        for p in points {
            bound.low = P2::new(bound.low.x.min(p.x), bound.low.y.min(p.y));
            bound.high = P2::new(bound.high.x.max(p.x), bound.high.y.max(p.y));
        }
        Some(bound)
    }

    fn view_box(&self) -> (f32, f32, f32, f32) {
        (self.low.x, self.low.y, self.width(), self.height())
    }

    pub fn width(&self) -> f32 {
        self.high.x - self.low.x
    }

    pub fn height(&self) -> f32 {
        self.high.y - self.low.y
    }

    fn size(&self) -> V2 {
        V2::new(self.width(), self.height())
    }

    /// Push every side out by `margin`.
    pub fn grow(&self, margin: f32) -> Bound {
        let offset = V2::new(margin, margin);
        Bound {
            low: self.low - offset,
            high: self.high + offset,
        }
    }

    pub fn union(&self, other: Option<Bound>) -> Bound {
        if let Some(other) = other {
            Bound {
                low: P2::new(
                    self.low.x.min(other.low.x),
                    self.low.y.min(other.low.y),
                ),
                high: P2::new(
                    self.high.x.max(other.high.x),
                    self.high.y.max(other.high.y),
                ),
            }
        } else {
            *self
        }
    }
}

impl From<SvgColor> for Value {
    fn from(color: SvgColor) -> Value {
        match color {
            SvgColor::Red => "red",
            SvgColor::Blue => "#3ac3f5",
            SvgColor::Magenta => "#b9acf6",
            SvgColor::Black => "#000000",
            SvgColor::White => "#ffffff",
            SvgColor::DarkGrey => "#b6b6b6",
        }.into()
    }
}

fn to_tuple(pos: &P2) -> (f32, f32) {
    (pos.x, pos.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_around() {
        let points = vec![P2::new(1., 5.), P2::new(-2., 3.), P2::new(4., -1.)];
        let bound = Bound::around(&points).unwrap();
        assert_eq!(bound.low, P2::new(-2., -1.));
        assert_eq!(bound.high, P2::new(4., 5.));
        assert_eq!(bound.width(), 6.);
        assert_eq!(bound.height(), 6.);
        assert_eq!(Bound::around(&[]), None);
    }

    #[test]
    fn test_doc_bound() {
        let mut doc = SvgDoc::new().margin(1.);
        assert_eq!(doc.bound(), None);
        doc.append(SvgCircle::new(P2::new(0., 0.), 1.));
        doc.append(
            SvgPath::new(vec![P2::new(5., 5.), P2::new(10., 2.)])
                .stroke(SvgColor::Black, 0.5),
        );
        let bound = doc.bound().unwrap();
        assert_eq!(bound.low, P2::new(-2., -2.));
        assert_eq!(bound.high, P2::new(11.5, 6.5));
    }

    #[test]
    fn test_render() {
        let mut doc = SvgDoc::new();
        doc.append(
            SvgPath::new(vec![P2::new(0., 0.), P2::new(3., 4.)])
                .style(PathStyle::LineWithDots)
                .close(),
        );
        let text = doc.finalize().to_string();
        assert!(text.contains("viewBox"));
        assert!(text.contains("<path"));
        assert!(text.contains("<circle"));
    }
}
