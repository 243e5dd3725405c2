use failure::Error;

use render_2d::{PathStyle, SvgCircle, SvgColor, SvgDoc, SvgPath};
use track::Track;
use util::{project, project_points};

// Stroke widths, relative to the width of the road.
const EDGE_STROKE: f32 = 0.05;
const CENTRE_STROKE: f32 = 0.02;
const POINT_RADIUS: f32 = 0.1;

impl Track {
    /// Look down on the track from above.
    pub fn draw_plan(&self) -> SvgDoc {
        let mut doc = SvgDoc::new().margin(self.width());
        doc.append_vec(self.draw_edges());
        doc.append(
            SvgPath::new(project_points(self.centreline().points()))
                .stroke(SvgColor::DarkGrey, CENTRE_STROKE * self.width())
                .style(PathStyle::Line)
                .close(),
        );
        doc.append(
            SvgPath::new(project_points(self.control_points().points()))
                .stroke(SvgColor::Blue, POINT_RADIUS * self.width())
                .style(PathStyle::Dots),
        );
        doc
    }

    /// Mark each distance along the track with a dot, red for the first.
    pub fn draw_markers(
        &self,
        doc: &mut SvgDoc,
        distances: &[f32],
    ) -> Result<(), Error> {
        let radius = 2. * POINT_RADIUS * self.width();
        for (i, &d) in distances.iter().enumerate() {
            let position = self.sample(d)?.position;
            let color = if i == 0 {
                SvgColor::Red
            } else {
                SvgColor::Magenta
            };
            doc.append(SvgCircle::new(project(position), radius).fill(color));
        }
        Ok(())
    }

    fn draw_edges(&self) -> Vec<SvgPath> {
        let stroke = EDGE_STROKE * self.width();
        let offsets = self.offsets();
        vec![
            SvgPath::new(project_points(&offsets.left))
                .stroke(SvgColor::Black, stroke)
                .close(),
            SvgPath::new(project_points(&offsets.right))
                .stroke(SvgColor::Black, stroke)
                .close(),
        ]
    }
}
