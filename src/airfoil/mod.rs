pub mod camber;
pub mod panels;
pub mod spec;

pub use camber::CamberLine;
pub use panels::PanelGeometry;
pub use spec::AirfoilSpec;
