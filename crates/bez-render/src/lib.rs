pub mod plot;
pub mod viewer;

pub use plot::{plot_curve, plot_surface};
pub use viewer::export_surface_html;
