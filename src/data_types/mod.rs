pub mod axis;
pub mod data;
pub mod percentile;
pub mod plot_configs;
pub mod props;
pub mod state;

pub use axis::*;
pub use data::*;
pub use percentile::*;
pub use plot_configs::*;
pub use props::*;
pub use state::*;
