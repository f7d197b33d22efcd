pub mod coerce;
pub mod descriptor;
pub mod event;
pub mod node;
pub mod plot_data;
pub mod scale;
pub mod types;

pub use coerce::{attr_number, coerce_number};
pub use descriptor::{
    DATA_DURATION_ATTR, DATA_INTERVAL_ATTR, DATA_POSITION_ATTR, EventDescriptor,
    positioned_elements,
};
pub use event::{EventKind, EventLabel, EventSpec, PlacedEvent, events_in_window, place_spec};
pub use node::{ElementNode, HostNode};
pub use plot_data::{DEFAULT_SAMPLE_INTERVAL_SECS, PlotData};
pub use scale::{EventGeometry, TimeScale};
pub use types::{LayoutMetrics, Viewport};
