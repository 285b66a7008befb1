pub mod compute;
pub mod data;
pub mod request;

pub use compute::{compute, compute_multi_system};
pub use data::{
    AscendantPlacement, AyanamsaInfo, BodyPlacement, ChartMeta, FrameChart, MultiSystemChart,
    StructuredChart,
};
pub use request::{ChartRequest, ReferenceFrame};
