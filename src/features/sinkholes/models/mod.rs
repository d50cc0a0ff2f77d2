pub mod sinkhole;

pub use sinkhole::{NewSinkhole, Sinkhole, DEFAULT_RISK_LEVEL, RISK_LEVELS};
