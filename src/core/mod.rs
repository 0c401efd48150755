pub mod solver;
pub mod workbench;

pub use crate::domain::model::{DilutionInputs, DilutionResult, ToolReport, ToolRequest};
pub use crate::domain::ports::{ConfigProvider, Transport};
pub use crate::utils::error::Result;
pub use workbench::Workbench;
