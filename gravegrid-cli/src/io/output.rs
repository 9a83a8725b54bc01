use serde::{Deserialize, Serialize};

use gravegrid::io::ext_repr::{ExtPlacementResult, ExtYard};

use crate::config::GraveGridConfig;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GraveGridOutput {
    pub yard: ExtYard,
    pub result: ExtPlacementResult,
    pub config: GraveGridConfig,
}
