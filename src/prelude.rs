pub use crate::data_structs::typedef::{
    CountType,
    PercentType,
};
pub use crate::data_structs::{
    AnalysisResult,
    ColumnLayout,
    FrequencyTable,
    GroupRules,
    SampleGroup,
};
pub use crate::tabulate::{
    TabulateError,
    TabulationEngine,
};
pub use crate::worker::{
    spawn_tabulation,
    spawn_tabulation_file,
    AnalysisHandle,
};
