pub mod ncbi;
pub mod providers;
pub mod summary;

pub use ncbi::NcbiClient;
pub use summary::SummaryGenerator;
