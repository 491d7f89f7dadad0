mod ad_copy;
mod archive;
mod inventory;
mod pipeline;
mod vehicle;

pub use ad_copy::*;
pub use archive::*;
pub use inventory::*;
pub use pipeline::*;
pub use vehicle::*;

// Re-export the CSV layer so callers need a single dependency
pub use dealer_search_csvs as csvs;
