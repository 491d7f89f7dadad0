pub mod build_archive;
pub mod inspect_archive;
pub mod list_inventory;
pub mod serve;
