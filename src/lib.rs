pub mod catalog;
pub mod error;
pub mod ident;
pub mod loader;
pub mod lookup;
pub mod registry;
pub mod schema;
pub mod validate;

pub use error::{MetadataError, MetadataResult};
pub use schema::{ClientEntry, ClientVariant, GapicMetadata, RpcEntry, ServiceEntry};
