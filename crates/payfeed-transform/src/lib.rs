pub mod engine;
pub mod providers;
pub mod transforms;

pub use engine::{OutputRecord, apply_mapping};
pub use providers::{
    PROVIDER_ADP, PROVIDER_GUSTO, adp_mapping, default_mappings, gusto_mapping, mapping_for,
};
pub use transforms::apply_transform;
