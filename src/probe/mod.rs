pub mod probe_model;
pub mod prober;
