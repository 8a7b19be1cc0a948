//! Configuration file parsing and validation

pub mod descver_toml;

pub use descver_toml::{
    CONFIG_FILE_NAME, Config, DescribeConfig, OutputConfig, OutputFormat, ProjectConfig,
    UpdateConfig,
};
