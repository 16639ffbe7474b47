//! Embedded tournament data assets.

pub mod template;

pub use template::{
    parse_template, worldcup2026_knockout_template, WORLD_CUP_2026_KNOCKOUT_YAML,
};
