//! Proptest strategies for feedlab property-based testing

pub mod strategies;

pub use strategies::{
    strategy_demo_value, strategy_integer_like, strategy_keyword, strategy_new_post,
    strategy_non_integer, strategy_title, strategy_titles,
};
