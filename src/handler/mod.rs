//! Type handlers and their dispatch plumbing
//!
//! One stateless singleton per concrete logical type, a process-wide
//! registry for code-based lookup, and the resolvers that pick a
//! representative handler from a result category or a size constraint.

pub mod numeric;
pub mod registry;
pub mod resolver;
pub mod string;
pub mod temporal;
pub mod type_handler;

pub use registry::{registry, TypeHandlerRegistry};
pub use resolver::{
    handler_for_field_type, handler_for_real_type, handler_for_result_category,
    string_type_handler, string_type_handler_for_charset, HybridTypeResolver, ResultCategory,
};
pub use type_handler::TypeHandler;
