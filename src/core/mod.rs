//! 核心业务逻辑

pub mod form;
