//! Property test modules

mod merge_join;
