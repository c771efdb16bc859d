pub mod consts;
pub mod csv_utils;
pub mod input_utils;
