mod formatter;

pub use formatter::{
    format_result_table, format_summary, format_tsv, should_use_colors,
};
