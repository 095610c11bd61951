pub mod options;
pub mod render_to_file;
