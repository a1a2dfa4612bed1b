use crate::utils::error::Result;
use std::io::Write;
use std::path::PathBuf;

/// Where exports are written. `open` hands back a writer for `file_name` and
/// the path it resolves to.
pub trait ExportSink {
    fn open(&self, file_name: &str) -> Result<(Box<dyn Write>, PathBuf)>;
}

pub trait ConfigProvider {
    fn title(&self) -> &str;
    fn output_dir(&self) -> &str;
    fn default_export_file(&self) -> Option<&str>;
    fn confirm_return(&self) -> bool;
    fn max_name_length(&self) -> usize;
    fn max_text_length(&self) -> usize;
    fn max_file_name_length(&self) -> usize;
}
