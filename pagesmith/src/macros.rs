/// Builds [`OptionValues`](crate::OptionValues) from key/value pairs.
///
/// ```rust
/// use pagesmith::{OptionValue, ps_values};
///
/// let values = ps_values! {
///     "rotation" => "180",
///     "pages" => "1-3",
/// };
///
/// assert_eq!(values.get("rotation"), Some(&OptionValue::from("180")));
/// assert_eq!(values.len(), 2);
/// ```
#[macro_export]
macro_rules! ps_values {
    () => {
        $crate::OptionValues::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::OptionValues::new()$(.with($key, $value))+
    };
}

/// Builds a `Vec<FileHandle>` of in-memory PDF files.
///
/// ```rust
/// use pagesmith::ps_pdfs;
///
/// let files = ps_pdfs![
///     "first.pdf" => b"%PDF-1.7".to_vec(),
///     "second.pdf" => b"%PDF-1.7".to_vec(),
/// ];
///
/// assert_eq!(files.len(), 2);
/// assert_eq!(files[1].name, "second.pdf");
/// ```
#[macro_export]
macro_rules! ps_pdfs {
    () => {
        Vec::<$crate::FileHandle>::new()
    };
    ($($name:expr => $bytes:expr),+ $(,)?) => {
        vec![$($crate::FileHandle::pdf($name, $bytes)),+]
    };
}
