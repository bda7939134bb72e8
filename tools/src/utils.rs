use std::path::Path;

/// Does `path` have the given extension, ignoring case?
pub fn has_extension(path: &Path, extension: &str) -> bool {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => ext.eq_ignore_ascii_case(extension),
        None => false,
    }
}

/// Strip the whitespace and quotes terminals add around dragged-and-dropped paths
pub fn clean_path_input(input: &str) -> &str {
    input.trim().trim_matches('"').trim()
}

/// The file name of `path` for display, or the whole path if there is none
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}
