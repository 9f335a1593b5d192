//! Root-relative and file-to-file path math.

use camino::Utf8Path;

/// Normalizes separators: backslashes become `/`, runs of `/` collapse to one.
///
/// Windows paths and naive string joins both produce separators the generated
/// import specifiers must not carry.
pub fn normalize(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut prev_sep = false;
    for c in path.chars() {
        let is_sep = c == '/' || c == '\\';
        if is_sep {
            if !prev_sep {
                out.push('/');
            }
        } else {
            out.push(c);
        }
        prev_sep = is_sep;
    }
    out
}

/// Rewrites `path` relative to `root` and prefixes `./`.
///
/// Paths outside `root` are returned normalized but otherwise untouched.
pub fn root_relative(path: &Utf8Path, root: &Utf8Path) -> String {
    let path = normalize(path.as_str());
    let root = normalize(root.as_str());
    let root_prefix = format!("{}/", root.trim_end_matches('/'));

    match path.strip_prefix(&root_prefix) {
        Some(stripped) => format!("./{stripped}"),
        None => path,
    }
}

/// Computes the import path from one generated file to another.
///
/// Walks up from `from_file`'s directory to the common ancestor, then down to
/// `to_file`. Sibling or descendant targets get a `./` prefix so the result
/// is always a valid relative module specifier.
pub fn relative_import(from_file: &Utf8Path, to_file: &Utf8Path) -> String {
    let from_dir: Vec<&str> = from_file
        .parent()
        .map(|p| p.as_str().split('/').filter(|s| !s.is_empty()).collect())
        .unwrap_or_default();
    let to: Vec<&str> = to_file
        .as_str()
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();

    let common = from_dir
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<String> = Vec::new();
    for _ in common..from_dir.len() {
        parts.push("..".to_string());
    }
    for segment in &to[common..] {
        parts.push((*segment).to_string());
    }

    let joined = parts.join("/");
    if joined.starts_with("..") {
        joined
    } else {
        format!("./{joined}")
    }
}
