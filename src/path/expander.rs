use std::path::{Path, PathBuf};

/// Expands a leading `~` against a given home directory.
#[derive(Clone, Debug)]
pub struct PathExpander<'a> {
    home: &'a str,
}

impl<'a> PathExpander<'a> {
    pub fn new(home: &'a str) -> Self {
        Self { home }
    }

    pub fn expand(&self, path: &str) -> PathBuf {
        if path.starts_with('~') {
            self.expand_tilde(path)
        } else {
            Path::new(path).to_path_buf()
        }
    }

    fn expand_tilde(&self, path: &str) -> PathBuf {
        let without_tilde = &path[1..];
        if without_tilde.is_empty() {
            // Just "~"
            PathBuf::from(self.home)
        } else if let Some(stripped) = without_tilde.strip_prefix('/') {
            // "~/path"
            let mut home_path = PathBuf::from(self.home);
            for part in stripped.split('/') {
                if !part.is_empty() {
                    home_path.push(part);
                }
            }
            home_path
        } else {
            // "~username/path" is left alone
            Path::new(path).to_path_buf()
        }
    }

    /// Rewrites `path` with the home prefix shown as `~`. Only whole path
    /// components match, so `/home/ab` is not shortened for home `/home/a`.
    pub fn collapse(&self, path: &str) -> String {
        let home = self.home.trim_end_matches('/');
        if home.is_empty() {
            return path.to_string();
        }

        match path.strip_prefix(home) {
            Some("") => "~".to_string(),
            Some(rest) if rest.starts_with('/') => format!("~{}", rest),
            _ => path.to_string(),
        }
    }
}
